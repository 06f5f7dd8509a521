use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::error::DispatchError;
use crate::event::Event;
use crate::http::backend::BackendClient;
use crate::http::builder::build_request;
use crate::http::dispatch::{DispatchId, Dispatcher};
use crate::model::{BodyType, ResponseDescriptor};
use crate::render::{ErrorView, ResponseView};
use crate::state::app_state::{ActiveTab, AppState, RequestStatus};
use crate::state::focus::Focus;
use crate::state::input::{edit_line, edit_multiline};
use crate::state::mode::Mode;
use crate::state::request_state::RequestForm;

pub struct App {
    pub state: AppState,
    dispatcher: Dispatcher,
}

impl App {
    pub fn new(tx: UnboundedSender<Event>, backend: BackendClient, form: RequestForm) -> Self {
        Self {
            state: AppState {
                request: form,
                backend_label: backend.base().to_string(),
                dirty: true,
                ..Default::default()
            },
            dispatcher: Dispatcher::new(backend, tx),
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.state.dirty = true;
                // Ctrl+R and Ctrl+C fire regardless of mode or focus
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('r') => return self.send_request(),
                        KeyCode::Char('c') => {
                            self.state.should_quit = true;
                            return;
                        }
                        _ => {}
                    }
                }
                match self.state.mode {
                    Mode::Normal => self.handle_normal_key(key),
                    Mode::Insert => self.handle_insert_key(key),
                }
            }
            Event::Key(_) => {}
            Event::Response(id, result) => self.handle_response(id, result),
            Event::DispatchSettled(id) => self.handle_settled(id),
            // Tick: only dirty when the spinner is visible; otherwise a no-op.
            Event::Tick => self.handle_tick(),
            Event::Mouse(mouse) => {
                self.state.dirty = true;
                self.handle_mouse(mouse);
            }
            // Terminal resize always requires a full redraw.
            Event::Resize(_, _) => self.state.dirty = true,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            KeyCode::Char('1') => self.state.focus = Focus::UrlBar,
            KeyCode::Char('2') => self.state.focus = Focus::TabBar,
            KeyCode::Char('3') => self.state.focus = Focus::Editor,
            KeyCode::Char('4') => self.state.focus = Focus::ResponseViewer,
            KeyCode::Char('[') => self.state.request.method = self.state.request.method.prev(),
            KeyCode::Char(']') => self.state.request.method = self.state.request.method.next(),
            KeyCode::Char('i') | KeyCode::Enter => self.enter_insert(),
            _ => match self.state.focus {
                Focus::TabBar => self.handle_tab_bar_key(key),
                Focus::Editor => self.handle_editor_key(key),
                Focus::ResponseViewer => self.handle_viewer_key(key),
                Focus::UrlBar => {}
            },
        }
    }

    fn enter_insert(&mut self) {
        let form = &mut self.state.request;
        match self.state.focus {
            Focus::UrlBar => {
                form.url_cursor = form.url_cursor.min(form.url.len());
                self.state.mode = Mode::Insert;
            }
            Focus::TabBar => self.state.focus = Focus::Editor,
            Focus::Editor => match self.state.active_tab {
                ActiveTab::Params | ActiveTab::Headers => {
                    let table = match self.state.active_tab {
                        ActiveTab::Params => &mut form.params,
                        _ => &mut form.headers,
                    };
                    if table.rows.is_empty() {
                        table.push_row();
                    }
                    self.state.mode = Mode::Insert;
                }
                ActiveTab::Body => {
                    if form.body_type.is_none() {
                        form.body_type = Some(BodyType::Json);
                    }
                    self.state.mode = Mode::Insert;
                }
                ActiveTab::Auth => {
                    if form.selected_auth_field().is_some() {
                        self.state.mode = Mode::Insert;
                    }
                }
            },
            Focus::ResponseViewer => {}
        }
    }

    fn handle_tab_bar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.active_tab = self.state.active_tab.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.state.active_tab = self.state.active_tab.next(),
            _ => {}
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.request;
        match self.state.active_tab {
            ActiveTab::Params | ActiveTab::Headers => {
                let table = if self.state.active_tab == ActiveTab::Params {
                    &mut form.params
                } else {
                    &mut form.headers
                };
                match key.code {
                    KeyCode::Char('j') | KeyCode::Down => table.select_row(1),
                    KeyCode::Char('k') | KeyCode::Up => table.select_row(-1),
                    KeyCode::Char('h') | KeyCode::Left => table.select_col(0),
                    KeyCode::Char('l') | KeyCode::Right => table.select_col(1),
                    KeyCode::Char('a') => {
                        table.push_row();
                        self.state.mode = Mode::Insert;
                    }
                    KeyCode::Char('x') | KeyCode::Char('d') => table.remove_selected(),
                    _ => {}
                }
            }
            ActiveTab::Body => match key.code {
                KeyCode::Char('t') => form.body_type = BodyType::cycle(form.body_type),
                KeyCode::Char('j') | KeyCode::Down => {
                    form.body_scroll_offset = form.body_scroll_offset.saturating_add(1);
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    form.body_scroll_offset = form.body_scroll_offset.saturating_sub(1);
                }
                _ => {}
            },
            ActiveTab::Auth => match key.code {
                KeyCode::Char('t') => form.cycle_auth_kind(),
                KeyCode::Char('j') | KeyCode::Down => form.select_auth_field(1),
                KeyCode::Char('k') | KeyCode::Up => form.select_auth_field(-1),
                _ => {}
            },
        }
    }

    fn handle_viewer_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.response.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.response.scroll_by(-1),
            KeyCode::Left | KeyCode::Char('h') => self.state.response_tab = self.state.response_tab.prev(),
            KeyCode::Right | KeyCode::Char('l') => self.state.response_tab = self.state.response_tab.next(),
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.state.mode = Mode::Normal;
            return;
        }
        let form = &mut self.state.request;
        match self.state.focus {
            Focus::UrlBar => {
                if key.code == KeyCode::Enter {
                    self.state.mode = Mode::Normal;
                    self.send_request();
                } else {
                    edit_line(&mut form.url, &mut form.url_cursor, key.code);
                }
            }
            Focus::Editor => match self.state.active_tab {
                ActiveTab::Params | ActiveTab::Headers => {
                    let table = if self.state.active_tab == ActiveTab::Params {
                        &mut form.params
                    } else {
                        &mut form.headers
                    };
                    match key.code {
                        KeyCode::Tab | KeyCode::Enter => table.advance_cell(),
                        code => {
                            table.edit(code);
                        }
                    }
                }
                ActiveTab::Body => {
                    edit_multiline(&mut form.body, &mut form.body_cursor, key.code);
                }
                ActiveTab::Auth => match key.code {
                    KeyCode::Tab | KeyCode::Enter => form.advance_auth_field(),
                    code => {
                        form.edit_auth(code);
                    }
                },
            },
            Focus::TabBar | Focus::ResponseViewer => self.state.mode = Mode::Normal,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.state.response.scroll_by(3),
            MouseEventKind::ScrollUp => self.state.response.scroll_by(-3),
            _ => {}
        }
    }

    /// Events from any dispatch other than the one being waited on are stale.
    fn handle_response(&mut self, id: DispatchId, result: Result<ResponseDescriptor, DispatchError>) {
        if !self.state.is_waiting_on(id) {
            log::debug!("dropping stale response from dispatch {id}");
            return;
        }
        self.state.response.show(ResponseView::from_outcome(result));
        self.state.request_status = RequestStatus::Idle;
        self.state.dirty = true;
    }

    /// Follows the dispatch's `Response` unless the dispatch died first.
    fn handle_settled(&mut self, id: DispatchId) {
        if !self.state.is_waiting_on(id) {
            return;
        }
        self.state
            .response
            .show(ResponseView::Failed(ErrorView::new("dispatch ended without a response")));
        self.state.request_status = RequestStatus::Idle;
        self.state.dirty = true;
    }

    fn handle_tick(&mut self) {
        if let RequestStatus::Loading { spinner_tick, .. } = &mut self.state.request_status {
            *spinner_tick = spinner_tick.wrapping_add(1);
            self.state.dirty = true;
        }
    }

    fn send_request(&mut self) {
        let descriptor = build_request(&self.state.request);
        match self.dispatcher.start(descriptor) {
            Ok(dispatch) => {
                self.state.request_status = RequestStatus::Loading { dispatch, spinner_tick: 0 };
                self.state.response.view = None;
            }
            // The trigger is already showing busy; the dispatcher logged it.
            Err(DispatchError::Busy) => {}
            Err(e) => self.state.response.show(ResponseView::Failed(ErrorView::new(e.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthKind, HttpMethod};
    use crate::render::{RenderMode, StatusClass};
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = BackendClient::new(
            reqwest::Client::new(),
            url::Url::parse("http://127.0.0.1:9").unwrap(),
        );
        (App::new(tx, backend, RequestForm::default()), rx)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_into_url_bar() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('i')));
        assert_eq!(app.state.mode, Mode::Insert);
        type_str(&mut app, "https://example.com");
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(app.state.request.url, "https://example.com");
        assert_eq!(app.state.mode, Mode::Normal);

        app.handle_event(key(KeyCode::Char(']')));
        assert_eq!(app.state.request.method, HttpMethod::Post);
    }

    #[test]
    fn header_rows_are_added_and_filled() {
        let (mut app, _rx) = app();
        app.state.focus = Focus::Editor;
        app.state.active_tab = ActiveTab::Headers;
        app.handle_event(key(KeyCode::Char('a')));
        type_str(&mut app, "Accept");
        app.handle_event(key(KeyCode::Tab));
        type_str(&mut app, "text/html");
        app.handle_event(key(KeyCode::Esc));

        let req = build_request(&app.state.request);
        assert_eq!(req.headers["Accept"], "text/html");
    }

    #[test]
    fn auth_kind_cycles_and_fields_are_editable() {
        let (mut app, _rx) = app();
        app.state.focus = Focus::Editor;
        app.state.active_tab = ActiveTab::Auth;
        app.handle_event(key(KeyCode::Char('t')));
        app.handle_event(key(KeyCode::Char('t')));
        assert_eq!(app.state.request.auth_kind, AuthKind::Bearer);
        app.handle_event(key(KeyCode::Enter));
        type_str(&mut app, "tok");
        assert_eq!(app.state.request.auth.token.as_deref(), Some("tok"));
    }

    #[test]
    fn response_event_replaces_view_and_restores_trigger() {
        let (mut app, _rx) = app();
        app.state.request_status = RequestStatus::Loading { dispatch: 4, spinner_tick: 3 };
        app.handle_event(Event::Response(4, Ok(ResponseDescriptor {
            status_code: 200,
            duration: 5.0,
            size: 7,
            headers: Vec::new(),
            body: "{\"a\":1}".into(),
        })));
        assert_eq!(app.state.request_status, RequestStatus::Idle);
        let Some(ResponseView::Rendered(state)) = &app.state.response.view else {
            panic!("expected rendered view");
        };
        assert_eq!(state.body.mode, RenderMode::Json);
        assert!(app.state.response.highlighted_body.is_some());

        // The settle that follows a delivered response changes nothing.
        app.handle_event(Event::DispatchSettled(4));
        assert!(matches!(app.state.response.view, Some(ResponseView::Rendered(_))));
    }

    #[test]
    fn error_event_shows_error_view() {
        let (mut app, _rx) = app();
        app.state.request_status = RequestStatus::Loading { dispatch: 1, spinner_tick: 0 };
        app.handle_event(Event::Response(1, Err(DispatchError::ExecuteFailed(502))));
        assert_eq!(app.state.request_status, RequestStatus::Idle);
        let Some(ResponseView::Failed(err)) = &app.state.response.view else {
            panic!("expected error view");
        };
        assert_eq!(err.body_text(), "Error: execute request failed: HTTP 502");
        assert_eq!(err.status_class(), StatusClass::Error);
    }

    #[test]
    fn settle_without_response_ends_loading() {
        let (mut app, _rx) = app();
        app.state.request_status = RequestStatus::Loading { dispatch: 1, spinner_tick: 0 };
        app.handle_event(Event::DispatchSettled(1));
        assert_eq!(app.state.request_status, RequestStatus::Idle);
        assert!(matches!(app.state.response.view, Some(ResponseView::Failed(_))));
    }

    #[tokio::test]
    async fn second_send_while_loading_is_ignored() {
        let (mut app, _rx) = app();
        let ctrl_r = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        app.handle_event(ctrl_r);
        assert!(app.state.is_loading());
        assert!(app.dispatcher.is_busy());

        app.handle_event(Event::Tick);
        let ctrl_r = Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        app.handle_event(ctrl_r);
        assert!(matches!(
            app.state.request_status,
            RequestStatus::Loading { spinner_tick: 1, .. }
        ));
    }

    #[test]
    fn response_from_an_older_dispatch_is_dropped() {
        let (mut app, _rx) = app();
        app.state.request_status = RequestStatus::Loading { dispatch: 2, spinner_tick: 0 };
        app.handle_event(Event::Response(1, Err(DispatchError::Timeout)));
        app.handle_event(Event::DispatchSettled(1));
        assert_eq!(
            app.state.request_status,
            RequestStatus::Loading { dispatch: 2, spinner_tick: 0 }
        );
        assert!(app.state.response.view.is_none());
    }

    #[tokio::test]
    async fn late_settle_does_not_end_the_next_dispatch() {
        let (mut app, mut rx) = app();
        let ctrl_r = || Event::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        app.handle_event(ctrl_r());
        let RequestStatus::Loading { dispatch: first, .. } = app.state.request_status else {
            panic!("expected loading");
        };

        // Nothing listens on the backend port, so the first dispatch fails
        // fast and both of its events are queued before the app sees either.
        let response = rx.recv().await.unwrap();
        assert!(matches!(response, Event::Response(id, Err(_)) if id == first));
        let settled = rx.recv().await.unwrap();
        assert!(matches!(settled, Event::DispatchSettled(id) if id == first));

        app.handle_event(response);
        assert!(!app.state.is_loading());
        app.handle_event(ctrl_r());
        assert!(app.state.is_loading());
        app.handle_event(settled);

        assert!(app.state.is_loading());
        assert!(app.state.response.view.is_none());
        assert!(!app.state.is_waiting_on(first));
    }
}
