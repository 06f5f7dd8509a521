use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};

use crate::state::app_state::{ActiveTab, AppState, ResponseTab};
use super::{
    status_bar,
    request::{auth_editor, body_editor, kv_editor, tab_bar as req_tab_bar, url_bar},
    response::{body_viewer, render_meta, tab_bar as resp_tab_bar, table_viewer},
};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);  // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);      // #565f89
pub const HINT_KEY: Color = Color::Rgb(169, 177, 214);
pub const HINT_TEXT: Color = Color::Rgb(100, 110, 140);

pub const SPINNER_FRAMES: &[char] = &['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main_area = vertical[0];
    let status_area = vertical[1];

    // chunks[0] = url bar (Length 3)
    // chunks[1] = request tab bar (Length 1)
    // chunks[2] = request editor (flexible)
    // chunks[3] = response meta (Length 1)
    // chunks[4] = response tab bar (Length 1)
    // chunks[5] = response viewer (flexible)
    let total_fixed: u16 = 3 + 1 + 1 + 1;
    let remaining = main_area.height.saturating_sub(total_fixed);
    let editor_h = ((remaining as u32 * 35 / 100) as u16).max(3);
    let viewer_h = remaining.saturating_sub(editor_h).max(3);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // url bar
            Constraint::Length(1),        // request tab bar
            Constraint::Length(editor_h), // request editor
            Constraint::Length(1),        // response meta line
            Constraint::Length(1),        // response tab bar
            Constraint::Min(viewer_h),    // response viewer
        ])
        .split(main_area);

    url_bar::render(frame, chunks[0], state);
    req_tab_bar::render(frame, chunks[1], state);

    let form = &state.request;
    match state.active_tab {
        ActiveTab::Params => kv_editor::render(frame, chunks[2], state, "Params", &form.params),
        ActiveTab::Headers => kv_editor::render(frame, chunks[2], state, "Headers", &form.headers),
        ActiveTab::Body => body_editor::render(frame, chunks[2], state),
        ActiveTab::Auth => auth_editor::render(frame, chunks[2], state),
    }

    render_meta(frame, chunks[3], state);
    resp_tab_bar::render(frame, chunks[4], state);
    match state.response_tab {
        ResponseTab::Body => body_viewer::render(frame, chunks[5], state),
        ResponseTab::Headers | ResponseTab::Cookies => table_viewer::render(frame, chunks[5], state),
    }

    status_bar::render(frame, status_area, state);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::model::{BodyType, ResponseDescriptor};
    use crate::render::ResponseView;
    use crate::state::request_state::RequestForm;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn first_launch_screen_shows_sample_request() {
        let state = AppState {
            request: RequestForm::sample(),
            backend_label: "http://localhost:8080/".into(),
            ..Default::default()
        };
        let screen = draw(&state);
        assert!(screen.contains("GET"));
        assert!(screen.contains("https://httpbin.org/get"));
        assert!(screen.contains("Send a request to see the response"));
        assert!(screen.contains("http://localhost:8080/"));
    }

    #[test]
    fn cookies_tab_shows_placeholder_row() {
        let mut state = AppState {
            response_tab: ResponseTab::Cookies,
            ..Default::default()
        };
        state.response.show(ResponseView::from_outcome(Ok(ResponseDescriptor {
            status_code: 404,
            duration: 3.0,
            size: 0,
            headers: vec![("Content-Type".into(), "text/plain".into())],
            body: String::new(),
        })));
        let screen = draw(&state);
        assert!(screen.contains("404 Not Found"));
        assert!(screen.contains("No Cookies"));
        assert!(screen.contains("No cookies were set in this response"));
    }

    #[test]
    fn body_tab_titles_the_selected_body_type() {
        let mut state = AppState {
            active_tab: ActiveTab::Body,
            ..Default::default()
        };
        assert!(draw(&state).contains("Body · none"));

        state.request.body_type = Some(BodyType::Json);
        state.request.body = "{\"name\": \"litepost\"}".into();
        let screen = draw(&state);
        assert!(screen.contains("Body · json"));
        assert!(screen.contains("{\"name\": \"litepost\"}"));
    }
}
