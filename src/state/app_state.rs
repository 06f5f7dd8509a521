use crate::http::dispatch::DispatchId;

use super::{focus::Focus, mode::Mode, request_state::RequestForm, response_state::ResponsePanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Params,
    Headers,
    Body,
    Auth,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [ActiveTab::Params, ActiveTab::Headers, ActiveTab::Body, ActiveTab::Auth];

    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Params => "Params",
            ActiveTab::Headers => "Headers",
            ActiveTab::Body => "Body",
            ActiveTab::Auth => "Auth",
        }
    }

    pub fn next(&self) -> ActiveTab {
        match self {
            ActiveTab::Params => ActiveTab::Headers,
            ActiveTab::Headers => ActiveTab::Body,
            ActiveTab::Body => ActiveTab::Auth,
            ActiveTab::Auth => ActiveTab::Params,
        }
    }

    pub fn prev(&self) -> ActiveTab {
        match self {
            ActiveTab::Params => ActiveTab::Auth,
            ActiveTab::Headers => ActiveTab::Params,
            ActiveTab::Body => ActiveTab::Headers,
            ActiveTab::Auth => ActiveTab::Body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseTab {
    #[default]
    Body,
    Headers,
    Cookies,
}

impl ResponseTab {
    pub const ALL: [ResponseTab; 3] = [ResponseTab::Body, ResponseTab::Headers, ResponseTab::Cookies];

    pub fn label(&self) -> &'static str {
        match self {
            ResponseTab::Body => "Body",
            ResponseTab::Headers => "Headers",
            ResponseTab::Cookies => "Cookies",
        }
    }

    pub fn next(&self) -> ResponseTab {
        match self {
            ResponseTab::Body => ResponseTab::Headers,
            ResponseTab::Headers => ResponseTab::Cookies,
            ResponseTab::Cookies => ResponseTab::Body,
        }
    }

    pub fn prev(&self) -> ResponseTab {
        match self {
            ResponseTab::Body => ResponseTab::Cookies,
            ResponseTab::Headers => ResponseTab::Body,
            ResponseTab::Cookies => ResponseTab::Headers,
        }
    }
}

/// Whether the send trigger is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    /// `dispatch` is the id of the dispatch the spinner is waiting on.
    Loading { dispatch: DispatchId, spinner_tick: u8 },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub request: RequestForm,
    pub response: ResponsePanel,
    pub active_tab: ActiveTab,
    pub response_tab: ResponseTab,
    pub request_status: RequestStatus,
    /// Backend base URL, shown in the status bar.
    pub backend_label: String,
    pub should_quit: bool,
    /// Set to `true` whenever visible state changes. The render loop skips
    /// `terminal.draw()` when `false`.
    pub dirty: bool,
}

impl AppState {
    pub fn is_loading(&self) -> bool {
        matches!(self.request_status, RequestStatus::Loading { .. })
    }

    /// True while the spinner is waiting on exactly this dispatch.
    pub fn is_waiting_on(&self, id: DispatchId) -> bool {
        matches!(self.request_status, RequestStatus::Loading { dispatch, .. } if dispatch == id)
    }
}
