//! Response classification: everything the response panel shows is derived
//! here from a `ResponseDescriptor` or a dispatch error. Nothing in this
//! module can fail.

pub mod body;
pub mod headers;
pub mod status;

use chrono::{DateTime, Utc};

use crate::error::DispatchError;
use crate::model::ResponseDescriptor;

pub use body::{RenderMode, RenderedBody, render_body};
pub use headers::{CookieListing, HeaderRow, header_rows};
pub use status::{StatusClass, status_text};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub status_code: u16,
    pub status_text: &'static str,
    pub status_class: StatusClass,
    pub duration_ms: f64,
    pub size_bytes: u64,
    pub body: RenderedBody,
    pub header_rows: Vec<HeaderRow>,
    pub cookies: CookieListing,
    pub received_at: DateTime<Utc>,
}

impl RenderState {
    pub fn from_response(response: &ResponseDescriptor) -> Self {
        Self::received_at(response, Utc::now())
    }

    pub fn received_at(response: &ResponseDescriptor, at: DateTime<Utc>) -> Self {
        Self {
            status_code: response.status_code,
            status_text: status_text(response.status_code),
            status_class: StatusClass::from_code(response.status_code),
            duration_ms: response.duration,
            size_bytes: response.size,
            body: render_body(&response.body),
            header_rows: header_rows(&response.headers),
            cookies: CookieListing::from_headers(&response.headers),
            received_at: at,
        }
    }
}

/// What the response panel shows when a dispatch fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
}

impl ErrorView {
    pub const STATUS_LABEL: &'static str = "Error";

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn status_class(&self) -> StatusClass {
        StatusClass::Error
    }

    pub fn body_text(&self) -> String {
        format!("Error: {}", self.message)
    }
}

/// Outcome of one dispatch, as displayed. Exactly one of the two per send.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseView {
    Rendered(RenderState),
    Failed(ErrorView),
}

impl ResponseView {
    pub fn from_outcome(outcome: Result<ResponseDescriptor, DispatchError>) -> Self {
        match outcome {
            Ok(response) => ResponseView::Rendered(RenderState::from_response(&response)),
            Err(e) => ResponseView::Failed(ErrorView::new(e.to_string())),
        }
    }
}
