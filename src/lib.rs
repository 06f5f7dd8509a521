//! A terminal HTTP request composer. Requests are described in the editor,
//! handed to a backend service that performs them, and the backend's reply
//! is classified for display.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod http;
pub mod logging;
pub mod model;
pub mod render;
pub mod state;
pub mod terminal;
pub mod ui;
