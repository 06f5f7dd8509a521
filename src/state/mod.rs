pub mod app_state;
pub mod focus;
pub mod input;
pub mod mode;
pub mod request_state;
pub mod response_state;
