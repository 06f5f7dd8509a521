pub mod backend;
pub mod builder;
pub mod client;
pub mod dispatch;
