pub mod auth;
pub mod request;
pub mod response;

pub use auth::{AuthConfig, AuthField, AuthFields, AuthKind};
pub use request::{BodyType, HttpMethod, RequestBody, RequestDescriptor};
pub use response::{CreatedRequest, ResponseDescriptor};
