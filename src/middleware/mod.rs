pub mod auth;
pub mod request_trace;

pub use auth::{bearer_token, SessionGate};
pub use request_trace::RequestTrace;
