//! HTTP middleware

pub mod json_body;
pub mod logging;

pub use json_body::json_body_middleware;
pub use logging::{logging_middleware, REQUEST_ID_HEADER};
