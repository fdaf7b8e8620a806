//! Infrastructure layer - Store implementations, services and logging

pub mod logging;
pub mod user;
