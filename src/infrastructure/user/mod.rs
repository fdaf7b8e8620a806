//! User infrastructure module
//!
//! This module provides the in-memory user store, id generators and the
//! user service that ties them together.

mod id_generator;
mod repository;
mod service;

pub use id_generator::{SequentialIdGenerator, UuidIdGenerator};
pub use repository::InMemoryUserRepository;
pub use service::UserService;
