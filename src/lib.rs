//! User CRUD API
//!
//! An HTTP service exposing create, read, update and delete operations on a
//! single user resource, held in process memory.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use config::IdStrategy;
use infrastructure::user::{
    InMemoryUserRepository, SequentialIdGenerator, UserService, UuidIdGenerator,
};

/// Create the application state with default configuration
pub fn create_app_state() -> AppState {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with an empty in-memory user store
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());

    let user_service: Arc<dyn UserServiceTrait> = match config.users.id_strategy {
        IdStrategy::Uuid => Arc::new(UserService::new(
            repository,
            Arc::new(UuidIdGenerator::new()),
        )),
        IdStrategy::Sequential => Arc::new(UserService::new(
            repository,
            Arc::new(SequentialIdGenerator::default()),
        )),
    };

    tracing::debug!(id_strategy = ?config.users.id_strategy, "User store initialized");

    AppState::new(user_service)
}
