//! Domain layer - Core entities, rules and store contracts

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    validate_user_draft, IdGenerator, User, UserDraft, UserId, UserRepository,
    UserValidationError,
};
