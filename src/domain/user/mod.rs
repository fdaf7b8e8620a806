//! User domain
//!
//! This module provides the user entity, the presence rules applied to
//! incoming name/email pairs, and the traits the store is built on.

mod entity;
mod id;
mod repository;
mod validation;

pub use entity::{User, UserDraft, UserId};
pub use id::IdGenerator;
pub use repository::UserRepository;
pub use validation::{validate_user_draft, UserValidationError, ValidUserFields};

#[cfg(test)]
pub use id::MockIdGenerator;
#[cfg(test)]
pub use repository::mock::MockUserRepository;
