//! User validation utilities

use serde_json::Value;
use thiserror::Error;

use super::entity::UserDraft;
use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("name and email are required")]
    MissingRequiredFields,
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Name and email that passed the presence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUserFields {
    pub name: Value,
    pub email: Value,
}

/// Whether a JSON value counts as provided.
///
/// `null`, `false`, zero and the empty string count as missing. Every other
/// value counts as provided, arrays and objects included even when empty.
fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate a name/email pair
///
/// Both fields must be present and provided. No type or format rules apply
/// to either field.
pub fn validate_user_draft(draft: UserDraft) -> Result<ValidUserFields, UserValidationError> {
    match (draft.name, draft.email) {
        (Some(name), Some(email)) if is_provided(&name) && is_provided(&email) => {
            Ok(ValidUserFields { name, email })
        }
        _ => Err(UserValidationError::MissingRequiredFields),
    }
}
