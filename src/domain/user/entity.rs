//! User entity and related types

use serde::Serialize;
use serde_json::Value;

/// Opaque user identifier, minted by the store when a user is created
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity
///
/// `name` and `email` hold whatever JSON value the client sent, so they are
/// echoed back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: Value,
    email: Value,
}

impl User {
    pub fn new(id: UserId, name: impl Into<Value>, email: impl Into<Value>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &Value {
        &self.name
    }

    pub fn email(&self) -> &Value {
        &self.email
    }
}

/// Unvalidated name/email pair as received at the boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl UserDraft {
    pub fn new(name: impl Into<Value>, email: impl Into<Value>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
