//! User identifier minting

#[cfg(test)]
use mockall::automock;

use std::fmt::Debug;

use super::entity::UserId;

/// Source of fresh user identifiers
///
/// Implementations must never return the same id twice within a process.
#[cfg_attr(test, automock)]
pub trait IdGenerator: Send + Sync + Debug {
    fn generate(&self) -> UserId;
}
