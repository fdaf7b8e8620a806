//! User ID generation
//!
//! Random UUIDs are the default. The sequential generator produces short,
//! readable ids that are still unique within one process.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::user::{IdGenerator, UserId};

/// Generates random version-4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> UserId {
        UserId::new(Uuid::new_v4().to_string())
    }
}

/// Generates `{prefix}-{n}` ids from a monotonic counter
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator with a fixed prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Create a generator whose prefix is random per process
    pub fn with_random_prefix() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self::new(&token[..8])
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::with_random_prefix()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> UserId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        UserId::new(format!("{}-{}", self.prefix, n))
    }
}
