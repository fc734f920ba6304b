//! Domain error types.

use thiserror::Error;

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An allocator needed at least one existing record to derive from.
    #[error("Cannot allocate an identifier from an empty {collection} collection")]
    EmptyCollection { collection: &'static str },
}
