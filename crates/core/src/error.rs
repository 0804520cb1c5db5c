//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Persistence
/// concerns belong to the infra crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not present in the inventory.
    #[error("item '{0}' not found")]
    ItemNotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }
}
