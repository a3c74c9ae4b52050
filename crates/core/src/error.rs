//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only hard failures live here. Soft rejections (an age-gated job or spouse
/// assignment, a refused child) are reported by discarding the value or
/// returning `false`, never through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A currency code outside the supported set was requested.
    #[error("invalid currency: {desired}")]
    InvalidCurrency { desired: String },

    /// A family was founded with a person who already has a spouse.
    #[error("one or both spouses are already married")]
    AlreadyMarried,
}

impl DomainError {
    pub fn invalid_currency(desired: impl Into<String>) -> Self {
        Self::InvalidCurrency {
            desired: desired.into(),
        }
    }

    pub fn already_married() -> Self {
        Self::AlreadyMarried
    }
}
