//! Unified error types for the domain layer
//!
//! Provides a common error type for parsing and validating domain values,
//! so the engine never has to fall back to bare strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a scenario with no options)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for content that breaks a domain invariant.
    ///
    /// Use this when loaded content cannot be played:
    /// - A scenario has zero or more than four options
    /// - Two options share an id
    /// - Two scenarios share an id
    ///
    /// # Example
    /// ```ignore
    /// if self.options.is_empty() {
    ///     return Err(DomainError::validation("Scenario has no options"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr`/`TryFrom` implementations when the input
    /// doesn't match any known variant or range:
    /// - Unknown option letters
    /// - Stage numbers outside 1..=5
    /// - Unknown stat keys
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for OptionId {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "A" => Ok(Self::A),
    ///             _ => Err(DomainError::parse(format!("Unknown option id: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
