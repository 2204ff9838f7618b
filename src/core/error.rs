use thiserror::Error;

/// Errors that can occur while deriving or checking ISR data.
///
/// Missing upstream data ("not ready yet") is never an error: the
/// facade functions return `None` or an empty string instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IsrError {
    /// A digit string was required but the input contained something else.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value does not fit into its fixed-width field.
    #[error("overflow: {0}")]
    Overflow(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// One or more preconditions of a user-triggered action failed.
    #[error("{0}")]
    Validation(String),
}

/// A single reason why an ISR cannot be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field of the invoice the blocker relates to (e.g. "partner_bank").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
