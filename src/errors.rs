// Error types for the odd-successor computation

/// The single error kind raised by the core.
///
/// The computation either yields an odd integer or fails synchronously
/// with `InvalidArgument`; nothing is ever partially computed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NextOddError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl NextOddError {
    pub(crate) fn not_finite(got: impl std::fmt::Display) -> Self {
        NextOddError::InvalidArgument(format!("input must be a finite number (got {got})"))
    }

    pub(crate) fn out_of_range(got: impl std::fmt::Display) -> Self {
        NextOddError::InvalidArgument(format!(
            "input {got} is outside the representable integer range"
        ))
    }

    /// Human-readable message without the error kind prefix.
    pub fn message(&self) -> &str {
        match self {
            NextOddError::InvalidArgument(msg) => msg,
        }
    }
}
