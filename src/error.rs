// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BswapError {
    /// The argument is not something a typed view can be built over.
    #[error("Expected typed array: {0}")]
    TypeArgument(String),

    #[error("Invalid element width: {0} (expected 1, 2, 4 or 8)")]
    InvalidWidth(usize),
}

pub type Result<T> = std::result::Result<T, BswapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BswapError::InvalidWidth(3);
        assert_eq!(err.to_string(), "Invalid element width: 3 (expected 1, 2, 4 or 8)");

        let err = BswapError::TypeArgument("not a view".into());
        assert_eq!(err.to_string(), "Expected typed array: not a view");
    }
}
