//! Errors produced during evaluation.

use std::fmt;

/// Error returned when a calculation cannot be carried out.
///
/// Arithmetic itself never fails: division by zero follows IEEE 754 and
/// produces an infinity or NaN value. The only failure mode is asking for
/// an operation the calculator does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The operation token names no supported operation
    UnsupportedOperation(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnsupportedOperation(token) => {
                write!(f, "unsupported operation kind: {}", token)
            }
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_token() {
        let err = EvalError::UnsupportedOperation("modulo".to_string());
        assert_eq!(err.to_string(), "unsupported operation kind: modulo");
    }

    #[test]
    fn test_implements_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err = EvalError::UnsupportedOperation("modulo".to_string());
        assert_error(&err);
    }
}
