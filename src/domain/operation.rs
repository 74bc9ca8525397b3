//! Arithmetic operation kinds.
//!
//! This module defines the closed set of operations the calculator understands,
//! together with the parsing boundary that turns untrusted operation tokens
//! into members of that set.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::EvalError;

/// The four arithmetic operations supported by the calculator.
///
/// The set is closed: a token naming anything else is rejected at the
/// parsing boundary with [`EvalError::UnsupportedOperation`] rather than
/// silently falling back to a default operation.
///
/// # Example
/// ```
/// use layered_calc::OperationKind;
///
/// let op: OperationKind = "ADD".parse().unwrap();
/// assert_eq!(op, OperationKind::Add);
/// assert_eq!(op.as_str(), "add");
///
/// assert!("modulo".parse::<OperationKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Add the second operand to the first
    Add,
    /// Subtract the second operand from the first
    Subtract,
    /// Multiply the two operands
    Multiply,
    /// Divide the first operand by the second
    Divide,
}

impl OperationKind {
    /// All supported operations, in a stable order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Get the canonical token for this operation.
    ///
    /// The token round-trips through [`OperationKind::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "sub",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = EvalError;

    /// Parse an operation token.
    ///
    /// Accepts the canonical tokens `add`, `sub`, `multiply` and `divide`,
    /// plus `subtract` as an alias for `sub`, all ASCII-case-insensitively.
    /// Whitespace is not trimmed. Any other token is rejected with
    /// [`EvalError::UnsupportedOperation`] carrying the offending token.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "add" => Ok(OperationKind::Add),
            "sub" | "subtract" => Ok(OperationKind::Subtract),
            "multiply" => Ok(OperationKind::Multiply),
            "divide" => Ok(OperationKind::Divide),
            _ => Err(EvalError::UnsupportedOperation(token.to_string())),
        }
    }
}
