//! Calculation requests and their cache identity.

use std::fmt;

use crate::domain::operation::OperationKind;

/// A single calculation to perform.
///
/// Requests are plain values: two operands and the operation to apply.
/// Construction cannot fail because [`OperationKind`] is a closed set;
/// unsupported operation tokens are rejected at the parsing boundary,
/// before a request ever exists.
///
/// # Example
/// ```
/// use layered_calc::{CalculationRequest, OperationKind};
///
/// let request = CalculationRequest::new(10.0, 4.0, OperationKind::Subtract);
/// assert_eq!(request.operand1, 10.0);
/// assert_eq!(request.operand2, 4.0);
/// assert_eq!(request.operation, OperationKind::Subtract);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    /// First operand
    pub operand1: f64,
    /// Second operand
    pub operand2: f64,
    /// Operation to apply
    pub operation: OperationKind,
}

impl CalculationRequest {
    /// Create a new calculation request.
    pub fn new(operand1: f64, operand2: f64, operation: OperationKind) -> Self {
        Self {
            operand1,
            operand2,
            operation,
        }
    }

    /// Get the cache key identifying this request.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(self)
    }
}

impl fmt::Display for CalculationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.operation, self.operand1, self.operand2)
    }
}

/// Identity of a request for memoization purposes.
///
/// Operands are identified by their IEEE 754 bit patterns rather than by
/// `f64` equality. This makes the key total (NaN operands are cacheable like
/// any other value) and exact: distinct bit patterns never share a key, so a
/// cache hit always returns exactly what the base calculator would have
/// produced. `0.0` and `-0.0` are distinct keys, which matters for division.
///
/// Operand order is part of the identity: `sub(10, 4)` and `sub(4, 10)`
/// occupy separate cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operand1_bits: u64,
    operand2_bits: u64,
    operation: OperationKind,
}

impl CacheKey {
    /// Compute the cache key for a request.
    pub fn new(request: &CalculationRequest) -> Self {
        Self {
            operand1_bits: request.operand1.to_bits(),
            operand2_bits: request.operand2.to_bits(),
            operation: request.operation,
        }
    }
}
