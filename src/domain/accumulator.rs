//! Running totals built by value chaining.

/// A cumulative sum extended by consuming and returning itself.
///
/// Each call to [`add`](CumulativeSum::add) consumes the current sum and
/// returns the extended one, so totals build up through method chaining
/// without interior mutability.
///
/// # Example
/// ```
/// use layered_calc::CumulativeSum;
///
/// let total = CumulativeSum::new().add(1.5).add(2.5).add(6.0).total();
/// assert_eq!(total, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CumulativeSum {
    total: f64,
}

impl CumulativeSum {
    /// Create an empty sum starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, returning the extended sum.
    pub fn add(self, value: f64) -> Self {
        Self {
            total: self.total + value,
        }
    }

    /// Get the current total.
    pub fn total(&self) -> f64 {
        self.total
    }
}
