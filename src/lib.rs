// ============================================================================
// Ratio Library
// Exact rational numbers with checked mixed-type arithmetic
// ============================================================================

//! # Ratio
//!
//! An exact fraction type for cases where floating point loses the answer.
//!
//! ## Features
//!
//! - **Canonical form**: every value is `p / q` in lowest terms with `q > 0`
//! - **Mixed operands**: ratios combine with ratios and with any primitive integer
//! - **Checked arithmetic**: overflow and division by zero are reported, never wrapped
//! - **Reflected forms** for `n - ratio` and `n / ratio`
//!
//! ## Example
//!
//! ```rust
//! use ratio::prelude::*;
//!
//! let a = 1_100_000_000_000_000_000i64;
//!
//! // 1 / a * a loses everything in f64 but is exact as a ratio
//! let b = Ratio::ONE.checked_div(a)?;
//! assert_eq!(b.checked_mul(a)?.to_integer(), 1);
//!
//! assert_eq!(Ratio::new(4, 8)?.to_string(), "1 / 2");
//! assert_eq!(Ratio::new(1, 2)?.checked_div(0), Err(NumericError::DivisionByZero));
//! # Ok::<(), NumericError>(())
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{IntoOperand, NumericError, NumericResult, Operand, Ratio};
}
