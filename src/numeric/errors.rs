// ============================================================================
// Numeric Errors
// Error types for exact rational arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing or combining ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Denominator passed to a constructor was zero or negative
    InvalidArgument,
    /// Operand kind is not accepted by the operation
    InvalidOperandType {
        /// Type name of the rejected operand
        found: &'static str,
        /// Operand kinds the operation accepts
        expected: &'static str,
    },
    /// Attempted division by zero
    DivisionByZero,
    /// Result exceeded i64::MAX
    Overflow,
    /// Result below i64::MIN
    Underflow,
}

impl NumericError {
    /// Operand kinds accepted by the binary operators.
    pub(crate) const RATIO_OR_INT: &'static str = "Ratio, int";

    /// Operand kinds accepted as an exponent.
    pub(crate) const INT: &'static str = "int";

    pub(crate) fn invalid_operand<T: ?Sized>(expected: &'static str) -> Self {
        let found = std::any::type_name::<T>();
        tracing::debug!(found, expected, "rejected operand");
        NumericError::InvalidOperandType { found, expected }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidArgument => {
                write!(f, "invalid argument: denominator must be > 0")
            },
            NumericError::InvalidOperandType { found, expected } => write!(
                f,
                "invalid operand type \"{}\", valid types: {}",
                found, expected
            ),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
