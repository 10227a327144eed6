// ============================================================================
// Numeric Module
// Exact rational arithmetic on native 64-bit integers
// ============================================================================
//
// This module provides:
// - Ratio: exact fraction p / q, always in lowest terms with q > 0
// - Operand / IntoOperand: the closed set of values ratios combine with
// - NumericError: Error types for construction and arithmetic
//
// Design principles:
// - Every value is canonical, so equality and hashing work on the fields
// - Checked operations return Result; operator traits panic like integers do
// - Intermediates are widened to i128 and narrowed after reduction

mod errors;
mod operand;
mod ratio;

pub use errors::{NumericError, NumericResult};
pub use operand::{IntoOperand, Operand};
pub use ratio::Ratio;
