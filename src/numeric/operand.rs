// ============================================================================
// Operands
// Closed set of right-hand sides accepted by ratio arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::ratio::Ratio;

/// A value that can take part in ratio arithmetic and comparison.
///
/// Integers are promoted to `n / 1` when combined with a ratio, but the
/// arithmetic keeps them apart so the integer forms (`(p + q*n, q)` and so on)
/// avoid a needless multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Ratio(Ratio),
    Integer(i64),
}

impl Operand {
    /// Promote the operand to a ratio.
    #[inline]
    pub const fn to_ratio(self) -> Ratio {
        match self {
            Operand::Ratio(r) => r,
            Operand::Integer(n) => Ratio::from_integer(n),
        }
    }
}

/// Conversion into an [`Operand`].
///
/// Every primitive integer converts (values outside `i64` fail with
/// `Overflow`/`Underflow`). Floats, booleans, characters and strings are
/// rejected with `InvalidOperandType`, naming the offending type.
pub trait IntoOperand {
    fn into_operand(self) -> NumericResult<Operand>;
}

impl IntoOperand for Operand {
    #[inline]
    fn into_operand(self) -> NumericResult<Operand> {
        Ok(self)
    }
}

impl IntoOperand for Ratio {
    #[inline]
    fn into_operand(self) -> NumericResult<Operand> {
        Ok(Operand::Ratio(self))
    }
}

impl IntoOperand for &Ratio {
    #[inline]
    fn into_operand(self) -> NumericResult<Operand> {
        Ok(Operand::Ratio(*self))
    }
}

macro_rules! lossless_integer_operand {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                #[inline]
                fn into_operand(self) -> NumericResult<Operand> {
                    Ok(Operand::Integer(i64::from(self)))
                }
            }
        )*
    };
}

macro_rules! wide_integer_operand {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self) -> NumericResult<Operand> {
                    i64::try_from(self).map(Operand::Integer).map_err(|_| {
                        if self > 0 {
                            NumericError::Overflow
                        } else {
                            NumericError::Underflow
                        }
                    })
                }
            }
        )*
    };
}

macro_rules! rejected_operand {
    ($($t:ty),*) => {
        $(
            impl IntoOperand for $t {
                fn into_operand(self) -> NumericResult<Operand> {
                    Err(NumericError::invalid_operand::<$t>(NumericError::RATIO_OR_INT))
                }
            }
        )*
    };
}

lossless_integer_operand!(i8, i16, i32, i64, u8, u16, u32);
wide_integer_operand!(i128, isize, u64, u128, usize);
rejected_operand!(f32, f64, bool, char, String, &str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_convert() {
        assert_eq!(7i8.into_operand(), Ok(Operand::Integer(7)));
        assert_eq!((-7i32).into_operand(), Ok(Operand::Integer(-7)));
        assert_eq!(u32::MAX.into_operand(), Ok(Operand::Integer(u32::MAX as i64)));
        assert_eq!(42usize.into_operand(), Ok(Operand::Integer(42)));
    }

    #[test]
    fn test_wide_integers_out_of_range() {
        assert_eq!(u64::MAX.into_operand(), Err(NumericError::Overflow));
        assert_eq!(i128::MAX.into_operand(), Err(NumericError::Overflow));
        assert_eq!(i128::MIN.into_operand(), Err(NumericError::Underflow));
    }

    #[test]
    fn test_ratio_converts() {
        let half = Ratio::new(1, 2).unwrap();
        assert_eq!(half.into_operand(), Ok(Operand::Ratio(half)));
        assert_eq!((&half).into_operand(), Ok(Operand::Ratio(half)));
    }

    #[test]
    fn test_rejected_types_are_named() {
        assert_eq!(
            1.5f64.into_operand(),
            Err(NumericError::InvalidOperandType {
                found: "f64",
                expected: "Ratio, int",
            })
        );
        assert_eq!(
            true.into_operand(),
            Err(NumericError::InvalidOperandType {
                found: "bool",
                expected: "Ratio, int",
            })
        );
        assert!(matches!(
            "1/2".into_operand(),
            Err(NumericError::InvalidOperandType { found: "&str", .. })
        ));
        match String::from("3").into_operand() {
            Err(NumericError::InvalidOperandType { found, .. }) => {
                assert!(found.ends_with("String"))
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_to_ratio() {
        assert_eq!(Operand::Integer(3).to_ratio(), Ratio::from_integer(3));
        let third = Ratio::new(1, 3).unwrap();
        assert_eq!(Operand::Ratio(third).to_ratio(), third);
    }
}
