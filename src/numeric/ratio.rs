// ============================================================================
// Exact Ratio
// Rational numbers p / q kept in lowest terms with a positive denominator
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::operand::{IntoOperand, Operand};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact fraction `p / q`.
///
/// Every value is canonical: `q > 0`, `gcd(|p|, q) == 1`, and zero is always
/// stored as `0 / 1`. Both parts are `i64`; intermediate products are formed in
/// `i128` and reduced before being narrowed back, so an operation only fails
/// when its *reduced* result does not fit.
///
/// # Example
/// ```
/// use ratio::numeric::Ratio;
///
/// let a = Ratio::new(1, 2)?;
/// let b = Ratio::new(1, 3)?;
/// assert_eq!(a.checked_add(b)?, Ratio::new(5, 6)?);
/// assert_eq!(a.checked_mul(4)?, 2);
/// assert_eq!(a.to_string(), "1 / 2");
/// # Ok::<(), ratio::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawRatio")
)]
pub struct Ratio {
    p: i64,
    q: i64,
}

// ============================================================================
// Normalization
// ============================================================================

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn out_of_range(negative: bool) -> NumericError {
    let err = if negative {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    };
    tracing::debug!(%err, "ratio does not fit i64");
    err
}

/// Reduce `p / q` to canonical form and narrow it to i64.
///
/// `q` may be negative here: arithmetic on integer divisors produces such
/// pairs, so the sign is taken from `p * q` rather than from `p` alone.
fn normalize(p: i128, q: i128) -> NumericResult<Ratio> {
    if q == 0 {
        tracing::debug!(%p, "zero denominator");
        return Err(NumericError::DivisionByZero);
    }
    if p == 0 {
        return Ok(Ratio::ZERO);
    }

    let g = gcd(p.unsigned_abs(), q.unsigned_abs());
    let negative = (p < 0) != (q < 0);

    let magnitude = i128::try_from(p.unsigned_abs() / g).map_err(|_| out_of_range(negative))?;
    let numer = if negative { -magnitude } else { magnitude };
    let p = i64::try_from(numer).map_err(|_| out_of_range(negative))?;
    let q = i64::try_from(q.unsigned_abs() / g).map_err(|_| out_of_range(false))?;

    Ok(Ratio { p, q })
}

#[inline]
const fn wide(n: i64) -> i128 {
    n as i128
}

impl Ratio {
    /// Zero (`0 / 1`)
    pub const ZERO: Self = Self { p: 0, q: 1 };

    /// One (`1 / 1`)
    pub const ONE: Self = Self { p: 1, q: 1 };

    /// Largest representable value (`i64::MAX / 1`)
    pub const MAX: Self = Self { p: i64::MAX, q: 1 };

    /// Smallest representable value (`i64::MIN / 1`)
    pub const MIN: Self = Self { p: i64::MIN, q: 1 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create `p / q` in lowest terms.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `q <= 0`.
    pub fn new(p: i64, q: i64) -> NumericResult<Self> {
        if q <= 0 {
            tracing::debug!(p, q, "rejected non-positive denominator");
            return Err(NumericError::InvalidArgument);
        }
        normalize(wide(p), wide(q))
    }

    /// Create `n / 1`.
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Self { p: n, q: 1 }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Numerator; carries the sign.
    #[inline]
    pub const fn numer(self) -> i64 {
        self.p
    }

    /// Denominator; always positive.
    #[inline]
    pub const fn denom(self) -> i64 {
        self.q
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.p == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.p > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.p < 0
    }

    /// True when the denominator is 1.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.q == 1
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked multiplication.
    ///
    /// # Errors
    /// `InvalidOperandType` for non-numeric operands, `Overflow`/`Underflow`
    /// if the reduced product does not fit.
    pub fn checked_mul<T: IntoOperand>(self, rhs: T) -> NumericResult<Self> {
        match rhs.into_operand()? {
            Operand::Ratio(o) => normalize(wide(self.p) * wide(o.p), wide(self.q) * wide(o.q)),
            Operand::Integer(n) => normalize(wide(self.p) * wide(n), wide(self.q)),
        }
    }

    /// Checked addition.
    pub fn checked_add<T: IntoOperand>(self, rhs: T) -> NumericResult<Self> {
        match rhs.into_operand()? {
            Operand::Ratio(o) => normalize(
                wide(self.p) * wide(o.q) + wide(self.q) * wide(o.p),
                wide(self.q) * wide(o.q),
            ),
            Operand::Integer(n) => normalize(wide(self.p) + wide(self.q) * wide(n), wide(self.q)),
        }
    }

    /// Checked subtraction, `self - rhs`.
    pub fn checked_sub<T: IntoOperand>(self, rhs: T) -> NumericResult<Self> {
        match rhs.into_operand()? {
            Operand::Ratio(o) => normalize(
                wide(self.p) * wide(o.q) - wide(o.p) * wide(self.q),
                wide(self.q) * wide(o.q),
            ),
            Operand::Integer(n) => normalize(wide(self.p) - wide(n) * wide(self.q), wide(self.q)),
        }
    }

    /// Reflected subtraction, `lhs - self`.
    ///
    /// Computed directly as `(q*n - p, q)` for an integer `lhs`.
    pub fn checked_rsub<T: IntoOperand>(self, lhs: T) -> NumericResult<Self> {
        match lhs.into_operand()? {
            Operand::Ratio(o) => normalize(
                wide(self.q) * wide(o.p) - wide(self.p) * wide(o.q),
                wide(self.q) * wide(o.q),
            ),
            Operand::Integer(n) => normalize(wide(self.q) * wide(n) - wide(self.p), wide(self.q)),
        }
    }

    /// Checked division, `self / rhs`.
    ///
    /// # Errors
    /// `DivisionByZero` if `rhs` is zero, plus the errors of
    /// [`checked_mul`](Self::checked_mul).
    pub fn checked_div<T: IntoOperand>(self, rhs: T) -> NumericResult<Self> {
        match rhs.into_operand()? {
            Operand::Ratio(o) if o.p == 0 => Err(division_by_zero(self)),
            Operand::Integer(0) => Err(division_by_zero(self)),
            Operand::Ratio(o) => normalize(wide(self.p) * wide(o.q), wide(o.p) * wide(self.q)),
            Operand::Integer(n) => normalize(wide(self.p), wide(self.q) * wide(n)),
        }
    }

    /// Floor division. A ratio has no remainder apart from its value, so this
    /// is the same operation as [`checked_div`](Self::checked_div).
    #[inline]
    pub fn checked_floor_div<T: IntoOperand>(self, rhs: T) -> NumericResult<Self> {
        self.checked_div(rhs)
    }

    /// Reflected division, `lhs / self`.
    ///
    /// A zero `self` fails with `DivisionByZero` before `lhs` is inspected.
    pub fn checked_rdiv<T: IntoOperand>(self, lhs: T) -> NumericResult<Self> {
        if self.p == 0 {
            tracing::debug!("division by zero ratio");
            return Err(NumericError::DivisionByZero);
        }
        match lhs.into_operand()? {
            Operand::Ratio(o) => normalize(wide(self.q) * wide(o.p), wide(o.q) * wide(self.p)),
            Operand::Integer(n) => normalize(wide(self.q) * wide(n), wide(self.p)),
        }
    }

    /// Reciprocal `q / p`.
    #[inline]
    pub fn checked_recip(self) -> NumericResult<Self> {
        self.checked_rdiv(1)
    }

    /// Negation, returning a new value.
    ///
    /// # Errors
    /// `Overflow` when the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.p
            .checked_neg()
            .map(|p| Self { p, q: self.q })
            .ok_or_else(|| out_of_range(false))
    }

    /// Absolute value, returning a new value.
    ///
    /// # Errors
    /// `Overflow` when the numerator is `i64::MIN`.
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        self.p
            .checked_abs()
            .map(|p| Self { p, q: self.q })
            .ok_or_else(|| out_of_range(false))
    }

    /// Unary plus.
    #[inline]
    pub const fn pos(self) -> Self {
        self
    }

    /// Raise to an integer power.
    ///
    /// A negative exponent raises the reciprocal: `(p/q)^-n == (q/p)^n`.
    /// Any value to the power 0 is 1, zero included.
    ///
    /// # Errors
    /// - `InvalidOperandType` if the exponent is not an integer (a `Ratio`
    ///   exponent included)
    /// - `DivisionByZero` for a zero base with a negative exponent
    /// - `Overflow`/`Underflow` if the power does not fit
    pub fn checked_pow<T: IntoOperand>(self, exponent: T) -> NumericResult<Self> {
        let exponent = match exponent.into_operand() {
            Ok(Operand::Integer(n)) => n,
            Ok(Operand::Ratio(_)) => {
                return Err(NumericError::invalid_operand::<Ratio>(NumericError::INT))
            },
            Err(NumericError::InvalidOperandType { found, .. }) => {
                return Err(NumericError::InvalidOperandType {
                    found,
                    expected: NumericError::INT,
                })
            },
            Err(err) => return Err(err),
        };

        if exponent == 0 {
            return Ok(Self::ONE);
        }
        let base = if exponent < 0 {
            self.checked_recip()?
        } else {
            self
        };
        let exp = exponent.unsigned_abs();
        let odd = exp % 2 == 1;

        // 0, 1 and -1 stay bounded under any exponent
        if base.q == 1 && base.p.unsigned_abs() <= 1 {
            return Ok(if base.p == -1 && !odd { Self::ONE } else { base });
        }

        let negative = base.p < 0 && odd;
        let exp = u32::try_from(exp).map_err(|_| out_of_range(negative))?;
        // Powers of coprime parts stay coprime; no reduction needed.
        let p = base.p.checked_pow(exp).ok_or_else(|| out_of_range(negative))?;
        let q = base.q.checked_pow(exp).ok_or_else(|| out_of_range(false))?;
        Ok(Self { p, q })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// `self < other`, the primitive every other comparison derives from.
    ///
    /// # Errors
    /// `InvalidOperandType` for non-numeric operands.
    pub fn less_than<T: IntoOperand>(&self, other: T) -> NumericResult<bool> {
        let other = other.into_operand()?.to_ratio();
        Ok(less_than(*self, other))
    }

    /// Three-way comparison against any accepted operand.
    ///
    /// # Errors
    /// `InvalidOperandType` for non-numeric operands.
    pub fn compare<T: IntoOperand>(&self, other: T) -> NumericResult<Ordering> {
        let other = other.into_operand()?.to_ratio();
        Ok(Ord::cmp(self, &other))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Floor of `p / q`, rounding toward negative infinity.
    #[inline]
    pub const fn to_integer(self) -> i64 {
        self.p.div_euclid(self.q)
    }

    /// Nearest `f64`; lossy.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.p as f64 / self.q as f64
    }

    /// Truthiness: `false` only for zero.
    #[inline]
    pub fn to_bool(self) -> bool {
        self != Self::ZERO
    }
}

fn division_by_zero(dividend: Ratio) -> NumericError {
    tracing::debug!(%dividend, "division by zero");
    NumericError::DivisionByZero
}

/// Numerator of `b - a`, exact in i128 for any pair of i64 ratios.
#[inline]
fn difference_numerator(a: Ratio, b: Ratio) -> i128 {
    wide(b.p) * wide(a.q) - wide(a.p) * wide(b.q)
}

/// `a < b` iff `b - a` is positive. The difference keeps a positive
/// denominator, so its numerator carries the sign.
#[inline]
fn less_than(a: Ratio, b: Ratio) -> bool {
    difference_numerator(a, b) > 0
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Ratio {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Ratio {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        !(less_than(*self, *other) || less_than(*other, *self))
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        if less_than(*self, *other) {
            Ordering::Less
        } else if less_than(*other, *self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl PartialEq<i64> for Ratio {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        *self == Ratio::from_integer(*other)
    }
}

impl PartialEq<Ratio> for i64 {
    #[inline]
    fn eq(&self, other: &Ratio) -> bool {
        Ratio::from_integer(*self) == *other
    }
}

impl PartialOrd<i64> for Ratio {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(Ord::cmp(self, &Ratio::from_integer(*other)))
    }
}

impl PartialOrd<Ratio> for i64 {
    #[inline]
    fn partial_cmp(&self, other: &Ratio) -> Option<Ordering> {
        Some(Ord::cmp(&Ratio::from_integer(*self), other))
    }
}

// Canonical form makes field equality coincide with value equality.
impl Hash for Ratio {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.p.hash(state);
        self.q.hash(state);
    }
}

impl Neg for Ratio {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("Ratio negation overflow")
    }
}

// Infallible operators for ergonomics (panic on overflow or division by zero,
// like primitive integers - use checked_* to handle failures)
macro_rules! ratio_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $checked:ident, $reflected:ident, $name:literal) => {
        impl $imp for Ratio {
            type Output = Ratio;

            #[inline]
            fn $method(self, rhs: Ratio) -> Ratio {
                self.$checked(rhs)
                    .unwrap_or_else(|err| panic!("Ratio {}: {}", $name, err))
            }
        }

        impl $imp<i64> for Ratio {
            type Output = Ratio;

            #[inline]
            fn $method(self, rhs: i64) -> Ratio {
                self.$checked(rhs)
                    .unwrap_or_else(|err| panic!("Ratio {}: {}", $name, err))
            }
        }

        impl $imp<Ratio> for i64 {
            type Output = Ratio;

            #[inline]
            fn $method(self, rhs: Ratio) -> Ratio {
                rhs.$reflected(self)
                    .unwrap_or_else(|err| panic!("Ratio {}: {}", $name, err))
            }
        }

        impl $assign_imp for Ratio {
            #[inline]
            fn $assign_method(&mut self, rhs: Ratio) {
                *self = $imp::$method(*self, rhs);
            }
        }

        impl $assign_imp<i64> for Ratio {
            #[inline]
            fn $assign_method(&mut self, rhs: i64) {
                *self = $imp::$method(*self, rhs);
            }
        }
    };
}

ratio_binop!(Add, add, AddAssign, add_assign, checked_add, checked_add, "addition");
ratio_binop!(Sub, sub, SubAssign, sub_assign, checked_sub, checked_rsub, "subtraction");
ratio_binop!(Mul, mul, MulAssign, mul_assign, checked_mul, checked_mul, "multiplication");
ratio_binop!(Div, div, DivAssign, div_assign, checked_div, checked_rdiv, "division");

// ============================================================================
// Conversions
// ============================================================================

macro_rules! ratio_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Ratio {
                #[inline]
                fn from(n: $t) -> Self {
                    Ratio::from_integer(i64::from(n))
                }
            }
        )*
    };
}

ratio_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<Ratio> for i64 {
    #[inline]
    fn from(r: Ratio) -> Self {
        r.to_integer()
    }
}

impl From<Ratio> for f64 {
    #[inline]
    fn from(r: Ratio) -> Self {
        r.to_f64()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio({})", self)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.p, self.q)
    }
}

// ============================================================================
// Serde (validated through the constructor)
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRatio {
    p: i64,
    q: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRatio> for Ratio {
    type Error = NumericError;

    fn try_from(raw: RawRatio) -> Result<Self, Self::Error> {
        Ratio::new(raw.p, raw.q)
    }
}

// ============================================================================
// Tests
// ============================================================================
