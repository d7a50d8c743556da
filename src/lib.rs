//! Exact rational-number arithmetic over unbounded sign-magnitude integers.
//!
//! This library provides [`Rational`], a fraction of two [`BigSigned`]
//! integers. Magnitudes are unbounded, so arithmetic and comparison never
//! overflow and never lose precision.
//!
//! # Features
//!
//! - **Exact arithmetic**: `+ - * /` on rationals and on plain integer literals
//! - **Canonical results**: every operator reduces its result to lowest terms
//!   with a non-negative denominator
//! - **Cross-multiplied comparison**: operands are compared without being
//!   reduced first
//! - **Decimal expansion**: truncated long division into an `f64` or into
//!   text with any number of fraction digits
//! - **Fixed-width interop**: lossless conversion from crypto-bigint
//!   integers (default `crypto-bigint` feature)
//!
//! # Design Philosophy
//!
//! Construction stores exactly what it is given. [`Rational::new`] only
//! rejects a zero denominator; call [`Rational::reduce`] to bring a value to
//! lowest terms. Every value produced by an arithmetic operator is already
//! reduced.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use exact_ratio::Rational;
//!
//! let a = Rational::new(1, 4).unwrap();
//! let b = Rational::new(7, 2).unwrap();
//!
//! let product = &a * &b;
//! assert_eq!(product.to_string(), "7/8");
//!
//! let sum = Rational::new(1, 3).unwrap() + Rational::new(1, 4).unwrap();
//! assert_eq!(sum.to_string(), "7/12");
//! ```
//!
//! ## Integer Literals
//!
//! ```
//! use exact_ratio::Rational;
//!
//! let two_thirds = Rational::new(2, 3).unwrap();
//! assert_eq!(two_thirds.clone() * 3, 2);
//! assert!(two_thirds < 1);
//! assert!(4 < Rational::from(5));
//! ```
//!
//! ## Explicit Reduction
//!
//! ```
//! use exact_ratio::Rational;
//!
//! let mut r = Rational::new(6, -8).unwrap();
//! assert_eq!(r.to_string(), "6/-8"); // stored as given
//! r.reduce();
//! assert_eq!(r.to_string(), "-3/4");
//! ```
//!
//! ## Decimal Conversion
//!
//! ```
//! use exact_ratio::Rational;
//!
//! let r = Rational::new(1, 7).unwrap();
//! assert_eq!(r.evaluate_string(6), "0.142857");
//! assert_eq!(format!("{:.3}", r), "0.142");
//! assert_eq!(r.evaluate().unwrap(), 1.0 / 7.0);
//! ```

mod decimal;
pub mod error;
#[cfg(feature = "crypto-bigint")]
pub mod fixed_width;
pub mod signed;

pub use crate::decimal::{DEFAULT_SIGNIFICANT_DIGITS, MAX_FRACTION_DIGITS};
pub use crate::error::{RatioError, Result};
#[cfg(feature = "crypto-bigint")]
pub use crate::fixed_width::FixedWidth;
pub use crate::signed::BigSigned;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A rational number stored as a numerator over a non-zero denominator.
///
/// # Invariants
///
/// - The denominator is never zero (checked at construction)
/// - Values are not reduced on construction; every arithmetic result is
/// - After [`reduce`](Rational::reduce) the parts share no factor above 1,
///   the denominator is positive and zero is `0/1`
///
/// # Examples
///
/// ```
/// use exact_ratio::{BigSigned, Rational};
///
/// let r = Rational::new(2, 3).unwrap();
/// assert_eq!(r.numer(), &BigSigned::from(2));
/// assert_eq!(r.denom(), &BigSigned::from(3));
/// ```
#[derive(Clone, Debug)]
pub struct Rational {
    numer: BigSigned,
    denom: BigSigned,
}

impl Rational {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational without reduction.
    ///
    /// # Errors
    ///
    /// [`RatioError::InvalidDenominator`] if `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::{RatioError, Rational};
    ///
    /// let r = Rational::new(4, 6).unwrap();
    /// assert_eq!(r.to_string(), "4/6"); // not reduced
    ///
    /// assert_eq!(Rational::new(1, 0).unwrap_err(), RatioError::InvalidDenominator);
    /// ```
    pub fn new<N, D>(numer: N, denom: D) -> Result<Self>
    where
        N: Into<BigSigned>,
        D: Into<BigSigned>,
    {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RatioError::InvalidDenominator);
        }
        Ok(Self {
            numer: numer.into(),
            denom,
        })
    }

    /// Create a rational already reduced to lowest terms.
    ///
    /// # Errors
    ///
    /// [`RatioError::InvalidDenominator`] if `denom` is zero.
    pub fn new_reduced<N, D>(numer: N, denom: D) -> Result<Self>
    where
        N: Into<BigSigned>,
        D: Into<BigSigned>,
    {
        Self::new(numer, denom).map(Self::reduced)
    }

    /// Create `numer/1`.
    #[inline]
    pub fn from_integer<N: Into<BigSigned>>(numer: N) -> Self {
        Self {
            numer: numer.into(),
            denom: BigSigned::one(),
        }
    }

    /// The rational 0/1.
    #[inline]
    pub fn zero() -> Self {
        Self::from_integer(BigSigned::zero())
    }

    /// The rational 1/1.
    #[inline]
    pub fn one() -> Self {
        Self::from_integer(BigSigned::one())
    }

    /// Exact value of a finite `f64`, reduced.
    ///
    /// Every finite `f64` is a dyadic fraction, so no precision is lost.
    /// Returns `None` for infinities and NaN.
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// let r = Rational::from_f64(0.75).unwrap();
    /// assert_eq!(r.to_string(), "3/4");
    /// assert!(Rational::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);

        let (mantissa, exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased_exponent - 1075)
        };

        let mantissa = BigUint::from(mantissa);
        let value = if exponent >= 0 {
            Self::from_integer(BigSigned::from_parts(
                negative,
                mantissa << exponent as usize,
            ))
        } else {
            Self {
                numer: BigSigned::from_parts(negative, mantissa),
                denom: BigSigned::from(BigUint::one() << (-exponent) as usize),
            }
            .reduced()
        };
        Some(value)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    #[inline]
    pub fn numer(&self) -> &BigSigned {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigSigned {
        &self.denom
    }

    /// Split into `(numerator, denominator)`.
    #[inline]
    pub fn into_parts(self) -> (BigSigned, BigSigned) {
        (self.numer, self.denom)
    }

    // ========================================================================
    // PREDICATES
    // ========================================================================

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// True if the value is negative, whichever part carries the sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value_is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.numer.is_zero() && !self.value_is_negative()
    }

    /// True if the denominator divides the numerator.
    pub fn is_integer(&self) -> bool {
        (&self.numer % &self.denom).is_zero()
    }

    /// True if the value is in canonical form.
    pub fn is_reduced(&self) -> bool {
        !self.denom.is_negative() && self.numer.gcd(&self.denom).is_one()
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    /// Reduce in place to lowest terms with a positive denominator.
    ///
    /// The gcd comes from [`BigSigned::gcd`]; a zero numerator always ends as
    /// `0/1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// let mut r = Rational::new(3, 9).unwrap();
    /// r.reduce();
    /// assert_eq!(r.to_string(), "1/3");
    ///
    /// let mut zero = Rational::new(0, -5).unwrap();
    /// zero.reduce();
    /// assert_eq!(zero.to_string(), "0/1");
    /// ```
    pub fn reduce(&mut self) {
        let g = self.numer.gcd(&self.denom);
        if !g.is_one() {
            tracing::trace!(gcd_bits = g.bits(), "reducing rational");
            self.numer = &self.numer / &g;
            self.denom = &self.denom / &g;
        }
        if self.denom.is_negative() {
            self.numer = -&self.numer;
            self.denom = -&self.denom;
        }
    }

    /// Consume and return the reduced value.
    #[inline]
    pub fn reduced(mut self) -> Self {
        self.reduce();
        self
    }

    /// Build from an unreduced pair whose denominator is known to be non-zero.
    #[inline]
    fn from_unreduced(numer: BigSigned, denom: BigSigned) -> Self {
        Self { numer, denom }.reduced()
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    fn add_ref(&self, other: &Self) -> Self {
        let ad = &self.numer * &other.denom;
        let bc = &other.numer * &self.denom;
        Self::from_unreduced(ad + bc, &self.denom * &other.denom)
    }

    fn sub_ref(&self, other: &Self) -> Self {
        let ad = &self.numer * &other.denom;
        let bc = &other.numer * &self.denom;
        Self::from_unreduced(ad - bc, &self.denom * &other.denom)
    }

    fn mul_ref(&self, other: &Self) -> Self {
        Self::from_unreduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }

    /// Divide by another rational.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero.
    ///
    /// ```
    /// use exact_ratio::{RatioError, Rational};
    ///
    /// let a = Rational::new(1, 3).unwrap();
    /// let b = Rational::new(2, 7).unwrap();
    /// assert_eq!(a.checked_div(&b).unwrap().to_string(), "7/6");
    /// assert_eq!(a.checked_div(&Rational::zero()), Err(RatioError::DivisionByZero));
    /// ```
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        Self::new(&self.numer * &other.denom, &self.denom * &other.numer)
            .map(Self::reduced)
            .map_err(|_| RatioError::DivisionByZero)
    }

    /// The reciprocal `1/x`, reduced.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if the value is zero.
    pub fn recip(&self) -> Result<Self> {
        Self::new(self.denom.clone(), self.numer.clone())
            .map(Self::reduced)
            .map_err(|_| RatioError::DivisionByZero)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.abs(),
        }
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> Self {
        Self::from_integer(&self.numer.signum() * &self.denom.signum())
    }

    /// Integer part, truncated toward zero.
    pub fn trunc(&self) -> BigSigned {
        &self.numer / &self.denom
    }

    /// Fractional part, `self - self.trunc()`; it has the sign of `self`.
    pub fn fract(&self) -> Self {
        Self::from_unreduced(&self.numer % &self.denom, self.denom.clone())
    }

    // ========================================================================
    // COMPARISON
    // ========================================================================

    /// Sign of the value, independent of which part carries it.
    fn value_is_negative(&self) -> bool {
        !self.numer.is_zero() && (self.numer.is_negative() != self.denom.is_negative())
    }

    /// Compare by cross-multiplication without reducing either operand.
    ///
    /// `a/b` vs `c/d` compares `a·d` with `c·b`; the result flips when exactly
    /// one denominator is negative.
    fn cross_cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numer * &other.denom;
        let rhs = &other.numer * &self.denom;
        let ord = lhs.cmp(&rhs);
        if self.denom.is_negative() != other.denom.is_negative() {
            ord.reverse()
        } else {
            ord
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn div_or_panic(a: &Rational, b: &Rational) -> Rational {
    match a.checked_div(b) {
        Ok(q) => q,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $inner:expr) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                $inner(self, other)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: Rational) -> Rational {
                $inner(&self, &other)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                $inner(&self, other)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: Rational) -> Rational {
                $inner(self, &other)
            }
        }
    };
}

forward_binop!(impl Add, add, Rational::add_ref);
forward_binop!(impl Sub, sub, Rational::sub_ref);
forward_binop!(impl Mul, mul, Rational::mul_ref);
// Panics on a zero divisor; `checked_div` reports it as an error instead.
forward_binop!(impl Div, div, div_or_panic);

macro_rules! forward_assign {
    (impl $imp:ident, $method:ident, $op:tt) => {
        impl $imp<&Rational> for Rational {
            #[inline]
            fn $method(&mut self, other: &Rational) {
                *self = &*self $op other;
            }
        }

        impl $imp<Rational> for Rational {
            #[inline]
            fn $method(&mut self, other: Rational) {
                *self = &*self $op &other;
            }
        }
    };
}

forward_assign!(impl AddAssign, add_assign, +);
forward_assign!(impl SubAssign, sub_assign, -);
forward_assign!(impl MulAssign, mul_assign, *);
forward_assign!(impl DivAssign, div_assign, /);

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cross_cmp(other)
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // equal values share one canonical form
        if self.is_reduced() {
            self.numer.hash(state);
            self.denom.hash(state);
        } else {
            let canonical = self.clone().reduced();
            canonical.numer.hash(state);
            canonical.denom.hash(state);
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

/// Renders `numerator/denominator`. With a precision (`{:.4}`) renders the
/// truncated decimal expansion instead. Width, fill and alignment apply to
/// the whole rendering.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match f.precision() {
            Some(digits) => self.evaluate_string(digits),
            None => format!("{}/{}", self.numer, self.denom),
        };
        // `pad` would cut the text at the precision; `pad_integral` ignores it
        match text.strip_prefix('-') {
            Some(unsigned) => f.pad_integral(false, "", unsigned),
            None => f.pad_integral(true, "", &text),
        }
    }
}

impl From<BigSigned> for Rational {
    fn from(numer: BigSigned) -> Self {
        Rational::from_integer(numer)
    }
}

impl From<&BigSigned> for Rational {
    fn from(numer: &BigSigned) -> Self {
        Rational::from_integer(numer.clone())
    }
}

// ============================================================================
// INTEGER INTEROP
// ============================================================================
//
// Every mixed operation widens the integer with `Rational::from` and then
// uses the Rational/Rational implementation.

macro_rules! impl_int_binop {
    ($t:ty, $imp:ident, $method:ident) => {
        impl $imp<$t> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: $t) -> Rational {
                $imp::$method(&self, &Rational::from(other))
            }
        }

        impl $imp<$t> for &Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: $t) -> Rational {
                $imp::$method(self, &Rational::from(other))
            }
        }

        impl $imp<Rational> for $t {
            type Output = Rational;
            #[inline]
            fn $method(self, other: Rational) -> Rational {
                $imp::$method(&Rational::from(self), &other)
            }
        }

        impl $imp<&Rational> for $t {
            type Output = Rational;
            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                $imp::$method(&Rational::from(self), other)
            }
        }
    };
}

macro_rules! impl_int_assign {
    ($t:ty, $imp:ident, $method:ident) => {
        impl $imp<$t> for Rational {
            #[inline]
            fn $method(&mut self, other: $t) {
                $imp::$method(self, Rational::from(other));
            }
        }
    };
}

macro_rules! impl_int_interop {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            #[inline]
            fn from(value: $t) -> Self {
                Rational::from_integer(value)
            }
        }

        impl_int_binop!($t, Add, add);
        impl_int_binop!($t, Sub, sub);
        impl_int_binop!($t, Mul, mul);
        impl_int_binop!($t, Div, div);

        impl_int_assign!($t, AddAssign, add_assign);
        impl_int_assign!($t, SubAssign, sub_assign);
        impl_int_assign!($t, MulAssign, mul_assign);
        impl_int_assign!($t, DivAssign, div_assign);

        impl PartialEq<$t> for Rational {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                *self == Rational::from(*other)
            }
        }

        impl PartialEq<Rational> for $t {
            #[inline]
            fn eq(&self, other: &Rational) -> bool {
                Rational::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for Rational {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp(&Rational::from(*other)))
            }
        }

        impl PartialOrd<Rational> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
                Some(Rational::from(*self).cmp(other))
            }
        }
    )*};
}

impl_int_interop!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
