//! Sign-magnitude integers of unbounded size.
//!
//! [`BigSigned`] keeps an explicit sign flag next to an unsigned
//! [`BigUint`] magnitude, the same split [`Rational`](crate::Rational) uses for
//! its numerator and denominator. Sign rules are applied by hand so that
//! every operation stays a pure function of its operands.
//!
//! # Invariants
//!
//! - The magnitude is never negative (it is a `BigUint`)
//! - Zero is always stored with `negative = false`
//!
//! # Examples
//!
//! ```
//! use exact_ratio::BigSigned;
//!
//! let a = BigSigned::from(-7);
//! let b = BigSigned::from(2);
//! assert_eq!(&a / &b, BigSigned::from(-3)); // truncates toward zero
//! assert_eq!(&a % &b, BigSigned::from(-1));
//! ```

use crate::error::{RatioError, Result};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, ToPrimitive, Zero};

/// An arbitrary-precision integer stored as a sign flag plus magnitude.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigSigned {
    negative: bool,
    magnitude: BigUint,
}

impl BigSigned {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Build a value from its parts. A zero magnitude drops the sign.
    #[inline]
    pub fn from_parts(negative: bool, magnitude: BigUint) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            negative,
            magnitude,
        }
    }

    /// The value 0.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The value 1.
    #[inline]
    pub fn one() -> Self {
        Self::from_parts(false, BigUint::one())
    }

    /// Rebuild a value from little-endian magnitude bytes.
    ///
    /// This is the inverse of [`to_bytes_le`](BigSigned::to_bytes_le).
    pub fn from_bytes_le(negative: bool, bytes: &[u8]) -> Self {
        Self::from_parts(negative, BigUint::from_bytes_le(bytes))
    }

    // ========================================================================
    // INSPECTION
    // ========================================================================

    /// Borrow the magnitude.
    #[inline]
    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.magnitude.is_zero()
    }

    /// Number of significant bits in the magnitude.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.magnitude.bits()
    }

    /// Minimal little-endian bytes of the magnitude.
    ///
    /// Zero is encoded as a single `0` byte. The returned vector is a fresh
    /// copy; the sign is not part of the encoding.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        self.magnitude.to_bytes_le()
    }

    /// Nearest `f64`, saturating to an infinity when out of range.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.magnitude.to_f64().unwrap_or(f64::INFINITY);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    // ========================================================================
    // SIGN
    // ========================================================================

    /// Absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.magnitude.clone())
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(self.negative, BigUint::one())
        }
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    fn add_with_sign(&self, other_negative: bool, other_magnitude: &BigUint) -> Self {
        if self.negative == other_negative {
            return Self::from_parts(self.negative, &self.magnitude + other_magnitude);
        }
        match self.magnitude.cmp(other_magnitude) {
            Ordering::Less => Self::from_parts(other_negative, other_magnitude - &self.magnitude),
            _ => Self::from_parts(self.negative, &self.magnitude - other_magnitude),
        }
    }

    fn add_signed(&self, other: &Self) -> Self {
        self.add_with_sign(other.negative, &other.magnitude)
    }

    fn sub_signed(&self, other: &Self) -> Self {
        let flipped = !other.negative && !other.magnitude.is_zero();
        self.add_with_sign(flipped, &other.magnitude)
    }

    fn mul_signed(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negative ^ other.negative,
            &self.magnitude * &other.magnitude,
        )
    }

    /// Truncating division (quotient rounded toward zero).
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero.
    pub fn checked_div(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self::from_parts(
            self.negative ^ other.negative,
            &self.magnitude / &other.magnitude,
        ))
    }

    /// Remainder of truncating division; it carries the dividend's sign.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero.
    pub fn checked_rem(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self::from_parts(
            self.negative,
            &self.magnitude % &other.magnitude,
        ))
    }

    /// Greatest common divisor of the magnitudes, by iterated remainders.
    ///
    /// The result is never negative, and `gcd(0, b) == |b|`.
    ///
    /// ```
    /// use exact_ratio::BigSigned;
    ///
    /// let g = BigSigned::from(-48).gcd(&BigSigned::from(18));
    /// assert_eq!(g, BigSigned::from(6));
    /// ```
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.magnitude.clone();
        let mut b = other.magnitude.clone();
        while !b.is_zero() {
            let rem = &a % &b;
            a = b;
            b = rem;
        }
        Self::from_parts(false, a)
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

impl Ord for BigSigned {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for BigSigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

macro_rules! forward_binop {
    (impl $imp:ident, $method:ident, $inner:expr) => {
        impl $imp<&BigSigned> for &BigSigned {
            type Output = BigSigned;
            #[inline]
            fn $method(self, other: &BigSigned) -> BigSigned {
                $inner(self, other)
            }
        }

        impl $imp<BigSigned> for BigSigned {
            type Output = BigSigned;
            #[inline]
            fn $method(self, other: BigSigned) -> BigSigned {
                $inner(&self, &other)
            }
        }

        impl $imp<&BigSigned> for BigSigned {
            type Output = BigSigned;
            #[inline]
            fn $method(self, other: &BigSigned) -> BigSigned {
                $inner(&self, other)
            }
        }

        impl $imp<BigSigned> for &BigSigned {
            type Output = BigSigned;
            #[inline]
            fn $method(self, other: BigSigned) -> BigSigned {
                $inner(self, &other)
            }
        }
    };
}

fn div_or_panic(a: &BigSigned, b: &BigSigned) -> BigSigned {
    match a.checked_div(b) {
        Ok(q) => q,
        Err(e) => panic!("{}", e),
    }
}

fn rem_or_panic(a: &BigSigned, b: &BigSigned) -> BigSigned {
    match a.checked_rem(b) {
        Ok(r) => r,
        Err(e) => panic!("{}", e),
    }
}

forward_binop!(impl Add, add, BigSigned::add_signed);
forward_binop!(impl Sub, sub, BigSigned::sub_signed);
forward_binop!(impl Mul, mul, BigSigned::mul_signed);
// Panics on a zero divisor; use `checked_div` / `checked_rem` to get an error.
forward_binop!(impl Div, div, div_or_panic);
forward_binop!(impl Rem, rem, rem_or_panic);

macro_rules! forward_assign {
    (impl $imp:ident, $method:ident, $op:tt) => {
        impl $imp<&BigSigned> for BigSigned {
            #[inline]
            fn $method(&mut self, other: &BigSigned) {
                *self = &*self $op other;
            }
        }

        impl $imp<BigSigned> for BigSigned {
            #[inline]
            fn $method(&mut self, other: BigSigned) {
                *self = &*self $op &other;
            }
        }
    };
}

forward_assign!(impl AddAssign, add_assign, +);
forward_assign!(impl SubAssign, sub_assign, -);
forward_assign!(impl MulAssign, mul_assign, *);
forward_assign!(impl DivAssign, div_assign, /);
forward_assign!(impl RemAssign, rem_assign, %);

impl Neg for BigSigned {
    type Output = BigSigned;
    #[inline]
    fn neg(self) -> BigSigned {
        let negative = !self.negative;
        BigSigned::from_parts(negative, self.magnitude)
    }
}

impl Neg for &BigSigned {
    type Output = BigSigned;
    #[inline]
    fn neg(self) -> BigSigned {
        BigSigned::from_parts(!self.negative, self.magnitude.clone())
    }
}

impl Zero for BigSigned {
    fn zero() -> Self {
        BigSigned::zero()
    }

    fn is_zero(&self) -> bool {
        BigSigned::is_zero(self)
    }
}

impl One for BigSigned {
    fn one() -> Self {
        BigSigned::one()
    }
}

impl fmt::Display for BigSigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_str_radix(10))
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigSigned {
            #[inline]
            fn from(value: $t) -> Self {
                BigSigned::from_parts(value < 0, BigUint::from(value.unsigned_abs()))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigSigned {
            #[inline]
            fn from(value: $t) -> Self {
                BigSigned::from_parts(false, BigUint::from(value))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_try_into_primitive {
    ($($t:ty => $to:ident),*) => {$(
        impl TryFrom<&BigSigned> for $t {
            type Error = RatioError;

            fn try_from(value: &BigSigned) -> Result<$t> {
                BigInt::from(value).$to().ok_or(RatioError::ValueTooLarge)
            }
        }
    )*};
}

impl_try_into_primitive!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128,
    isize => to_isize, u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64,
    u128 => to_u128, usize => to_usize
);

impl From<BigUint> for BigSigned {
    fn from(magnitude: BigUint) -> Self {
        BigSigned::from_parts(false, magnitude)
    }
}

impl From<&BigInt> for BigSigned {
    fn from(value: &BigInt) -> Self {
        BigSigned::from_parts(value.sign() == Sign::Minus, value.magnitude().clone())
    }
}

impl From<BigInt> for BigSigned {
    fn from(value: BigInt) -> Self {
        BigSigned::from(&value)
    }
}

impl From<&BigSigned> for BigInt {
    fn from(value: &BigSigned) -> Self {
        let sign = if value.negative {
            Sign::Minus
        } else {
            Sign::Plus
        };
        BigInt::from_biguint(sign, value.magnitude.clone())
    }
}

impl From<BigSigned> for BigInt {
    fn from(value: BigSigned) -> Self {
        BigInt::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigSigned {
        BigSigned::from(v)
    }

    #[test]
    fn test_construction_splits_sign() {
        let n = big(-12345);
        assert!(n.is_negative());
        assert_eq!(n.magnitude(), &BigUint::from(12345u32));

        let p = big(12345);
        assert!(p.is_positive());
        assert_eq!(p.magnitude(), &BigUint::from(12345u32));
    }

    #[test]
    fn test_zero_has_no_sign() {
        let z = BigSigned::from_parts(true, BigUint::zero());
        assert!(!z.is_negative());
        assert_eq!(z, BigSigned::zero());
        assert_eq!(-BigSigned::zero(), BigSigned::zero());
        assert_eq!(big(5) - big(5), BigSigned::zero());
        assert!(!(big(-5) + big(5)).is_negative());
    }

    #[test]
    fn test_extreme_literals() {
        let min = big(i64::MIN);
        assert!(min.is_negative());
        assert_eq!(min.magnitude(), &BigUint::from(1u64 << 63));
        assert_eq!(i64::try_from(&min), Ok(i64::MIN));

        let max = BigSigned::from(i128::MAX);
        assert_eq!(i128::try_from(&max), Ok(i128::MAX));
        assert_eq!(i64::try_from(&max), Err(RatioError::ValueTooLarge));
        assert_eq!(u32::try_from(&big(-1)), Err(RatioError::ValueTooLarge));
    }

    #[test]
    fn test_add_sub_sign_rules() {
        assert_eq!(big(100) + big(50), big(150));
        assert_eq!(big(-10) + big(5), big(-5));
        assert_eq!(big(10) + big(-15), big(-5));
        assert_eq!(big(-10) + big(-5), big(-15));
        assert_eq!(big(-10) - big(5), big(-15));
        assert_eq!(big(3) - big(10), big(-7));
        assert_eq!(big(-3) - big(-10), big(7));
        assert_eq!(big(0) - big(4), big(-4));
    }

    #[test]
    fn test_mul_sign_rules() {
        assert_eq!(big(-5) * big(3), big(-15));
        assert_eq!(big(-5) * big(-3), big(15));
        assert_eq!(big(5) * big(-3), big(-15));
        assert!(!(big(-5) * big(0)).is_negative());
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        assert_eq!(big(7) / big(2), big(3));
        assert_eq!(big(-7) / big(2), big(-3));
        assert_eq!(big(7) / big(-2), big(-3));
        assert_eq!(big(-7) / big(-2), big(3));
        assert_eq!(big(-7) % big(2), big(-1));
        assert_eq!(big(7) % big(-2), big(1));
        assert_eq!(big(-6) % big(3), BigSigned::zero());
    }

    #[test]
    fn test_div_by_zero_is_an_error() {
        assert_eq!(big(1).checked_div(&big(0)), Err(RatioError::DivisionByZero));
        assert_eq!(big(1).checked_rem(&big(0)), Err(RatioError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = big(1) / big(0);
    }

    #[test]
    fn test_ordering() {
        assert!(big(-1) < big(0));
        assert!(big(-100) < big(-1));
        assert!(big(2) > big(-3));
        assert!(big(100) > big(99));
        assert_eq!(big(0).cmp(&BigSigned::from_parts(true, BigUint::zero())), Ordering::Equal);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(big(48).gcd(&big(18)), big(6));
        assert_eq!(big(-100).gcd(&big(35)), big(5));
        assert_eq!(big(0).gcd(&big(-9)), big(9));
        assert_eq!(big(17).gcd(&big(5)), big(1));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = big(42);
        let mut copy = original.clone();
        copy += big(1);
        assert_eq!(original, big(42));
        assert_eq!(copy, big(43));
    }

    #[test]
    fn test_bytes_round_trip() {
        let n = BigSigned::from(-0x0102_0304i64);
        assert_eq!(n.to_bytes_le(), vec![0x04, 0x03, 0x02, 0x01]);
        assert_eq!(BigSigned::from_bytes_le(true, &n.to_bytes_le()), n);
        assert_eq!(BigSigned::zero().to_bytes_le(), vec![0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(big(-255).to_string(), "-255");
        assert_eq!(big(0).to_string(), "0");
        assert_eq!(format!("{:>5}", big(42)), "   42");
    }

    #[test]
    fn test_bigint_interop() {
        let b = BigInt::from(-987654321i64);
        let s = BigSigned::from(&b);
        assert_eq!(s, big(-987654321));
        assert_eq!(BigInt::from(&s), b);
        assert_eq!(BigInt::from(BigSigned::zero()), BigInt::zero());
    }

    #[test]
    fn test_large_values() {
        let a = BigSigned::from(u64::MAX);
        let sum = &a + &big(1);
        assert_eq!(sum.bits(), 65);
        assert_eq!(u64::try_from(&sum), Err(RatioError::ValueTooLarge));
        assert_eq!(&sum - &big(1), a);
    }
}
