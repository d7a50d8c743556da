//! Decimal expansion of rationals by long division.
//!
//! Both conversions share one digit generator: the integer part is
//! `|numer| / |denom|`, and every following digit is produced by multiplying
//! the remainder by ten and dividing again. Digits are truncated, never
//! rounded, so a conversion to `n` fraction digits is the true value cut off
//! after the `n`th digit.
//!
//! - [`Rational::evaluate_string`] keeps the digits as text.
//! - [`Rational::evaluate`] and [`Rational::evaluate_digits`] hand the same
//!   digits to the correctly rounded `f64` parser.

use crate::error::{RatioError, Result};
use crate::Rational;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// Significant decimal digits [`Rational::evaluate`] expands before
/// converting to `f64` (enough to round-trip any `f64`).
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 17;

/// Upper bound on fraction digits [`Rational::evaluate`] will expand while
/// looking for significant digits. Values below `10^-400` evaluate to zero.
pub const MAX_FRACTION_DIGITS: usize = 400;

/// Digit-by-digit division of two magnitudes.
///
/// The divisor must be non-zero; every `Rational` guarantees that for its
/// denominator.
struct LongDivision {
    remainder: BigUint,
    divisor: BigUint,
}

impl LongDivision {
    /// Split `dividend / divisor` into the integer quotient and a generator
    /// for the fraction digits.
    fn start(dividend: &BigUint, divisor: &BigUint) -> (BigUint, Self) {
        let (integer, remainder) = dividend.div_rem(divisor);
        let division = Self {
            remainder,
            divisor: divisor.clone(),
        };
        (integer, division)
    }

    /// True once every further digit would be zero.
    #[inline]
    fn is_exact(&self) -> bool {
        self.remainder.is_zero()
    }

    fn next_digit(&mut self) -> u8 {
        self.remainder *= 10u32;
        let (digit, remainder) = self.remainder.div_rem(&self.divisor);
        self.remainder = remainder;
        // remainder < divisor before scaling, so digit < 10
        digit.to_u8().unwrap_or_default()
    }

    fn push_digit(&mut self, out: &mut String) -> u8 {
        let digit = self.next_digit();
        out.push(char::from(b'0' + digit));
        digit
    }
}

impl Rational {
    fn long_division(&self) -> (BigUint, LongDivision) {
        LongDivision::start(self.numer.magnitude(), self.denom.magnitude())
    }

    /// Approximate the value as an `f64`.
    ///
    /// Expands [`DEFAULT_SIGNIFICANT_DIGITS`] significant digits by long
    /// division and converts that truncated decimal to the nearest `f64`.
    ///
    /// # Errors
    ///
    /// [`RatioError::ValueTooLarge`] if the integer part exceeds the `f64`
    /// range. Use [`evaluate_string`](Rational::evaluate_string) for exact
    /// digits of large values.
    ///
    /// # Examples
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// assert_eq!(Rational::new(1, 2).unwrap().evaluate().unwrap(), 0.5);
    /// assert_eq!(Rational::new(-3, 2).unwrap().evaluate().unwrap(), -1.5);
    /// assert_eq!(Rational::new(1, 7).unwrap().evaluate().unwrap(), 1.0 / 7.0);
    /// ```
    pub fn evaluate(&self) -> Result<f64> {
        let (integer, mut division) = self.long_division();
        let integer_text = checked_integer_text(&integer)?;

        let mut significant = if integer.is_zero() {
            0
        } else {
            integer_text.len()
        };
        let mut fraction = String::new();
        while significant < DEFAULT_SIGNIFICANT_DIGITS
            && fraction.len() < MAX_FRACTION_DIGITS
            && !division.is_exact()
        {
            let digit = division.push_digit(&mut fraction);
            if significant > 0 || digit != 0 {
                significant += 1;
            }
        }

        tracing::trace!(
            fraction_digits = fraction.len(),
            significant,
            "expanded rational for f64 evaluation"
        );
        self.parse_expansion(&integer_text, &fraction)
    }

    /// Approximate the value as an `f64` from exactly `digits` fraction
    /// digits of its truncated expansion.
    ///
    /// # Errors
    ///
    /// [`RatioError::ValueTooLarge`] if the integer part exceeds the `f64`
    /// range.
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// let r = Rational::new(1, 7).unwrap();
    /// assert_eq!(r.evaluate_digits(4).unwrap(), 0.1428);
    /// ```
    pub fn evaluate_digits(&self, digits: usize) -> Result<f64> {
        let (integer, mut division) = self.long_division();
        let integer_text = checked_integer_text(&integer)?;

        let mut fraction = String::with_capacity(digits);
        while fraction.len() < digits && !division.is_exact() {
            division.push_digit(&mut fraction);
        }
        self.parse_expansion(&integer_text, &fraction)
    }

    /// Render the value as a decimal string truncated to exactly `digits`
    /// fraction digits.
    ///
    /// A leading `-` is written only for negative values. With `digits == 0`
    /// only the integer part is written.
    ///
    /// ```
    /// use exact_ratio::Rational;
    ///
    /// let r = Rational::new(-22, 7).unwrap();
    /// assert_eq!(r.evaluate_string(5), "-3.14285");
    /// assert_eq!(Rational::new(1, 4).unwrap().evaluate_string(4), "0.2500");
    /// ```
    pub fn evaluate_string(&self, digits: usize) -> String {
        let (integer, mut division) = self.long_division();
        let integer_text = integer.to_str_radix(10);

        let mut out = String::with_capacity(integer_text.len() + digits + 2);
        if self.value_is_negative() {
            out.push('-');
        }
        out.push_str(&integer_text);
        if digits > 0 {
            out.push('.');
            for _ in 0..digits {
                division.push_digit(&mut out);
            }
        }

        tracing::trace!(digits, len = out.len(), "expanded rational to decimal text");
        out
    }

    fn parse_expansion(&self, integer_text: &str, fraction: &str) -> Result<f64> {
        let magnitude = if fraction.is_empty() {
            integer_text.parse::<f64>()
        } else {
            format!("{}.{}", integer_text, fraction).parse::<f64>()
        }
        .map_err(|_| RatioError::ValueTooLarge)?;

        if !magnitude.is_finite() {
            return Err(RatioError::ValueTooLarge);
        }
        Ok(if self.value_is_negative() {
            -magnitude
        } else {
            magnitude
        })
    }
}

/// Decimal text of the integer part, rejected up front when no finite
/// `f64` can hold it.
fn checked_integer_text(integer: &BigUint) -> Result<String> {
    let fits = integer.to_f64().map_or(false, f64::is_finite);
    if !fits {
        tracing::debug!(
            bits = integer.bits(),
            "integer part exceeds the f64 range"
        );
        return Err(RatioError::ValueTooLarge);
    }
    Ok(integer.to_str_radix(10))
}
