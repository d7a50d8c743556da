//! Interop with fixed-width crypto-bigint unsigned integers.
//!
//! Values move across the boundary as little-endian magnitude bytes, the
//! same encoding [`BigSigned::to_bytes_le`] exposes. Widening into
//! [`BigSigned`] or [`Rational`] is lossless; narrowing back with
//! [`BigSigned::to_fixed`] is checked.
//!
//! # Example
//!
//! ```
//! use crypto_bigint::U256;
//! use exact_ratio::{BigSigned, Rational};
//!
//! let wide = BigSigned::from(U256::from_u64(1 << 40));
//! assert_eq!(wide, BigSigned::from(1u64 << 40));
//!
//! let back: U256 = wide.to_fixed().unwrap();
//! assert_eq!(back, U256::from_u64(1 << 40));
//!
//! let r = Rational::from(U256::from_u64(3)) / Rational::from(U256::from_u64(4));
//! assert_eq!(r, Rational::new(3, 4).unwrap());
//! ```

use crate::{BigSigned, Rational};
use crypto_bigint::*;

/// A fixed-width unsigned integer that can exchange values with
/// [`BigSigned`].
pub trait FixedWidth: Sized {
    /// Number of bits in this integer type.
    const BITS: u32;

    /// Convert to a vector of little-endian bytes.
    fn to_le_bytes_vec(&self) -> Vec<u8>;

    /// Create from little-endian bytes. Missing high bytes are zero.
    ///
    /// Returns `None` if a non-zero byte lies beyond the type's width.
    fn from_le_bytes_slice(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_fixed_width {
    ($type:ty, $bits:expr) => {
        impl FixedWidth for $type {
            const BITS: u32 = $bits;

            #[inline]
            fn to_le_bytes_vec(&self) -> Vec<u8> {
                self.to_le_bytes().as_ref().to_vec()
            }

            fn from_le_bytes_slice(bytes: &[u8]) -> Option<Self> {
                let mut limbs = <$type>::ZERO.to_le_bytes();
                let width = limbs.as_ref().len();
                let (low, overflow) = bytes.split_at(bytes.len().min(width));
                if overflow.iter().any(|&b| b != 0) {
                    return None;
                }
                limbs.as_mut()[..low.len()].copy_from_slice(low);
                Some(<$type>::from_le_bytes(limbs))
            }
        }

        impl From<$type> for BigSigned {
            #[inline]
            fn from(value: $type) -> Self {
                BigSigned::from_bytes_le(false, &value.to_le_bytes_vec())
            }
        }

        impl From<$type> for Rational {
            #[inline]
            fn from(value: $type) -> Self {
                Rational::from_integer(BigSigned::from(value))
            }
        }
    };
}

impl_fixed_width!(U64, 64);
impl_fixed_width!(U128, 128);
impl_fixed_width!(U192, 192);
impl_fixed_width!(U256, 256);
impl_fixed_width!(U384, 384);
impl_fixed_width!(U512, 512);
impl_fixed_width!(U1024, 1024);
impl_fixed_width!(U2048, 2048);
impl_fixed_width!(U4096, 4096);
impl_fixed_width!(U8192, 8192);

impl BigSigned {
    /// Narrow into a fixed-width unsigned integer.
    ///
    /// Returns `None` if the value is negative or its magnitude needs more
    /// than `T::BITS` bits.
    pub fn to_fixed<T: FixedWidth>(&self) -> Option<T> {
        if self.is_negative() || self.bits() > u64::from(T::BITS) {
            return None;
        }
        T::from_le_bytes_slice(&self.to_bytes_le())
    }
}
