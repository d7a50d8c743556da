//! Error type shared by the integer and rational layers.

use thiserror::Error;

/// Failures reported by fallible rational and integer operations.
///
/// All three kinds are terminal for the call that produced them. Operands
/// are never modified on the error path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioError {
    /// A rational was constructed with a zero denominator.
    #[error("the denominator of a rational cannot be zero")]
    InvalidDenominator,

    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The integer part does not fit the target fixed-width type.
    #[error("value too large for the target numeric type")]
    ValueTooLarge,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, RatioError>;
