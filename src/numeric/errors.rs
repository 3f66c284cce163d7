// ============================================================================
// Numeric Errors
// Error types for big number construction and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while building or parsing a [`BigNum`](super::BigNum).
///
/// Arithmetic itself never fails: overflow and division by zero saturate.
/// Only inputs from outside the nonnegative domain are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigNumError {
    /// Input text is not a valid scientific, plain or storage encoding
    InvalidFormat,
    /// Input value is negative
    NegativeInput,
    /// Precision is zero or above the supported maximum
    InvalidPrecision,
    /// Input float is NaN
    NonFiniteInput,
}

impl fmt::Display for BigNumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigNumError::InvalidFormat => write!(f, "invalid format: could not parse value"),
            BigNumError::NegativeInput => {
                write!(f, "negative input: values must be nonnegative")
            },
            BigNumError::InvalidPrecision => write!(
                f,
                "invalid precision: digit budget must be between 1 and {}",
                super::MAX_PRECISION
            ),
            BigNumError::NonFiniteInput => write!(f, "non-finite input: NaN is not a quantity"),
        }
    }
}

impl std::error::Error for BigNumError {}

/// Result type alias for big number operations
pub type BigNumResult<T> = Result<T, BigNumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            BigNumError::InvalidFormat.to_string(),
            "invalid format: could not parse value"
        );
        assert_eq!(
            BigNumError::InvalidPrecision.to_string(),
            "invalid precision: digit budget must be between 1 and 4096"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(BigNumError::NegativeInput, BigNumError::NegativeInput);
        assert_ne!(BigNumError::InvalidFormat, BigNumError::NonFiniteInput);
    }
}
