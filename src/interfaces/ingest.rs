// ============================================================================
// Polymorphic Ingestion
// Normalize instances, text, floats and integers into BigNum
// ============================================================================

use super::storage::STORAGE_PREFIX;
use crate::numeric::{
    check_precision, BigNum, BigNumError, BigNumResult, Exponent, DEFAULT_PRECISION,
};
use num_bigint::{BigInt, BigUint, Sign};
use std::borrow::Cow;

/// Any raw quantity a caller may hand to [`BigNum::from_any`].
#[derive(Debug, Clone)]
pub enum NumericInput<'a> {
    /// An existing value, passed through
    Value(Cow<'a, BigNum>),
    /// Storage encoding, scientific or plain numeric text
    Text(Cow<'a, str>),
    /// Native float
    Float(f64),
    /// Native machine integer
    Integer(i128),
    /// Native arbitrary-precision integer
    BigInteger(BigInt),
}

impl From<BigNum> for NumericInput<'_> {
    fn from(value: BigNum) -> Self {
        NumericInput::Value(Cow::Owned(value))
    }
}

impl<'a> From<&'a BigNum> for NumericInput<'a> {
    fn from(value: &'a BigNum) -> Self {
        NumericInput::Value(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(text: &'a str) -> Self {
        NumericInput::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(text: &'a String) -> Self {
        NumericInput::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for NumericInput<'_> {
    fn from(text: String) -> Self {
        NumericInput::Text(Cow::Owned(text))
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<i64> for NumericInput<'_> {
    fn from(value: i64) -> Self {
        NumericInput::Integer(i128::from(value))
    }
}

impl From<i32> for NumericInput<'_> {
    fn from(value: i32) -> Self {
        NumericInput::Integer(i128::from(value))
    }
}

impl From<u64> for NumericInput<'_> {
    fn from(value: u64) -> Self {
        NumericInput::Integer(i128::from(value))
    }
}

impl From<u32> for NumericInput<'_> {
    fn from(value: u32) -> Self {
        NumericInput::Integer(i128::from(value))
    }
}

impl From<i128> for NumericInput<'_> {
    fn from(value: i128) -> Self {
        NumericInput::Integer(value)
    }
}

impl From<BigInt> for NumericInput<'_> {
    fn from(value: BigInt) -> Self {
        NumericInput::BigInteger(value)
    }
}

impl From<BigUint> for NumericInput<'_> {
    fn from(value: BigUint) -> Self {
        NumericInput::BigInteger(BigInt::from(value))
    }
}

impl BigNum {
    /// Normalize any supported input. Existing values pass through with
    /// their own precision; everything else lands in the default precision
    /// (storage text keeps the precision it encodes).
    ///
    /// # Errors
    /// - `InvalidFormat` for malformed text
    /// - `NegativeInput` for negative numbers
    /// - `NonFiniteInput` for NaN
    pub fn from_any<'a>(input: impl Into<NumericInput<'a>>) -> BigNumResult<BigNum> {
        match input.into() {
            NumericInput::Value(value) => Ok(value.into_owned()),
            NumericInput::Text(text) if text.trim_start().starts_with(STORAGE_PREFIX) => {
                BigNum::from_storage(&text)
            },
            other => Self::from_any_with_precision(other, DEFAULT_PRECISION),
        }
    }

    /// Normalize any supported input into exactly `precision` digits.
    ///
    /// # Errors
    /// As [`from_any`](Self::from_any), plus `InvalidPrecision`.
    pub fn from_any_with_precision<'a>(
        input: impl Into<NumericInput<'a>>,
        precision: u32,
    ) -> BigNumResult<BigNum> {
        let precision = check_precision(precision)?;
        match input.into() {
            NumericInput::Value(value) => Ok(value.in_precision(precision).into_owned()),
            NumericInput::Text(text) => {
                if text.trim_start().starts_with(STORAGE_PREFIX) {
                    Ok(BigNum::from_storage(&text)?
                        .in_precision(precision)
                        .into_owned())
                } else {
                    BigNum::from_scientific_with_precision(&text, precision)
                }
            },
            NumericInput::Float(value) => Self::from_f64_with_precision(value, precision),
            NumericInput::Integer(value) => {
                let value = u128::try_from(value).map_err(|_| BigNumError::NegativeInput)?;
                Ok(BigNum::normalized(
                    BigUint::from(value),
                    Exponent::zero(),
                    precision,
                ))
            },
            NumericInput::BigInteger(value) => match value.into_parts() {
                (Sign::Minus, _) => Err(BigNumError::NegativeInput),
                (_, magnitude) => Ok(BigNum::normalized(magnitude, Exponent::zero(), precision)),
            },
        }
    }

    /// Float in the default precision, read through its shortest decimal
    /// rendering so `0.1` becomes exactly one tenth.
    ///
    /// # Errors
    /// - `NonFiniteInput` for NaN
    /// - `NegativeInput` for values below zero
    pub fn from_f64(value: f64) -> BigNumResult<BigNum> {
        Self::from_f64_with_precision(value, DEFAULT_PRECISION)
    }

    fn from_f64_with_precision(value: f64, precision: u32) -> BigNumResult<BigNum> {
        if value.is_nan() {
            return Err(BigNumError::NonFiniteInput);
        }
        if value < 0.0 {
            return Err(BigNumError::NegativeInput);
        }
        if value.is_infinite() {
            return Ok(BigNum::saturated_in(precision));
        }
        if value == 0.0 {
            return Ok(BigNum::zero_in(precision));
        }
        BigNum::from_scientific_with_precision(&format!("{:e}", value), precision)
    }
}
