// ============================================================================
// Scientific Notation
// Rendering and parsing of `<int>[.<frac>][e<exp>]` text
// ============================================================================

use crate::numeric::{
    check_precision, BigNum, BigNumError, BigNumResult, Exponent, DEFAULT_PRECISION,
};
use crate::utils::is_digits;
use num_bigint::{BigInt, BigUint};
use std::fmt;
use std::str::FromStr;

/// Text rendered for saturated values.
pub const INFINITY_TEXT: &str = "Infinity";

/// Parsed scientific text before normalization.
#[derive(Debug, PartialEq)]
pub(crate) enum ScientificParts {
    Infinite,
    Finite {
        significand: BigUint,
        exponent: BigInt,
    },
}

impl ScientificParts {
    /// Parse `<int>[.<frac>][e<exp>]` or a case-insensitive `Infinity`.
    /// `"1.23e5"` gives significand 123 and exponent 3.
    pub(crate) fn parse(text: &str) -> BigNumResult<Self> {
        let text = text.trim();
        let body = text.strip_prefix('+').unwrap_or(text);
        if body.eq_ignore_ascii_case(INFINITY_TEXT) {
            return Ok(ScientificParts::Infinite);
        }
        if body.starts_with('-') {
            return Err(BigNumError::NegativeInput);
        }

        let (mantissa, exponent_text) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(BigNumError::InvalidFormat);
        }
        if (!int_part.is_empty() && !is_digits(int_part))
            || (!frac_part.is_empty() && !is_digits(frac_part))
        {
            return Err(BigNumError::InvalidFormat);
        }

        let exponent = match exponent_text {
            Some(exponent_text) => parse_signed_integer(exponent_text)?,
            None => BigInt::from(0u8),
        };
        let digits = format!("{}{}", int_part, frac_part);
        let significand =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(BigNumError::InvalidFormat)?;

        Ok(ScientificParts::Finite {
            significand,
            exponent: exponent - frac_part.len(),
        })
    }
}

/// `[+-]<digits>` as a big integer.
pub(crate) fn parse_signed_integer(text: &str) -> BigNumResult<BigInt> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if !is_digits(digits) {
        return Err(BigNumError::InvalidFormat);
    }
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(BigNumError::InvalidFormat)?;
    Ok(if negative { -magnitude } else { magnitude })
}

impl BigNum {
    /// Render as `<lead>.<digits>e<exponent>` keeping at most `digits`
    /// digits after the leading one, trailing zeros trimmed.
    ///
    /// Saturated values render as `"Infinity"`, zero as `"0"`.
    pub fn to_scientific(&self, digits: usize) -> String {
        if self.saturated {
            return INFINITY_TEXT.to_string();
        }
        if self.is_zero() {
            return "0".to_string();
        }

        let text = self.significand.to_string();
        let (lead, rest) = text.split_at(1);
        let rest = rest[..digits.min(rest.len())].trim_end_matches('0');
        let exponent = self.exponent.add_delta(i64::from(self.precision) - 1);

        if rest.is_empty() {
            format!("{}e{}", lead, exponent)
        } else {
            format!("{}.{}e{}", lead, rest, exponent)
        }
    }

    /// Parse scientific or plain numeric text in the default precision.
    ///
    /// # Errors
    /// - `InvalidFormat` for malformed text
    /// - `NegativeInput` for a leading minus sign
    pub fn from_scientific(text: &str) -> BigNumResult<BigNum> {
        Self::from_scientific_with_precision(text, DEFAULT_PRECISION)
    }

    /// Parse scientific or plain numeric text into `precision` digits.
    ///
    /// # Errors
    /// - `InvalidFormat` for malformed text
    /// - `NegativeInput` for a leading minus sign
    /// - `InvalidPrecision` for a zero or oversized digit budget
    pub fn from_scientific_with_precision(text: &str, precision: u32) -> BigNumResult<BigNum> {
        let precision = check_precision(precision)?;
        let parts = ScientificParts::parse(text).inspect_err(|error| {
            tracing::debug!(input = text, %error, "rejected scientific input");
        })?;
        Ok(match parts {
            ScientificParts::Infinite => BigNum::saturated_in(precision),
            ScientificParts::Finite {
                significand,
                exponent,
            } => BigNum::normalized(significand, Exponent::from_total(exponent), precision),
        })
    }
}

impl fmt::Display for BigNum {
    /// Scientific notation; `{:.N}` limits the digits after the leading one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f
            .precision()
            .unwrap_or(self.precision.saturating_sub(1) as usize);
        f.write_str(&self.to_scientific(digits))
    }
}

impl FromStr for BigNum {
    type Err = BigNumError;

    /// Accepts the storage encoding as well as scientific and plain text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with(super::storage::STORAGE_PREFIX) {
            BigNum::from_storage(s)
        } else {
            BigNum::from_scientific(s)
        }
    }
}
