// ============================================================================
// Storage Encoding
// Persisted text form: BN:<precision>:<significand>:<base>[^<offset>]
// ============================================================================

use super::scientific::{parse_signed_integer, INFINITY_TEXT};
use crate::numeric::{check_precision, BigNum, BigNumError, BigNumResult, Exponent};
use crate::utils::is_digits;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Leading tag of every stored value.
pub const STORAGE_PREFIX: &str = "BN:";

impl BigNum {
    /// Canonical persisted text.
    ///
    /// The `^offset` segment appears only for exponents beyond the machine
    /// range. Saturated values store `Infinity` in the significand slot.
    pub fn to_storage(&self) -> String {
        if self.saturated {
            return format!("{}{}:{}:0", STORAGE_PREFIX, self.precision, INFINITY_TEXT);
        }
        let mut text = format!(
            "{}{}:{}:{}",
            STORAGE_PREFIX,
            self.precision,
            self.significand,
            self.exponent.base()
        );
        if !self.exponent.offset().is_zero() {
            text.push('^');
            text.push_str(&self.exponent.offset().to_string());
        }
        text
    }

    /// Parse the persisted text; exact inverse of [`to_storage`](Self::to_storage).
    ///
    /// # Errors
    /// - `InvalidFormat` for anything that is not a storage string
    /// - `InvalidPrecision` for a stored precision out of range
    pub fn from_storage(text: &str) -> BigNumResult<BigNum> {
        Self::parse_storage(text.trim()).inspect_err(|error| {
            tracing::debug!(input = text, %error, "rejected storage input");
        })
    }

    fn parse_storage(text: &str) -> BigNumResult<BigNum> {
        let body = text
            .strip_prefix(STORAGE_PREFIX)
            .ok_or(BigNumError::InvalidFormat)?;
        let mut fields = body.split(':');
        let (Some(precision), Some(significand), Some(exponent), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(BigNumError::InvalidFormat);
        };

        if !is_digits(precision) {
            return Err(BigNumError::InvalidFormat);
        }
        let precision = precision
            .parse::<u32>()
            .map_err(|_| BigNumError::InvalidFormat)?;
        let precision = check_precision(precision)?;

        let (base, offset) = match exponent.split_once('^') {
            Some((base, offset)) => (base, parse_signed_integer(offset)?),
            None => (exponent, BigInt::zero()),
        };
        let base: i64 = parse_signed_integer(base)?
            .try_into()
            .map_err(|_| BigNumError::InvalidFormat)?;

        if significand == INFINITY_TEXT {
            return Ok(BigNum::saturated_in(precision));
        }
        if !is_digits(significand) {
            return Err(BigNumError::InvalidFormat);
        }
        let significand =
            BigUint::parse_bytes(significand.as_bytes(), 10).ok_or(BigNumError::InvalidFormat)?;

        Ok(BigNum::normalized(
            significand,
            Exponent::from_parts(base, offset),
            precision,
        ))
    }
}
