// ============================================================================
// Multiplication
// Small-integer, big-number and exact decimal-fraction multipliers
// ============================================================================

use crate::numeric::{BigNum, BigNumError, BigNumResult};
use crate::utils::is_digits;
use num_bigint::BigUint;
use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

/// A decimal multiplier accepted by [`BigNum::mul_decimal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Multiplier<'a> {
    /// Plain decimal text such as `"1.25"`
    Text(&'a str),
    /// Native float, read through its decimal rendering
    Float(f64),
    /// Exact decimal
    Decimal(Decimal),
    /// Whole number
    Integer(u64),
}

impl<'a> From<&'a str> for Multiplier<'a> {
    fn from(text: &'a str) -> Self {
        Multiplier::Text(text)
    }
}

impl<'a> From<&'a String> for Multiplier<'a> {
    fn from(text: &'a String) -> Self {
        Multiplier::Text(text.as_str())
    }
}

impl From<f64> for Multiplier<'_> {
    fn from(value: f64) -> Self {
        Multiplier::Float(value)
    }
}

impl From<Decimal> for Multiplier<'_> {
    fn from(value: Decimal) -> Self {
        Multiplier::Decimal(value)
    }
}

impl From<u64> for Multiplier<'_> {
    fn from(value: u64) -> Self {
        Multiplier::Integer(value)
    }
}

impl From<u32> for Multiplier<'_> {
    fn from(value: u32) -> Self {
        Multiplier::Integer(u64::from(value))
    }
}

/// `numerator / 10^scale`, exact.
#[derive(Debug, PartialEq)]
enum ExactRatio {
    Finite { numerator: BigUint, scale: u32 },
    Infinite,
}

impl ExactRatio {
    fn parse(multiplier: Multiplier<'_>, max_fraction_digits: u32) -> BigNumResult<Self> {
        match multiplier {
            Multiplier::Text(text) => Self::parse_text(text, max_fraction_digits),
            Multiplier::Float(value) => {
                if value.is_nan() {
                    Err(BigNumError::NonFiniteInput)
                } else if value < 0.0 {
                    Err(BigNumError::NegativeInput)
                } else if value.is_infinite() {
                    Ok(ExactRatio::Infinite)
                } else {
                    Self::parse_text(&format!("{}", value), max_fraction_digits)
                }
            },
            Multiplier::Decimal(value) => {
                if value.is_sign_negative() && !value.is_zero() {
                    return Err(BigNumError::NegativeInput);
                }
                let value = if value.scale() > max_fraction_digits {
                    value.round_dp_with_strategy(
                        max_fraction_digits,
                        RoundingStrategy::MidpointAwayFromZero,
                    )
                } else {
                    value
                };
                Ok(ExactRatio::Finite {
                    numerator: BigUint::from(value.mantissa().unsigned_abs()),
                    scale: value.scale(),
                })
            },
            Multiplier::Integer(value) => Ok(ExactRatio::Finite {
                numerator: BigUint::from(value),
                scale: 0,
            }),
        }
    }

    /// `<int>[.<frac>]`, fraction rounded half-up to `max_fraction_digits`.
    fn parse_text(text: &str, max_fraction_digits: u32) -> BigNumResult<Self> {
        let text = text.trim();
        if text.starts_with('-') {
            return Err(BigNumError::NegativeInput);
        }
        let text = text.strip_prefix('+').unwrap_or(text);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(BigNumError::InvalidFormat);
        }
        if (!int_part.is_empty() && !is_digits(int_part))
            || (!frac_part.is_empty() && !is_digits(frac_part))
        {
            return Err(BigNumError::InvalidFormat);
        }

        let keep = frac_part.len().min(max_fraction_digits as usize);
        let round_up = frac_part.as_bytes().get(keep).is_some_and(|&d| d >= b'5');
        let digits = format!("{}{}", int_part, &frac_part[..keep]);
        let mut numerator =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(BigNumError::InvalidFormat)?;
        if round_up {
            numerator += 1u8;
        }
        Ok(ExactRatio::Finite {
            numerator,
            scale: keep as u32,
        })
    }
}

impl BigNum {
    /// Exact multiply by a small nonnegative integer.
    ///
    /// # Errors
    /// Returns `NegativeInput` if `factor < 0`.
    pub fn mul_small(&self, factor: i64) -> BigNumResult<BigNum> {
        let factor = u64::try_from(factor).map_err(|_| BigNumError::NegativeInput)?;
        Ok(self.mul_u64(factor))
    }

    /// Exact multiply by an unsigned integer.
    pub fn mul_u64(&self, factor: u64) -> BigNum {
        let mut result = self.clone();
        result.mul_small_in_place(factor);
        result
    }

    /// In-place form of [`mul_u64`](Self::mul_u64).
    pub fn mul_small_in_place(&mut self, factor: u64) {
        if self.saturated {
            return;
        }
        if factor == 0 {
            self.set_zero();
            return;
        }
        self.significand *= factor;
        self.renormalize();
    }

    /// Product of two values: significands multiply and exponents add.
    ///
    /// Zero times anything is zero; otherwise a saturated operand saturates.
    pub fn mul_big_num_integer(&self, other: &BigNum) -> BigNum {
        if self.is_zero() || other.is_zero() {
            return BigNum::zero_in(self.precision);
        }
        if self.saturated || other.saturated {
            return BigNum::saturated_in(self.precision);
        }
        BigNum::normalized(
            &self.significand * &other.significand,
            self.exponent.add(&other.exponent),
            self.precision,
        )
    }

    /// Multiply by a decimal given as text, float or [`Decimal`], keeping at
    /// most `max_fraction_digits` fractional digits of the multiplier.
    ///
    /// The multiplier is read as `numerator / 10^scale`, so `"1.1"` scales
    /// by exactly eleven tenths with no binary float error.
    ///
    /// # Errors
    /// - `InvalidFormat` for malformed multiplier text
    /// - `NegativeInput` for negative multipliers
    /// - `NonFiniteInput` for a NaN multiplier
    pub fn mul_decimal<'a>(
        &self,
        multiplier: impl Into<Multiplier<'a>>,
        max_fraction_digits: u32,
    ) -> BigNumResult<BigNum> {
        let ratio = ExactRatio::parse(multiplier.into(), max_fraction_digits)?;
        if self.saturated {
            return Ok(self.clone());
        }
        match ratio {
            ExactRatio::Infinite if self.is_zero() => Ok(self.clone()),
            ExactRatio::Infinite => Ok(BigNum::saturated_in(self.precision)),
            ExactRatio::Finite { numerator, .. } if numerator.is_zero() || self.is_zero() => {
                Ok(BigNum::zero_in(self.precision))
            },
            ExactRatio::Finite { numerator, scale } => Ok(BigNum::normalized(
                &self.significand * numerator,
                self.exponent.add_delta(-i64::from(scale)),
                self.precision,
            )),
        }
    }

    /// Multiply by `10^power`, a pure exponent shift.
    pub fn mul_pow10(&self, power: i64) -> BigNum {
        if self.saturated || self.is_zero() {
            return self.clone();
        }
        let mut result = self.clone();
        result.exponent.add_delta_in_place(power);
        result
    }
}
