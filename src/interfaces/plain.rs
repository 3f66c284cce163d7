// ============================================================================
// Plain Integer Rendering
// Integer-part materialization bounded by a digit cap
// ============================================================================

use super::scientific::INFINITY_TEXT;
use crate::numeric::{BigNum, MAX_PLAIN_DIGITS};
use crate::utils::pow10;
use num_bigint::BigUint;
use num_traits::Zero;

/// How the integer part of a value would be materialized.
enum IntegerPart {
    Zero,
    /// Leading `keep` significand digits followed by `zeros` zeros
    Digits { keep: usize, zeros: u64 },
    TooLong,
}

impl BigNum {
    fn integer_part(&self) -> IntegerPart {
        if self.saturated {
            return IntegerPart::TooLong;
        }
        if self.is_zero() {
            return IntegerPart::Zero;
        }
        let precision = u64::from(self.precision);
        match self.exponent.to_i64() {
            Some(exponent) if exponent >= 0 => {
                let zeros = exponent as u64;
                if precision + zeros > MAX_PLAIN_DIGITS {
                    IntegerPart::TooLong
                } else {
                    IntegerPart::Digits {
                        keep: self.precision as usize,
                        zeros,
                    }
                }
            },
            Some(exponent) if exponent.unsigned_abs() < precision => IntegerPart::Digits {
                keep: (precision - exponent.unsigned_abs()) as usize,
                zeros: 0,
            },
            Some(_) => IntegerPart::Zero,
            None if self.exponent.is_negative() => IntegerPart::Zero,
            None => IntegerPart::TooLong,
        }
    }

    /// Integer part as decimal digits, fraction dropped.
    ///
    /// Past [`MAX_PLAIN_DIGITS`] digits (and for saturated values) this
    /// returns `"Infinity"` instead of allocating the string.
    pub fn to_plain_integer_string(&self) -> String {
        match self.integer_part() {
            IntegerPart::Zero => "0".to_string(),
            IntegerPart::TooLong => {
                if !self.saturated {
                    tracing::warn!(
                        exponent = %self.exponent,
                        limit = MAX_PLAIN_DIGITS,
                        "plain rendering exceeds digit cap"
                    );
                }
                INFINITY_TEXT.to_string()
            },
            IntegerPart::Digits { keep, zeros } => {
                let digits = self.significand.to_string();
                let mut text = String::with_capacity(keep + zeros as usize);
                text.push_str(&digits[..keep]);
                text.extend(std::iter::repeat('0').take(zeros as usize));
                text
            },
        }
    }

    /// Integer part as a big integer, under the same digit cap.
    /// `None` for saturated values and values past the cap.
    pub fn to_biguint(&self) -> Option<BigUint> {
        match self.integer_part() {
            IntegerPart::Zero => Some(BigUint::zero()),
            IntegerPart::TooLong => None,
            IntegerPart::Digits { keep, zeros } => {
                let dropped = u64::from(self.precision) - keep as u64;
                let head = &self.significand / pow10(dropped);
                Some(head * pow10(zeros))
            },
        }
    }

    /// Lossy float conversion: infinity past `f64::MAX`, zero below the
    /// smallest subnormal.
    pub fn to_f64(&self) -> f64 {
        if self.saturated {
            return f64::INFINITY;
        }
        if self.is_zero() {
            return 0.0;
        }
        self.to_scientific(16).parse().unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use crate::numeric::BigNum;
    use num_bigint::BigUint;

    fn sci(text: &str) -> BigNum {
        BigNum::from_scientific(text).unwrap()
    }

    #[test]
    fn test_plain_integer_string() {
        assert_eq!(sci("1.5e3").to_plain_integer_string(), "1500");
        assert_eq!(BigNum::from_u64(7).to_plain_integer_string(), "7");
        assert_eq!(BigNum::zero().to_plain_integer_string(), "0");
        assert_eq!(
            sci("1e25").to_plain_integer_string(),
            format!("1{}", "0".repeat(25))
        );
    }

    #[test]
    fn test_plain_drops_fraction() {
        assert_eq!(sci("123.999").to_plain_integer_string(), "123");
        assert_eq!(sci("0.75").to_plain_integer_string(), "0");
        assert_eq!(sci("1e-400").to_plain_integer_string(), "0");
    }

    #[test]
    fn test_plain_digit_cap() {
        assert_eq!(BigNum::saturated().to_plain_integer_string(), "Infinity");
        assert_eq!(sci("1e999999").to_plain_integer_string().len(), 1_000_000);
        assert_eq!(sci("1e1000000").to_plain_integer_string(), "Infinity");
    }

    #[test]
    fn test_to_biguint() {
        assert_eq!(sci("1.5e3").to_biguint(), Some(BigUint::from(1_500u32)));
        assert_eq!(sci("12.9").to_biguint(), Some(BigUint::from(12u32)));
        assert_eq!(BigNum::saturated().to_biguint(), None);
        assert_eq!(BigNum::zero().to_biguint(), Some(BigUint::from(0u32)));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(BigNum::from_u64(1_500).to_f64(), 1_500.0);
        assert_eq!(sci("2.5e-3").to_f64(), 0.0025);
        assert_eq!(sci("1e400").to_f64(), f64::INFINITY);
        assert_eq!(BigNum::saturated().to_f64(), f64::INFINITY);
    }
}
