// ============================================================================
// Log-Domain Helpers
// log10 extraction and reconstruction for growth-curve formulas
// ============================================================================
//
// Cost curves such as `base^level` and compounding percentage stacks are
// computed as additions and multiplications of log10 magnitudes, so the core
// type never needs a general power operator.

use crate::numeric::{
    check_precision, BigNum, BigNumError, BigNumResult, DEFAULT_PRECISION, MAX_LOG10,
};
use crate::utils::pow10;
use num_traits::ToPrimitive;

/// Leading significand digits an `f64` carries faithfully.
const F64_DIGITS: u32 = 17;

/// Fractional mantissa digits written when rebuilding from a log10.
const MANTISSA_FRACTION_DIGITS: u32 = 14;

impl BigNum {
    /// Approximate `log10(self)` from the leading significand digits and the
    /// exponent, without casting the whole value to a float.
    ///
    /// Zero gives negative infinity, a saturated value positive infinity.
    pub fn approx_log10(&self) -> f64 {
        if self.saturated {
            return f64::INFINITY;
        }
        if self.is_zero() {
            return f64::NEG_INFINITY;
        }
        let dropped = self.precision.saturating_sub(F64_DIGITS);
        let leading = (&self.significand / pow10(u64::from(dropped)))
            .to_f64()
            .unwrap_or(f64::INFINITY);
        leading.log10() + self.exponent.to_f64() + f64::from(dropped)
    }

    /// Rebuild an integer value from its log10 in the default precision.
    ///
    /// # Errors
    /// Returns `NonFiniteInput` if `log10` is NaN.
    pub fn from_log10(log10: f64) -> BigNumResult<BigNum> {
        Self::from_log10_with_precision(log10, DEFAULT_PRECISION)
    }

    /// Rebuild an integer value from its log10.
    ///
    /// The log is split into an integer exponent and a fractional part whose
    /// power of ten becomes the mantissa. The result is floored to an
    /// integer. Magnitudes at or above [`MAX_LOG10`] saturate.
    ///
    /// The result is only as exact as the `f64` log allows: about 14
    /// significant digits survive, and fewer as the magnitude of `log10`
    /// grows. Digits past that are zero, so a round trip through
    /// [`approx_log10`](Self::approx_log10) is exact in the last digit only
    /// for precisions up to about 12.
    ///
    /// # Errors
    /// - `NonFiniteInput` if `log10` is NaN
    /// - `InvalidPrecision` for a zero or oversized digit budget
    pub fn from_log10_with_precision(log10: f64, precision: u32) -> BigNumResult<BigNum> {
        let precision = check_precision(precision)?;
        if log10.is_nan() {
            return Err(BigNumError::NonFiniteInput);
        }
        if log10 >= MAX_LOG10 {
            return Ok(BigNum::saturated_in(precision));
        }
        if log10 == f64::NEG_INFINITY {
            return Ok(BigNum::zero_in(precision));
        }

        let mut exponent = log10.floor();
        let mut mantissa = 10f64.powf(log10 - exponent);
        if mantissa >= 10.0 {
            exponent += 1.0;
            mantissa /= 10.0;
        }

        let digits = (precision - 1).min(MANTISSA_FRACTION_DIGITS) as usize;
        let mut text = format!("{:.*}", digits, mantissa);
        if text.starts_with("10") {
            exponent += 1.0;
            text = format!("{:.*}", digits, mantissa / 10.0);
        }
        let text = format!("{}e{}", text, exponent as i64);
        Ok(Self::from_scientific_with_precision(&text, precision)?.floor_to_integer())
    }

    /// `self^power` for growth curves, computed in log space and floored.
    ///
    /// # Errors
    /// - `NonFiniteInput` if `power` is NaN
    /// - `NegativeInput` if `power` is negative
    pub fn pow_approx(&self, power: f64) -> BigNumResult<BigNum> {
        if power.is_nan() {
            return Err(BigNumError::NonFiniteInput);
        }
        if power < 0.0 {
            return Err(BigNumError::NegativeInput);
        }
        if power == 0.0 {
            return Ok(BigNum::one_in(self.precision));
        }
        if self.saturated || self.is_zero() {
            return Ok(self.clone());
        }
        Self::from_log10_with_precision(self.approx_log10() * power, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::EXPONENT_BASE_LIMIT;

    #[test]
    fn test_approx_log10_basic() {
        assert!((BigNum::from_u64(1_000).approx_log10() - 3.0).abs() < 1e-12);
        assert!((BigNum::from_u64(2).approx_log10() - 2f64.log10()).abs() < 1e-13);
    }

    #[test]
    fn test_approx_log10_specials() {
        assert_eq!(BigNum::zero().approx_log10(), f64::NEG_INFINITY);
        assert_eq!(BigNum::saturated().approx_log10(), f64::INFINITY);
    }

    #[test]
    fn test_approx_log10_beyond_double_range() {
        let x = BigNum::from_scientific("3e5000").unwrap();
        assert!((x.approx_log10() - (5000.0 + 3f64.log10())).abs() < 1e-9);
        assert!(x.exponent().base() == EXPONENT_BASE_LIMIT);
    }

    #[test]
    fn test_approx_log10_wide_precision() {
        let x = BigNum::from_u64(250).with_precision(60).unwrap();
        assert!((x.approx_log10() - 250f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_from_log10_exact_powers() {
        assert_eq!(BigNum::from_log10(30.0).unwrap().to_scientific(17), "1e30");
        assert_eq!(BigNum::from_log10(0.0).unwrap(), BigNum::one());
        assert_eq!(BigNum::from_log10(400.0).unwrap().to_scientific(5), "1e400");
    }

    #[test]
    fn test_from_log10_floors() {
        // log10(0.5) -> 0.5 floors to zero
        assert!(BigNum::from_log10(-0.30103).unwrap().is_zero());
        let x = BigNum::from_log10(2.5f64.log10()).unwrap();
        assert_eq!(x, BigNum::from_u64(2));
    }

    #[test]
    fn test_from_log10_specials() {
        assert!(BigNum::from_log10(MAX_LOG10).unwrap().is_saturated());
        assert!(BigNum::from_log10(f64::INFINITY).unwrap().is_saturated());
        assert!(BigNum::from_log10(f64::NEG_INFINITY).unwrap().is_zero());
        assert_eq!(
            BigNum::from_log10(f64::NAN).unwrap_err(),
            BigNumError::NonFiniteInput
        );
    }

    #[test]
    fn test_round_trip_within_last_digit() {
        let v = BigNum::from_scientific("4.56789012345e150")
            .unwrap()
            .with_precision(12)
            .unwrap();
        let back = BigNum::from_log10_with_precision(v.approx_log10(), 12).unwrap();
        assert_eq!(back.to_scientific(10), v.to_scientific(10));
    }

    #[test]
    fn test_round_trip_at_default_precision_keeps_leading_digits() {
        let v = BigNum::from_scientific("1.23456789012345678e150").unwrap();
        let back = BigNum::from_log10(v.approx_log10()).unwrap();
        assert_eq!(back.to_scientific(10), "1.2345678901e150");
        assert_ne!(back, v);
    }

    #[test]
    fn test_pow_approx() {
        let base = BigNum::from_u64(2);
        assert_eq!(base.pow_approx(10.0).unwrap(), BigNum::from_u64(1_024));
        assert_eq!(base.pow_approx(0.0).unwrap(), BigNum::one());
        assert!(BigNum::from_u64(10).pow_approx(1e20).unwrap().is_saturated());
        assert_eq!(base.pow_approx(-1.0).unwrap_err(), BigNumError::NegativeInput);
    }
}
