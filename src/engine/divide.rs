// ============================================================================
// Division and Flooring
// ============================================================================

use crate::numeric::BigNum;
use crate::utils::pow10;

impl BigNum {
    /// Quotient in `self`'s precision.
    ///
    /// Conventions that keep ratio formulas total:
    /// - `x / 0` saturates
    /// - `0 / x` is zero
    /// - `saturated / saturated` is one
    /// - `saturated / finite` saturates, `finite / saturated` is zero
    pub fn div(&self, divisor: &BigNum) -> BigNum {
        let precision = self.precision;
        if divisor.is_zero() {
            return BigNum::saturated_in(precision);
        }
        match (self.saturated, divisor.saturated) {
            (true, true) => return BigNum::one_in(precision),
            (true, false) => return BigNum::saturated_in(precision),
            (false, true) => return BigNum::zero_in(precision),
            (false, false) => {},
        }
        if self.is_zero() {
            return BigNum::zero_in(precision);
        }

        let divisor = divisor.in_precision(precision);
        let shift = u64::from(precision);
        let quotient = (&self.significand * pow10(shift)) / &divisor.significand;
        let exponent = self
            .exponent
            .sub(&divisor.exponent)
            .add_delta(-(shift as i64));
        BigNum::normalized(quotient, exponent, precision)
    }

    /// Drop every digit right of the decimal point.
    ///
    /// Works from the exponent alone: a nonnegative exponent is already an
    /// integer, an exponent at or below `-precision` leaves nothing.
    pub fn floor_to_integer(&self) -> BigNum {
        let mut result = self.clone();
        result.floor_in_place();
        result
    }

    /// In-place form of [`floor_to_integer`](Self::floor_to_integer).
    pub fn floor_in_place(&mut self) {
        if self.saturated || self.is_zero() || !self.exponent.is_negative() {
            return;
        }
        match self.exponent.to_i64() {
            Some(exponent) if exponent.unsigned_abs() < u64::from(self.precision) => {
                let unit = pow10(exponent.unsigned_abs());
                self.significand /= &unit;
                self.significand *= unit;
            },
            _ => self.set_zero(),
        }
    }

    /// True when the value has no fractional digits.
    pub fn is_integer(&self) -> bool {
        self.floor_to_integer() == *self
    }
}
