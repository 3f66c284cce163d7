// ============================================================================
// Addition and Subtraction
// Exponent alignment, negligible-operand cutoff and the zero clamp
// ============================================================================

use crate::numeric::{BigNum, MAX_PLAIN_DIGITS, NEGLIGIBLE_MARGIN};
use crate::utils::pow10;
use num_traits::ToPrimitive;
use std::cmp::Ordering;

impl BigNum {
    /// Sum of two values, in `self`'s precision.
    ///
    /// A saturated operand saturates the result. An addend more than
    /// `precision + 2` orders of magnitude below the other is ignored.
    pub fn add(&self, other: &BigNum) -> BigNum {
        let mut result = self.clone();
        result.add_in_place(other);
        result
    }

    /// In-place form of [`add`](Self::add) for per-tick accumulation loops.
    /// Reuses the significand allocation of `self`.
    pub fn add_in_place(&mut self, other: &BigNum) {
        if self.saturated {
            return;
        }
        if other.saturated {
            self.set_saturated();
            return;
        }
        let other = other.in_precision(self.precision);
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            self.significand.clone_from(&other.significand);
            self.exponent.clone_from(&other.exponent);
            return;
        }

        let window = u64::from(self.precision) + NEGLIGIBLE_MARGIN;
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => {
                self.significand += &other.significand;
            },
            Ordering::Greater => {
                let gap = self.exponent.gap(&other.exponent);
                match gap.to_u64() {
                    Some(gap) if gap <= window => {
                        self.significand *= pow10(gap);
                        self.significand += &other.significand;
                        self.exponent.clone_from(&other.exponent);
                    },
                    _ => return,
                }
            },
            Ordering::Less => {
                let gap = other.exponent.gap(&self.exponent);
                match gap.to_u64() {
                    Some(gap) if gap <= window => {
                        self.significand += &other.significand * pow10(gap);
                    },
                    _ => {
                        self.significand.clone_from(&other.significand);
                        self.exponent.clone_from(&other.exponent);
                        return;
                    },
                }
            },
        }
        self.renormalize();
    }

    /// Difference of two values, clamped at zero when `other >= self`.
    ///
    /// Operands within `precision + 2` orders of magnitude are subtracted
    /// directly. Wider gaps materialize the full aligned integer, which is
    /// capped at [`MAX_PLAIN_DIGITS`]; past the cap the result saturates.
    pub fn sub(&self, other: &BigNum) -> BigNum {
        let mut result = self.clone();
        result.sub_in_place(other);
        result
    }

    /// In-place form of [`sub`](Self::sub).
    pub fn sub_in_place(&mut self, other: &BigNum) {
        if self.saturated {
            return;
        }
        if other.saturated {
            self.set_zero();
            return;
        }
        let other = other.in_precision(self.precision);
        if other.is_zero() {
            return;
        }
        if *self <= *other {
            self.set_zero();
            return;
        }

        // Same precision and self > other > 0, so self's exponent is not lower.
        let gap = self.exponent.gap(&other.exponent);
        let precision = u64::from(self.precision);
        let gap = match gap.to_u64() {
            Some(gap) if gap <= precision + NEGLIGIBLE_MARGIN => gap,
            Some(gap) if precision + gap <= MAX_PLAIN_DIGITS => {
                tracing::trace!(gap, "subtraction falling back to full integer alignment");
                gap
            },
            _ => {
                tracing::warn!(
                    gap = %gap,
                    limit = MAX_PLAIN_DIGITS,
                    "subtraction exceeds digit cap, saturating"
                );
                self.set_saturated();
                return;
            },
        };

        self.significand *= pow10(gap);
        self.significand -= &other.significand;
        self.exponent.clone_from(&other.exponent);
        self.renormalize();
    }
}
