// ============================================================================
// Split Exponent
// Machine-range base plus an arbitrary-precision offset
// ============================================================================

use super::EXPONENT_BASE_LIMIT;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Decimal exponent split into a machine part and an unbounded offset.
///
/// The canonical form keeps `|base| <= EXPONENT_BASE_LIMIT`. The offset is
/// nonzero only when the base sits at the limit with the same sign, so every
/// total exponent has exactly one representation and derived equality holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Exponent {
    base: i64,
    offset: BigInt,
}

/// `|value| <= EXPONENT_BASE_LIMIT`, without overflowing on `i64::MIN`.
#[inline]
fn in_base_range(value: i64) -> bool {
    value.unsigned_abs() <= EXPONENT_BASE_LIMIT.unsigned_abs()
}

impl Exponent {
    /// Exponent zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from a machine-range total.
    pub fn from_i64(total: i64) -> Self {
        if in_base_range(total) {
            Self {
                base: total,
                offset: BigInt::zero(),
            }
        } else {
            Self::from_total(BigInt::from(total))
        }
    }

    /// Build from a (possibly non-canonical) base and offset pair.
    pub fn from_parts(base: i64, offset: BigInt) -> Self {
        if offset.is_zero() {
            Self::from_i64(base)
        } else {
            Self::from_total(BigInt::from(base) + offset)
        }
    }

    /// Build from an arbitrary total exponent.
    pub fn from_total(total: BigInt) -> Self {
        match total.to_i64() {
            Some(base) if in_base_range(base) => Self {
                base,
                offset: BigInt::zero(),
            },
            _ if total.is_positive() => Self {
                base: EXPONENT_BASE_LIMIT,
                offset: total - EXPONENT_BASE_LIMIT,
            },
            _ => Self {
                base: -EXPONENT_BASE_LIMIT,
                offset: total + EXPONENT_BASE_LIMIT,
            },
        }
    }

    /// Machine-range part.
    #[inline]
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Arbitrary-precision extension; zero in the common case.
    #[inline]
    pub fn offset(&self) -> &BigInt {
        &self.offset
    }

    /// `base + offset` as an arbitrary-precision integer.
    pub fn total(&self) -> BigInt {
        BigInt::from(self.base) + &self.offset
    }

    /// The total exponent, if it fits a machine integer.
    pub fn to_i64(&self) -> Option<i64> {
        if self.offset.is_zero() {
            Some(self.base)
        } else {
            self.total().to_i64()
        }
    }

    /// Lossy conversion for log-domain math.
    pub fn to_f64(&self) -> f64 {
        let offset = self.offset.to_f64().unwrap_or(if self.offset.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
        self.base as f64 + offset
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.base < 0
    }

    /// Add `delta` to the exponent, carrying past the base limit into the
    /// offset. All exponent arithmetic funnels through here or `from_total`.
    pub fn add_delta_in_place(&mut self, delta: i64) {
        if self.offset.is_zero() {
            if let Some(sum) = self.base.checked_add(delta) {
                if in_base_range(sum) {
                    self.base = sum;
                    return;
                }
            }
        }
        *self = Self::from_total(self.total() + delta);
    }

    /// Non-mutating form of [`add_delta_in_place`](Self::add_delta_in_place).
    pub fn add_delta(&self, delta: i64) -> Self {
        let mut result = self.clone();
        result.add_delta_in_place(delta);
        result
    }

    /// Sum of two exponents.
    pub fn add(&self, other: &Self) -> Self {
        if other.offset.is_zero() {
            self.add_delta(other.base)
        } else {
            Self::from_total(self.total() + other.total())
        }
    }

    /// Difference of two exponents.
    pub fn sub(&self, other: &Self) -> Self {
        if other.offset.is_zero() {
            self.add_delta(-other.base)
        } else {
            Self::from_total(self.total() - other.total())
        }
    }

    /// `self - other` as a plain integer, for alignment decisions.
    pub fn gap(&self, other: &Self) -> BigInt {
        if self.offset.is_zero() && other.offset.is_zero() {
            BigInt::from(self.base - other.base)
        } else {
            self.total() - other.total()
        }
    }
}

impl PartialOrd for Exponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Exponent {
    // Canonical form makes (offset, base) lexicographic order match the totals.
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .cmp(&other.offset)
            .then_with(|| self.base.cmp(&other.base))
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offset.is_zero() {
            write!(f, "{}", self.base)
        } else {
            write!(f, "{}", self.total())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_exponent_stays_in_base() {
        let e = Exponent::from_i64(300);
        assert_eq!(e.base(), 300);
        assert!(e.offset().is_zero());
    }

    #[test]
    fn test_carry_into_offset() {
        let e = Exponent::from_i64(300).add_delta(83);
        assert_eq!(e.base(), EXPONENT_BASE_LIMIT);
        assert_eq!(*e.offset(), BigInt::from(75));
        assert_eq!(e.total(), BigInt::from(383));
    }

    #[test]
    fn test_negative_carry() {
        let e = Exponent::from_i64(-400);
        assert_eq!(e.base(), -EXPONENT_BASE_LIMIT);
        assert_eq!(*e.offset(), BigInt::from(-92));
        assert!(e.is_negative());
    }

    #[test]
    fn test_carry_back_into_base() {
        let e = Exponent::from_i64(500).add_delta(-450);
        assert_eq!(e.base(), 50);
        assert!(e.offset().is_zero());
        assert_eq!(e, Exponent::from_i64(50));
    }

    #[test]
    fn test_non_canonical_parts_normalize() {
        let e = Exponent::from_parts(10, BigInt::from(5));
        assert_eq!(e, Exponent::from_i64(15));
    }

    #[test]
    fn test_ordering_matches_totals() {
        let values = [-1000i64, -309, -308, -5, 0, 7, 308, 309, 5000];
        for a in values {
            for b in values {
                assert_eq!(
                    Exponent::from_i64(a).cmp(&Exponent::from_i64(b)),
                    a.cmp(&b),
                    "{} vs {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_add_sub_gap() {
        let a = Exponent::from_i64(1000);
        let b = Exponent::from_i64(-20);
        assert_eq!(a.add(&b).total(), BigInt::from(980));
        assert_eq!(a.sub(&b).total(), BigInt::from(1020));
        assert_eq!(a.gap(&b), BigInt::from(1020));
        assert_eq!(b.gap(&a), BigInt::from(-1020));
    }

    #[test]
    fn test_display_and_f64() {
        assert_eq!(Exponent::from_i64(400).to_string(), "400");
        assert_eq!(Exponent::from_i64(-3).to_f64(), -3.0);
        assert_eq!(Exponent::from_i64(400).to_i64(), Some(400));
    }

    #[test]
    fn test_most_negative_machine_exponent() {
        let expected = BigInt::from(i64::MIN);
        for exponent in [
            Exponent::from_i64(i64::MIN),
            Exponent::from_total(expected.clone()),
            Exponent::from_parts(i64::MIN, BigInt::zero()),
        ] {
            assert_eq!(exponent.base(), -EXPONENT_BASE_LIMIT);
            assert_eq!(exponent.total(), expected);
        }

        let mut shifted = Exponent::from_i64(-EXPONENT_BASE_LIMIT);
        shifted.add_delta_in_place(i64::MIN + EXPONENT_BASE_LIMIT);
        assert_eq!(shifted, Exponent::from_i64(i64::MIN));
    }
}
