// ============================================================================
// Big Number
// Fixed-digit significand with an unbounded decimal exponent
// ============================================================================

use super::errors::{BigNumError, BigNumResult};
use super::exponent::Exponent;
use super::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::utils::{digit_count, pow10};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Nonnegative decimal number of arbitrary magnitude.
///
/// A finite nonzero value is `significand × 10^exponent` where the
/// significand has exactly `precision` decimal digits. Zero is stored as a
/// zero significand with a zero exponent. A saturated value stands for
/// "too large to represent": it absorbs every operation it touches and keeps
/// zeroed sentinel fields.
///
/// # Example
/// ```
/// use progress_bignum::numeric::BigNum;
///
/// let gold = BigNum::from_scientific("1.5e3").unwrap();
/// let doubled = gold.mul_u64(2);
/// assert_eq!(doubled.to_plain_integer_string(), "3000");
/// ```
#[derive(Clone)]
pub struct BigNum {
    pub(crate) significand: BigUint,
    pub(crate) exponent: Exponent,
    pub(crate) saturated: bool,
    pub(crate) precision: u32,
}

/// Reject digit budgets outside `1..=MAX_PRECISION`.
pub(crate) fn check_precision(precision: u32) -> BigNumResult<u32> {
    if precision == 0 || precision > MAX_PRECISION {
        Err(BigNumError::InvalidPrecision)
    } else {
        Ok(precision)
    }
}

impl BigNum {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero in the default precision.
    pub fn zero() -> Self {
        Self::zero_in(DEFAULT_PRECISION)
    }

    /// The saturated sentinel in the default precision.
    pub fn saturated() -> Self {
        Self::saturated_in(DEFAULT_PRECISION)
    }

    /// One in the default precision.
    pub fn one() -> Self {
        Self::one_in(DEFAULT_PRECISION)
    }

    pub(crate) fn zero_in(precision: u32) -> Self {
        Self {
            significand: BigUint::zero(),
            exponent: Exponent::zero(),
            saturated: false,
            precision,
        }
    }

    pub(crate) fn saturated_in(precision: u32) -> Self {
        Self {
            significand: BigUint::zero(),
            exponent: Exponent::zero(),
            saturated: true,
            precision,
        }
    }

    pub(crate) fn one_in(precision: u32) -> Self {
        let shift = u64::from(precision - 1);
        Self {
            significand: pow10(shift),
            exponent: Exponent::from_i64(-(shift as i64)),
            saturated: false,
            precision,
        }
    }

    /// Build `significand × 10^exponent` and normalize it to `precision` digits.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` for a zero or oversized digit budget.
    pub fn from_parts(
        significand: BigUint,
        exponent: Exponent,
        precision: u32,
    ) -> BigNumResult<Self> {
        let precision = check_precision(precision)?;
        Ok(Self::normalized(significand, exponent, precision))
    }

    /// Normalizing constructor for callers that already checked `precision`.
    pub(crate) fn normalized(significand: BigUint, exponent: Exponent, precision: u32) -> Self {
        let mut value = Self {
            significand,
            exponent,
            saturated: false,
            precision,
        };
        value.renormalize();
        value
    }

    /// Exact integer in the default precision (rounded if it has more digits).
    pub fn from_u64(value: u64) -> Self {
        Self::normalized(BigUint::from(value), Exponent::zero(), DEFAULT_PRECISION)
    }

    /// Exact integer in the default precision (rounded if it has more digits).
    pub fn from_u128(value: u128) -> Self {
        Self::normalized(BigUint::from(value), Exponent::zero(), DEFAULT_PRECISION)
    }

    /// Signed machine integer; negative values are outside the domain.
    ///
    /// # Errors
    /// Returns `NegativeInput` if `value < 0`.
    pub fn from_i64(value: i64) -> BigNumResult<Self> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| BigNumError::NegativeInput)
    }

    /// Arbitrary-precision integer in the default precision.
    pub fn from_biguint(value: BigUint) -> Self {
        Self::normalized(value, Exponent::zero(), DEFAULT_PRECISION)
    }

    /// Re-express this value with another digit budget, rounding half-up
    /// when the budget shrinks.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` for a zero or oversized digit budget.
    pub fn with_precision(&self, precision: u32) -> BigNumResult<Self> {
        let precision = check_precision(precision)?;
        Ok(self.in_precision(precision).into_owned())
    }

    /// Borrow `self` unchanged when it already has `precision` digits.
    pub(crate) fn in_precision(&self, precision: u32) -> Cow<'_, BigNum> {
        if self.precision == precision {
            Cow::Borrowed(self)
        } else {
            let mut value = self.clone();
            value.precision = precision;
            value.renormalize();
            Cow::Owned(value)
        }
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Restore the fixed digit count: round half-up when the significand is
    /// too long, pad with zeros when it is too short. Exponent changes go
    /// through the single carry helper on [`Exponent`].
    pub(crate) fn renormalize(&mut self) {
        if self.saturated || self.significand.is_zero() {
            self.significand.set_zero();
            self.exponent = Exponent::zero();
            return;
        }

        let precision = u64::from(self.precision);
        let digits = digit_count(&self.significand);

        match digits.cmp(&precision) {
            Ordering::Greater => {
                let mut shift = digits - precision;
                let divisor = pow10(shift);
                let (mut quotient, remainder) = self.significand.div_rem(&divisor);
                if remainder * 2u8 >= divisor {
                    quotient += 1u8;
                    // Carry out of 99..9 adds a digit.
                    if digit_count(&quotient) > precision {
                        quotient /= 10u8;
                        shift += 1;
                    }
                }
                self.significand = quotient;
                self.exponent.add_delta_in_place(shift as i64);
            },
            Ordering::Less => {
                let deficit = precision - digits;
                self.significand *= pow10(deficit);
                self.exponent.add_delta_in_place(-(deficit as i64));
            },
            Ordering::Equal => {},
        }
    }

    pub(crate) fn set_zero(&mut self) {
        self.significand.set_zero();
        self.exponent = Exponent::zero();
        self.saturated = false;
    }

    pub(crate) fn set_saturated(&mut self) {
        self.significand.set_zero();
        self.exponent = Exponent::zero();
        self.saturated = true;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The fixed-width significand (zero for zero and saturated values).
    #[inline]
    pub fn significand(&self) -> &BigUint {
        &self.significand
    }

    /// The split exponent.
    #[inline]
    pub fn exponent(&self) -> &Exponent {
        &self.exponent
    }

    /// The significand as a machine integer, when it fits.
    pub fn significand_u128(&self) -> Option<u128> {
        self.significand.to_u128()
    }

    /// Digit budget of this value.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.saturated && self.significand.is_zero()
    }

    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.saturated
    }

    /// Power of ten of the leading digit, i.e. the exponent in scientific
    /// notation. `None` for zero and saturated values.
    pub fn effective_exponent(&self) -> Option<BigInt> {
        if self.saturated || self.significand.is_zero() {
            None
        } else {
            Some(self.exponent.total() + (self.precision - 1))
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Total order: saturated above everything, zero below every nonzero
    /// value, otherwise by magnitude.
    fn compare(&self, other: &Self) -> Ordering {
        match (self.saturated, other.saturated) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {},
        }
        match (self.significand.is_zero(), other.significand.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {},
        }

        if self.precision == other.precision {
            return self
                .exponent
                .cmp(&other.exponent)
                .then_with(|| self.significand.cmp(&other.significand));
        }

        let lead = self.exponent.total() + self.precision;
        let other_lead = other.exponent.total() + other.precision;
        lead.cmp(&other_lead).then_with(|| {
            // Same leading position: pad the shorter significand.
            if self.precision < other.precision {
                let pad = u64::from(other.precision - self.precision);
                (&self.significand * pow10(pad)).cmp(&other.significand)
            } else {
                let pad = u64::from(self.precision - other.precision);
                self.significand.cmp(&(&other.significand * pow10(pad)))
            }
        })
    }

    /// Canonical form independent of precision: trailing zeros stripped.
    fn stripped(&self) -> (BigUint, BigInt) {
        let mut significand = self.significand.clone();
        let mut exponent = self.exponent.total();
        while !significand.is_zero() && (&significand % 10u8).is_zero() {
            significand /= 10u8;
            exponent += 1;
        }
        (significand, exponent)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigNum {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigNum {}

impl PartialOrd for BigNum {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigNum {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigNum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.saturated.hash(state);
        if !self.saturated {
            let (significand, exponent) = self.stripped();
            significand.hash(state);
            exponent.hash(state);
        }
    }
}

impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BigNum<{}>({}, significand={}, exponent={})",
            self.precision, self, self.significand, self.exponent
        )
    }
}

impl From<u64> for BigNum {
    #[inline]
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<u32> for BigNum {
    #[inline]
    fn from(value: u32) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl From<BigUint> for BigNum {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self::from_biguint(value)
    }
}

impl TryFrom<i64> for BigNum {
    type Error = BigNumError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
