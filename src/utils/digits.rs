// ============================================================================
// Digit Helpers
// Decimal digit counting and powers of ten for BigUint
// ============================================================================

use num_bigint::BigUint;
use num_traits::{Pow, ToPrimitive, Zero};

/// `10^n` as a big integer.
#[inline]
pub fn pow10(n: u64) -> BigUint {
    Pow::pow(BigUint::from(10u8), n)
}

/// Number of decimal digits in `n`; zero has none.
pub fn digit_count(n: &BigUint) -> u64 {
    if n.is_zero() {
        return 0;
    }
    if let Some(small) = n.to_u128() {
        return u64::from(small.ilog10()) + 1;
    }

    // 2^(bits-1) <= n < 2^bits, so the answer is the digit count of
    // 2^(bits-1) or one more. Checked on both sides against float drift.
    let bits = n.bits();
    let mut estimate = ((bits - 1) as f64 * std::f64::consts::LOG10_2) as u64 + 1;
    if *n < pow10(estimate - 1) {
        estimate -= 1;
    } else if *n >= pow10(estimate) {
        estimate += 1;
    }
    estimate
}

/// True when `s` is a nonempty run of ASCII digits.
#[inline]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
