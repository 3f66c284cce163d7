// ============================================================================
// Numeric Module
// Arbitrary-magnitude nonnegative decimal numbers
// ============================================================================
//
// This module provides:
// - BigNum: fixed-digit significand with a split (machine + arbitrary) exponent
// - Exponent: the split exponent and its single carry helper
// - BigNumError: error types for construction and parsing
//
// Design principles:
// - Nonnegative values only; subtraction clamps at zero
// - Overflow and division by zero saturate instead of failing
// - Significand always holds exactly `precision` digits when nonzero

mod big_num;
mod errors;
mod exponent;

pub use big_num::BigNum;
pub(crate) use big_num::check_precision;
pub use errors::{BigNumError, BigNumResult};
pub use exponent::Exponent;

/// Digit budget used when no precision is given.
pub const DEFAULT_PRECISION: u32 = 18;

/// Largest accepted digit budget.
pub const MAX_PRECISION: u32 = 4096;

/// Largest number of digits a plain-integer rendering will materialize.
pub const MAX_PLAIN_DIGITS: u64 = 1_000_000;

/// Largest magnitude of the machine part of the exponent (`f64::MAX_10_EXP`).
/// Anything beyond is carried into the arbitrary-precision offset.
pub const EXPONENT_BASE_LIMIT: i64 = f64::MAX_10_EXP as i64;

/// Log10 magnitudes at or above this collapse to saturation in `from_log10`.
/// Past 2^53 an `f64` no longer holds every integer exponent.
pub const MAX_LOG10: f64 = 9_007_199_254_740_992.0;

/// Extra digits beyond the precision after which a smaller addend is ignored.
pub const NEGLIGIBLE_MARGIN: u64 = 2;
