// ============================================================================
// Progress BigNum Library
// Arbitrary-magnitude nonnegative decimals for incremental progression math
// ============================================================================

//! # Progress BigNum
//!
//! A nonnegative decimal number type for idle/incremental game economies,
//! where resources grow far past the range of `f64` and still have to be
//! added, compared, displayed and saved every tick.
//!
//! ## Features
//!
//! - **Fixed-digit significands** with round-half-up normalization
//! - **Split exponent**: a machine-range base plus an unbounded offset
//! - **Saturation** instead of NaN: overflow and division by zero give an
//!   absorbing "Infinity" value
//! - **Scientific, plain and storage encodings**, the last an exact
//!   round trip for persistence
//! - **Log-domain helpers** for growth curves such as `cost = base^level`
//!
//! ## Example
//!
//! ```rust
//! use progress_bignum::prelude::*;
//!
//! let mut gold = BigNum::from_scientific("1.5e3").unwrap();
//! let income = BigNum::from_u64(250);
//! for _ in 0..4 {
//!     gold.add_in_place(&income);
//! }
//! assert_eq!(gold.to_plain_integer_string(), "2500");
//!
//! // Upgrade cost 1.15^level, floored to whole units
//! let cost = BigNum::from_u64(100).mul_decimal("1.15", 2).unwrap();
//! assert_eq!(cost.to_plain_integer_string(), "115");
//!
//! // Persist and restore
//! let saved = gold.to_storage();
//! assert_eq!(BigNum::from_storage(&saved).unwrap(), gold);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::BigNumConfig;
    pub use crate::engine::Multiplier;
    pub use crate::interfaces::NumericInput;
    pub use crate::numeric::{BigNum, BigNumError, BigNumResult, Exponent};
}
