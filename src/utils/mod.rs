// ============================================================================
// Utilities Module
// Digit arithmetic helpers and optional logging setup
// ============================================================================

pub(crate) mod digits;

#[cfg(feature = "logging")]
pub mod logging;

pub(crate) use digits::{digit_count, is_digits, pow10};
