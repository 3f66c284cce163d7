// ============================================================================
// Arithmetic Engine Module
// Arithmetic, comparison helpers and log-domain math on BigNum
// ============================================================================

mod add_sub;
mod divide;
mod log_domain;
mod multiply;
mod ops;

#[cfg(test)]
mod properties;

pub use multiply::Multiplier;
