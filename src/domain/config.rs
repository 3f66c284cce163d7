// ============================================================================
// Number Configuration
// Digit budget selection, validation and precision-bound factories
// ============================================================================

use crate::interfaces::NumericInput;
use crate::numeric::{BigNum, BigNumError, BigNumResult, DEFAULT_PRECISION, MAX_PRECISION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Digit budget shared by every value a game subsystem creates.
///
/// Values carry their own precision once built; the config only decides
/// which precision new values start in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigNumConfig {
    /// Significand digits kept by every value built from this config
    pub precision: u32,
}

impl Default for BigNumConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BigNumConfig {
    /// Configuration with the default digit budget
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Builder method: Set the digit budget
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> BigNumResult<()> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(BigNumError::InvalidPrecision);
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl BigNumConfig {
    /// Twelve digits: enough for displayed resources, cheaper per tick
    pub fn compact() -> Self {
        Self::new().with_precision(12)
    }

    /// Thirty-six digits for long-running ratio chains
    pub fn high_precision() -> Self {
        Self::new().with_precision(36)
    }
}

// ============================================================================
// Value Factories
// ============================================================================

impl BigNumConfig {
    pub fn zero(&self) -> BigNumResult<BigNum> {
        self.validate()?;
        Ok(BigNum::zero_in(self.precision))
    }

    pub fn saturated(&self) -> BigNumResult<BigNum> {
        self.validate()?;
        Ok(BigNum::saturated_in(self.precision))
    }

    pub fn from_u64(&self, value: u64) -> BigNumResult<BigNum> {
        BigNum::from_any_with_precision(value, self.precision)
    }

    /// Parse storage, scientific or plain text into this precision.
    pub fn parse(&self, text: &str) -> BigNumResult<BigNum> {
        BigNum::from_any_with_precision(text, self.precision)
    }

    /// Normalize any supported input into this precision, including values
    /// built under another config.
    pub fn from_any<'a>(&self, input: impl Into<NumericInput<'a>>) -> BigNumResult<BigNum> {
        BigNum::from_any_with_precision(input, self.precision)
    }

    pub fn from_log10(&self, log10: f64) -> BigNumResult<BigNum> {
        BigNum::from_log10_with_precision(log10, self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = BigNumConfig::default();
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BigNumConfig::new().with_precision(24);
        assert_eq!(config.precision, 24);
        assert_eq!(config.from_u64(7).unwrap().precision(), 24);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            BigNumConfig::new().with_precision(0).validate(),
            Err(BigNumError::InvalidPrecision)
        );
        assert_eq!(
            BigNumConfig::new()
                .with_precision(MAX_PRECISION + 1)
                .zero()
                .unwrap_err(),
            BigNumError::InvalidPrecision
        );
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(BigNumConfig::compact().precision, 12);
        assert_eq!(BigNumConfig::high_precision().precision, 36);
    }

    #[test]
    fn test_factories_use_config_precision() {
        let config = BigNumConfig::compact();
        assert!(config.zero().unwrap().is_zero());
        assert!(config.saturated().unwrap().is_saturated());
        assert_eq!(config.parse("1.5e3").unwrap().precision(), 12);
        assert_eq!(config.from_log10(3.0).unwrap(), BigNum::from_u64(1_000));

        let wide = BigNum::from_u64(123_456_789).with_precision(30).unwrap();
        let narrowed = config.from_any(&wide).unwrap();
        assert_eq!(narrowed.precision(), 12);
        assert_eq!(narrowed, wide);
    }

    #[test]
    fn test_parse_storage_converts_precision() {
        let config = BigNumConfig::high_precision();
        let x = config.parse("BN:18:100000000000000000:308^75").unwrap();
        assert_eq!(x.precision(), 36);
        assert_eq!(x.to_scientific(3), "1e400");
    }
}
