//! Configuration type definitions
//!
//! The device configuration is fixed at build time. The firmware build
//! script deserializes `device.toml` into [`DeviceConfig`], validates it,
//! and bakes the result into the binary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stick zone thresholds over the 8-bit sample range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SamplerConfig {
    /// Lowest sample in the neutral (re-arm) band
    pub neutral_low: u8,
    /// Highest sample in the neutral (re-arm) band
    pub neutral_high: u8,
    /// Samples at or above this fire a positive move
    pub positive_threshold: u8,
    /// Samples at or below this fire a negative move
    pub negative_threshold: u8,
}

impl SamplerConfig {
    /// Thresholds of the shipped joystick
    pub const DEFAULT: Self = Self {
        neutral_low: 111,
        neutral_high: 139,
        positive_threshold: 180,
        negative_threshold: 50,
    };
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Tick-clock intervals, all in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TimingConfig {
    /// Hold-off after a stick event
    pub axis_settle_ms: u32,
    /// Hold-off after a button press
    pub button_settle_ms: u32,
    /// How long the splash screen stays up
    pub splash_ms: u32,
    /// Delay between control-loop iterations
    pub poll_interval_ms: u32,
    /// Delay before retrying after a port fault
    pub fault_backoff_ms: u32,
}

impl TimingConfig {
    /// Timings of the shipped device
    pub const DEFAULT: Self = Self {
        axis_settle_ms: 200,
        button_settle_ms: 300,
        splash_ms: 3000,
        poll_interval_ms: 10,
        fault_backoff_ms: 500,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Character display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the backpack
    pub i2c_address: u8,
}

impl DisplayConfig {
    /// PCF8574 backpack with all address jumpers open
    pub const DEFAULT: Self = Self { i2c_address: 0x27 };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Port-layer fault handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PortConfig {
    /// Attempts per bus or ADC primitive before reporting a fault
    pub retry_attempts: u8,
}

impl PortConfig {
    /// Three attempts per primitive
    pub const DEFAULT: Self = Self { retry_attempts: 3 };
}

impl Default for PortConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DeviceConfig {
    /// Stick thresholds
    pub input: SamplerConfig,
    /// Tick-clock intervals
    pub timing: TimingConfig,
    /// Display settings
    pub display: DisplayConfig,
    /// Port fault handling
    pub port: PortConfig,
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Thresholds must satisfy negative < neutral_low <= neutral_high < positive
    ThresholdOrder,
    /// I2C address does not fit in 7 bits
    InvalidI2cAddress,
    /// Retry budget must allow at least one attempt
    ZeroRetryBudget,
    /// The control loop needs a nonzero poll interval
    ZeroPollInterval,
}

impl DeviceConfig {
    /// Configuration of the shipped device
    pub const DEFAULT: Self = Self {
        input: SamplerConfig::DEFAULT,
        timing: TimingConfig::DEFAULT,
        display: DisplayConfig::DEFAULT,
        port: PortConfig::DEFAULT,
    };

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let i = &self.input;
        if !(i.negative_threshold < i.neutral_low
            && i.neutral_low <= i.neutral_high
            && i.neutral_high < i.positive_threshold)
        {
            return Err(ConfigError::ThresholdOrder);
        }

        if self.display.i2c_address > 0x7F {
            return Err(ConfigError::InvalidI2cAddress);
        }

        if self.port.retry_attempts == 0 {
            return Err(ConfigError::ZeroRetryBudget);
        }

        if self.timing.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(DeviceConfig::DEFAULT.validate(), Ok(()));
        assert_eq!(DeviceConfig::default(), DeviceConfig::DEFAULT);
    }

    #[test]
    fn test_overlapping_thresholds_rejected() {
        let mut config = DeviceConfig::DEFAULT;
        config.input.positive_threshold = 130;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));

        let mut config = DeviceConfig::DEFAULT;
        config.input.negative_threshold = 111;
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));
    }

    #[test]
    fn test_eight_bit_address_rejected() {
        let mut config = DeviceConfig::DEFAULT;
        config.display.i2c_address = 0x80;
        assert_eq!(config.validate(), Err(ConfigError::InvalidI2cAddress));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let mut config = DeviceConfig::DEFAULT;
        config.port.retry_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRetryBudget));
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = DeviceConfig::DEFAULT;
        config.timing.poll_interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPollInterval));
    }
}
