//! Device configuration
//!
//! Generated by the build script from `device.toml`, which it has already
//! validated, so nothing is parsed or checked at runtime.

use cambio_core::config::{DeviceConfig, DisplayConfig, PortConfig, SamplerConfig, TimingConfig};

include!(concat!(env!("OUT_DIR"), "/device_config.rs"));
