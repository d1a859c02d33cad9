//! Build script for cambio-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml and bakes it into the binary

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use cambio_core::config::{ConfigError, DeviceConfig};

fn main() {
    setup_linker();
    let config = load_config();
    emit_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate device.toml
fn load_config() -> DeviceConfig {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml configuration file.         ║\n\
            ║  Please create one in the cambio-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: DeviceConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid device.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid device configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(describe(e))
        );
    }

    println!("cargo:warning=device.toml validated successfully");
    config
}

/// Human-readable reason for a rejected configuration
fn describe(e: ConfigError) -> &'static str {
    match e {
        ConfigError::ThresholdOrder => {
            "[input] needs negative_threshold < neutral_low <= neutral_high < positive_threshold"
        }
        ConfigError::InvalidI2cAddress => "[display] i2c_address must be a 7-bit address",
        ConfigError::ZeroRetryBudget => "[port] retry_attempts must be at least 1",
        ConfigError::ZeroPollInterval => "[timing] poll_interval_ms must be at least 1",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated configuration as a Rust constant
fn emit_config(config: &DeviceConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let i = &config.input;
    let t = &config.timing;

    let source = format!(
        "pub const DEVICE_CONFIG: DeviceConfig = DeviceConfig {{\n\
         \x20   input: SamplerConfig {{\n\
         \x20       neutral_low: {},\n\
         \x20       neutral_high: {},\n\
         \x20       positive_threshold: {},\n\
         \x20       negative_threshold: {},\n\
         \x20   }},\n\
         \x20   timing: TimingConfig {{\n\
         \x20       axis_settle_ms: {},\n\
         \x20       button_settle_ms: {},\n\
         \x20       splash_ms: {},\n\
         \x20       poll_interval_ms: {},\n\
         \x20       fault_backoff_ms: {},\n\
         \x20   }},\n\
         \x20   display: DisplayConfig {{ i2c_address: {:#04x} }},\n\
         \x20   port: PortConfig {{ retry_attempts: {} }},\n\
         }};\n",
        i.neutral_low,
        i.neutral_high,
        i.positive_threshold,
        i.negative_threshold,
        t.axis_settle_ms,
        t.button_settle_ms,
        t.splash_ms,
        t.poll_interval_ms,
        t.fault_backoff_ms,
        config.display.i2c_address,
        config.port.retry_attempts,
    );

    fs::write(out_dir.join("device_config.rs"), source).unwrap();
}
