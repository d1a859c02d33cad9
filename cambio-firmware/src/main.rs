//! Cambio - Handheld Currency Converter Firmware
//!
//! Main firmware binary for RP2040-based boards with a 16x2 I2C character
//! LCD, a two-axis analog stick and a push button.
//!
//! Pin map:
//! - I2C0: GPIO4 (SDA), GPIO5 (SCL) at 100 kHz, LCD backpack
//! - ADC0 (GPIO26): stick X
//! - ADC1 (GPIO27): stick Y
//! - GPIO15: push button, active-low with internal pull-up

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as RpI2cConfig, I2c};
use embassy_time::{Delay, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use cambio_core::{Controller, ControllerError, WizardPhase};
use cambio_drivers::{Joystick, JoystickChannels, Lcd1602};
use cambio_hal::i2c::I2cConfig;
use cambio_hal::{RetryBudget, Retrying};
use cambio_hal_rp2040::{AdcChannel, RpAnalog, RpI2cBus, RpInputPin};

use crate::config::DEVICE_CONFIG;

mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Cambio firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = DEVICE_CONFIG;
    let budget = RetryBudget::new(config.port.retry_attempts);
    let backoff_ms = config.timing.fault_backoff_ms as u64;
    info!("Configuration: {}", config);

    // Display bus
    let mut i2c_config = RpI2cConfig::default();
    i2c_config.frequency = I2cConfig::STANDARD.frequency;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let mut bus = Retrying::new(RpI2cBus::new(i2c), budget);

    // Stick and button; channels are listed in ADC order
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let stick_x = Channel::new_pin(p.PIN_26, Pull::None);
    let stick_y = Channel::new_pin(p.PIN_27, Pull::None);
    let analog = Retrying::new(RpAnalog::new(adc, [stick_x, stick_y]), budget);
    let button = RpInputPin::new(Input::new(p.PIN_15, Pull::Up));
    let channels = JoystickChannels {
        x: AdcChannel::Adc0.index(),
        y: AdcChannel::Adc1.index(),
    };
    info!(
        "Stick X on GPIO{}, Y on GPIO{}",
        AdcChannel::Adc0.gpio(),
        AdcChannel::Adc1.gpio()
    );
    let joystick = Joystick::new(analog, button, channels, config.input);

    let lcd = loop {
        match Lcd1602::init(&mut bus, Delay, config.display.i2c_address) {
            Ok(lcd) => break lcd,
            Err(e) => {
                error!("LCD init failed: {}", e);
                Timer::after_millis(backoff_ms).await;
            }
        }
    };
    info!("LCD ready at {=u8:#x}", config.display.i2c_address);

    let mut controller = Controller::new(lcd, joystick, config.timing);
    let poll_ms = config.timing.poll_interval_ms as u64;

    loop {
        match controller.tick(Instant::now().as_millis()) {
            Ok(Some(phase)) => {
                debug!("Wizard phase: {}", phase);
                if let WizardPhase::ShowResult(conversion) = phase {
                    info!("Converted: {}", conversion);
                }
            }
            Ok(None) => {}
            Err(ControllerError::Display(e)) => {
                error!("Display fault: {}", e);
                Timer::after_millis(backoff_ms).await;
            }
            Err(ControllerError::Input(e)) => {
                error!("Input fault: {}", e);
                Timer::after_millis(backoff_ms).await;
            }
        }

        Timer::after_millis(poll_ms).await;
    }
}
