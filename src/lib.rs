//! Async driver for the HTU21D / SHT21 temperature and humidity sensor.
//!
//! The sensor is triggered in no-hold-master mode: the command byte is written,
//! the host waits out the conversion itself, then reads back a big-endian
//! 16-bit code whose two low bits carry status and are discarded.
#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod conversion;
mod htu21d;
pub mod report;

pub use htu21d::HTU21DSensor;
pub use report::{OutputFormat, Report};

/// Factory address of the HTU21D / SHT21.
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Name used to key the JSON report when the caller has none.
pub const DEFAULT_SENSOR_NAME: &str = "pi";

/// Time the sensor needs between a no-hold trigger and a valid read.
pub const SETTLE_DELAY_MS: u32 = 500;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    TemperatureNoHold = 0xF3,
    HumidityNoHold = 0xF5,
}

impl Command {
    pub const fn byte(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Temperature {
    pub celsius: f64,
    pub fahrenheit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HTU21DResponse {
    pub temperature: Temperature,
    /// Relative humidity in percent, not clamped to 0..=100.
    pub humidity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HTU21DError {
    /// Nothing acknowledged the sensor address.
    NotConnected,
    /// Bus error while sending the measurement command.
    WriteFailed,
    /// Bus error while reading the 2-byte response.
    ReadFailed,
}

impl core::fmt::Display for HTU21DError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HTU21DError::NotConnected => f.write_str("sensor did not acknowledge its address"),
            HTU21DError::WriteFailed => f.write_str("I2C write of measurement command failed"),
            HTU21DError::ReadFailed => f.write_str("I2C read of measurement response failed"),
        }
    }
}

impl core::error::Error for HTU21DError {}
