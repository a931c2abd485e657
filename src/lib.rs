//! Driver for the MCP9808 digital temperature sensor
//!
//! The sensor is reached through the [`Bus`] trait, which [`I2cBus`]
//! implements on top of the `embedded-hal` blocking I²C traits. A [`Device`]
//! mirrors the sensor's registers in memory; its setters only change that
//! mirror, and the `apply_*` methods write it to the hardware and read every
//! register back to check that the write took.
//!
//! ```
//! # use embedded_hal_mock::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
//! # let i2c = I2cMock::new(&[
//! #     I2cTransaction::write(0x18, vec![0x06]), I2cTransaction::read(0x18, vec![0x00, 0x54]),
//! #     I2cTransaction::write(0x18, vec![0x07]), I2cTransaction::read(0x18, vec![0x04, 0x00]),
//! #     I2cTransaction::write(0x18, vec![0x01]), I2cTransaction::read(0x18, vec![0x00, 0x00]),
//! #     I2cTransaction::write(0x18, vec![0x07]), I2cTransaction::read(0x18, vec![0x04, 0x00]),
//! #     I2cTransaction::write(0x18, vec![0x05]), I2cTransaction::read(0x18, vec![0xC1, 0x94]),
//! # ]);
//! use mcp9808::{temperature, Address, Device, I2cBus};
//!
//! let mut bus = I2cBus::new(i2c);
//! let mut sensor = Device::load(&mut bus, Address::DEFAULT).unwrap();
//! sensor.verify_identity::<()>().unwrap();
//!
//! let raw = sensor.read_temperature(&mut bus).unwrap();
//! assert_eq!(temperature::decode_raw_to_celsius(raw), 25.25);
//! # bus.release().done();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

#[macro_use]
mod fmt;

mod address;
pub mod bus;
mod device;
pub mod registers;
pub mod temperature;
pub mod thermometer;

pub use address::Address;
pub use bus::{Bus, Error, I2cBus};
pub use device::{set_temperature_limit, Device};
pub use registers::{
    AlertMode, AlertPolarity, AlertSelect, Config, ConfigStatus, LimitStatus, Register,
    Resolution, ShutdownState,
};
pub use temperature::Temperature;
pub use thermometer::{Mcp9808, Thermometer};
