//! Two-wire bus transport used by the driver.

mod error;

use embedded_hal::blocking::i2c::{Read, Write};

pub use self::error::Error;

/// Transport primitives the driver is built on.
///
/// Every method blocks until the transfer is complete. Implementations are
/// expected to be single-owner; `&mut self` keeps access exclusive.
pub trait Bus {
    type Error;

    /// Write the register pointer, selecting the register for the next read
    fn send_pointer(&mut self, address: u8, register: u8) -> Result<(), Self::Error>;

    /// Read two bytes, most significant first, from the selected register
    fn read_16(&mut self, address: u8) -> Result<u16, Self::Error>;

    /// Read a single byte from the selected register
    fn read_8(&mut self, address: u8) -> Result<u8, Self::Error>;

    /// Write a raw frame, register pointer first, followed by the payload
    fn send_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// [`Bus`] over an `embedded-hal` blocking I²C peripheral.
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn i2c(&self) -> &I2C {
        &self.i2c
    }
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Give back the I²C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Bus for I2cBus<I2C>
where
    I2C: Write<Error = E> + Read<Error = E>,
{
    type Error = E;

    fn send_pointer(&mut self, address: u8, register: u8) -> Result<(), E> {
        self.i2c.write(address, &[register])
    }

    fn read_16(&mut self, address: u8) -> Result<u16, E> {
        let mut buf = [0u8; 2];
        self.i2c.read(address, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn read_8(&mut self, address: u8) -> Result<u8, E> {
        let mut buf = [0u8; 1];
        self.i2c.read(address, &mut buf)?;
        Ok(buf[0])
    }

    fn send_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), E> {
        self.i2c.write(address, bytes)
    }
}
