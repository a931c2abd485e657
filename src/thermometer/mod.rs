//! Temperature sensor interface

use crate::{
    address::Address,
    bus::{Bus, Error},
    device::Device,
    registers::{ConfigStatus, LimitStatus},
    temperature::{decode_raw, Temperature},
};

pub trait Thermometer {
    type Error;

    /// Read the temperature in degrees Celsius
    ///
    /// I28F4 is a fixed point number with 4 fractional bits and 28 integer bits.
    /// This gives us a precision of 0.0625 degrees Celsius.
    fn read(&mut self) -> Result<Temperature, Self::Error>;
}

/// An MCP9808 bound to the bus it sits on.
pub struct Mcp9808<B> {
    bus: B,
    device: Device,
}

impl<B: Bus> Mcp9808<B> {
    /// Takes ownership of `bus` and loads the sensor at `address`.
    pub fn new(mut bus: B, address: Address) -> Result<Self, Error<B::Error>> {
        let device = Device::load(&mut bus, address)?;
        Ok(Self { bus, device })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
    pub fn device_mut(&mut self) -> &mut Device {
        &mut self.device
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// See [`Device::apply_configuration`]
    pub fn apply_configuration(&mut self) -> Result<ConfigStatus, Error<B::Error>> {
        self.device.apply_configuration(&mut self.bus)
    }

    /// See [`Device::apply_temperature_configuration`]
    pub fn apply_temperature_configuration(&mut self) -> Result<LimitStatus, Error<B::Error>> {
        self.device.apply_temperature_configuration(&mut self.bus)
    }

    /// See [`Device::reset_interrupts`]
    pub fn reset_interrupts(&mut self) -> Result<(), Error<B::Error>> {
        self.device.reset_interrupts(&mut self.bus)
    }

    /// Gives back the bus and the last known device state
    pub fn release(self) -> (B, Device) {
        (self.bus, self.device)
    }
}

impl<B: Bus> Thermometer for Mcp9808<B> {
    type Error = Error<B::Error>;

    fn read(&mut self) -> Result<Temperature, Self::Error> {
        let raw = self.device.read_temperature(&mut self.bus)?;
        Ok(decode_raw(raw))
    }
}
