//! Register-level controller for a single MCP9808.

use crate::{
    address::Address,
    bus::{Bus, Error},
    registers::{
        AlertMode, AlertPolarity, AlertSelect, Config, ConfigStatus, LimitStatus, Register,
        Resolution, ShutdownState, MANUFACTURER_ID, MIN_DEVICE_ID, TEMPERATURE_REGISTER_MASK,
    },
    temperature::{decode_raw_to_celsius, encode_celsius_to_limit_register},
};

/// Encodes a whole-degree limit for [`Device::set_upper_limit`] and friends.
#[inline]
pub const fn set_temperature_limit(temp_c: i8) -> u16 {
    encode_celsius_to_limit_register(temp_c)
}

/// In-memory mirror of one sensor's registers.
///
/// Created by [`Device::load`]. Setters only touch this copy; the hardware
/// sees the changes once [`Device::apply_configuration`] or
/// [`Device::apply_temperature_configuration`] runs.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Device {
    address: Address,
    manufacturer_id: u16,
    device_id: u16,
    configuration: Config,
    resolution: Resolution,
    t_upper: u16,
    t_lower: u16,
    t_crit: u16,
    temperature: u16,
}

/// Selects `register` and reads its 16-bit value.
fn read_register<B: Bus>(
    bus: &mut B,
    address: Address,
    register: Register,
) -> Result<u16, Error<B::Error>> {
    bus.send_pointer(address.0, register.addr())?;
    Ok(bus.read_16(address.0)?)
}

/// Turns a read-back mismatch into `true`, keeping transport errors as errors.
fn mismatched<E>(result: Result<(), Error<E>>) -> Result<bool, Error<E>> {
    match result {
        Ok(()) => Ok(false),
        Err(Error::Mismatch { .. }) => Ok(true),
        Err(e) => Err(e),
    }
}

impl Device {
    /// Reads manufacturer ID, device ID, configuration and resolution from the sensor at `address`.
    ///
    /// The identity registers are not checked here, see [`Device::verify_identity`].
    pub fn load<B: Bus>(bus: &mut B, address: Address) -> Result<Self, Error<B::Error>> {
        let manufacturer_id = read_register(bus, address, Register::ManufacturerId)?;
        let device_id = read_register(bus, address, Register::DeviceId)?;
        let configuration = read_register(bus, address, Register::Config)?;
        let resolution = read_register(bus, address, Register::RESOLUTION)?;

        let device = Self {
            address,
            manufacturer_id,
            device_id,
            configuration: Config::from_bits_retain(configuration),
            resolution: Resolution::from_register(resolution),
            t_upper: 0,
            t_lower: 0,
            t_crit: 0,
            temperature: 0,
        };

        debug!(
            "mcp9808 {}: manufacturer {=u16:#x}, device {=u16:#x}",
            device.address, device.manufacturer_id, device.device_id
        );

        Ok(device)
    }

    /// Checks the identity registers read by [`Device::load`] against the MCP9808 values.
    pub fn verify_identity<E>(&self) -> Result<(), Error<E>> {
        if self.manufacturer_id != MANUFACTURER_ID {
            Err(Error::ManufacturerIdMismatch)
        } else if self.device_id < MIN_DEVICE_ID {
            Err(Error::DeviceIdMismatch)
        } else {
            Ok(())
        }
    }

    /// Clears a latched alert.
    ///
    /// Reading CONFIG is what releases the interrupt on this part; the value is discarded.
    pub fn reset_interrupts<B: Bus>(&self, bus: &mut B) -> Result<(), Error<B::Error>> {
        read_register(bus, self.address, Register::Config)?;
        Ok(())
    }

    /// Writes a 16-bit register and reads it back.
    ///
    /// The value is sent as is; masking to the register width is up to the caller.
    pub fn write_and_verify_16<B: Bus>(
        &self,
        bus: &mut B,
        register: Register,
        value: u16,
    ) -> Result<(), Error<B::Error>> {
        let [msb, lsb] = value.to_be_bytes();
        bus.send_bytes(self.address.0, &[register.addr(), msb, lsb])?;

        let actual = read_register(bus, self.address, register)?;
        if actual == value {
            Ok(())
        } else {
            warn!(
                "mcp9808 {}: {} wrote {=u16:#x}, read back {=u16:#x}",
                self.address, register, value, actual
            );
            Err(Error::Mismatch {
                register,
                expected: value,
                actual,
            })
        }
    }

    /// Writes an 8-bit register and reads it back.
    pub fn write_and_verify_8<B: Bus>(
        &self,
        bus: &mut B,
        register: Register,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        bus.send_bytes(self.address.0, &[register.addr(), value])?;

        bus.send_pointer(self.address.0, register.addr())?;
        let actual = bus.read_8(self.address.0)?;
        if actual == value {
            Ok(())
        } else {
            warn!(
                "mcp9808 {}: {} wrote {=u8:#x}, read back {=u8:#x}",
                self.address, register, value, actual
            );
            Err(Error::Mismatch {
                register,
                expected: u16::from(value),
                actual: u16::from(actual),
            })
        }
    }

    /// Writes configuration and resolution to the sensor.
    ///
    /// Both writes are always attempted. Lock bits found set beforehand are
    /// reported as [`ConfigStatus::LOCKED`], read-back failures as the
    /// matching mismatch flag. Only bus errors abort.
    #[cfg_attr(feature = "sizing", inline(never))]
    pub fn apply_configuration<B: Bus>(
        &mut self,
        bus: &mut B,
    ) -> Result<ConfigStatus, Error<B::Error>> {
        let mut status = ConfigStatus::empty();

        let live = Config::from_bits_retain(read_register(bus, self.address, Register::Config)?);
        if live.intersects(Config::LOCKS) {
            warn!("mcp9808 {}: configuration locked ({})", self.address, live);
            status |= ConfigStatus::LOCKED;
        }

        let config = self.configuration.wire_bits();
        status.set(
            ConfigStatus::CONFIG_MISMATCH,
            mismatched(self.write_and_verify_16(bus, Register::Config, config))?,
        );

        let resolution = self.resolution.to_register();
        status.set(
            ConfigStatus::RESOLUTION_MISMATCH,
            mismatched(self.write_and_verify_8(bus, Register::RESOLUTION, resolution))?,
        );

        trace!("mcp9808 {}: apply_configuration -> {}", self.address, status);
        Ok(status)
    }

    /// Writes T-upper, T-lower and T-crit to the sensor.
    ///
    /// Every limit is written even if an earlier one fails to verify.
    #[cfg_attr(feature = "sizing", inline(never))]
    pub fn apply_temperature_configuration<B: Bus>(
        &mut self,
        bus: &mut B,
    ) -> Result<LimitStatus, Error<B::Error>> {
        let limits = [
            (Register::TUpper, self.t_upper, LimitStatus::UPPER_MISMATCH),
            (Register::TLower, self.t_lower, LimitStatus::LOWER_MISMATCH),
            (Register::TCrit, self.t_crit, LimitStatus::CRITICAL_MISMATCH),
        ];

        let mut status = LimitStatus::empty();
        for (register, value, flag) in limits {
            let value = value & TEMPERATURE_REGISTER_MASK;
            status.set(
                flag,
                mismatched(self.write_and_verify_16(bus, register, value))?,
            );
        }

        trace!(
            "mcp9808 {}: apply_temperature_configuration -> {}",
            self.address,
            status
        );
        Ok(status)
    }

    /// Reads the raw ambient temperature register and remembers it.
    ///
    /// Use [`crate::temperature`] to turn the value into degrees.
    pub fn read_temperature<B: Bus>(&mut self, bus: &mut B) -> Result<u16, Error<B::Error>> {
        self.temperature = read_register(bus, self.address, Register::Ambient)?;
        Ok(self.temperature)
    }

    pub fn set_shutdown(&mut self, state: ShutdownState) {
        self.configuration
            .set(Config::SHUTDOWN, state == ShutdownState::Shutdown);
    }

    pub fn set_alert_mode(&mut self, mode: AlertMode) {
        self.configuration
            .set(Config::ALERT_MODE, mode == AlertMode::Interrupt);
    }

    pub fn set_alert_polarity(&mut self, polarity: AlertPolarity) {
        self.configuration
            .set(Config::ALERT_POLARITY, polarity == AlertPolarity::ActiveHigh);
    }

    pub fn set_alert_select(&mut self, select: AlertSelect) {
        self.configuration
            .set(Config::ALERT_SELECT, select == AlertSelect::CriticalOnly);
    }

    /// Enables or disables the alert output pin
    pub fn set_alert_output(&mut self, enabled: bool) {
        self.configuration.set(Config::ALERT_CONTROL, enabled);
    }

    /// Locks T-upper and T-lower until the next power cycle once applied
    pub fn lock_window(&mut self) {
        self.configuration.insert(Config::WINDOW_LOCK);
    }

    /// Locks T-crit until the next power cycle once applied
    pub fn lock_critical(&mut self) {
        self.configuration.insert(Config::CRITICAL_LOCK);
    }

    pub fn set_configuration(&mut self, configuration: Config) {
        self.configuration = configuration;
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    pub fn set_upper_limit(&mut self, temp_c: i8) {
        self.t_upper = set_temperature_limit(temp_c);
    }

    pub fn set_lower_limit(&mut self, temp_c: i8) {
        self.t_lower = set_temperature_limit(temp_c);
    }

    pub fn set_critical_limit(&mut self, temp_c: i8) {
        self.t_crit = set_temperature_limit(temp_c);
    }

    pub const fn address(&self) -> Address {
        self.address
    }
    pub const fn manufacturer_id(&self) -> u16 {
        self.manufacturer_id
    }
    pub const fn device_id(&self) -> u16 {
        self.device_id
    }
    pub const fn configuration(&self) -> Config {
        self.configuration
    }
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }
    pub const fn upper_limit(&self) -> u16 {
        self.t_upper
    }
    pub const fn lower_limit(&self) -> u16 {
        self.t_lower
    }
    pub const fn critical_limit(&self) -> u16 {
        self.t_crit
    }

    /// Raw value of the last [`Device::read_temperature`]
    pub const fn temperature(&self) -> u16 {
        self.temperature
    }

    /// Last reading in degrees Celsius
    pub fn celsius(&self) -> f32 {
        decode_raw_to_celsius(self.temperature)
    }

    /// Whether the alert output was asserted in the mirrored CONFIG value
    pub const fn alert_asserted(&self) -> bool {
        self.configuration.contains(Config::ALERT_STATUS)
    }
}
