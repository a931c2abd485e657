//! Drives the public API against an in-memory MCP9808.

use mcp9808::{
    registers::{CONFIG_REGISTER_MASK, MANUFACTURER_ID},
    temperature::decode_raw_to_celsius,
    Address, Bus, Config, ConfigStatus, Error, LimitStatus, Mcp9808, Register, Resolution,
    ShutdownState, Temperature, Thermometer,
};

/// Register file of a single sensor
struct FakeSensor {
    address: u8,
    pointer: u8,
    regs: [u16; 8],
    resolution: u8,
    writes: usize,
    fail_next: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FakeError {
    Nack,
}

impl FakeSensor {
    fn new(address: u8) -> Self {
        let mut regs = [0; 8];
        regs[Register::ManufacturerId as usize] = MANUFACTURER_ID;
        regs[Register::DeviceId as usize] = 0x0400;
        Self {
            address,
            pointer: 0,
            regs,
            resolution: 0b11,
            writes: 0,
            fail_next: false,
        }
    }

    fn config(&self) -> Config {
        Config::from_bits_retain(self.regs[Register::Config as usize])
    }

    fn check(&mut self, address: u8) -> Result<(), FakeError> {
        if address != self.address || core::mem::take(&mut self.fail_next) {
            Err(FakeError::Nack)
        } else {
            Ok(())
        }
    }
}

impl Bus for FakeSensor {
    type Error = FakeError;

    fn send_pointer(&mut self, address: u8, register: u8) -> Result<(), FakeError> {
        self.check(address)?;
        self.pointer = register;
        Ok(())
    }

    fn read_16(&mut self, address: u8) -> Result<u16, FakeError> {
        self.check(address)?;
        Ok(self.regs[usize::from(self.pointer)])
    }

    fn read_8(&mut self, address: u8) -> Result<u8, FakeError> {
        self.check(address)?;
        Ok(self.resolution)
    }

    fn send_bytes(&mut self, address: u8, bytes: &[u8]) -> Result<(), FakeError> {
        self.check(address)?;
        self.writes += 1;
        let locked = self.config();
        match *bytes {
            [reg, value] if reg == Register::RESOLUTION as u8 => self.resolution = value & 0b11,
            [reg, msb, lsb] => {
                let value = u16::from_be_bytes([msb, lsb]);
                let reg = usize::from(reg);
                let writable = match reg {
                    1 => !locked.intersects(Config::LOCKS),
                    2 | 3 => !locked.contains(Config::WINDOW_LOCK),
                    4 => !locked.contains(Config::CRITICAL_LOCK),
                    _ => false,
                };
                if writable {
                    let mask = if reg == 1 { CONFIG_REGISTER_MASK } else { 0x1FFC };
                    self.regs[reg] = value & mask;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[test]
fn test_read_temperature() {
    let mut bus = FakeSensor::new(0x18);
    bus.regs[Register::Ambient as usize] = 0xC1E8;

    let mut sensor = Mcp9808::new(bus, Address::DEFAULT).unwrap();
    sensor.device().verify_identity::<FakeError>().unwrap();

    let temp = sensor.read().unwrap();
    assert_eq!(temp, Temperature::from_num(30.5));
    assert_eq!(sensor.device().temperature(), 0xC1E8);

    sensor.bus_mut().regs[Register::Ambient as usize] = 0x1E78;
    assert_eq!(sensor.read().unwrap().to_num::<f32>(), -24.5);
    assert_eq!(decode_raw_to_celsius(sensor.device().temperature()), -24.5);
}

#[test]
fn test_wrong_address_is_a_bus_error() {
    let bus = FakeSensor::new(0x19);
    assert!(matches!(
        Mcp9808::new(bus, Address::DEFAULT),
        Err(Error::Bus(FakeError::Nack))
    ));
}

#[test]
fn test_configure_and_shutdown() {
    let bus = FakeSensor::new(0x1B);
    let mut sensor = Mcp9808::new(bus, Address::from_pins(false, true, true)).unwrap();

    let device = sensor.device_mut();
    device.set_shutdown(ShutdownState::Shutdown);
    device.set_resolution(Resolution::Quarter);
    assert_eq!(sensor.apply_configuration().unwrap(), ConfigStatus::empty());

    let (bus, device) = sensor.release();
    assert!(bus.config().contains(Config::SHUTDOWN));
    assert_eq!(bus.resolution, Resolution::Quarter.to_register());
    assert_eq!(device.configuration(), Config::SHUTDOWN);
}

#[test]
fn test_reserved_config_bits_never_reach_the_wire() {
    let bus = FakeSensor::new(0x18);
    let mut sensor = Mcp9808::new(bus, Address::DEFAULT).unwrap();

    sensor
        .device_mut()
        .set_configuration(Config::from_bits_retain(0xFE08));
    assert_eq!(sensor.apply_configuration().unwrap(), ConfigStatus::empty());

    let (bus, _) = sensor.release();
    assert_eq!(bus.regs[Register::Config as usize], 0x0008);
}

#[test]
fn test_locked_sensor() {
    let mut bus = FakeSensor::new(0x18);
    bus.regs[Register::Config as usize] = Config::CRITICAL_LOCK.bits();
    let mut sensor = Mcp9808::new(bus, Address::DEFAULT).unwrap();

    let device = sensor.device_mut();
    device.set_configuration(Config::CRITICAL_LOCK | Config::ALERT_CONTROL);
    device.set_upper_limit(30);
    device.set_lower_limit(-10);
    device.set_critical_limit(90);

    assert_eq!(
        sensor.apply_configuration().unwrap(),
        ConfigStatus::LOCKED | ConfigStatus::CONFIG_MISMATCH
    );

    let writes = sensor.bus_mut().writes;
    assert_eq!(
        sensor.apply_temperature_configuration().unwrap(),
        LimitStatus::CRITICAL_MISMATCH
    );
    assert_eq!(sensor.bus_mut().writes, writes + 3);

    let (bus, _) = sensor.release();
    assert_eq!(bus.regs[Register::TUpper as usize], 0x01E0);
    assert_eq!(bus.regs[Register::TLower as usize], 0x1F60);
    assert_eq!(bus.regs[Register::TCrit as usize], 0x0000);
}

#[test]
fn test_bus_error_aborts_apply() {
    let bus = FakeSensor::new(0x18);
    let mut sensor = Mcp9808::new(bus, Address::DEFAULT).unwrap();

    sensor.bus_mut().fail_next = true;
    assert_eq!(
        sensor.apply_temperature_configuration(),
        Err(Error::Bus(FakeError::Nack))
    );
    assert_eq!(sensor.bus_mut().writes, 0);
}

#[test]
fn test_reset_interrupts_leaves_state_alone() {
    let mut bus = FakeSensor::new(0x18);
    bus.regs[Register::Config as usize] = 0x0019;
    let mut sensor = Mcp9808::new(bus, Address::DEFAULT).unwrap();

    assert!(sensor.device().alert_asserted());
    sensor.reset_interrupts().unwrap();
    assert_eq!(sensor.device().configuration().bits(), 0x0019);
    assert_eq!(sensor.bus_mut().writes, 0);
}
