//! Register map and bit-field definitions of the MCP9808.

use bitflags::bitflags;
use static_assertions::const_assert_eq;

/// Effective width of the CONFIG register as written by this driver.
pub const CONFIG_REGISTER_MASK: u16 = 0x01FF;
/// 13-bit temperature field shared by TA and the limit registers.
pub const TEMPERATURE_REGISTER_MASK: u16 = 0x1FFF;
/// Limit registers have quarter-degree granularity, so the two lowest bits are always zero.
pub const LIMIT_REGISTER_MASK: u16 = 0x1FFC;
/// Sign bit of the 13-bit temperature field.
pub const TEMPERATURE_SIGN_BIT: u16 = 0x1000;

/// Value of the manufacturer ID register on every MCP9808.
pub const MANUFACTURER_ID: u16 = 0x0054;
/// Lowest device ID/revision word reported by an MCP9808.
pub const MIN_DEVICE_ID: u16 = 0x0400;

const_assert_eq!(LIMIT_REGISTER_MASK & !TEMPERATURE_REGISTER_MASK, 0);
const_assert_eq!(TEMPERATURE_SIGN_BIT & TEMPERATURE_REGISTER_MASK, TEMPERATURE_SIGN_BIT);
const_assert_eq!(LIMIT_REGISTER_MASK & 0b11, 0);

/// Register pointer values
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Register {
    Config = 0x01,
    TUpper = 0x02,
    TLower = 0x03,
    TCrit = 0x04,
    Ambient = 0x05,
    ManufacturerId = 0x06,
    /// Device ID and revision. Resolution is addressed through the same pointer.
    DeviceId = 0x07,
}

impl Register {
    /// Pointer used for the resolution register.
    pub const RESOLUTION: Register = Register::DeviceId;

    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

bitflags! {
    /// CONFIG register bits
    ///
    /// Bits outside the named flags are retained so a value read from the
    /// device survives a round trip through [`Config`].
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Config: u16 {
        /// Alert output mode: 0 comparator, 1 interrupt
        const ALERT_MODE = 1 << 0;
        /// Alert output polarity: 0 active-low, 1 active-high
        const ALERT_POLARITY = 1 << 1;
        /// Alert source: 0 all limits, 1 T-crit only
        const ALERT_SELECT = 1 << 2;
        /// Alert output enabled
        const ALERT_CONTROL = 1 << 3;
        /// Alert output currently asserted (read-only)
        const ALERT_STATUS = 1 << 4;
        /// Interrupt clear
        const INT_CLEAR = 1 << 5;
        /// T-upper/T-lower window lock
        const WINDOW_LOCK = 1 << 6;
        /// T-crit lock
        const CRITICAL_LOCK = 1 << 7;
        /// Low-power shutdown mode
        const SHUTDOWN = 1 << 8;
    }
}

impl Config {
    /// Any lock bit that makes the device reject configuration writes.
    pub const LOCKS: Config = Config::WINDOW_LOCK.union(Config::CRITICAL_LOCK);

    /// Bits as they go on the wire, with reserved and hysteresis bits cleared.
    #[inline]
    pub const fn wire_bits(self) -> u16 {
        self.bits() & CONFIG_REGISTER_MASK
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Config {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "Config({=u16:#b})", self.bits());
    }
}

/// Conversion resolution
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Resolution {
    /// 0.5 °C
    Half = 0b00,
    /// 0.25 °C
    Quarter = 0b01,
    /// 0.125 °C
    Eighth = 0b10,
    /// 0.0625 °C
    Sixteenth = 0b11,
}

impl Resolution {
    /// Decodes the two resolution bits of a register value. Higher bits are ignored.
    pub const fn from_register(reg: u16) -> Resolution {
        match reg & 0b11 {
            0b00 => Resolution::Half,
            0b01 => Resolution::Quarter,
            0b10 => Resolution::Eighth,
            _ => Resolution::Sixteenth,
        }
    }

    #[inline]
    pub const fn to_register(self) -> u8 {
        self as u8
    }

    /// Returns the typical conversion time in milliseconds
    pub const fn conversion_time(self) -> u16 {
        match self {
            Resolution::Half => 30,
            Resolution::Quarter => 65,
            Resolution::Eighth => 130,
            Resolution::Sixteenth => 250,
        }
    }
}

/// Alert output mode
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertMode {
    Comparator,
    Interrupt,
}

/// Alert output polarity
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertPolarity {
    ActiveLow,
    ActiveHigh,
}

/// Which limits drive the alert output
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertSelect {
    AllLimits,
    CriticalOnly,
}

/// Shutdown state stored in CONFIG
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShutdownState {
    Running,
    Shutdown,
}

bitflags! {
    /// Outcome of [`Device::apply_configuration`](crate::Device::apply_configuration)
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct ConfigStatus: u8 {
        /// A lock bit was set before writing, so the device probably ignored the write
        const LOCKED = 0b0001;
        /// CONFIG did not read back as written
        const CONFIG_MISMATCH = 0b0010;
        /// Resolution did not read back as written
        const RESOLUTION_MISMATCH = 0b0100;
    }
}

bitflags! {
    /// Outcome of [`Device::apply_temperature_configuration`](crate::Device::apply_temperature_configuration)
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct LimitStatus: u8 {
        const UPPER_MISMATCH = 0b0001;
        const LOWER_MISMATCH = 0b0010;
        const CRITICAL_MISMATCH = 0b0100;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigStatus {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "ConfigStatus({=u8:#b})", self.bits());
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LimitStatus {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "LimitStatus({=u8:#b})", self.bits());
    }
}
