use crate::registers::Register;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error<E> {
    /// The bus transport failed (no acknowledge, timeout, arbitration loss, ...)
    Bus(E),

    /// A register did not read back the value that was just written to it. This is expected when
    /// the register is locked, or when a reserved bit was part of the written value.
    Mismatch {
        register: Register,
        expected: u16,
        actual: u16,
    },

    /// The manufacturer ID register does not hold the MCP9808 value
    ManufacturerIdMismatch,

    /// The device ID register holds a value below the MCP9808 range
    DeviceIdMismatch,
}

impl<E> Error<E> {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::Bus(_) => "Bus error",
            Error::Mismatch { .. } => "Register read-back mismatch",
            Error::ManufacturerIdMismatch => "Manufacturer ID mismatch",
            Error::DeviceIdMismatch => "Device ID mismatch",
        }
    }
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::Bus(value)
    }
}
