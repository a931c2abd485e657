/// A 7-bit I²C address of an MCP9808. The upper four bits are fixed at `0b0011`, the lower three
/// are strapped with the A2, A1 and A0 pins, so up to eight sensors can share a bus.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Address(pub u8);

impl Address {
    /// Address with A2..A0 all tied to ground
    pub const DEFAULT: Address = Address(0x18);

    /// Builds the address from the logic levels on the A2, A1 and A0 pins.
    pub const fn from_pins(a2: bool, a1: bool, a0: bool) -> Self {
        Self(Self::DEFAULT.0 | (a2 as u8) << 2 | (a1 as u8) << 1 | a0 as u8)
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(f, "{:#04X}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Address {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{=u8:#X}", self.0);
    }
}
