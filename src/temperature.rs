//! Conversion between raw MCP9808 register values and temperatures.
//!
//! The ambient and limit registers hold a 13-bit two's-complement number in
//! units of 1/16 °C. Bit 12 is the sign, bits 11..4 are whole degrees and
//! bits 3..0 are the fraction. The top three bits of the register carry
//! alert flags on TA and are ignored here.

use fixed::types::I28F4;

use crate::registers::{LIMIT_REGISTER_MASK, TEMPERATURE_SIGN_BIT};

/// I28F4 is a fixed point number with 4 fractional bits and 28 integer bits.
/// This gives us a precision of 0.0625 degrees Celsius, which is exactly the sensor's native step.
pub type Temperature = I28F4;

/// Decodes a raw temperature register value into 1/16 °C units.
///
/// Bits 12..0 are sign-extended into a full `i16`; the alert flags in bits
/// 15..13 never leak into the result.
#[inline]
pub const fn decode_raw_to_sixteenths(raw: u16) -> i16 {
    if raw & TEMPERATURE_SIGN_BIT != 0 {
        (raw | 0xF000) as i16
    } else {
        (raw & 0x0FFF) as i16
    }
}

/// Decodes a raw temperature register value into degrees Celsius.
#[inline]
pub fn decode_raw_to_celsius(raw: u16) -> f32 {
    f32::from(decode_raw_to_sixteenths(raw)) / 16.0
}

/// Decodes a raw temperature register value into a fixed-point [`Temperature`].
#[inline]
pub fn decode_raw(raw: u16) -> Temperature {
    Temperature::from_bits(i32::from(decode_raw_to_sixteenths(raw)))
}

/// Encodes a whole-degree Celsius value for the T-upper, T-lower and T-crit registers.
///
/// Limit registers only hold quarter degrees, so the two lowest fraction bits
/// are always cleared. Fractional limits must be rounded by the caller.
#[inline]
pub const fn encode_celsius_to_limit_register(temp_c: i8) -> u16 {
    let shifted = (temp_c as i16 as u16) << 4;
    let signed = if temp_c < 0 {
        shifted | TEMPERATURE_SIGN_BIT
    } else {
        shifted & !TEMPERATURE_SIGN_BIT
    };
    signed & LIMIT_REGISTER_MASK
}
