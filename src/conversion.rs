//! Datasheet conversions from the sensor's 16-bit output to physical units.

/// Clears the two status bits at the bottom of every measurement code.
pub const STATUS_MASK: u16 = 0xFFFC;

const CODE_SCALE: f64 = 65536.0;

/// Big-endian code with the status bits cleared.
#[inline]
pub fn masked_code(raw: [u8; 2]) -> u16 {
    u16::from_be_bytes(raw) & STATUS_MASK
}

pub fn celsius(code: u16) -> f64 {
    -46.85 + (175.72 * code as f64 / CODE_SCALE)
}

pub fn fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Relative humidity in percent. Codes near either end of the range land
/// slightly outside 0..=100 and are returned as-is.
pub fn relative_humidity(code: u16) -> f64 {
    (125.0 * code as f64 / CODE_SCALE) - 6.0
}
