//! Register pointers and Conversion register decoding.

use crate::config::FullScaleRange;
use crate::scale::Resolution;

/// Register addressed by the pointer byte at the start of each I2C write.
///
/// ## Datasheet
///
/// See section 8.6 (Register Map).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Latest conversion result, read-only.
    Conversion,
    /// Device configuration.
    Config,
    /// Comparator low threshold.
    LoThresh,
    /// Comparator high threshold.
    HiThresh,
}

impl Register {
    /// Value of the address pointer register for this register.
    pub fn pointer(&self) -> u8 {
        match self {
            Register::Conversion => 0x00,
            Register::Config => 0x01,
            Register::LoThresh => 0x02,
            Register::HiThresh => 0x03,
        }
    }
}

/// Interpret a raw Conversion register value.
///
/// The register holds a left-aligned two's-complement code. It is sign-extended,
/// shifted down to the device's resolution, and scaled by the full-scale range the
/// conversion was made with. Returns the code and the voltage.
///
/// ```rust
/// # use ads111x::config::FullScaleRange;
/// # use ads111x::registers::decode_conversion;
/// # use ads111x::scale::Resolution;
/// let (code, volts) = decode_conversion(0x4000, FullScaleRange::V2_048, Resolution::SIXTEEN_BIT);
/// assert_eq!(code, 16384);
/// assert_eq!(volts, 1.024);
/// ```
pub fn decode_conversion(
    raw: u16,
    gain: FullScaleRange,
    resolution: Resolution,
) -> (i16, f32) {
    let code = i16::from_be_bytes(raw.to_be_bytes()) >> (16 - resolution.bits());
    (code, resolution.to_voltage(code, gain))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn twos_complement_extremes() {
        let r = Resolution::SIXTEEN_BIT;
        let g = FullScaleRange::V2_048;
        assert_eq!(decode_conversion(0x7FFF, g, r).0, 32767);
        assert_eq!(decode_conversion(0x8000, g, r).0, -32768);
        assert_eq!(decode_conversion(0xFFFF, g, r).0, -1);
        assert_eq!(decode_conversion(0x0000, g, r).0, 0);
    }

    #[test]
    fn negative_full_scale_is_exact() {
        let (_, volts) = decode_conversion(0x8000, FullScaleRange::V6_144, Resolution::SIXTEEN_BIT);
        assert_eq!(volts, -6.144);
    }

    #[test]
    fn twelve_bit_codes_are_right_aligned() {
        // A 12-bit part reports its code in the top 12 bits.
        let (code, volts) = decode_conversion(0x7FF0, FullScaleRange::V2_048, Resolution::TWELVE_BIT);
        assert_eq!(code, 2047);
        assert!((volts - 2.047).abs() < 1e-6);
        let (code, _) = decode_conversion(0x8000, FullScaleRange::V2_048, Resolution::TWELVE_BIT);
        assert_eq!(code, -2048);
    }
}
