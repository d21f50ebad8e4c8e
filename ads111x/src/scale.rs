//! Conversion from raw codes to volts.

use crate::config::FullScaleRange;

impl FullScaleRange {
    /// Positive full-scale voltage.
    ///
    /// The analog input range is limited by the supply; the full-scale range only
    /// sets the scale of the output code.
    pub fn volts(&self) -> f32 {
        match self {
            FullScaleRange::V6_144 => 6.144,
            FullScaleRange::V4_096 => 4.096,
            FullScaleRange::V2_048 => 2.048,
            FullScaleRange::V1_024 => 1.024,
            FullScaleRange::V0_512 => 0.512,
            FullScaleRange::V0_256 => 0.256,
        }
    }

    /// Size of one code step of a 16-bit conversion, in microvolts.
    ///
    /// ## Datasheet
    ///
    /// See table 8-3 (Full-Scale Range and Corresponding LSB Size).
    pub fn lsb_microvolts(&self) -> f32 {
        match self {
            FullScaleRange::V6_144 => 187.5,
            FullScaleRange::V4_096 => 125.0,
            FullScaleRange::V2_048 => 62.5,
            FullScaleRange::V1_024 => 31.25,
            FullScaleRange::V0_512 => 15.625,
            FullScaleRange::V0_256 => 7.8125,
        }
    }
}

/// Number of bits in a conversion result, sign bit included.
///
/// Every ADS111x variant is 16-bit. The resolution is carried as a parameter so
/// that scaling does not assume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution(u8);

impl Resolution {
    /// 16-bit results, used by the ADS1113, ADS1114 and ADS1115.
    pub const SIXTEEN_BIT: Self = Self(16);
    /// 12-bit results, as produced by the ADS101x parts.
    pub const TWELVE_BIT: Self = Self(12);

    /// Number of bits.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Magnitude of the most negative code, the code value equal to full scale.
    pub fn full_scale_code(&self) -> u16 {
        1 << (self.0 - 1)
    }

    /// Scale a right-aligned code to volts.
    pub fn to_voltage(&self, code: i16, gain: FullScaleRange) -> f32 {
        f32::from(code) * gain.volts() / f32::from(self.full_scale_code())
    }
}

/// Scale a 16-bit conversion code to volts.
///
/// The result covers `-full_scale..full_scale`, with the most negative code mapping
/// exactly onto negative full scale.
pub fn to_voltage(code: i16, gain: FullScaleRange) -> f32 {
    Resolution::SIXTEEN_BIT.to_voltage(code, gain)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn half_scale() {
        assert_eq!(to_voltage(16384, FullScaleRange::V2_048), 1.024);
        assert_eq!(to_voltage(-16384, FullScaleRange::V2_048), -1.024);
    }

    #[test]
    fn extremes_do_not_overflow() {
        assert_eq!(to_voltage(i16::MIN, FullScaleRange::V0_256), -0.256);
        let max = to_voltage(i16::MAX, FullScaleRange::V4_096);
        assert!(max < 4.096 && max > 4.0958);
    }

    #[test]
    fn lsb_table_matches_scaling() {
        for gain in [
            FullScaleRange::V6_144,
            FullScaleRange::V4_096,
            FullScaleRange::V2_048,
            FullScaleRange::V1_024,
            FullScaleRange::V0_512,
            FullScaleRange::V0_256,
        ] {
            let one_code = to_voltage(1, gain) * 1e6;
            assert!((one_code - gain.lsb_microvolts()).abs() < 1e-3, "{gain:?}");
        }
    }

    #[test]
    fn full_scale_codes() {
        assert_eq!(Resolution::SIXTEEN_BIT.full_scale_code(), 32768);
        assert_eq!(Resolution::TWELVE_BIT.full_scale_code(), 2048);
    }
}
