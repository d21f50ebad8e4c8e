//! Config register fields and their encoding.
//!
//! Each field of the 16-bit Config register is a closed enum, so every [`Config`]
//! value encodes to a valid register value. Decoding a raw value checks each field
//! and fails with [`InvalidField`] for bit patterns with no corresponding variant.
//!
//! ## Datasheet
//!
//! See section 8.6.3 (Config register) of the ADS111x datasheet for the field
//! layout. The reset value is `0x8583`.

use std::time::Duration;

use bit_field::BitField;

use crate::error::InvalidField;

/// Operational status / single-shot conversion start (`OS`, bit 15).
///
/// When read, this reports whether the device is busy. When written, setting
/// [`OperationalStatus::Idle`] (1) starts a single conversion if the device is in
/// the power-down state; writing [`OperationalStatus::Converting`] (0) has no effect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OperationalStatus {
    /// Read: a conversion is in progress. Write: no effect.
    Converting,
    /// Read: no conversion in progress. Write: start a single conversion.
    #[default]
    Idle,
}

#[doc(hidden)]
impl From<bool> for OperationalStatus {
    fn from(bit: bool) -> Self {
        match bit {
            true => Self::Idle,
            false => Self::Converting,
        }
    }
}

#[doc(hidden)]
impl From<OperationalStatus> for bool {
    fn from(value: OperationalStatus) -> Self {
        matches!(value, OperationalStatus::Idle)
    }
}

/// Input multiplexer setting (`MUX[2:0]`, bits 14-12).
///
/// The first four options are differential measurements, the last four measure a
/// single input against GND. Only the ADS1115 has a multiplexer; the ADS1113 and
/// ADS1114 always measure AIN0-AIN1.
#[allow(non_camel_case_types)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mux {
    /// AINP = AIN0, AINN = AIN1 (reset default).
    #[default]
    Ain0_Ain1,
    /// AINP = AIN0, AINN = AIN3.
    Ain0_Ain3,
    /// AINP = AIN1, AINN = AIN3.
    Ain1_Ain3,
    /// AINP = AIN2, AINN = AIN3.
    Ain2_Ain3,
    /// AINP = AIN0, AINN = GND.
    Ain0_Gnd,
    /// AINP = AIN1, AINN = GND.
    Ain1_Gnd,
    /// AINP = AIN2, AINN = GND.
    Ain2_Gnd,
    /// AINP = AIN3, AINN = GND.
    Ain3_Gnd,
}

impl Mux {
    /// True for the four differential input pairs.
    pub fn is_differential(&self) -> bool {
        matches!(
            self,
            Mux::Ain0_Ain1 | Mux::Ain0_Ain3 | Mux::Ain1_Ain3 | Mux::Ain2_Ain3
        )
    }
}

impl TryFrom<u8> for Mux {
    type Error = InvalidField;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b000 => Ok(Self::Ain0_Ain1),
            0b001 => Ok(Self::Ain0_Ain3),
            0b010 => Ok(Self::Ain1_Ain3),
            0b011 => Ok(Self::Ain2_Ain3),
            0b100 => Ok(Self::Ain0_Gnd),
            0b101 => Ok(Self::Ain1_Gnd),
            0b110 => Ok(Self::Ain2_Gnd),
            0b111 => Ok(Self::Ain3_Gnd),
            value => Err(InvalidField { field: "MUX", value }),
        }
    }
}

#[doc(hidden)]
impl From<Mux> for u8 {
    fn from(value: Mux) -> Self {
        match value {
            Mux::Ain0_Ain1 => 0b000,
            Mux::Ain0_Ain3 => 0b001,
            Mux::Ain1_Ain3 => 0b010,
            Mux::Ain2_Ain3 => 0b011,
            Mux::Ain0_Gnd => 0b100,
            Mux::Ain1_Gnd => 0b101,
            Mux::Ain2_Gnd => 0b110,
            Mux::Ain3_Gnd => 0b111,
        }
    }
}

/// Full-scale range of the programmable gain amplifier (`PGA[2:0]`, bits 11-9).
///
/// The ADS1113 has no PGA and always operates at ±2.048V.
///
/// The device treats `0b110` and `0b111` as further aliases of ±0.256V. Those
/// patterns are rejected when decoding so that decoded values re-encode exactly.
#[allow(non_camel_case_types)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FullScaleRange {
    /// ±6.144V
    V6_144,
    /// ±4.096V
    V4_096,
    /// ±2.048V (reset default)
    #[default]
    V2_048,
    /// ±1.024V
    V1_024,
    /// ±0.512V
    V0_512,
    /// ±0.256V
    V0_256,
}

impl TryFrom<u8> for FullScaleRange {
    type Error = InvalidField;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0b000 => Ok(Self::V6_144),
            0b001 => Ok(Self::V4_096),
            0b010 => Ok(Self::V2_048),
            0b011 => Ok(Self::V1_024),
            0b100 => Ok(Self::V0_512),
            0b101 => Ok(Self::V0_256),
            value => Err(InvalidField { field: "PGA", value }),
        }
    }
}

#[doc(hidden)]
impl From<FullScaleRange> for u8 {
    fn from(value: FullScaleRange) -> Self {
        match value {
            FullScaleRange::V6_144 => 0b000,
            FullScaleRange::V4_096 => 0b001,
            FullScaleRange::V2_048 => 0b010,
            FullScaleRange::V1_024 => 0b011,
            FullScaleRange::V0_512 => 0b100,
            FullScaleRange::V0_256 => 0b101,
        }
    }
}

/// Device operating mode (`MODE`, bit 8).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Continuous-conversion mode.
    Continuous,
    /// Single-shot or power-down state (reset default).
    #[default]
    SingleShot,
}

#[doc(hidden)]
impl From<bool> for Mode {
    fn from(bit: bool) -> Self {
        match bit {
            true => Self::SingleShot,
            false => Self::Continuous,
        }
    }
}

#[doc(hidden)]
impl From<Mode> for bool {
    fn from(value: Mode) -> Self {
        matches!(value, Mode::SingleShot)
    }
}

/// Data rate in samples per second (`DR[2:0]`, bits 7-5).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataRate {
    /// 8 SPS
    Sps8,
    /// 16 SPS
    Sps16,
    /// 32 SPS
    Sps32,
    /// 64 SPS
    Sps64,
    /// 128 SPS (reset default)
    #[default]
    Sps128,
    /// 250 SPS
    Sps250,
    /// 475 SPS
    Sps475,
    /// 860 SPS
    Sps860,
}

impl DataRate {
    /// Nominal number of conversions per second.
    pub fn samples_per_second(&self) -> u32 {
        match self {
            DataRate::Sps8 => 8,
            DataRate::Sps16 => 16,
            DataRate::Sps32 => 32,
            DataRate::Sps64 => 64,
            DataRate::Sps128 => 128,
            DataRate::Sps250 => 250,
            DataRate::Sps475 => 475,
            DataRate::Sps860 => 860,
        }
    }

    /// Nominal time taken by one conversion, rounded up to the next nanosecond.
    ///
    /// The internal oscillator has a tolerance of ±10%, so the real period may be
    /// somewhat longer.
    pub fn period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000u64.div_ceil(u64::from(self.samples_per_second())))
    }
}

#[doc(hidden)]
impl From<u8> for DataRate {
    fn from(value: u8) -> Self {
        assert!(value <= 0b111, "Invalid bit pattern for data rate.");
        match value {
            0b000 => Self::Sps8,
            0b001 => Self::Sps16,
            0b010 => Self::Sps32,
            0b011 => Self::Sps64,
            0b100 => Self::Sps128,
            0b101 => Self::Sps250,
            0b110 => Self::Sps475,
            0b111 => Self::Sps860,
            _ => unreachable!("Precondition assert covers > 7."),
        }
    }
}

#[doc(hidden)]
impl From<DataRate> for u8 {
    fn from(value: DataRate) -> Self {
        match value {
            DataRate::Sps8 => 0b000,
            DataRate::Sps16 => 0b001,
            DataRate::Sps32 => 0b010,
            DataRate::Sps64 => 0b011,
            DataRate::Sps128 => 0b100,
            DataRate::Sps250 => 0b101,
            DataRate::Sps475 => 0b110,
            DataRate::Sps860 => 0b111,
        }
    }
}

/// Comparator mode (`COMP_MODE`, bit 4). ADS1114 and ADS1115 only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorMode {
    /// Traditional comparator with hysteresis (reset default).
    #[default]
    Traditional,
    /// Window comparator.
    Window,
}

/// Polarity of the ALERT/RDY pin (`COMP_POL`, bit 3). ADS1114 and ADS1115 only.
///
/// This also applies when the pin is used as a conversion-ready strobe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorPolarity {
    /// Active low (reset default).
    #[default]
    ActiveLow,
    /// Active high.
    ActiveHigh,
}

/// Latching comparator (`COMP_LAT`, bit 2). ADS1114 and ADS1115 only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorLatch {
    /// ALERT/RDY does not latch when asserted (reset default).
    #[default]
    NonLatching,
    /// ALERT/RDY stays asserted until the conversion data are read.
    Latching,
}

/// Comparator queue and disable (`COMP_QUE[1:0]`, bits 1-0). ADS1114 and ADS1115 only.
///
/// Any value other than [`ComparatorQueue::Disabled`] keeps the ALERT/RDY pin
/// enabled, which is required for it to act as a conversion-ready signal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorQueue {
    /// Assert after one conversion.
    AssertAfterOne,
    /// Assert after two conversions.
    AssertAfterTwo,
    /// Assert after four conversions.
    AssertAfterFour,
    /// Disable the comparator and set ALERT/RDY to high impedance (reset default).
    #[default]
    Disabled,
}

#[doc(hidden)]
impl From<u8> for ComparatorQueue {
    fn from(value: u8) -> Self {
        assert!(value <= 0b11, "Invalid bit pattern for comparator queue.");
        match value {
            0b00 => Self::AssertAfterOne,
            0b01 => Self::AssertAfterTwo,
            0b10 => Self::AssertAfterFour,
            0b11 => Self::Disabled,
            _ => unreachable!("Precondition assert covers > 3."),
        }
    }
}

#[doc(hidden)]
impl From<ComparatorQueue> for u8 {
    fn from(value: ComparatorQueue) -> Self {
        match value {
            ComparatorQueue::AssertAfterOne => 0b00,
            ComparatorQueue::AssertAfterTwo => 0b01,
            ComparatorQueue::AssertAfterFour => 0b10,
            ComparatorQueue::Disabled => 0b11,
        }
    }
}

/// Decoded contents of the Config register.
///
/// [`Config::default`] is the device's power-on reset state (`0x8583`).
///
/// Use the `with_*` methods to change individual fields:
///
/// ```rust
/// # use ads111x::config::{Config, DataRate, FullScaleRange, Mode, Mux};
/// let config = Config::default()
///     .with_mux(Mux::Ain2_Gnd)
///     .with_gain(FullScaleRange::V4_096)
///     .with_mode(Mode::Continuous)
///     .with_data_rate(DataRate::Sps860);
/// assert_eq!(Config::from_bits(config.to_bits()), Ok(config));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Operational status or single-shot start (bit 15).
    pub status: OperationalStatus,
    /// Input multiplexer (bits 14-12).
    pub mux: Mux,
    /// PGA full-scale range (bits 11-9).
    pub gain: FullScaleRange,
    /// Operating mode (bit 8).
    pub mode: Mode,
    /// Data rate (bits 7-5).
    pub data_rate: DataRate,
    /// Comparator mode (bit 4).
    pub comparator_mode: ComparatorMode,
    /// ALERT/RDY polarity (bit 3).
    pub comparator_polarity: ComparatorPolarity,
    /// Comparator latching (bit 2).
    pub comparator_latch: ComparatorLatch,
    /// Comparator queue and disable (bits 1-0).
    pub comparator_queue: ComparatorQueue,
}

impl Config {
    /// Encode into the 16-bit register value.
    pub fn to_bits(&self) -> u16 {
        let mut bits = 0u16;
        bits.set_bit(15, self.status.into());
        bits.set_bits(12..=14, u8::from(self.mux).into());
        bits.set_bits(9..=11, u8::from(self.gain).into());
        bits.set_bit(8, self.mode.into());
        bits.set_bits(5..=7, u8::from(self.data_rate).into());
        bits.set_bit(4, self.comparator_mode == ComparatorMode::Window);
        bits.set_bit(3, self.comparator_polarity == ComparatorPolarity::ActiveHigh);
        bits.set_bit(2, self.comparator_latch == ComparatorLatch::Latching);
        bits.set_bits(0..=1, u8::from(self.comparator_queue).into());
        bits
    }

    /// Decode a 16-bit register value.
    ///
    /// # Errors
    ///
    /// [`InvalidField`] if the PGA bits hold one of the aliased ±0.256V patterns.
    pub fn from_bits(bits: u16) -> Result<Self, InvalidField> {
        Ok(Self {
            status: bits.get_bit(15).into(),
            mux: Mux::try_from(bits.get_bits(12..=14) as u8)?,
            gain: FullScaleRange::try_from(bits.get_bits(9..=11) as u8)?,
            mode: bits.get_bit(8).into(),
            data_rate: DataRate::from(bits.get_bits(5..=7) as u8),
            comparator_mode: match bits.get_bit(4) {
                true => ComparatorMode::Window,
                false => ComparatorMode::Traditional,
            },
            comparator_polarity: match bits.get_bit(3) {
                true => ComparatorPolarity::ActiveHigh,
                false => ComparatorPolarity::ActiveLow,
            },
            comparator_latch: match bits.get_bit(2) {
                true => ComparatorLatch::Latching,
                false => ComparatorLatch::NonLatching,
            },
            comparator_queue: ComparatorQueue::from(bits.get_bits(0..=1) as u8),
        })
    }

    /// The same settings with the `OS` bit cleared, so writing them starts nothing.
    pub fn without_start(self) -> Self {
        self.with_status(OperationalStatus::Converting)
    }

    /// Set the operational status bit.
    pub fn with_status(mut self, status: OperationalStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the input multiplexer.
    pub fn with_mux(mut self, mux: Mux) -> Self {
        self.mux = mux;
        self
    }

    /// Set the PGA full-scale range.
    pub fn with_gain(mut self, gain: FullScaleRange) -> Self {
        self.gain = gain;
        self
    }

    /// Set the operating mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the data rate.
    pub fn with_data_rate(mut self, data_rate: DataRate) -> Self {
        self.data_rate = data_rate;
        self
    }

    /// Set the comparator mode.
    pub fn with_comparator_mode(mut self, mode: ComparatorMode) -> Self {
        self.comparator_mode = mode;
        self
    }

    /// Set the ALERT/RDY pin polarity.
    pub fn with_comparator_polarity(mut self, polarity: ComparatorPolarity) -> Self {
        self.comparator_polarity = polarity;
        self
    }

    /// Set comparator latching.
    pub fn with_comparator_latch(mut self, latch: ComparatorLatch) -> Self {
        self.comparator_latch = latch;
        self
    }

    /// Set the comparator queue.
    pub fn with_comparator_queue(mut self, queue: ComparatorQueue) -> Self {
        self.comparator_queue = queue;
        self
    }
}

#[doc(hidden)]
impl From<Config> for u16 {
    fn from(value: Config) -> Self {
        value.to_bits()
    }
}

impl TryFrom<u16> for Config {
    type Error = InvalidField;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_bits(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reset_value() {
        assert_eq!(Config::default().to_bits(), 0x8583);
        assert_eq!(Config::default().without_start().to_bits(), 0b00000101_10000011);
        assert_eq!(Config::from_bits(0x8583), Ok(Config::default()));
    }

    /// Every register value either decodes and re-encodes to the same bits, or
    /// carries one of the two aliased PGA patterns.
    #[test]
    fn decode_encode_is_exact() {
        for bits in 0..=u16::MAX {
            match Config::from_bits(bits) {
                Ok(config) => assert_eq!(config.to_bits(), bits, "{config:?}"),
                Err(e) => {
                    assert_eq!(e.field, "PGA");
                    assert!(matches!(bits.get_bits(9..=11), 0b110 | 0b111));
                }
            }
        }
    }

    #[test]
    fn field_positions() {
        let config = Config::default()
            .without_start()
            .with_mux(Mux::Ain3_Gnd)
            .with_gain(FullScaleRange::V6_144)
            .with_mode(Mode::Continuous)
            .with_data_rate(DataRate::Sps8)
            .with_comparator_mode(ComparatorMode::Window)
            .with_comparator_polarity(ComparatorPolarity::ActiveHigh)
            .with_comparator_latch(ComparatorLatch::Latching)
            .with_comparator_queue(ComparatorQueue::AssertAfterOne);
        assert_eq!(config.to_bits(), 0b0_111_000_0_000_1_1_1_00);
    }

    #[test]
    fn raw_fields_out_of_domain() {
        assert_eq!(
            Mux::try_from(0b1000),
            Err(InvalidField { field: "MUX", value: 0b1000 })
        );
        assert_eq!(
            FullScaleRange::try_from(0b110),
            Err(InvalidField { field: "PGA", value: 0b110 })
        );
        assert_eq!(FullScaleRange::try_from(0b101), Ok(FullScaleRange::V0_256));
    }

    #[test]
    fn data_rate_periods() {
        assert_eq!(DataRate::Sps8.period(), Duration::from_millis(125));
        assert_eq!(DataRate::Sps128.period(), Duration::from_nanos(7_812_500));
        // 1/860 s rounded up.
        assert_eq!(DataRate::Sps860.period(), Duration::from_nanos(1_162_791));
    }
}
