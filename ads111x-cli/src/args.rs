//! Command-line mirrors of the driver's register field enums.
use ads111x::Measurement;
use ads111x::config::{
    ComparatorLatch, ComparatorMode, ComparatorPolarity, ComparatorQueue, Config, DataRate,
    FullScaleRange, Mode, Mux,
};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum VariantArg {
    /// Single input pair, fixed ±2.048V range, no ALERT/RDY pin.
    Ads1113,
    /// Single input pair.
    Ads1114,
    /// Four inputs.
    Ads1115,
}

impl From<VariantArg> for ads111x::Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Ads1113 => ads111x::Variant::Ads1113,
            VariantArg::Ads1114 => ads111x::Variant::Ads1114,
            VariantArg::Ads1115 => ads111x::Variant::Ads1115,
        }
    }
}

/// Input multiplexer setting.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum MuxArg {
    Ain0Ain1,
    Ain0Ain3,
    Ain1Ain3,
    Ain2Ain3,
    #[value(aliases = ["ain0"])]
    Ain0Gnd,
    #[value(aliases = ["ain1"])]
    Ain1Gnd,
    #[value(aliases = ["ain2"])]
    Ain2Gnd,
    #[value(aliases = ["ain3"])]
    Ain3Gnd,
}

impl From<MuxArg> for Mux {
    fn from(value: MuxArg) -> Self {
        match value {
            MuxArg::Ain0Ain1 => Mux::Ain0_Ain1,
            MuxArg::Ain0Ain3 => Mux::Ain0_Ain3,
            MuxArg::Ain1Ain3 => Mux::Ain1_Ain3,
            MuxArg::Ain2Ain3 => Mux::Ain2_Ain3,
            MuxArg::Ain0Gnd => Mux::Ain0_Gnd,
            MuxArg::Ain1Gnd => Mux::Ain1_Gnd,
            MuxArg::Ain2Gnd => Mux::Ain2_Gnd,
            MuxArg::Ain3Gnd => Mux::Ain3_Gnd,
        }
    }
}

/// PGA full-scale range, in volts.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum GainArg {
    #[value(name = "6.144")]
    V6_144,
    #[value(name = "4.096")]
    V4_096,
    #[value(name = "2.048")]
    V2_048,
    #[value(name = "1.024")]
    V1_024,
    #[value(name = "0.512")]
    V0_512,
    #[value(name = "0.256")]
    V0_256,
}

impl From<GainArg> for FullScaleRange {
    fn from(value: GainArg) -> Self {
        match value {
            GainArg::V6_144 => FullScaleRange::V6_144,
            GainArg::V4_096 => FullScaleRange::V4_096,
            GainArg::V2_048 => FullScaleRange::V2_048,
            GainArg::V1_024 => FullScaleRange::V1_024,
            GainArg::V0_512 => FullScaleRange::V0_512,
            GainArg::V0_256 => FullScaleRange::V0_256,
        }
    }
}

/// Data rate, in samples per second.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum RateArg {
    #[value(name = "8")]
    Sps8,
    #[value(name = "16")]
    Sps16,
    #[value(name = "32")]
    Sps32,
    #[value(name = "64")]
    Sps64,
    #[value(name = "128")]
    Sps128,
    #[value(name = "250")]
    Sps250,
    #[value(name = "475")]
    Sps475,
    #[value(name = "860")]
    Sps860,
}

impl From<RateArg> for DataRate {
    fn from(value: RateArg) -> Self {
        match value {
            RateArg::Sps8 => DataRate::Sps8,
            RateArg::Sps16 => DataRate::Sps16,
            RateArg::Sps32 => DataRate::Sps32,
            RateArg::Sps64 => DataRate::Sps64,
            RateArg::Sps128 => DataRate::Sps128,
            RateArg::Sps250 => DataRate::Sps250,
            RateArg::Sps475 => DataRate::Sps475,
            RateArg::Sps860 => DataRate::Sps860,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ModeArg {
    /// Continuous conversion.
    Continuous,
    /// Single-shot / power-down.
    #[value(aliases = ["power-down"])]
    SingleShot,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Continuous => Mode::Continuous,
            ModeArg::SingleShot => Mode::SingleShot,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ComparatorModeArg {
    Traditional,
    Window,
}

impl From<ComparatorModeArg> for ComparatorMode {
    fn from(value: ComparatorModeArg) -> Self {
        match value {
            ComparatorModeArg::Traditional => ComparatorMode::Traditional,
            ComparatorModeArg::Window => ComparatorMode::Window,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PolarityArg {
    #[value(aliases = ["low"])]
    ActiveLow,
    #[value(aliases = ["high"])]
    ActiveHigh,
}

impl From<PolarityArg> for ComparatorPolarity {
    fn from(value: PolarityArg) -> Self {
        match value {
            PolarityArg::ActiveLow => ComparatorPolarity::ActiveLow,
            PolarityArg::ActiveHigh => ComparatorPolarity::ActiveHigh,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum LatchArg {
    #[value(aliases = ["no"])]
    NonLatching,
    #[value(aliases = ["yes"])]
    Latching,
}

impl From<LatchArg> for ComparatorLatch {
    fn from(value: LatchArg) -> Self {
        match value {
            LatchArg::NonLatching => ComparatorLatch::NonLatching,
            LatchArg::Latching => ComparatorLatch::Latching,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum QueueArg {
    #[value(aliases = ["one"])]
    AssertAfterOne,
    #[value(aliases = ["two"])]
    AssertAfterTwo,
    #[value(aliases = ["four"])]
    AssertAfterFour,
    Disabled,
}

impl From<QueueArg> for ComparatorQueue {
    fn from(value: QueueArg) -> Self {
        match value {
            QueueArg::AssertAfterOne => ComparatorQueue::AssertAfterOne,
            QueueArg::AssertAfterTwo => ComparatorQueue::AssertAfterTwo,
            QueueArg::AssertAfterFour => ComparatorQueue::AssertAfterFour,
            QueueArg::Disabled => ComparatorQueue::Disabled,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct MeasurementArgs {
    /// Inputs to measure.
    #[arg(short, long, default_value = "ain0-ain1")]
    pub(crate) mux: MuxArg,
    /// Full-scale range, in volts.
    #[arg(short, long, default_value = "2.048")]
    pub(crate) gain: GainArg,
    /// Data rate, in samples per second.
    #[arg(short, long, default_value = "128")]
    pub(crate) rate: RateArg,
}

impl From<MeasurementArgs> for Measurement {
    fn from(value: MeasurementArgs) -> Self {
        Measurement {
            mux: value.mux.into(),
            gain: value.gain.into(),
            data_rate: value.rate.into(),
        }
    }
}

/// Change individual fields of the Config register.
///
/// The register is read, the given fields are replaced, and the result is
/// written back. The OS bit is always written as 0 so that no conversion is
/// started.
#[derive(Debug, Args)]
#[group(required = true, multiple = true)]
pub(crate) struct ConfigChanges {
    /// Input multiplexer.
    #[arg(short, long)]
    mux: Option<MuxArg>,
    /// Full-scale range, in volts.
    #[arg(short, long)]
    gain: Option<GainArg>,
    /// Operating mode.
    #[arg(long)]
    mode: Option<ModeArg>,
    /// Data rate, in samples per second.
    #[arg(short, long)]
    rate: Option<RateArg>,
    /// Comparator mode.
    #[arg(long)]
    comp_mode: Option<ComparatorModeArg>,
    /// ALERT/RDY pin polarity.
    #[arg(long)]
    comp_pol: Option<PolarityArg>,
    /// Comparator latching.
    #[arg(long)]
    comp_lat: Option<LatchArg>,
    /// Comparator queue, or disable the comparator.
    #[arg(long)]
    comp_que: Option<QueueArg>,
}

impl ConfigChanges {
    /// Apply the requested changes on top of `config`.
    pub(crate) fn merge_into(self, mut config: Config) -> Config {
        config = config.without_start();
        if let Some(mux) = self.mux {
            config = config.with_mux(mux.into());
        }
        if let Some(gain) = self.gain {
            config = config.with_gain(gain.into());
        }
        if let Some(mode) = self.mode {
            config = config.with_mode(mode.into());
        }
        if let Some(rate) = self.rate {
            config = config.with_data_rate(rate.into());
        }
        if let Some(comp_mode) = self.comp_mode {
            config = config.with_comparator_mode(comp_mode.into());
        }
        if let Some(comp_pol) = self.comp_pol {
            config = config.with_comparator_polarity(comp_pol.into());
        }
        if let Some(comp_lat) = self.comp_lat {
            config = config.with_comparator_latch(comp_lat.into());
        }
        if let Some(comp_que) = self.comp_que {
            config = config.with_comparator_queue(comp_que.into());
        }
        config
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ads111x::config::OperationalStatus;

    #[test]
    fn merge_replaces_named_fields_and_clears_start() {
        let current = Config::default()
            .with_data_rate(DataRate::Sps860)
            .with_comparator_latch(ComparatorLatch::Latching);
        assert_eq!(current.status, OperationalStatus::Idle);
        let changes = ConfigChanges {
            mux: Some(MuxArg::Ain2Gnd),
            gain: None,
            mode: None,
            rate: None,
            comp_mode: None,
            comp_pol: None,
            comp_lat: None,
            comp_que: Some(QueueArg::AssertAfterOne),
        };

        let merged = changes.merge_into(current);

        assert_eq!(merged.status, OperationalStatus::Converting);
        assert_eq!(merged.mux, Mux::Ain2_Gnd);
        assert_eq!(merged.comparator_queue, ComparatorQueue::AssertAfterOne);
        assert_eq!(merged.gain, current.gain);
        assert_eq!(merged.mode, current.mode);
        assert_eq!(merged.data_rate, DataRate::Sps860);
        assert_eq!(merged.comparator_latch, ComparatorLatch::Latching);
        assert_eq!(merged.to_bits() & 0x8000, 0);
    }
}
