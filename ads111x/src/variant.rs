use crate::config::{ComparatorQueue, Config, FullScaleRange, Mux};
use crate::error::Error;
use crate::scale::Resolution;

/// Member of the ADS111x family.
///
/// The three parts share a register map but not a feature set:
///
/// | Part    | Multiplexer | PGA   | Comparator / ALERT/RDY |
/// | ---     | ---         | ---   | ---                    |
/// | ADS1113 | AIN0-AIN1   | fixed ±2.048V | no             |
/// | ADS1114 | AIN0-AIN1   | yes   | yes                    |
/// | ADS1115 | 8 inputs    | yes   | yes                    |
///
/// ## Datasheet
///
/// See table 3-1 (Device Comparison) of the ADS111x datasheet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// ADS1113, without multiplexer, PGA or comparator.
    Ads1113,
    /// ADS1114, without multiplexer.
    Ads1114,
    /// ADS1115, full feature set.
    #[default]
    Ads1115,
}

impl Variant {
    /// Conversion resolution.
    pub fn resolution(&self) -> Resolution {
        Resolution::SIXTEEN_BIT
    }

    /// True if the part can select the given inputs.
    pub fn supports_mux(&self, mux: Mux) -> bool {
        matches!(self, Variant::Ads1115) || mux == Mux::Ain0_Ain1
    }

    /// True if the part can use the given full-scale range.
    pub fn supports_gain(&self, gain: FullScaleRange) -> bool {
        !matches!(self, Variant::Ads1113) || gain == FullScaleRange::V2_048
    }

    /// True if the part has a comparator and an ALERT/RDY pin.
    pub fn has_comparator(&self) -> bool {
        !matches!(self, Variant::Ads1113)
    }

    /// Check a configuration only uses features this part has.
    pub(crate) fn check_config<E>(&self, config: &Config) -> Result<(), Error<E>> {
        if !self.supports_mux(config.mux) {
            return Err(self.unsupported("input multiplexer"));
        }
        if !self.supports_gain(config.gain) {
            return Err(self.unsupported("programmable gain"));
        }
        if config.comparator_queue != ComparatorQueue::Disabled {
            self.require_comparator()?;
        }
        Ok(())
    }

    pub(crate) fn require_comparator<E>(&self) -> Result<(), Error<E>> {
        match self.has_comparator() {
            true => Ok(()),
            false => Err(self.unsupported("comparator and ALERT/RDY pin")),
        }
    }

    fn unsupported<E>(&self, feature: &'static str) -> Error<E> {
        Error::Unsupported {
            variant: *self,
            feature,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Variant::Ads1113 => "ADS1113",
            Variant::Ads1114 => "ADS1114",
            Variant::Ads1115 => "ADS1115",
        };
        write!(f, "{name}")
    }
}
