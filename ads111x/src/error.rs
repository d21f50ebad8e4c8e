use crate::Variant;

/// Wrapper for problems when configuring or reading the ADS111x.
///
/// `E` is the error type of the underlying [`embedded_hal::i2c::I2c`] bus.
#[derive(Debug)]
pub enum Error<E> {
    /// A raw bit pattern does not correspond to any value of a register field.
    ///
    /// Field enums make this unreachable for well-typed configurations. It can only
    /// occur when decoding raw values, for example an aliased PGA setting written to
    /// the device by another program.
    InvalidField(InvalidField),
    /// The requested setting is not available on this device variant.
    ///
    /// This is checked before any bus traffic takes place.
    Unsupported {
        /// Device variant in use.
        variant: Variant,
        /// Name of the missing feature.
        feature: &'static str,
    },
    /// The I2C transfer failed (NACK, arbitration loss, device absent).
    ///
    /// The state of the device after a failed write is unknown.
    Bus(E),
    /// A conversion did not complete in time.
    ///
    /// Raised by single-shot status polling and by missing conversion-ready edges.
    /// Unlike [`Error::Bus`], the caller may reasonably retry.
    Timeout,
    /// The ready-signal source failed while waiting for an edge.
    ReadySignal(Box<dyn std::error::Error + Send + Sync>),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidField(invalid) => write!(f, "{invalid}"),
            Error::Unsupported { variant, feature } => {
                write!(f, "{variant} does not support {feature}")
            }
            Error::Bus(e) => write!(f, "I2C bus error: {e:?}"),
            Error::Timeout => write!(f, "timed out waiting for conversion"),
            Error::ReadySignal(e) => write!(f, "ready signal failed: {e}"),
        }
    }
}

impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

#[doc(hidden)]
impl<E> From<InvalidField> for Error<E> {
    fn from(value: InvalidField) -> Self {
        Self::InvalidField(value)
    }
}

/// A raw value that is outside the domain of a config register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidField {
    /// Datasheet name of the field (eg `PGA`).
    pub field: &'static str,
    /// The offending raw value, right-aligned.
    pub value: u8,
}

impl core::fmt::Display for InvalidField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "invalid {} field value {:#b}", self.field, self.value)
    }
}

impl std::error::Error for InvalidField {}
