use bit_field::BitField;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::Variant;
use crate::acquisition::Sample;
use crate::config::{Config, FullScaleRange, Mode, OperationalStatus};
use crate::error::Error;
use crate::registers::Register;

mod thresholds;

/// I2C address with the ADDR pin connected to GND.
///
/// ADDR connected to VDD, SDA or SCL gives `0x49`, `0x4A` or `0x4B` respectively.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x48;

/// Driver for one ADS1113, ADS1114 or ADS1115.
///
/// # Quick start
///
/// Create the driver with any bus implementing the blocking [`I2c`] trait from
/// [`embedded_hal`], then use one of the acquisition methods:
///
/// - [`Ads111x::single_shot`] for one triggered conversion,
/// - [`Ads111x::continuous`] to free-run and read on a timer,
/// - [`Ads111x::continuous_synced`] to free-run and read on each ALERT/RDY pulse.
///
/// The register-level methods below are available for inspection and for building
/// other sequences.
///
/// # Configuration cache
///
/// The driver remembers the last configuration it wrote successfully, so
/// [`Ads111x::apply_config`] can skip a write that would change nothing. The cache
/// starts empty, and is cleared whenever a write fails because the device state is
/// then unknown.
#[derive(Debug)]
pub struct Ads111x<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
    variant: Variant,
    /// Last successfully written settings, `OS` bit cleared.
    applied: Option<Config>,
}

impl<I2C: I2c> Ads111x<I2C> {
    /// Create a driver for the device at `address` on the given bus.
    ///
    /// No bus traffic takes place until a method is called.
    pub fn new(i2c: I2C, address: SevenBitAddress, variant: Variant) -> Self {
        Self {
            i2c,
            address,
            variant,
            applied: None,
        }
    }

    /// Give back the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// The 7-bit address of the device.
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// The device variant given at construction.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The last configuration written by this driver, if known.
    ///
    /// The `OS` bit is always cleared in the returned value.
    pub fn applied_config(&self) -> Option<Config> {
        self.applied
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Register access
    ////////////////////////////////////////////////////////////////////////////////

    pub(crate) fn write_register(
        &mut self,
        register: Register,
        value: u16,
    ) -> Result<(), Error<I2C::Error>> {
        let [msb, lsb] = value.to_be_bytes();
        log::debug!(
            "{:#04x}: write {register:?} <- {value:#06x}",
            self.address
        );
        self.i2c
            .write(self.address, &[register.pointer(), msb, lsb])
            .map_err(Error::Bus)
    }

    pub(crate) fn read_register(&mut self, register: Register) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register.pointer()], &mut buf)
            .map_err(Error::Bus)?;
        let value = u16::from_be_bytes(buf);
        log::debug!("{:#04x}: read {register:?} -> {value:#06x}", self.address);
        Ok(value)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Config register
    ////////////////////////////////////////////////////////////////////////////////

    /// Write the Config register.
    ///
    /// The cached configuration is updated only if the write succeeds. Writing with
    /// [`OperationalStatus::Idle`] while the device is powered down starts a
    /// conversion; prefer [`Ads111x::start_single_shot`] for that.
    ///
    /// # Errors
    ///
    /// - [`Error::Unsupported`] if the configuration uses a feature the variant
    ///   lacks. Nothing is written.
    /// - [`Error::Bus`] if the transfer fails. The cache is cleared and the write is
    ///   not retried.
    pub fn write_config(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        self.variant.check_config(&config)?;
        self.applied = None;
        self.write_register(Register::Config, config.to_bits())?;
        self.applied = Some(config.without_start());
        Ok(())
    }

    /// Write the Config register unless the cache shows it already holds `config`.
    ///
    /// The `OS` bit is cleared before comparing and writing, so this never starts a
    /// single-shot conversion. Returns `true` if a write took place.
    pub fn apply_config(&mut self, config: Config) -> Result<bool, Error<I2C::Error>> {
        let config = config.without_start();
        if self.applied == Some(config) {
            log::trace!("{:#04x}: config unchanged, skipping write", self.address);
            return Ok(false);
        }
        self.write_config(config)?;
        Ok(true)
    }

    /// Read and decode the Config register.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidField`] if the register holds an aliased PGA setting that was
    /// not written by this driver.
    pub fn read_config(&mut self) -> Result<Config, Error<I2C::Error>> {
        let bits = self.read_register(Register::Config)?;
        Ok(Config::from_bits(bits)?)
    }

    /// Start one conversion with the given settings.
    ///
    /// The configuration is always written with the `OS` bit set and single-shot
    /// mode selected, even if the cache matches, because the device clears `OS`
    /// itself once the conversion begins.
    pub fn start_single_shot(&mut self, config: Config) -> Result<(), Error<I2C::Error>> {
        let config = config
            .with_mode(Mode::SingleShot)
            .with_status(OperationalStatus::Idle);
        self.write_config(config)
    }

    /// True if the device reports a conversion in progress.
    ///
    /// Only the `OS` bit is inspected, so this works whatever the other fields hold.
    pub fn is_converting(&mut self) -> Result<bool, Error<I2C::Error>> {
        Ok(!self.read_register(Register::Config)?.get_bit(15))
    }

    /// Put the device into the power-down state.
    ///
    /// Other settings are kept from the cache, or the reset defaults if unknown. A
    /// conversion in progress completes before the device powers down.
    pub fn power_down(&mut self) -> Result<(), Error<I2C::Error>> {
        let config = self
            .applied
            .unwrap_or_default()
            .without_start()
            .with_mode(Mode::SingleShot);
        self.write_config(config)
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Conversion register
    ////////////////////////////////////////////////////////////////////////////////

    /// Read the raw Conversion register.
    ///
    /// The value is not interpreted, as that requires the gain the conversion was
    /// made with. See [`decode_conversion`].
    ///
    /// [`decode_conversion`]: crate::registers::decode_conversion
    pub fn read_conversion(&mut self) -> Result<u16, Error<I2C::Error>> {
        self.read_register(Register::Conversion)
    }

    /// Read the Conversion register and scale it.
    pub(crate) fn read_sample(&mut self, gain: FullScaleRange) -> Result<Sample, Error<I2C::Error>> {
        let raw = self.read_conversion()?;
        Ok(Sample::from_raw(raw, gain, self.variant.resolution()))
    }
}
