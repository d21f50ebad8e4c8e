//! Threshold registers and the conversion-ready pin.
use embedded_hal::i2c::I2c;

use super::Ads111x;
use crate::Error;
use crate::registers::Register;

impl<I2C: I2c> Ads111x<I2C> {
    /// Read the comparator thresholds as raw codes, `(Lo_thresh, Hi_thresh)`.
    ///
    /// The codes share the scale of conversion results at the current gain.
    pub fn read_thresholds(&mut self) -> Result<(i16, i16), Error<I2C::Error>> {
        self.variant.require_comparator()?;
        let lo = self.read_register(Register::LoThresh)?;
        let hi = self.read_register(Register::HiThresh)?;
        Ok((lo as i16, hi as i16))
    }

    /// Write the comparator thresholds as raw codes.
    pub fn write_thresholds(&mut self, lo: i16, hi: i16) -> Result<(), Error<I2C::Error>> {
        self.variant.require_comparator()?;
        self.write_register(Register::LoThresh, lo as u16)?;
        self.write_register(Register::HiThresh, hi as u16)
    }

    /// Turn the ALERT/RDY pin into a conversion-ready signal.
    ///
    /// This sets the most-significant bit of Hi_thresh and clears that of
    /// Lo_thresh. The pin then pulses once per conversion, provided the comparator
    /// queue in the Config register is not disabled. `COMP_POL` still selects the
    /// pulse polarity; `COMP_MODE` and `COMP_LAT` have no effect.
    ///
    /// ## Datasheet
    ///
    /// See section 8.3.8 (Conversion Ready Pin).
    pub fn enable_ready_thresholds(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_thresholds(0x0000, i16::MIN)
    }
}

#[cfg(test)]
mod test {
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    use crate::{Ads111x, DEFAULT_ADDRESS, Error, Variant};

    #[test]
    fn ready_thresholds() {
        let expectations = [
            Transaction::write(DEFAULT_ADDRESS, vec![0x02, 0x00, 0x00]),
            Transaction::write(DEFAULT_ADDRESS, vec![0x03, 0x80, 0x00]),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1114);
        device.enable_ready_thresholds().unwrap();
        device.release().done();
    }

    #[test]
    fn thresholds_are_signed() {
        let expectations = [
            Transaction::write_read(DEFAULT_ADDRESS, vec![0x02], vec![0x80, 0x00]),
            Transaction::write_read(DEFAULT_ADDRESS, vec![0x03], vec![0x7F, 0xFF]),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        assert_eq!(device.read_thresholds().unwrap(), (i16::MIN, i16::MAX));
        device.release().done();
    }

    #[test]
    fn ads1113_has_no_thresholds() {
        let mut device = Ads111x::new(Mock::new(&[]), DEFAULT_ADDRESS, Variant::Ads1113);
        assert!(matches!(
            device.read_thresholds(),
            Err(Error::Unsupported { .. })
        ));
        device.release().done();
    }
}
