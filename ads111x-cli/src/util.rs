/// Parse a 7-bit I2C address given in hexadecimal, with or without `0x`.
pub(crate) fn address_from_hex(value: &str) -> Result<u8, String> {
    let s = if value.to_ascii_lowercase().starts_with("0x") {
        &value[2..]
    } else {
        value
    };
    let address = u8::from_str_radix(s, 16).map_err(|e| e.to_string())?;
    if address > 0x7F {
        return Err(format!("{address:#04X} is not a 7-bit address"));
    }
    Ok(address)
}

#[cfg(test)]
mod test {
    use super::address_from_hex;

    #[test]
    fn hex_with_and_without_prefix() {
        assert_eq!(address_from_hex("0x48"), Ok(0x48));
        assert_eq!(address_from_hex("0X4b"), Ok(0x4B));
        assert_eq!(address_from_hex("49"), Ok(0x49));
        assert!(address_from_hex("0x148").is_err());
    }

    #[test]
    fn eight_bit_addresses_are_rejected() {
        assert_eq!(address_from_hex("0x7F"), Ok(0x7F));
        assert!(address_from_hex("0x80").is_err());
        assert!(address_from_hex("0x90").is_err());
    }
}
