use crate::acquire::ContinuousArgs;
use crate::args::{ConfigChanges, LogLevel, MeasurementArgs, VariantArg};
use crate::util;

use clap::Parser;

/// CLI for the ADS1113, ADS1114 and ADS1115 16-bit ADCs
///
/// Talks to the converter over a Linux I2C bus (/dev/i2c-N) such as the one on
/// a Raspberry Pi header.
///
/// Measurements can be taken one at a time (single), or streamed with the
/// device free-running (continuous). When streaming, the driver either sleeps
/// one conversion period between reads or, with --sync-ready, waits for the
/// ALERT/RDY pin to pulse on a GPIO line. Streaming runs until interrupted with
/// Ctrl-C or until --count samples have been printed.
///
/// The Config and threshold registers can be inspected, and individual Config
/// fields changed, without taking a measurement.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// I2C bus number
    #[arg(short, long, default_value_t = 1)]
    pub(crate) bus: u8,
    /// Device address in hexadecimal
    #[arg(short, long = "addr", default_value = "0x48", value_parser = util::address_from_hex)]
    pub(crate) address: u8,
    /// Device variant, used to reject unsupported settings
    #[arg(long, value_enum, default_value = "ads1115")]
    pub(crate) variant: VariantArg,
    /// Log messages at this level and above to stderr
    ///
    /// RUST_LOG, if set, is applied on top of this.
    #[arg(short, long, value_enum, default_value = "warn")]
    pub(crate) log_level: LogLevel,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Make one conversion and print the result.
    Single(MeasurementArgs),
    /// Convert continuously and print each result.
    Continuous(ContinuousArgs),
    /// Read the Config register.
    Config,
    ModifyConfig(ConfigChanges),
    /// Exit successfully if a conversion is in progress, unsuccessfully if not.
    IsRunning,
    /// Read the comparator thresholds, scaled by the current gain setting.
    Thresholds,
}

#[cfg(test)]
mod test {
    use super::{Cli, Commands};

    use clap::Parser;

    #[test]
    fn global_defaults() {
        let cli = Cli::try_parse_from(["ads111x", "config"]).unwrap();
        assert_eq!(cli.bus, 1);
        assert_eq!(cli.address, 0x48);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn synced_continuous_arguments() {
        let cli = Cli::try_parse_from([
            "ads111x",
            "--addr",
            "0x49",
            "continuous",
            "--mux",
            "ain3",
            "--gain",
            "4.096",
            "--rate",
            "860",
            "--sync-ready",
            "17",
            "-n",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.address, 0x49);
        let Commands::Continuous(args) = cli.command else {
            panic!("expected continuous");
        };
        assert_eq!(args.sync_ready, Some(17));
        assert_eq!(args.count, Some(10));
        assert!(!args.keep_running);
    }

    #[test]
    fn modify_config_needs_a_field() {
        assert!(Cli::try_parse_from(["ads111x", "modify-config"]).is_err());
        assert!(Cli::try_parse_from(["ads111x", "modify-config", "--comp-que", "one"]).is_ok());
    }

    #[test]
    fn address_must_be_seven_bit() {
        assert!(Cli::try_parse_from(["ads111x", "--addr", "0x90", "config"]).is_err());
    }

    #[test]
    fn unknown_gain_is_rejected() {
        assert!(Cli::try_parse_from(["ads111x", "single", "--gain", "3.3"]).is_err());
    }
}
