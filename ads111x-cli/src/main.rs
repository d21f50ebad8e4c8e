use std::process::ExitCode;

use ads111x::Ads111x;
use anyhow::Context;
use clap::Parser;
use rppal::i2c::I2c;

use cli::Commands;

mod acquire;
mod args;
mod cli;
mod ready;
mod registers;
mod util;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .parse_default_env()
        .init();

    let i2c = I2c::with_bus(cli.bus).with_context(|| format!("could not open I2C bus {}", cli.bus))?;
    let mut device = Ads111x::new(i2c, cli.address, cli.variant.into());
    match cli.command {
        Commands::Single(args) => acquire::single(&mut device, args)?,
        Commands::Continuous(args) => acquire::continuous(&mut device, args)?,
        Commands::Config => println!("{:#?}", device.read_config()?),
        Commands::ModifyConfig(changes) => registers::modify(&mut device, changes)?,
        Commands::IsRunning => {
            if !registers::is_running(&mut device)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Thresholds => registers::thresholds(&mut device)?,
    }
    Ok(ExitCode::SUCCESS)
}
