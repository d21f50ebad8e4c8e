use ads111x::Ads111x;
use ads111x::scale::to_voltage;
use rppal::i2c::I2c;

use crate::args::ConfigChanges;

pub(crate) fn modify(device: &mut Ads111x<I2c>, changes: ConfigChanges) -> anyhow::Result<()> {
    let current = device.read_config()?;
    let updated = changes.merge_into(current);
    log::info!("Config {:#06X} -> {:#06X}", current.to_bits(), updated.to_bits());
    device.write_config(updated)?;
    println!("{updated:#?}");
    Ok(())
}

pub(crate) fn is_running(device: &mut Ads111x<I2c>) -> anyhow::Result<bool> {
    let running = device.is_converting()?;
    println!("{}", if running { "running" } else { "idle" });
    Ok(running)
}

pub(crate) fn thresholds(device: &mut Ads111x<I2c>) -> anyhow::Result<()> {
    let gain = device.read_config()?.gain;
    let (lo, hi) = device.read_thresholds()?;
    println!("Lo_thresh: {lo:>6} ({:+.6} V)", to_voltage(lo, gain));
    println!("Hi_thresh: {hi:>6} ({:+.6} V)", to_voltage(hi, gain));
    Ok(())
}
