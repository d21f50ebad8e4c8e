use std::time::Instant;

use ads111x::acquisition::Pace;
use ads111x::{Ads111x, AfterStop, CancelToken, Continuous, Measurement, Sample};
use anyhow::Context;
use clap::Args;
use rppal::hal::Delay;
use rppal::i2c::I2c;
use simple_signal::Signal;

use crate::args::MeasurementArgs;
use crate::ready::GpioReady;

#[derive(Debug, Args)]
pub(crate) struct ContinuousArgs {
    #[command(flatten)]
    pub(crate) measurement: MeasurementArgs,
    /// Read on each ALERT/RDY pulse seen on this GPIO (BCM numbering)
    /// instead of sleeping one conversion period between reads.
    #[arg(long, value_name = "BCM_PIN")]
    pub(crate) sync_ready: Option<u8>,
    /// Stop after this many samples.
    #[arg(short = 'n', long)]
    pub(crate) count: Option<usize>,
    /// Leave the device converting when stopping instead of powering it down.
    #[arg(long)]
    pub(crate) keep_running: bool,
}

pub(crate) fn single(device: &mut Ads111x<I2c>, args: MeasurementArgs) -> anyhow::Result<()> {
    let started = Instant::now();
    let sample = device.single_shot(&args.into(), &mut Delay::new())?;
    print_sample(&sample, started);
    Ok(())
}

pub(crate) fn continuous(device: &mut Ads111x<I2c>, args: ContinuousArgs) -> anyhow::Result<()> {
    let cancel = CancelToken::new();
    let on_signal = cancel.clone();
    simple_signal::set_handler(&[Signal::Int, Signal::Term], move |_| {
        log::info!("interrupted, stopping");
        on_signal.cancel();
    });

    let measurement = Measurement::from(args.measurement);
    let after = if args.keep_running {
        AfterStop::KeepRunning
    } else {
        AfterStop::PowerDown
    };
    let limit = args.count.unwrap_or(usize::MAX);
    match args.sync_ready {
        Some(pin) => {
            let ready = GpioReady::open(pin)
                .with_context(|| format!("could not watch GPIO {pin} for ready pulses"))?;
            let session = device.continuous_synced(measurement, ready, cancel)?;
            stream(session, limit, after)
        }
        None => {
            let session = device.continuous(measurement, Delay::new(), cancel)?;
            stream(session, limit, after)
        }
    }
}

fn stream<P: Pace>(
    mut session: Continuous<'_, I2c, P>,
    limit: usize,
    after: AfterStop,
) -> anyhow::Result<()> {
    let started = Instant::now();
    for _ in 0..limit {
        let Some(sample) = session.next() else {
            break;
        };
        match sample {
            Ok(sample) => print_sample(&sample, started),
            Err(error) => {
                if !matches!(error, ads111x::Error::Bus(_)) {
                    if let Err(e) = session.stop(after) {
                        log::warn!("could not stop after failure: {e}");
                    }
                }
                return Err(error.into());
            }
        }
    }
    session.stop(after)?;
    Ok(())
}

fn print_sample(sample: &Sample, started: Instant) {
    let elapsed = sample.timestamp.saturating_duration_since(started);
    println!(
        "{:>10.6}s {:>6} {:>+10.6} V",
        elapsed.as_secs_f64(),
        sample.code,
        sample.volts
    );
}
