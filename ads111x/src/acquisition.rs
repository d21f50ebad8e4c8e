//! Measurement scenarios.
//!
//! Three ways of getting samples out of the device:
//!
//! | Scenario              | Method                           | Paced by                 |
//! | ---                   | ---                              | ---                      |
//! | Single-shot           | [`Ads111x::single_shot`]         | `OS` bit polling         |
//! | Continuous, polled    | [`Ads111x::continuous`]          | sleeping one period      |
//! | Continuous, synced    | [`Ads111x::continuous_synced`]   | ALERT/RDY pulses         |
//!
//! The continuous scenarios return a [`Continuous`] session, which is an iterator
//! of samples. It ends when its [`CancelToken`] is cancelled or after yielding an
//! error. Cancellation is checked before and after every wait, so a session stops
//! within one wait of being cancelled and never yields a partial sample.
//!
//! In the polled scenario a read can return the result of the previous conversion
//! if it races the device's own update. That is inherent in free-running without
//! a ready signal; the synced scenario reads exactly once per completed conversion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{ComparatorQueue, Config, DataRate, FullScaleRange, Mode, Mux};
use crate::ready::{Edge, ReadySignal};
use crate::registers::decode_conversion;
use crate::scale::Resolution;
use crate::{Ads111x, Error};

/// Reads of the `OS` bit before a single-shot conversion is declared lost.
const MAX_STATUS_POLLS: u32 = 8;

/// Consecutive waits without a ready pulse before a synced session fails.
const MAX_MISSED_EDGES: u32 = 4;

/// Input, gain and data rate for a measurement session.
///
/// Defaults match the device reset state: AIN0-AIN1, ±2.048V, 128 SPS.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Inputs to measure.
    pub mux: Mux,
    /// PGA full-scale range.
    pub gain: FullScaleRange,
    /// Conversion rate.
    pub data_rate: DataRate,
}

impl Measurement {
    /// Config register value for this measurement in the given mode.
    ///
    /// The comparator is disabled and the `OS` bit is clear.
    pub fn config(&self, mode: Mode) -> Config {
        Config::default()
            .without_start()
            .with_mux(self.mux)
            .with_gain(self.gain)
            .with_mode(mode)
            .with_data_rate(self.data_rate)
    }

    /// Time to allow for one conversion.
    ///
    /// This is the nominal period plus 10% for the internal oscillator tolerance.
    pub fn conversion_time(&self) -> Duration {
        let period = self.data_rate.period();
        period + period / 10
    }
}

/// One conversion result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Signed conversion code.
    pub code: i16,
    /// Input voltage implied by the code and the gain.
    pub volts: f32,
    /// When the Conversion register was read.
    pub timestamp: Instant,
}

impl Sample {
    pub(crate) fn from_raw(raw: u16, gain: FullScaleRange, resolution: Resolution) -> Self {
        let (code, volts) = decode_conversion(raw, gain, resolution);
        Self {
            code,
            volts,
            timestamp: Instant::now(),
        }
    }
}

/// Phase of an acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing in progress.
    Idle,
    /// Writing the device configuration.
    Configuring,
    /// Waiting for a conversion to complete.
    Converting,
    /// Reading the Conversion register.
    ReadingResult,
    /// Cancelled or stopped by the caller. No more samples will be produced.
    Stopped,
    /// Ended by an error. No more samples will be produced.
    Failed,
}

impl State {
    fn enter(&mut self, next: State) {
        log::trace!("{self:?} -> {next:?}");
        *self = next;
    }
}

/// What to leave the device doing when a continuous session is stopped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AfterStop {
    /// Switch to single-shot mode, which powers the device down.
    #[default]
    PowerDown,
    /// Leave the device converting continuously.
    KeepRunning,
}

/// Shared flag to stop a continuous session from another thread or a signal handler.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Sessions observe it at their next wait.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// True once [`CancelToken::cancel`] has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Reason a [`Pace`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// A conversion result should be available.
    Read,
    /// Cancellation was requested.
    Cancelled,
}

/// Decides when a continuous session reads the next result.
pub trait Pace {
    /// Block until a new result is due or cancellation is requested.
    fn wait<E>(&mut self, period: Duration, cancel: &CancelToken) -> Result<Wake, Error<E>>;
}

/// Pacing by sleeping one conversion period between reads.
#[derive(Debug)]
pub struct Sleep<D>(D);

impl<D: DelayNs> Pace for Sleep<D> {
    fn wait<E>(&mut self, period: Duration, cancel: &CancelToken) -> Result<Wake, Error<E>> {
        if cancel.is_cancelled() {
            return Ok(Wake::Cancelled);
        }
        sleep(&mut self.0, period);
        match cancel.is_cancelled() {
            true => Ok(Wake::Cancelled),
            false => Ok(Wake::Read),
        }
    }
}

/// Pacing by the conversion-ready pulse on ALERT/RDY.
#[derive(Debug)]
pub struct ReadyEdge<R> {
    signal: R,
    missed: u32,
}

impl<R: ReadySignal> Pace for ReadyEdge<R> {
    fn wait<E>(&mut self, period: Duration, cancel: &CancelToken) -> Result<Wake, Error<E>> {
        let timeout = period * 2 + period / 10;
        loop {
            if cancel.is_cancelled() {
                return Ok(Wake::Cancelled);
            }
            let edge = self
                .signal
                .wait_for_edge(timeout)
                .map_err(|e| Error::ReadySignal(Box::new(e)))?;
            match edge {
                Edge::Signaled if cancel.is_cancelled() => return Ok(Wake::Cancelled),
                Edge::Signaled => {
                    self.missed = 0;
                    return Ok(Wake::Read);
                }
                Edge::TimedOut => {
                    self.missed += 1;
                    log::warn!(
                        "no conversion-ready pulse within {timeout:?} ({} in a row)",
                        self.missed
                    );
                    if self.missed >= MAX_MISSED_EDGES {
                        return Err(Error::Timeout);
                    }
                }
            }
        }
    }
}

fn sleep(delay: &mut impl DelayNs, duration: Duration) {
    delay.delay_ns(u32::try_from(duration.as_nanos()).unwrap_or(u32::MAX));
}

impl<I2C: I2c> Ads111x<I2C> {
    /// Make one conversion and return its result.
    ///
    /// The conversion is started, then the driver sleeps for
    /// [`Measurement::conversion_time`] before polling the `OS` bit every quarter
    /// period until the device reports it is idle. The device powers down again
    /// once the conversion completes.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] if the conversion has not completed after 8 polls. The
    ///   caller may retry.
    /// - [`Error::Bus`] if any transfer fails.
    /// - [`Error::Unsupported`] if the measurement needs features the variant lacks.
    pub fn single_shot<D: DelayNs>(
        &mut self,
        measurement: &Measurement,
        delay: &mut D,
    ) -> Result<Sample, Error<I2C::Error>> {
        let mut state = State::Idle;
        state.enter(State::Configuring);
        self.start_single_shot(measurement.config(Mode::SingleShot))?;

        state.enter(State::Converting);
        sleep(delay, measurement.conversion_time());
        let poll_interval = measurement.data_rate.period() / 4;
        let mut polls = 0;
        while self.is_converting()? {
            polls += 1;
            if polls == MAX_STATUS_POLLS {
                log::debug!("conversion still in progress after {polls} polls");
                return Err(Error::Timeout);
            }
            log::trace!("conversion in progress (poll {polls})");
            sleep(delay, poll_interval);
        }

        state.enter(State::ReadingResult);
        let sample = self.read_sample(measurement.gain)?;
        state.enter(State::Idle);
        Ok(sample)
    }

    /// Start continuous conversion and read a result every conversion period.
    ///
    /// The comparator is disabled. `delay` provides the sleep between reads.
    pub fn continuous<D: DelayNs>(
        &mut self,
        measurement: Measurement,
        delay: D,
        cancel: CancelToken,
    ) -> Result<Continuous<'_, I2C, Sleep<D>>, Error<I2C::Error>> {
        self.apply_config(measurement.config(Mode::Continuous))?;
        Ok(Continuous::start(self, Sleep(delay), measurement, cancel))
    }

    /// Start continuous conversion and read a result on every ready pulse.
    ///
    /// The threshold registers and comparator queue are set up so that ALERT/RDY
    /// pulses at the end of each conversion (see
    /// [`Ads111x::enable_ready_thresholds`]). The pulse is active low unless the
    /// polarity is changed afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] on the ADS1113, which has no ALERT/RDY pin.
    pub fn continuous_synced<R: ReadySignal>(
        &mut self,
        measurement: Measurement,
        ready: R,
        cancel: CancelToken,
    ) -> Result<Continuous<'_, I2C, ReadyEdge<R>>, Error<I2C::Error>> {
        self.variant().require_comparator()?;
        self.enable_ready_thresholds()?;
        let config = measurement
            .config(Mode::Continuous)
            .with_comparator_queue(ComparatorQueue::AssertAfterOne);
        self.apply_config(config)?;
        let pace = ReadyEdge {
            signal: ready,
            missed: 0,
        };
        Ok(Continuous::start(self, pace, measurement, cancel))
    }
}

/// A running continuous-conversion session.
///
/// Iterate to receive samples. Iteration ends after cancellation, or after an error
/// has been yielded. Call [`Continuous::stop`] to choose the device's state
/// afterwards; a session that is simply dropped powers the device down, unless it
/// ended with a bus error.
#[derive(Debug)]
pub struct Continuous<'d, I2C: I2c, P: Pace> {
    device: &'d mut Ads111x<I2C>,
    pace: P,
    measurement: Measurement,
    cancel: CancelToken,
    state: State,
    stopped: bool,
    bus_failed: bool,
}

impl<'d, I2C: I2c, P: Pace> Continuous<'d, I2C, P> {
    fn start(
        device: &'d mut Ads111x<I2C>,
        pace: P,
        measurement: Measurement,
        cancel: CancelToken,
    ) -> Self {
        log::debug!("continuous conversion started: {measurement:?}");
        Self {
            device,
            pace,
            measurement,
            cancel,
            state: State::Converting,
            stopped: false,
            bus_failed: false,
        }
    }

    /// Current phase of the session.
    pub fn state(&self) -> State {
        self.state
    }

    /// Settings the session was started with.
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// A clone of the session's cancellation token.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// End the session and leave the device as requested.
    pub fn stop(mut self, after: AfterStop) -> Result<(), Error<I2C::Error>> {
        self.stopped = true;
        self.state.enter(State::Stopped);
        match after {
            AfterStop::PowerDown => self.device.power_down(),
            AfterStop::KeepRunning => Ok(()),
        }
    }

    fn fail(&mut self, error: Error<I2C::Error>) -> Option<Result<Sample, Error<I2C::Error>>> {
        log::debug!("continuous conversion failed: {error}");
        self.bus_failed = matches!(error, Error::Bus(_));
        self.state.enter(State::Failed);
        Some(Err(error))
    }
}

impl<I2C: I2c, P: Pace> Iterator for Continuous<'_, I2C, P> {
    type Item = Result<Sample, Error<I2C::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != State::Converting {
            return None;
        }
        match self.pace.wait(self.measurement.data_rate.period(), &self.cancel) {
            Ok(Wake::Read) => {}
            Ok(Wake::Cancelled) => {
                self.state.enter(State::Stopped);
                return None;
            }
            Err(e) => return self.fail(e),
        }
        self.state.enter(State::ReadingResult);
        match self.device.read_sample(self.measurement.gain) {
            Ok(sample) => {
                self.state.enter(State::Converting);
                Some(Ok(sample))
            }
            Err(e) => self.fail(e),
        }
    }
}

impl<I2C: I2c, P: Pace> Drop for Continuous<'_, I2C, P> {
    fn drop(&mut self) {
        if self.stopped || self.bus_failed {
            return;
        }
        if let Err(e) = self.device.power_down() {
            log::warn!("could not power down after continuous conversion: {e}");
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::VecDeque;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock, Transaction};

    use super::*;
    use crate::{DEFAULT_ADDRESS, Variant};

    /// Delay that records requested durations and can cancel a token on the n-th call.
    #[derive(Default)]
    struct RecordingDelay {
        calls: Vec<Duration>,
        cancel_on: Option<(usize, CancelToken)>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls.push(Duration::from_nanos(ns.into()));
            if let Some((n, token)) = &self.cancel_on {
                if self.calls.len() == *n {
                    token.cancel();
                }
            }
        }
    }

    /// Ready signal replaying a script, then timing out forever.
    struct ScriptedReady {
        edges: VecDeque<Edge>,
        waits: usize,
        cancel_when_done: Option<CancelToken>,
    }

    impl ScriptedReady {
        fn new(signaled: usize, cancel_when_done: Option<CancelToken>) -> Self {
            Self {
                edges: std::iter::repeat_n(Edge::Signaled, signaled).collect(),
                waits: 0,
                cancel_when_done,
            }
        }
    }

    impl ReadySignal for ScriptedReady {
        type Error = std::io::Error;

        fn wait_for_edge(&mut self, _timeout: Duration) -> Result<Edge, Self::Error> {
            self.waits += 1;
            if let Some(edge) = self.edges.pop_front() {
                return Ok(edge);
            }
            if let Some(token) = &self.cancel_when_done {
                token.cancel();
            }
            Ok(Edge::TimedOut)
        }
    }

    /// Ready signal whose line reports an error on every wait.
    struct BrokenReady;

    impl ReadySignal for BrokenReady {
        type Error = std::io::Error;

        fn wait_for_edge(&mut self, _timeout: Duration) -> Result<Edge, Self::Error> {
            Err(std::io::Error::other("line released"))
        }
    }

    /// Ready signal that cancels the token while the edge arrives.
    struct CancelDuringEdge(CancelToken);

    impl ReadySignal for CancelDuringEdge {
        type Error = std::io::Error;

        fn wait_for_edge(&mut self, _timeout: Duration) -> Result<Edge, Self::Error> {
            self.0.cancel();
            Ok(Edge::Signaled)
        }
    }

    fn write(register: u8, value: u16) -> Transaction {
        let [msb, lsb] = value.to_be_bytes();
        Transaction::write(DEFAULT_ADDRESS, vec![register, msb, lsb])
    }

    fn read(register: u8, value: u16) -> Transaction {
        Transaction::write_read(DEFAULT_ADDRESS, vec![register], value.to_be_bytes().to_vec())
    }

    #[test]
    fn single_shot_waits_one_period_then_reads_once() {
        let measurement = Measurement {
            mux: Mux::Ain0_Gnd,
            gain: FullScaleRange::V2_048,
            data_rate: DataRate::Sps128,
        };
        let expectations = [write(0x01, 0xC583), read(0x01, 0x8583), read(0x00, 0x4000)];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let mut delay = RecordingDelay::default();

        let sample = device.single_shot(&measurement, &mut delay).unwrap();

        assert_eq!(sample.code, 16384);
        assert_eq!(sample.volts, 1.024);
        assert_eq!(delay.calls.len(), 1);
        assert!(delay.calls[0] >= Duration::from_secs_f64(1.0 / 128.0));
        device.release().done();
    }

    #[test]
    fn single_shot_polls_until_idle() {
        let measurement = Measurement::default();
        let expectations = [
            write(0x01, 0x8583),
            read(0x01, 0x0583),
            read(0x01, 0x0583),
            read(0x01, 0x8583),
            read(0x00, 0xFFFF),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let mut delay = RecordingDelay::default();

        let sample = device.single_shot(&measurement, &mut delay).unwrap();

        assert_eq!(sample.code, -1);
        let quarter = DataRate::Sps128.period() / 4;
        assert_eq!(&delay.calls[1..], &[quarter, quarter]);
        device.release().done();
    }

    #[test]
    fn single_shot_times_out() {
        let mut expectations = vec![write(0x01, 0x8583)];
        expectations.extend(std::iter::repeat_n(read(0x01, 0x0583), 8));
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let mut delay = RecordingDelay::default();

        let result = device.single_shot(&Measurement::default(), &mut delay);

        assert!(matches!(result, Err(Error::Timeout)));
        device.release().done();
    }

    #[test]
    fn single_shot_bus_error() {
        let expectations = [write(0x01, 0x8583).with_error(ErrorKind::Other)];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let result = device.single_shot(&Measurement::default(), &mut RecordingDelay::default());
        assert!(matches!(result, Err(Error::Bus(ErrorKind::Other))));
        assert_eq!(device.applied_config(), None);
        device.release().done();
    }

    #[test]
    fn polled_cancel_stops_within_one_period_and_powers_down() {
        let measurement = Measurement {
            mux: Mux::Ain0_Ain1,
            gain: FullScaleRange::V4_096,
            data_rate: DataRate::Sps860,
        };
        let expectations = [
            write(0x01, 0x02E3),
            read(0x00, 0x0010),
            read(0x00, 0x0020),
            write(0x01, 0x03E3),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let cancel = CancelToken::new();
        let mut delay = RecordingDelay {
            cancel_on: Some((3, cancel.clone())),
            ..Default::default()
        };

        let mut session = device.continuous(measurement, &mut delay, cancel).unwrap();
        let codes: Vec<i16> = session.by_ref().map(|s| s.unwrap().code).collect();
        assert_eq!(codes, [0x10, 0x20]);
        assert_eq!(session.state(), State::Stopped);
        session.stop(AfterStop::PowerDown).unwrap();

        let period = DataRate::Sps860.period();
        assert_eq!(delay.calls, [period, period, period]);
        assert_eq!(
            device.applied_config().map(|c| c.mode),
            Some(Mode::SingleShot)
        );
        device.release().done();
    }

    #[test]
    fn polled_stop_can_keep_running() {
        let expectations = [write(0x01, 0x0483), read(0x00, 0x0001)];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let cancel = CancelToken::new();
        let mut delay = RecordingDelay::default();

        let mut session = device
            .continuous(Measurement::default(), &mut delay, cancel.clone())
            .unwrap();
        assert!(session.next().unwrap().is_ok());
        cancel.cancel();
        assert!(session.next().is_none());
        session.stop(AfterStop::KeepRunning).unwrap();

        assert_eq!(
            device.applied_config().map(|c| c.mode),
            Some(Mode::Continuous)
        );
        device.release().done();
    }

    #[test]
    fn dropped_session_powers_down() {
        let expectations = [write(0x01, 0x0483), write(0x01, 0x0583)];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let session = device
            .continuous(Measurement::default(), RecordingDelay::default(), CancelToken::new())
            .unwrap();
        drop(session);
        device.release().done();
    }

    #[test]
    fn polled_bus_error_is_terminal() {
        let expectations = [
            write(0x01, 0x0483),
            read(0x00, 0x0001).with_error(ErrorKind::Other),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let mut session = device
            .continuous(Measurement::default(), RecordingDelay::default(), CancelToken::new())
            .unwrap();

        assert!(matches!(session.next(), Some(Err(Error::Bus(ErrorKind::Other)))));
        assert_eq!(session.state(), State::Failed);
        assert!(session.next().is_none());
        // A failed session does not touch the bus again when dropped.
        drop(session);
        device.release().done();
    }

    #[test]
    fn synced_yields_one_sample_per_edge() {
        let expectations = [
            write(0x02, 0x0000),
            write(0x03, 0x8000),
            write(0x01, 0x0480),
            read(0x00, 0x0001),
            read(0x00, 0x0002),
            read(0x00, 0x0003),
            write(0x01, 0x0580),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let cancel = CancelToken::new();
        let mut ready = ScriptedReady::new(3, Some(cancel.clone()));

        let mut session = device
            .continuous_synced(Measurement::default(), &mut ready, cancel)
            .unwrap();
        let codes: Vec<i16> = session.by_ref().map(|s| s.unwrap().code).collect();
        session.stop(AfterStop::PowerDown).unwrap();

        assert_eq!(codes, [1, 2, 3]);
        // Three edges, then one wait that ended in cancellation.
        assert_eq!(ready.waits, 4);
        device.release().done();
    }

    #[test]
    fn synced_missing_edges_time_out_and_power_down() {
        let expectations = [
            write(0x02, 0x0000),
            write(0x03, 0x8000),
            write(0x01, 0x0480),
            write(0x01, 0x0580),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1114);
        let mut ready = ScriptedReady::new(0, None);

        let mut session = device
            .continuous_synced(Measurement::default(), &mut ready, CancelToken::new())
            .unwrap();
        assert!(matches!(session.next(), Some(Err(Error::Timeout))));
        assert_eq!(session.state(), State::Failed);
        assert!(session.next().is_none());
        // The bus is still usable, so dropping the session powers down.
        drop(session);

        assert_eq!(ready.waits, MAX_MISSED_EDGES as usize);
        assert_eq!(
            device.applied_config().map(|c| c.mode),
            Some(Mode::SingleShot)
        );
        device.release().done();
    }

    #[test]
    fn synced_ready_signal_error_is_terminal() {
        let expectations = [
            write(0x02, 0x0000),
            write(0x03, 0x8000),
            write(0x01, 0x0480),
            write(0x01, 0x0580),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);

        let mut session = device
            .continuous_synced(Measurement::default(), BrokenReady, CancelToken::new())
            .unwrap();
        let error = session.next().unwrap().unwrap_err();
        assert!(matches!(error, Error::ReadySignal(_)));
        assert_eq!(error.to_string(), "ready signal failed: line released");
        assert_eq!(session.state(), State::Failed);
        assert!(session.next().is_none());
        drop(session);

        device.release().done();
    }

    #[test]
    fn synced_edge_after_cancel_is_not_read() {
        let expectations = [
            write(0x02, 0x0000),
            write(0x03, 0x8000),
            write(0x01, 0x0480),
            write(0x01, 0x0580),
        ];
        let mut device = Ads111x::new(Mock::new(&expectations), DEFAULT_ADDRESS, Variant::Ads1115);
        let cancel = CancelToken::new();

        let mut session = device
            .continuous_synced(
                Measurement::default(),
                CancelDuringEdge(cancel.clone()),
                cancel,
            )
            .unwrap();
        assert!(session.next().is_none());
        assert_eq!(session.state(), State::Stopped);
        session.stop(AfterStop::PowerDown).unwrap();

        device.release().done();
    }

    #[test]
    fn synced_needs_ready_pin() {
        let mut device = Ads111x::new(Mock::new(&[]), DEFAULT_ADDRESS, Variant::Ads1113);
        assert!(matches!(
            device.continuous_synced(
                Measurement::default(),
                ScriptedReady::new(1, None),
                CancelToken::new(),
            ),
            Err(Error::Unsupported { .. })
        ));
        device.release().done();
    }
}
