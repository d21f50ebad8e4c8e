//! Conversion-ready signal from the ALERT/RDY pin.
//!
//! The driver does not read pins itself. Instead, whatever detects edges on the
//! ALERT/RDY line (a GPIO interrupt, a polling loop, an edge-capture peripheral)
//! implements [`ReadySignal`] and is handed to [`Ads111x::continuous_synced`].
//!
//! [`Ads111x::continuous_synced`]: crate::Ads111x::continuous_synced

use std::time::Duration;

/// Outcome of waiting for the conversion-ready signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The pin pulsed: a conversion has completed.
    Signaled,
    /// No pulse was seen before the timeout.
    TimedOut,
}

/// Blocking source of conversion-ready edges.
pub trait ReadySignal {
    /// Error raised by the underlying pin driver.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Block until the next ready pulse, or until `timeout` elapses.
    ///
    /// Implementations should discard edges that occurred before the call, so that
    /// each [`Edge::Signaled`] corresponds to a conversion completing during the
    /// wait.
    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Edge, Self::Error>;
}

impl<T: ReadySignal + ?Sized> ReadySignal for &mut T {
    type Error = T::Error;

    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Edge, Self::Error> {
        T::wait_for_edge(self, timeout)
    }
}
