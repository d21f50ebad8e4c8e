use std::time::Duration;

use ads111x::{Edge, ReadySignal};
use rppal::gpio::{Gpio, InputPin, Trigger};

/// ALERT/RDY wired to a GPIO line, watched for falling edges.
#[derive(Debug)]
pub(crate) struct GpioReady {
    pin: InputPin,
}

impl GpioReady {
    /// Claim the pin (BCM numbering) as a pulled-up input with edge interrupts.
    pub(crate) fn open(bcm_pin: u8) -> Result<Self, rppal::gpio::Error> {
        let mut pin = Gpio::new()?.get(bcm_pin)?.into_input_pullup();
        pin.set_interrupt(Trigger::FallingEdge, None)?;
        log::debug!("waiting for ready pulses on GPIO {bcm_pin}");
        Ok(Self { pin })
    }
}

impl ReadySignal for GpioReady {
    type Error = rppal::gpio::Error;

    fn wait_for_edge(&mut self, timeout: Duration) -> Result<Edge, Self::Error> {
        // Reset discards an edge latched before this call.
        match self.pin.poll_interrupt(true, Some(timeout))? {
            Some(_) => Ok(Edge::Signaled),
            None => Ok(Edge::TimedOut),
        }
    }
}
