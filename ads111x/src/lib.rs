#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod acquisition;
pub mod config;
mod driver;
mod error;
pub mod ready;
pub mod registers;
pub mod scale;
mod variant;

pub use acquisition::{AfterStop, CancelToken, Continuous, Measurement, Sample, State};
pub use driver::{Ads111x, DEFAULT_ADDRESS};
pub use error::{Error, InvalidField};
pub use ready::{Edge, ReadySignal};
pub use variant::Variant;
