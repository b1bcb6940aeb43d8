pub mod api;
pub mod sample;
pub mod signal;

pub use api::*;
pub use signal::{AnalogSignal, AnalogToDigitalAdapter, DigitalSignal, SignalError};
