use std::sync::Arc;

use thiserror::Error;

use crate::sample::float_to_digital_u8;

/// Immutable sequence of analog amplitude samples, one per time step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalogSignal {
    samples: Vec<f64>,
}

impl AnalogSignal {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Capability of producing bounded digital sample data.
pub trait DigitalSignal: Send + Sync + 'static {
    fn digital_data(&self) -> Vec<u8>;
}

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("analog source is missing")]
    MissingSource,
}

/// Adapts an [`AnalogSignal`] to the [`DigitalSignal`] capability.
#[derive(Debug, Clone)]
pub struct AnalogToDigitalAdapter {
    source: Arc<AnalogSignal>,
}

impl AnalogToDigitalAdapter {
    /// Fails with [`SignalError::MissingSource`] when no source is supplied.
    pub fn new(source: Option<Arc<AnalogSignal>>) -> Result<Self, SignalError> {
        let Some(source) = source else {
            return Err(SignalError::MissingSource);
        };
        Ok(Self { source })
    }

    pub fn source(&self) -> &AnalogSignal {
        &self.source
    }
}

impl DigitalSignal for AnalogToDigitalAdapter {
    fn digital_data(&self) -> Vec<u8> {
        float_to_digital_u8(self.source.samples())
    }
}
