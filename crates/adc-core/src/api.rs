use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::signal::{AnalogSignal, AnalogToDigitalAdapter, DigitalSignal, SignalError};

/// Digital sample data as handed to an embedding host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitalChunk {
    pub data: Vec<u8>,
    pub sample_count: usize,
}

/// Run one conversion over `source` and package the result.
pub fn digitize(source: Option<Arc<AnalogSignal>>) -> Result<DigitalChunk, SignalError> {
    let adapter = AnalogToDigitalAdapter::new(source)?;
    let data = adapter.digital_data();
    info!(sample_count = data.len(), "analog source digitized");
    Ok(DigitalChunk {
        sample_count: data.len(),
        data,
    })
}
