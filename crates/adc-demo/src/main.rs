use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use adc_core::{AnalogSignal, AnalogToDigitalAdapter, DigitalSignal};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let source = Arc::new(AnalogSignal::new(vec![0.1, 0.5, 0.8, 1.0, 0.3, 0.0, 1.2]));

    println!("Analog signal:");
    println!("{}", format_analog(source.samples()));

    let adapter = AnalogToDigitalAdapter::new(Some(Arc::clone(&source)))?;
    let digital = adapter.digital_data();
    debug!(sample_count = digital.len(), "conversion finished");

    println!();
    println!("Digital signal:");
    println!("{}", format_digital(&digital));

    Ok(())
}

fn format_analog(samples: &[f64]) -> String {
    samples
        .iter()
        .map(|sample| format!("{sample:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_digital(samples: &[u8]) -> String {
    samples
        .iter()
        .map(|sample| sample.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
