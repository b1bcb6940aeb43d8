//! Quantization of analog amplitudes into byte-range digital samples.

/// Scale each amplitude by 255, clamp to the byte range, then narrow.
///
/// The narrowing cast truncates toward zero, so `0.5` maps to `127` and
/// never rounds up. Amplitudes outside `[0.0, 1.0]` saturate at the bounds.
pub fn float_to_digital_u8(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .map(|sample| (sample * 255.0).clamp(0.0, 255.0) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_clamp() {
        let input = vec![-0.1, 0.0, 1.0, 1.2];
        assert_eq!(float_to_digital_u8(&input), vec![0, 0, 255, 255]);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(float_to_digital_u8(&[0.5]), vec![127]);
        assert_eq!(float_to_digital_u8(&[0.999]), vec![254]);
    }

    #[test]
    fn preserves_length() {
        let input: Vec<f64> = (0..100).map(|i| f64::from(i) / 100.0).collect();
        assert_eq!(float_to_digital_u8(&input).len(), input.len());
    }

    #[test]
    fn narrows_nan_to_zero() {
        assert_eq!(float_to_digital_u8(&[f64::NAN]), vec![0]);
    }
}
