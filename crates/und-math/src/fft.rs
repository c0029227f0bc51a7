//! 1D FFT wrappers around rustfft.
//!
//! Convention matches numpy:
//! - Forward FFT: unnormalized
//! - Callers apply their own window/start-phase factors

use num_complex::Complex64;
use rustfft::FftPlanner;

/// In-place forward FFT. Matches `numpy.fft.fft()` (no normalization).
pub fn fft_forward(data: &mut [Complex64]) {
    if data.is_empty() {
        return;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(data.len());
    fft.process(data);
}

/// Forward FFT of a real buffer (zero imaginary part).
pub fn fft_forward_real(input: &[f64]) -> Vec<Complex64> {
    let mut data: Vec<Complex64> = input.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    fft_forward(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fft_dc_component() {
        // For a constant buffer, bin 0 should be N*value and the rest zero.
        let n = 16;
        let val = 3.0;
        let spectrum = fft_forward_real(&vec![val; n]);
        assert!((spectrum[0].re - n as f64 * val).abs() < 1e-10);
        assert!(spectrum[0].im.abs() < 1e-10);
        for bin in &spectrum[1..] {
            assert!(bin.norm() < 1e-9, "non-DC bin should vanish");
        }
    }

    #[test]
    fn test_fft_single_cosine_bin() {
        // cos(2*pi*k*j/N) concentrates in bins j and N-j with amplitude N/2.
        let n = 64;
        let j = 5;
        let input: Vec<f64> = (0..n)
            .map(|k| (2.0 * std::f64::consts::PI * j as f64 * k as f64 / n as f64).cos())
            .collect();
        let spectrum = fft_forward_real(&input);
        assert!(
            (spectrum[j].re - n as f64 / 2.0).abs() < 1e-8,
            "bin {j}: {}",
            spectrum[j].re
        );
        assert!(spectrum[j].im.abs() < 1e-8);
        assert!((spectrum[n - j].re - n as f64 / 2.0).abs() < 1e-8);
        for (i, bin) in spectrum.iter().enumerate() {
            if i != j && i != n - j && i != 0 {
                assert!(bin.norm() < 1e-8, "bin {i} should vanish");
            }
        }
    }

    #[test]
    fn test_fft_zeros() {
        let spectrum = fft_forward_real(&[0.0; 32]);
        for bin in &spectrum {
            assert!(bin.norm() < 1e-15);
        }
    }

    #[test]
    fn test_fft_empty_is_noop() {
        assert!(fft_forward_real(&[]).is_empty());
    }
}
