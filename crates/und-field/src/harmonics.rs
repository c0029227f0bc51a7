//! Fourier decomposition of one cosine-aligned field period into
//! magnetic harmonics.
//!
//! The one-period buffer is treated as sampled over a window centered at
//! `-period/2`; for an unshifted DFT that window offset appears as a
//! `(-1)^j` factor on bin `j`. Coefficients are thresholded in field
//! units, so the relative precision applies to the measured peak field,
//! not to raw transform magnitudes.

use num_complex::Complex64;

use und_math::fft::fft_forward;
use und_types::constants::B_TO_K;
use und_types::error::{MagError, MagResult};
use und_types::model::{FieldAxis, MagneticHarmonic};

/// Extract harmonics above the relative threshold from a resampled,
/// cosine-aligned one-period buffer.
///
/// Returns an empty list for a flat buffer or degenerate parameters; an
/// empty outcome is a valid "no periodic structure" result, not an error.
pub fn analyze_for_harmonics(
    one_per_b: &[f64],
    period: f64,
    rel_prec: f64,
    axis: FieldAxis,
    max_harmonics: usize,
) -> MagResult<Vec<MagneticHarmonic>> {
    let n = one_per_b.len();
    if n == 0 || !(period > 0.0) || !(rel_prec > 0.0) {
        return Ok(Vec::new());
    }

    let max_abs_b = one_per_b.iter().fold(0.0_f64, |acc, &v| acc.max(v.abs()));
    if max_abs_b <= 0.0 {
        return Ok(Vec::new());
    }

    let mut data: Vec<Complex64> = Vec::new();
    data.try_reserve_exact(n)
        .map_err(|e| MagError::Allocation(format!("harmonic analysis buffer ({n} bins): {e}")))?;
    data.extend(one_per_b.iter().map(|&v| Complex64::new(v, 0.0)));
    fft_forward(&mut data);

    let max_order = max_harmonics.min((n / 2).saturating_sub(1));
    let step = period / n as f64;
    let coef_mult = 2.0 / period;
    let abs_threshold = rel_prec * max_abs_b / coef_mult;

    let mut harmonics: Vec<MagneticHarmonic> = Vec::new();
    harmonics
        .try_reserve_exact(max_order)
        .map_err(|e| MagError::Allocation(format!("harmonic list ({max_order} entries): {e}")))?;

    for j in 1..=max_order {
        // Window centered at -period/2: shift by half the buffer length.
        let sign = if j % 2 == 1 { -1.0 } else { 1.0 };
        let a = sign * step * data[j].re;
        let b = sign * step * data[j].im;

        if a.abs() < abs_threshold && b.abs() < abs_threshold {
            continue;
        }
        let c = (a * a + b * b).sqrt();
        if c < abs_threshold {
            continue;
        }

        harmonics.push(MagneticHarmonic {
            order: j as u32,
            axis,
            k: B_TO_K * period * (coef_mult * c) / j as f64,
            phase: a.atan2(-b),
        });
    }

    Ok(harmonics)
}
