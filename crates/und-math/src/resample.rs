//! One-period resampling with local cubic interpolation.
//!
//! Maps a window of raw samples onto a fixed-size buffer spanning exactly
//! one period, then rotates the buffer so it starts at a field extremum
//! (cosine-like layout), the phase convention the harmonic analysis
//! assumes.

use und_types::field::SampledField;

/// Evaluate `values` (uniform grid starting at `s_start`, spacing
/// `s_step`) at position `s` with 4-point Lagrange interpolation,
/// falling back to linear for short inputs. Clamps to the grid ends.
pub fn interp_cubic(values: &[f64], s_start: f64, s_step: f64, s: f64) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return values[0];
    }

    let t_global = (s - s_start) / s_step;

    if n < 4 {
        let i0 = (t_global.floor() as isize).clamp(0, n as isize - 2) as usize;
        let t = (t_global - i0 as f64).clamp(0.0, 1.0);
        return values[i0] * (1.0 - t) + values[i0 + 1] * t;
    }

    // Four consecutive nodes with the evaluation point inside the middle
    // interval where possible.
    let i_start = (t_global.floor() as isize - 1).clamp(0, n as isize - 4) as usize;
    let t = t_global - i_start as f64;

    let l0 = -(t - 1.0) * (t - 2.0) * (t - 3.0) / 6.0;
    let l1 = t * (t - 2.0) * (t - 3.0) / 2.0;
    let l2 = -t * (t - 1.0) * (t - 3.0) / 2.0;
    let l3 = t * (t - 1.0) * (t - 2.0) / 6.0;

    values[i_start] * l0 + values[i_start + 1] * l1 + values[i_start + 2] * l2
        + values[i_start + 3] * l3
}

/// Resample raw field data onto `n_points` uniform samples spanning
/// exactly one period from `s_start_per`. The interpolation window takes
/// three extra raw samples on each side, clamped to the valid range.
/// Degenerate inputs yield an empty buffer.
pub fn resample_one_period(
    field: &SampledField,
    s_start_per: f64,
    period: f64,
    n_points: usize,
) -> Vec<f64> {
    let n = field.len();
    if n <= 1 || !(period > 0.0) || n_points == 0 {
        return Vec::new();
    }

    let ind_start = (((s_start_per - field.s_start) / field.s_step) as isize - 3)
        .clamp(0, n as isize - 2) as usize;
    let ind_end = (((s_start_per + period - field.s_start) / field.s_step) as isize + 3)
        .clamp(1, n as isize - 1) as usize;

    let window = &field.values[ind_start..=ind_end];
    let win_s_start = field.s_start + ind_start as f64 * field.s_step;
    let step_interp = period / n_points as f64;

    (0..n_points)
        .map(|k| {
            interp_cubic(
                window,
                win_s_start,
                field.s_step,
                s_start_per + k as f64 * step_interp,
            )
        })
        .collect()
}

/// Rotate the one-period buffer backward by a quarter length so the
/// sample that sat three quarters in becomes the start, putting a field
/// extremum at index 0.
pub fn rotate_to_cosine_layout(buf: &mut [f64]) {
    let quarter = buf.len() >> 2;
    if quarter > 0 {
        buf.rotate_right(quarter);
    }
}
