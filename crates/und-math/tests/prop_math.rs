// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Property-Based Tests (proptest) for und-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for und-math using proptest.
//!
//! Covers: zero-crossing scan, period selection, one-period resampling,
//! cosine-layout rotation, 1D FFT.

use proptest::prelude::*;
use und_math::fft::fft_forward_real;
use und_math::period::find_one_period;
use und_math::resample::{interp_cubic, resample_one_period, rotate_to_cosine_layout};
use und_math::zeros::find_field_zeros;
use und_types::field::SampledField;

// ── Zero-Crossing Properties ─────────────────────────────────────────

proptest! {
    /// Crossing positions are non-decreasing and lie inside the scan range.
    #[test]
    fn zeros_sorted_and_in_range(
        periods in 2usize..12,
        amp in 0.1f64..5.0,
        s_start in -10.0f64..10.0,
    ) {
        let spp = 32;
        let period = 0.04;
        let step = period / spp as f64;
        let n = periods * spp + 1;
        let vals: Vec<f64> = (0..n)
            .map(|i| amp * (2.0 * std::f64::consts::PI * i as f64 / spp as f64).sin())
            .collect();
        let field = SampledField::new(&vals, s_start, step).unwrap();
        let set = find_field_zeros(&field, 0.2 * amp, 50_000);

        prop_assert_eq!(set.rising.len(), periods);
        prop_assert_eq!(set.falling.len(), periods);
        for w in set.rising.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for &s in set.rising.iter().chain(set.falling.iter()) {
            prop_assert!(s >= s_start - step && s <= field.s_end() + step,
                "crossing {} outside range", s);
        }
    }

    /// An all-zero field never produces crossings, whatever the tolerance.
    #[test]
    fn zeros_flat_field_empty(n in 1usize..500, tol in 0.0f64..1.0) {
        let vals = vec![0.0; n];
        let field = SampledField::new(&vals, 0.0, 0.001).unwrap();
        let set = find_field_zeros(&field, tol, 50_000);
        prop_assert!(set.is_empty());
    }
}

// ── Period-Selection Properties ──────────────────────────────────────

proptest! {
    /// A perfectly uniform crossing train recovers its spacing exactly.
    #[test]
    fn period_uniform_train(n in 3usize..40, spacing in 0.001f64..1.0, x0 in -5.0f64..5.0) {
        let xs: Vec<f64> = (0..n).map(|i| x0 + spacing * i as f64).collect();
        let p = find_one_period(&xs).unwrap();
        prop_assert!((p.period - spacing).abs() < 1e-9 * spacing.max(1.0),
            "period = {}, spacing = {}", p.period, spacing);
    }

    /// The selected period is always one of the consecutive intervals.
    #[test]
    fn period_is_an_observed_interval(
        n in 3usize..20,
        jitter in 0.0f64..0.01,
        spacing in 0.05f64..0.5,
    ) {
        let xs: Vec<f64> = (0..n)
            .map(|i| spacing * i as f64 + jitter * ((i * 7 % 5) as f64 - 2.0))
            .collect();
        if let Some(p) = find_one_period(&xs) {
            let matches = xs.windows(2).any(|w|
                ((w[1] - w[0]) - p.period).abs() < 1e-12 && (w[0] - p.s_start).abs() < 1e-12);
            prop_assert!(matches, "period {} not an observed interval", p.period);
        }
    }
}

// ── Resampling Properties ────────────────────────────────────────────

proptest! {
    /// Interpolation of a constant field returns that constant everywhere.
    #[test]
    fn interp_constant_field(
        val in -100.0f64..100.0,
        s in 0.0f64..1.0,
    ) {
        let vals = vec![val; 32];
        let r = interp_cubic(&vals, 0.0, 1.0 / 31.0, s);
        prop_assert!((r - val).abs() < 1e-9,
            "interp({}) = {}, expected {}", s, r, val);
    }

    /// Resampling a constant field preserves it at every output point.
    #[test]
    fn resample_constant_field(
        val in -10.0f64..10.0,
        n_points in 1usize..256,
    ) {
        let vals = vec![val; 128];
        let field = SampledField::new(&vals, 0.0, 0.01).unwrap();
        let buf = resample_one_period(&field, 0.3, 0.5, n_points);
        prop_assert_eq!(buf.len(), n_points);
        for &v in &buf {
            prop_assert!((v - val).abs() < 1e-9);
        }
    }

    /// Rotation is a cyclic permutation: same multiset, length, and sum.
    #[test]
    fn rotation_preserves_content(n in 1usize..256) {
        let orig: Vec<f64> = (0..n).map(|i| (i as f64 * 0.61).sin()).collect();
        let mut buf = orig.clone();
        rotate_to_cosine_layout(&mut buf);
        prop_assert_eq!(buf.len(), orig.len());
        let quarter = n >> 2;
        for (i, &v) in buf.iter().enumerate() {
            let j = (i + n - quarter) % n;
            prop_assert!((v - orig[j]).abs() < 1e-15);
        }
    }
}

// ── FFT Properties ───────────────────────────────────────────────────

proptest! {
    /// Parseval: sum |x|^2 = (1/N) sum |X|^2.
    #[test]
    fn fft_parseval(n_exp in 3u32..9, seed in 0u64..1000) {
        let n = 1usize << n_exp;
        let input: Vec<f64> = (0..n)
            .map(|i| ((i as f64 + seed as f64) * 0.7).sin())
            .collect();
        let spectrum = fft_forward_real(&input);

        let time_energy: f64 = input.iter().map(|v| v * v).sum();
        let freq_energy: f64 =
            spectrum.iter().map(|c| c.norm_sqr()).sum::<f64>() / n as f64;
        prop_assert!((time_energy - freq_energy).abs() < 1e-6 * time_energy.max(1.0),
            "Parseval: {} vs {}", time_energy, freq_energy);
    }

    /// DC bin equals the sample sum.
    #[test]
    fn fft_dc_is_sum(n in 1usize..200, scale in -5.0f64..5.0) {
        let input: Vec<f64> = (0..n).map(|i| scale * (i as f64 * 0.3).cos()).collect();
        let sum: f64 = input.iter().sum();
        let spectrum = fft_forward_real(&input);
        prop_assert!((spectrum[0].re - sum).abs() < 1e-7 * sum.abs().max(1.0));
        prop_assert!(spectrum[0].im.abs() < 1e-7);
    }
}
