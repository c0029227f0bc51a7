// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Zero Crossing Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Noise-tolerant zero-crossing detection on a sampled field.
//!
//! A sample counts as "positive" only above the absolute tolerance, which
//! keeps measurement noise near zero from producing spurious crossings.
//! Exact-zero samples suppress detection on both edges so a field that
//! touches zero and retreats is not counted.

use und_types::field::SampledField;

/// Interpolated rising and falling zero-crossing positions.
#[derive(Debug, Clone, Default)]
pub struct ZeroCrossingSet {
    /// Positions where the field goes from non-positive to positive.
    pub rising: Vec<f64>,
    /// Positions where the field goes from positive to non-positive.
    pub falling: Vec<f64>,
}

impl ZeroCrossingSet {
    /// Crossings usable for period analysis: a full oscillation needs
    /// both edges, so the shorter sequence bounds the count.
    pub fn usable_len(&self) -> usize {
        self.rising.len().min(self.falling.len())
    }

    pub fn is_empty(&self) -> bool {
        self.usable_len() == 0
    }
}

/// Linear-interpolation root of the segment `(s0, f0) - (s1, f1)`.
fn linear_root(s0: f64, s1: f64, f0: f64, f1: f64) -> f64 {
    s0 + (s1 - s0) * f0 / (f0 - f1)
}

/// Scan `field` once and record rising/falling crossings, each sequence
/// capped at `capacity`. The scan stops early only once both sequences
/// have filled.
pub fn find_field_zeros(field: &SampledField, abs_tol: f64, capacity: usize) -> ZeroCrossingSet {
    let mut set = ZeroCrossingSet::default();
    let mut rising_full = false;
    let mut falling_full = false;

    let mut prev_v = 0.0;
    let mut prev_s = 0.0;
    let mut was_positive = false;
    let mut was_zero = false;

    for (i, &v) in field.values.iter().enumerate() {
        let s = field.position(i);
        let is_zero = v == 0.0;
        let is_positive = v > abs_tol;

        if i > 0 {
            if is_positive {
                if !was_positive && !was_zero {
                    if set.rising.len() < capacity {
                        set.rising.push(linear_root(prev_s, s, prev_v, v));
                    } else {
                        if falling_full {
                            break;
                        }
                        rising_full = true;
                    }
                }
            } else if was_positive && !is_zero {
                if set.falling.len() < capacity {
                    set.falling.push(linear_root(prev_s, s, prev_v, v));
                } else {
                    if rising_full {
                        break;
                    }
                    falling_full = true;
                }
            }
        }

        prev_v = v;
        prev_s = s;
        was_positive = is_positive;
        was_zero = is_zero;
    }

    set
}
