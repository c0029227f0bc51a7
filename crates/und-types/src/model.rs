// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Periodic Field Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analytic description of a periodic magnetic structure as a finite set
//! of field harmonics, each reduced to a dimensionless deflection
//! parameter K.

use serde::{Deserialize, Serialize};

use crate::constants::B_TO_K;
use crate::error::{MagError, MagResult};

/// Transverse field component a harmonic deflects in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldAxis {
    Horizontal,
    Vertical,
}

impl FieldAxis {
    pub fn name(&self) -> &'static str {
        match self {
            FieldAxis::Horizontal => "horizontal",
            FieldAxis::Vertical => "vertical",
        }
    }
}

/// One magnetic harmonic of the periodic field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagneticHarmonic {
    /// Harmonic order (1 = fundamental).
    pub order: u32,
    pub axis: FieldAxis,
    /// Deflection parameter, normalized per harmonic order.
    pub k: f64,
    /// Sine phase [rad], referenced to the structure center.
    pub phase: f64,
}

/// Periodic-structure flavor with its kind-specific parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UndulatorKind {
    Infinite,
    Normal,
    /// Relative field change over the structure length.
    Tapered(f64),
    /// Phase shift between the two sections.
    OpticalKlystron(f64),
}

/// Convert a peak field amplitude [T] at the fundamental wavelength into K.
pub fn b_to_k(period: f64, b: f64) -> f64 {
    B_TO_K * period * b
}

/// Invert [`b_to_k`] for a harmonic of the given order (K is stored
/// normalized per order).
pub fn k_to_b(period: f64, k: f64, order: u32) -> f64 {
    k * order as f64 / (B_TO_K * period)
}

/// Harmonic-series model of a periodic magnetic field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicFieldModel {
    /// Spatial period [m], > 0.
    pub period: f64,
    /// Total structure length [m], > 0.
    pub length: f64,
    /// Longitudinal center position [m].
    pub center: f64,
    /// Horizontal harmonics first, then vertical, each ordered as emitted.
    pub harmonics: Vec<MagneticHarmonic>,
    pub kind: UndulatorKind,
}

impl PeriodicFieldModel {
    pub fn new(
        period: f64,
        length: f64,
        center: f64,
        harmonics: Vec<MagneticHarmonic>,
        kind: UndulatorKind,
    ) -> MagResult<Self> {
        if !(period > 0.0) {
            return Err(MagError::InvalidParameter {
                stage: "periodic field model",
                message: format!("period must be > 0, got {period}"),
            });
        }
        if !(length > 0.0) {
            return Err(MagError::InvalidParameter {
                stage: "periodic field model",
                message: format!("length must be > 0, got {length}"),
            });
        }
        Ok(PeriodicFieldModel {
            period,
            length,
            center,
            harmonics,
            kind,
        })
    }

    /// Longitudinal extent `[start, end]`, centered on `center`.
    pub fn extent(&self) -> (f64, f64) {
        (self.center - 0.5 * self.length, self.center + 0.5 * self.length)
    }

    /// Number of full periods the structure spans.
    pub fn period_count(&self) -> usize {
        (self.length / self.period) as usize
    }

    pub fn has_axis(&self, axis: FieldAxis) -> bool {
        self.harmonics.iter().any(|h| h.axis == axis && h.k > 0.0)
    }

    /// Evaluate the analytic field at position `s` [m].
    ///
    /// Returns `(bx, bz)` [T]. Each harmonic contributes
    /// `B_n * sin(2*pi*n*(s - center)/period + phase)`.
    pub fn field_at(&self, s: f64) -> (f64, f64) {
        let mut bx = 0.0;
        let mut bz = 0.0;
        for h in &self.harmonics {
            let amp = k_to_b(self.period, h.k, h.order);
            let arg =
                2.0 * std::f64::consts::PI * h.order as f64 * (s - self.center) / self.period
                    + h.phase;
            match h.axis {
                FieldAxis::Horizontal => bx += amp * arg.sin(),
                FieldAxis::Vertical => bz += amp * arg.sin(),
            }
        }
        (bx, bz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harm(order: u32, axis: FieldAxis, k: f64) -> MagneticHarmonic {
        MagneticHarmonic {
            order,
            axis,
            k,
            phase: 0.0,
        }
    }

    #[test]
    fn test_model_validation() {
        let h = vec![harm(1, FieldAxis::Vertical, 1.0)];
        assert!(PeriodicFieldModel::new(0.0, 1.0, 0.0, h.clone(), UndulatorKind::Normal).is_err());
        assert!(PeriodicFieldModel::new(0.05, 0.0, 0.0, h.clone(), UndulatorKind::Normal).is_err());
        assert!(PeriodicFieldModel::new(0.05, 1.6, 0.0, h, UndulatorKind::Normal).is_ok());
    }

    #[test]
    fn test_k_b_roundtrip() {
        let period = 0.035;
        let b = 0.72;
        let k = b_to_k(period, b);
        assert!((k_to_b(period, k, 1) - b).abs() < 1e-12);
        // Order-n harmonics store K normalized per order.
        let k3 = b_to_k(period, b) / 3.0;
        assert!((k_to_b(period, k3, 3) - b).abs() < 1e-12);
    }

    #[test]
    fn test_extent_is_centered() {
        let model = PeriodicFieldModel::new(
            0.05,
            2.0,
            10.0,
            vec![harm(1, FieldAxis::Vertical, 2.0)],
            UndulatorKind::Normal,
        )
        .unwrap();
        let (start, end) = model.extent();
        assert!((start - 9.0).abs() < 1e-12);
        assert!((end - 11.0).abs() < 1e-12);
        assert_eq!(model.period_count(), 40);
    }

    #[test]
    fn test_field_at_peak_amplitude() {
        let period = 0.05;
        let b = 0.8;
        let model = PeriodicFieldModel::new(
            period,
            1.0,
            0.0,
            vec![harm(1, FieldAxis::Vertical, b_to_k(period, b))],
            UndulatorKind::Normal,
        )
        .unwrap();
        // sin peaks a quarter period past the center
        let (bx, bz) = model.field_at(0.25 * period);
        assert!(bx.abs() < 1e-12);
        assert!((bz - b).abs() < 1e-10, "bz = {bz}, expected {b}");
        assert!(model.has_axis(FieldAxis::Vertical));
        assert!(!model.has_axis(FieldAxis::Horizontal));
    }
}
