// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Magnetic Elements
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Beamline element variants. A closed enum with exhaustive matching;
//! every variant exposes a longitudinal extent and a transverse center.

use serde::{Deserialize, Serialize};

use und_field::truniform::TrUnifField;
use und_types::model::PeriodicFieldModel;

use crate::container::ElementContainer;

/// Quadrupole-like focusing element. Its optics are computed elsewhere;
/// the container only consumes extent and transverse center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipole {
    /// Gradient strength [T/m]; positive focuses horizontally.
    pub strength: f64,
    /// Effective length [m], > 0.
    pub length: f64,
    /// Longitudinal center position [m].
    pub s_center: f64,
    /// Transverse center offset (x, y) [m].
    pub center: (f64, f64),
}

/// Field-free propagation gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drift {
    /// Gap length [m], > 0.
    pub length: f64,
    /// Longitudinal start position [m].
    pub s_start: f64,
}

/// Any element a beamline container can hold.
#[derive(Debug, Clone)]
pub enum MagneticElement {
    /// Analytic periodic source (undulator/wiggler).
    Periodic(PeriodicFieldModel),
    /// Measured or synthesized transversely-uniform field.
    TrUnif(TrUnifField),
    Multipole(Multipole),
    Drift(Drift),
    /// Nested group of elements with its own ordering.
    Group(ElementContainer),
}

impl MagneticElement {
    /// Longitudinal extent `[start, end]`.
    pub fn extent(&self) -> (f64, f64) {
        match self {
            MagneticElement::Periodic(model) => model.extent(),
            MagneticElement::TrUnif(field) => field.extent(),
            MagneticElement::Multipole(m) => {
                (m.s_center - 0.5 * m.length, m.s_center + 0.5 * m.length)
            }
            MagneticElement::Drift(d) => (d.s_start, d.s_start + d.length),
            MagneticElement::Group(container) => container.extent(),
        }
    }

    /// Transverse center (x, y). Fields and drifts sit on axis.
    pub fn transverse_center(&self) -> (f64, f64) {
        match self {
            MagneticElement::Multipole(m) => m.center,
            MagneticElement::Periodic(_)
            | MagneticElement::TrUnif(_)
            | MagneticElement::Drift(_)
            | MagneticElement::Group(_) => (0.0, 0.0),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            MagneticElement::Periodic(_) => "periodic",
            MagneticElement::TrUnif(_) => "transversely-uniform",
            MagneticElement::Multipole(_) => "multipole",
            MagneticElement::Drift(_) => "drift",
            MagneticElement::Group(_) => "group",
        }
    }
}

impl From<Multipole> for MagneticElement {
    fn from(m: Multipole) -> Self {
        MagneticElement::Multipole(m)
    }
}

impl From<Drift> for MagneticElement {
    fn from(d: Drift) -> Self {
        MagneticElement::Drift(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipole_extent_is_centered() {
        let elem: MagneticElement = Multipole {
            strength: 2.0,
            length: 0.4,
            s_center: 3.0,
            center: (0.001, -0.002),
        }
        .into();
        let (start, end) = elem.extent();
        assert!((start - 2.8).abs() < 1e-12);
        assert!((end - 3.2).abs() < 1e-12);
        assert_eq!(elem.transverse_center(), (0.001, -0.002));
        assert_eq!(elem.kind_name(), "multipole");
    }

    #[test]
    fn test_drift_extent_runs_forward() {
        let elem: MagneticElement = Drift {
            length: 1.5,
            s_start: -0.5,
        }
        .into();
        let (start, end) = elem.extent();
        assert!((start + 0.5).abs() < 1e-12);
        assert!((end - 1.0).abs() < 1e-12);
    }
}
