// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Element Factory
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Resolution of external element specifications (tag + numeric
//! parameters) into concrete element variants. Tags are matched
//! case-insensitively; anything unrecognized is an error, not a guess.

use serde::{Deserialize, Serialize};

use und_types::error::{MagError, MagResult};

use crate::element::{Drift, MagneticElement, Multipole};

/// One element entry of a beamline description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Element kind tag, e.g. "quadrupole" or "drift".
    pub kind: String,
    /// Gradient strength [T/m] for focusing elements.
    #[serde(default)]
    pub strength: f64,
    /// Effective length [m].
    #[serde(default)]
    pub length: f64,
    /// Longitudinal center position [m].
    #[serde(default)]
    pub s_center: f64,
    /// Transverse center offset (x, y) [m].
    #[serde(default)]
    pub center: (f64, f64),
}

/// Resolve a specification into an element, validating its geometry.
pub fn resolve_element(spec: &ElementSpec) -> MagResult<MagneticElement> {
    let require_positive_length = || -> MagResult<f64> {
        if spec.length > 0.0 {
            Ok(spec.length)
        } else {
            Err(MagError::InvalidParameter {
                stage: "element factory",
                message: format!(
                    "{} length must be > 0, got {}",
                    spec.kind, spec.length
                ),
            })
        }
    };

    match spec.kind.to_ascii_lowercase().as_str() {
        "quadrupole" | "multipole" => {
            let length = require_positive_length()?;
            Ok(MagneticElement::Multipole(Multipole {
                strength: spec.strength,
                length,
                s_center: spec.s_center,
                center: spec.center,
            }))
        }
        "drift" => {
            let length = require_positive_length()?;
            Ok(MagneticElement::Drift(Drift {
                length,
                s_start: spec.s_center - 0.5 * length,
            }))
        }
        _ => Err(MagError::UnknownElementKind(spec.kind.clone())),
    }
}
