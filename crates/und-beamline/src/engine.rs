// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Radiation Engine Interface
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Interface types toward the external radiation-integral engine. The
//! engine's numerics live elsewhere; this crate only guarantees it a
//! consistent layout: one summed transversely-uniform field plus a
//! sorted, gap-filled sequence of discrete elements.

use serde::{Deserialize, Serialize};

use und_field::truniform::TrUnifField;
use und_types::config::ContainerConfig;
use und_types::error::MagResult;

use crate::container::ElementContainer;

/// Electron beam parameters the radiation integrals need.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElectronBeam {
    /// Beam energy [GeV].
    pub energy_gev: f64,
    /// Average current [A].
    pub current_a: f64,
    /// Longitudinal start position of the beam [m].
    pub s0: f64,
}

/// Observation grid specification: longitudinal and transverse bounds
/// with point counts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SamplingGrid {
    pub s_start: f64,
    pub s_end: f64,
    pub ns: usize,
    pub x_start: f64,
    pub x_end: f64,
    pub nx: usize,
    pub z_start: f64,
    pub z_end: f64,
    pub nz: usize,
}

/// What the engine integrates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrecisionMode {
    Intensity,
    Flux,
}

/// Four-component polarization/intensity description of emitted
/// radiation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StokesVector {
    pub s0: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

/// Normalized beamline ready for radiation integration.
#[derive(Debug, Clone)]
pub struct BeamlineLayout {
    /// Sum of all transversely-uniform contributions, if any.
    pub uniform: Option<TrUnifField>,
    /// Discrete elements, sorted and gap-filled.
    pub others: ElementContainer,
}

impl BeamlineLayout {
    /// Split a container into its summed uniform field and normalized
    /// discrete elements.
    pub fn prepare(container: ElementContainer, cfg: &ContainerConfig) -> MagResult<Self> {
        let (uniform_cont, mut others) = container.filter_transversely_uniform(cfg)?;

        let fields: Vec<&TrUnifField> = uniform_cont
            .iter()
            .filter_map(|(_, elem)| match elem {
                crate::element::MagneticElement::TrUnif(f) => Some(f),
                _ => None,
            })
            .collect();
        let uniform = TrUnifField::sum(fields, cfg.field_zero_tol);

        if !others.is_empty() {
            others.normalize(cfg)?;
        }

        Ok(BeamlineLayout { uniform, others })
    }
}

/// The external Stokes-parameter engine. Implementations receive the
/// prepared layout and write one Stokes vector per grid point into the
/// caller-owned accumulator.
pub trait RadiationIntegralEngine {
    fn compute_stokes(
        &mut self,
        beam: &ElectronBeam,
        layout: &BeamlineLayout,
        grid: &SamplingGrid,
        mode: PrecisionMode,
        accumulator: &mut [StokesVector],
    ) -> MagResult<()>;
}
