// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Knobs of the harmonic-extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Relative precision threshold for keeping a harmonic (default: 0.01)
    #[serde(default = "default_rel_prec")]
    pub rel_prec: f64,
    /// Highest harmonic order requested (default: 10)
    #[serde(default = "default_max_harmonics")]
    pub max_harmonics: usize,
    /// One-period resample resolution, power of two (default: 128)
    #[serde(default = "default_resample_points")]
    pub resample_points: usize,
    /// Absolute field floor [T] below which an axis counts as absent
    /// (default: 1e-6)
    #[serde(default = "default_abs_field_tol")]
    pub abs_field_tol: f64,
    /// Fraction of the peak field used as the zero-crossing noise
    /// tolerance (default: 0.2)
    #[serde(default = "default_rel_tol_period_search")]
    pub rel_tol_period_search: f64,
    /// Cap on recorded zero crossings per direction (default: 50000)
    #[serde(default = "default_zero_crossing_capacity")]
    pub zero_crossing_capacity: usize,
}

fn default_rel_prec() -> f64 {
    0.01
}
fn default_max_harmonics() -> usize {
    10
}
fn default_resample_points() -> usize {
    128
}
fn default_abs_field_tol() -> f64 {
    1.0e-6
}
fn default_rel_tol_period_search() -> f64 {
    0.2
}
fn default_zero_crossing_capacity() -> usize {
    50_000
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            rel_prec: default_rel_prec(),
            max_harmonics: default_max_harmonics(),
            resample_points: default_resample_points(),
            abs_field_tol: default_abs_field_tol(),
            rel_tol_period_search: default_rel_tol_period_search(),
            zero_crossing_capacity: default_zero_crossing_capacity(),
        }
    }
}

/// Tolerances of element-container normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Longitudinal gap tolerance [m] (default: 0.001). Gaps wider than
    /// this are filled with explicit drift elements.
    #[serde(default = "default_length_tol")]
    pub length_tol: f64,
    /// Overlap tolerance as a multiple of `length_tol` (default: 100).
    /// Inherited asymmetry: overlap detection is two orders of magnitude
    /// looser than gap detection, with no recorded justification upstream.
    /// Kept separately configurable pending review.
    #[serde(default = "default_overlap_tol_factor")]
    pub overlap_tol_factor: f64,
    /// Sampling resolution when reducing a periodic source to a sampled
    /// transversely-uniform field (default: 64 points per period)
    #[serde(default = "default_synthesis_points_per_period")]
    pub synthesis_points_per_period: usize,
    /// Field magnitude [T] below which a sample is clamped to exactly
    /// zero when building sampled fields (default: 1e-6)
    #[serde(default = "default_field_zero_tol")]
    pub field_zero_tol: f64,
}

fn default_length_tol() -> f64 {
    0.001
}
fn default_overlap_tol_factor() -> f64 {
    100.0
}
fn default_synthesis_points_per_period() -> usize {
    64
}
fn default_field_zero_tol() -> f64 {
    1.0e-6
}

impl Default for ContainerConfig {
    fn default() -> Self {
        ContainerConfig {
            length_tol: default_length_tol(),
            overlap_tol_factor: default_overlap_tol_factor(),
            synthesis_points_per_period: default_synthesis_points_per_period(),
            field_zero_tol: default_field_zero_tol(),
        }
    }
}

/// Top-level settings bundle, loadable from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub container: ContainerConfig,
}

impl Settings {
    pub fn from_file(path: &str) -> crate::error::MagResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        Ok(settings)
    }
}
