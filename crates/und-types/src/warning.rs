// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Warnings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Recoverable analysis conditions, collected per invocation.
//!
//! A zero-harmonic outcome means "no periodic structure detected", not
//! malformed input; callers read the log after a pipeline run.

use crate::model::FieldAxis;

/// Recoverable condition recorded during field analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Field never crossed the noise tolerance on the given axis.
    NoZeroCrossings(FieldAxis),
    /// Zero crossings found, but no self-consistent period among them.
    NoPeriodFound(FieldAxis),
    /// A period was found, but every harmonic fell below the threshold.
    NoHarmonicsAboveThreshold(FieldAxis),
    /// No magnetic field harmonics found on either axis.
    NoFieldHarmonics,
}

impl Warning {
    pub fn message(&self) -> String {
        match self {
            Warning::NoZeroCrossings(axis) => {
                format!("no field zero crossings found ({} axis)", axis.name())
            }
            Warning::NoPeriodFound(axis) => {
                format!("no self-consistent field period found ({} axis)", axis.name())
            }
            Warning::NoHarmonicsAboveThreshold(axis) => {
                format!("no field harmonics above threshold ({} axis)", axis.name())
            }
            Warning::NoFieldHarmonics => "no magnetic field harmonics found".to_string(),
        }
    }
}

/// Append-only warning list scoped to a single pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct WarningLog {
    entries: Vec<Warning>,
}

impl WarningLog {
    pub fn new() -> Self {
        WarningLog::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.entries.push(warning);
    }

    pub fn contains(&self, warning: Warning) -> bool {
        self.entries.contains(&warning)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.entries.iter()
    }

    /// Absorb another log, e.g. from a per-axis sub-step.
    pub fn extend(&mut self, other: WarningLog) {
        self.entries.extend(other.entries);
    }
}
