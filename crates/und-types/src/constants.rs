// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176462e-19;

/// Electron rest mass (kg)
pub const M_ELECTRON: f64 = 9.10938188e-31;

/// Speed of light in vacuum (m/s)
pub const SPEED_LIGHT: f64 = 2.99792458e8;

/// Field-to-deflection-parameter coefficient [1/(T*m)]:
/// `K = B_TO_K * period * B` for a peak field B at the fundamental.
/// Evaluates to ~93.3729 with the charge/mass values above.
pub const B_TO_K: f64 = Q_ELECTRON / (2.0 * std::f64::consts::PI * M_ELECTRON * SPEED_LIGHT);
