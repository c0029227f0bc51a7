// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Field Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field-level algorithms: transversely-uniform sampled fields, harmonic
//! analysis, and the dual-axis periodic-structure extraction pipeline.

pub mod extract;
pub mod harmonics;
pub mod trajectory;
pub mod truniform;
