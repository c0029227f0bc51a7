// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Beamline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ordered collection of magnetic elements along a beamline: position
//! sort, overlap validation, drift-gap synthesis, and the split into
//! transversely-uniform and discrete elements the radiation integrals
//! consume.

pub mod container;
pub mod element;
pub mod engine;
pub mod factory;
