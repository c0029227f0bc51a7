// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Period Selection
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pick the single most self-consistent period from a sequence of rising
//! zero-crossing positions.
//!
//! Measured fields are distorted near the ends of the structure, so the
//! interval whose neighbors are most evenly spaced (smallest second
//! difference of crossing positions) gives the least-distorted estimate.

/// One selected period of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePeriod {
    /// Position of the crossing that starts the period.
    pub s_start: f64,
    /// Period length, > 0 when found.
    pub period: f64,
}

/// Select a period from rising crossing positions. Returns `None` when
/// fewer than two crossings exist or no interval is locally consistent.
pub fn find_one_period(rising: &[f64]) -> Option<OnePeriod> {
    if rising.len() < 2 {
        return None;
    }
    if rising.len() == 2 {
        return Some(OnePeriod {
            s_start: rising[0],
            period: rising[1] - rising[0],
        });
    }

    // Seed with the whole-train span; an interior triple must beat it.
    let mut min_dif = (rising[rising.len() - 1] - rising[0]).abs();
    let mut i_min: Option<usize> = None;

    for i in 2..rising.len() {
        let cur_dif = (rising[i] - 2.0 * rising[i - 1] + rising[i - 2]).abs();
        if min_dif > cur_dif {
            min_dif = cur_dif;
            i_min = Some(i);
        }
    }

    let i = i_min?;
    Some(OnePeriod {
        s_start: rising[i - 1],
        period: rising[i] - rising[i - 1],
    })
}
