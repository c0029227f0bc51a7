// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Periodic Structure Extraction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dual-axis pipeline from raw field measurements to a harmonic model.
//!
//! Per axis: zero-crossing scan, period selection, structure length and
//! center from the crossing train. The dominant axis then fixes the
//! period both axes are harmonic-analyzed over, and the two harmonic
//! lists concatenate (horizontal first) into one model. Every
//! recoverable dead end records a warning and degrades to an empty
//! result instead of failing.

use und_math::period::find_one_period;
use und_math::resample::{resample_one_period, rotate_to_cosine_layout};
use und_math::zeros::find_field_zeros;
use und_types::config::AnalysisConfig;
use und_types::error::{MagError, MagResult};
use und_types::field::SampledField;
use und_types::model::{FieldAxis, MagneticHarmonic, PeriodicFieldModel, UndulatorKind};
use und_types::warning::{Warning, WarningLog};

use crate::harmonics::analyze_for_harmonics;

/// Basic periodic parameters of one measured axis. All zero when no
/// period was found.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisPeriodicParam {
    pub period: f64,
    pub length: f64,
    pub center: f64,
    pub s_start_per: f64,
    pub max_abs: f64,
}

/// Result of a periodic-structure extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// `None` when no periodic structure was detected.
    pub model: Option<PeriodicFieldModel>,
    pub warnings: WarningLog,
}

/// Scan one axis for its basic periodic parameters.
///
/// `abs_tol_b` is the zero-crossing noise tolerance in field units
/// (a fraction of the axis peak field).
pub fn find_basic_periodic_param(
    field: &SampledField,
    abs_tol_b: f64,
    capacity: usize,
    axis: FieldAxis,
    warnings: &mut WarningLog,
) -> AxisPeriodicParam {
    let mut param = AxisPeriodicParam {
        max_abs: field.max_abs(),
        ..AxisPeriodicParam::default()
    };

    let set = find_field_zeros(field, abs_tol_b, capacity);
    let usable = set.usable_len();
    if usable <= 1 {
        warnings.push(if usable == 0 {
            Warning::NoZeroCrossings(axis)
        } else {
            Warning::NoPeriodFound(axis)
        });
        return param;
    }

    let rising = &set.rising[..usable];
    let Some(one_per) = find_one_period(rising) else {
        warnings.push(Warning::NoPeriodFound(axis));
        return param;
    };

    param.period = one_per.period;
    param.s_start_per = one_per.s_start;
    param.length = rising[usable - 1] - rising[0];
    param.center = rising[0] + 0.5 * param.length;
    param
}

/// Pick the axis that defines the merged period/length/center.
///
/// Ladder: an axis with the only valid period wins; otherwise a peak
/// field more than twice the other's wins; otherwise horizontal wins
/// when its period exceeds 0.8x the vertical one.
pub fn choose_dominant_periodic_param(
    hor: &AxisPeriodicParam,
    ver: &AxisPeriodicParam,
    warnings: &mut WarningLog,
) -> Option<AxisPeriodicParam> {
    if hor.period <= 0.0 && ver.period <= 0.0 {
        warnings.push(Warning::NoFieldHarmonics);
        return None;
    }

    let use_vertical = if hor.period > 0.0 && ver.period <= 0.0 {
        false
    } else if ver.period > 0.0 && hor.period <= 0.0 {
        true
    } else if ver.max_abs > 2.0 * hor.max_abs {
        true
    } else if hor.max_abs > 2.0 * ver.max_abs {
        false
    } else {
        !(hor.period > 0.8 * ver.period)
    };

    let chosen = if use_vertical { *ver } else { *hor };
    if chosen.period <= 0.0 {
        warnings.push(Warning::NoFieldHarmonics);
        return None;
    }
    Some(chosen)
}

/// Resample one period of the raw data and decompose it into harmonics.
pub fn find_field_harmonics(
    field: &SampledField,
    period: f64,
    s_start_per: f64,
    axis: FieldAxis,
    cfg: &AnalysisConfig,
) -> MagResult<Vec<MagneticHarmonic>> {
    let mut one_per_b = resample_one_period(field, s_start_per, period, cfg.resample_points);
    if one_per_b.is_empty() {
        return Ok(Vec::new());
    }
    rotate_to_cosine_layout(&mut one_per_b);
    analyze_for_harmonics(&one_per_b, period, cfg.rel_prec, axis, cfg.max_harmonics)
}

/// Concatenate per-axis harmonic lists, horizontal first. Both empty
/// records the no-harmonics warning.
pub fn sum_up_harmonics(
    hor: Vec<MagneticHarmonic>,
    ver: Vec<MagneticHarmonic>,
    warnings: &mut WarningLog,
) -> Vec<MagneticHarmonic> {
    if hor.is_empty() && ver.is_empty() {
        warnings.push(Warning::NoFieldHarmonics);
        return Vec::new();
    }
    let mut total = hor;
    total.extend(ver);
    total
}

/// Full extraction: raw horizontal/vertical measurements to a periodic
/// field model. At least one axis must be supplied.
pub fn extract_periodic_model(
    hor: Option<SampledField<'_>>,
    ver: Option<SampledField<'_>>,
    cfg: &AnalysisConfig,
) -> MagResult<Extraction> {
    if hor.is_none() && ver.is_none() {
        return Err(MagError::InvalidParameter {
            stage: "periodic structure extraction",
            message: "at least one field component must be supplied".to_string(),
        });
    }

    let mut warnings = WarningLog::new();

    // An axis below the absolute field floor counts as absent.
    let mut axis_param = |field: &Option<SampledField<'_>>, axis: FieldAxis| {
        field.as_ref().and_then(|f| {
            let max_abs = f.max_abs();
            if max_abs <= cfg.abs_field_tol {
                return None;
            }
            Some(find_basic_periodic_param(
                f,
                cfg.rel_tol_period_search * max_abs,
                cfg.zero_crossing_capacity,
                axis,
                &mut warnings,
            ))
        })
    };

    let hor_param = axis_param(&hor, FieldAxis::Horizontal);
    let ver_param = axis_param(&ver, FieldAxis::Vertical);

    let hor_param = hor_param.unwrap_or_default();
    let ver_param = ver_param.unwrap_or_default();

    let Some(dominant) = choose_dominant_periodic_param(&hor_param, &ver_param, &mut warnings)
    else {
        return Ok(Extraction {
            model: None,
            warnings,
        });
    };

    let mut harmonics_for = |field: &Option<SampledField<'_>>,
                             param: &AxisPeriodicParam,
                             axis: FieldAxis|
     -> MagResult<Vec<MagneticHarmonic>> {
        let Some(f) = field.as_ref() else {
            return Ok(Vec::new());
        };
        if param.max_abs <= cfg.abs_field_tol {
            return Ok(Vec::new());
        }
        let harms = find_field_harmonics(f, dominant.period, dominant.s_start_per, axis, cfg)?;
        if harms.is_empty() {
            warnings.push(Warning::NoHarmonicsAboveThreshold(axis));
        }
        Ok(harms)
    };

    let hor_harms = harmonics_for(&hor, &hor_param, FieldAxis::Horizontal)?;
    let ver_harms = harmonics_for(&ver, &ver_param, FieldAxis::Vertical)?;

    let total = sum_up_harmonics(hor_harms, ver_harms, &mut warnings);
    if total.is_empty() {
        return Ok(Extraction {
            model: None,
            warnings,
        });
    }

    let model = PeriodicFieldModel::new(
        dominant.period,
        dominant.length,
        dominant.center,
        total,
        UndulatorKind::Normal,
    )?;

    Ok(Extraction {
        model: Some(model),
        warnings,
    })
}
