// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Transversely Uniform Field
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sampled magnetic field that depends only on the longitudinal
//! coordinate. Fields of this kind can be summed across elements into a
//! single effective field for the radiation integrals.

use ndarray::Array1;

use und_math::resample::interp_cubic;
use und_types::config::ContainerConfig;
use und_types::error::{MagError, MagResult};
use und_types::field::SampledField;
use und_types::model::{FieldAxis, PeriodicFieldModel};

/// Two-component field on a uniform longitudinal grid.
///
/// Samples with magnitude at or below the zero tolerance are clamped to
/// exactly 0 on construction, and the per-component is-zero flags are
/// derived from the clamped data.
#[derive(Debug, Clone, PartialEq)]
pub struct TrUnifField {
    bx: Option<Array1<f64>>,
    bz: Option<Array1<f64>>,
    s_start: f64,
    s_step: f64,
    hor_is_zero: bool,
    ver_is_zero: bool,
}

impl TrUnifField {
    /// Build from raw component arrays. Requires a positive step, at
    /// least one component, and equal lengths for present components.
    pub fn new(
        bx: Option<Vec<f64>>,
        bz: Option<Vec<f64>>,
        s_start: f64,
        s_step: f64,
        zero_tol: f64,
    ) -> MagResult<Self> {
        if !(s_step > 0.0) {
            return Err(MagError::InvalidParameter {
                stage: "transversely uniform field",
                message: format!("sample step must be > 0, got {s_step}"),
            });
        }
        let np = match (&bx, &bz) {
            (Some(x), Some(z)) => {
                if x.len() != z.len() {
                    return Err(MagError::InvalidParameter {
                        stage: "transversely uniform field",
                        message: format!(
                            "component lengths differ: {} vs {}",
                            x.len(),
                            z.len()
                        ),
                    });
                }
                x.len()
            }
            (Some(x), None) => x.len(),
            (None, Some(z)) => z.len(),
            (None, None) => 0,
        };
        if np == 0 {
            return Err(MagError::InvalidParameter {
                stage: "transversely uniform field",
                message: "at least one non-empty field component required".to_string(),
            });
        }

        let clamp = |values: Vec<f64>| -> (Array1<f64>, bool) {
            let arr = Array1::from_iter(
                values
                    .into_iter()
                    .map(|v| if v.abs() <= zero_tol { 0.0 } else { v }),
            );
            let is_zero = arr.iter().all(|&v| v == 0.0);
            (arr, is_zero)
        };

        let (bx, hor_is_zero) = match bx {
            Some(v) => {
                let (arr, z) = clamp(v);
                (Some(arr), z)
            }
            None => (None, true),
        };
        let (bz, ver_is_zero) = match bz {
            Some(v) => {
                let (arr, z) = clamp(v);
                (Some(arr), z)
            }
            None => (None, true),
        };

        Ok(TrUnifField {
            bx,
            bz,
            s_start,
            s_step,
            hor_is_zero,
            ver_is_zero,
        })
    }

    /// Sample a periodic model onto a uniform grid spanning its extent.
    /// Only axes with harmonics get a component array.
    pub fn from_periodic(model: &PeriodicFieldModel, cfg: &ContainerConfig) -> MagResult<Self> {
        let ppp = cfg.synthesis_points_per_period.max(2);
        let s_step = model.period / ppp as f64;
        let (s_start, s_end) = model.extent();
        let np = ((s_end - s_start) / s_step).floor() as usize + 1;

        let has_hor = model.has_axis(FieldAxis::Horizontal);
        let has_ver = model.has_axis(FieldAxis::Vertical);

        let mut bx = if has_hor { Some(Vec::with_capacity(np)) } else { None };
        let mut bz = if has_ver { Some(Vec::with_capacity(np)) } else { None };
        for i in 0..np {
            let (x, z) = model.field_at(s_start + i as f64 * s_step);
            if let Some(v) = bx.as_mut() {
                v.push(x);
            }
            if let Some(v) = bz.as_mut() {
                v.push(z);
            }
        }
        if bx.is_none() && bz.is_none() {
            // Model without harmonics reduces to a zero vertical field.
            bz = Some(vec![0.0; np]);
        }
        TrUnifField::new(bx, bz, s_start, s_step, cfg.field_zero_tol)
    }

    pub fn np(&self) -> usize {
        self.bx
            .as_ref()
            .or(self.bz.as_ref())
            .map(|a| a.len())
            .unwrap_or(0)
    }

    pub fn s_start(&self) -> f64 {
        self.s_start
    }

    pub fn s_step(&self) -> f64 {
        self.s_step
    }

    /// Longitudinal extent `[first sample, last sample]`.
    pub fn extent(&self) -> (f64, f64) {
        (
            self.s_start,
            self.s_start + (self.np().saturating_sub(1)) as f64 * self.s_step,
        )
    }

    pub fn horizontal(&self) -> Option<SampledField<'_>> {
        self.component(&self.bx)
    }

    pub fn vertical(&self) -> Option<SampledField<'_>> {
        self.component(&self.bz)
    }

    fn component<'a>(&'a self, arr: &'a Option<Array1<f64>>) -> Option<SampledField<'a>> {
        arr.as_ref().map(|a| SampledField {
            values: a.as_slice().expect("field data must be contiguous"),
            s_start: self.s_start,
            s_step: self.s_step,
        })
    }

    pub fn hor_field_is_zero(&self) -> bool {
        self.hor_is_zero
    }

    pub fn ver_field_is_zero(&self) -> bool {
        self.ver_is_zero
    }

    pub fn max_abs_horizontal(&self) -> f64 {
        self.horizontal().map(|f| f.max_abs()).unwrap_or(0.0)
    }

    pub fn max_abs_vertical(&self) -> f64 {
        self.vertical().map(|f| f.max_abs()).unwrap_or(0.0)
    }

    /// Sum several transversely-uniform fields onto a common grid: the
    /// union of all extents at the finest source step. Each member
    /// contributes only inside its own span; outside it pads with zero.
    /// Returns `None` for an empty input.
    pub fn sum<'a, I>(fields: I, zero_tol: f64) -> Option<TrUnifField>
    where
        I: IntoIterator<Item = &'a TrUnifField>,
    {
        let fields: Vec<&TrUnifField> = fields.into_iter().collect();
        if fields.is_empty() {
            return None;
        }

        let s_min = fields
            .iter()
            .map(|f| f.extent().0)
            .fold(f64::INFINITY, f64::min);
        let s_max = fields
            .iter()
            .map(|f| f.extent().1)
            .fold(f64::NEG_INFINITY, f64::max);
        let step = fields
            .iter()
            .map(|f| f.s_step)
            .fold(f64::INFINITY, f64::min);
        let np = ((s_max - s_min) / step).round() as usize + 1;

        let any_hor = fields.iter().any(|f| f.bx.is_some());
        let any_ver = fields.iter().any(|f| f.bz.is_some());

        fn accumulate(
            fields: &[&TrUnifField],
            vertical: bool,
            s_min: f64,
            step: f64,
            np: usize,
        ) -> Vec<f64> {
            (0..np)
                .map(|i| {
                    let s = s_min + i as f64 * step;
                    fields
                        .iter()
                        .filter_map(|f| {
                            let comp = (if vertical { f.vertical() } else { f.horizontal() })?;
                            let (start, end) = f.extent();
                            if s < start - 0.5 * f.s_step || s > end + 0.5 * f.s_step {
                                return None;
                            }
                            Some(interp_cubic(comp.values, comp.s_start, comp.s_step, s))
                        })
                        .sum()
                })
                .collect()
        }

        let bx = any_hor.then(|| accumulate(&fields, false, s_min, step, np));
        let bz = any_ver.then(|| accumulate(&fields, true, s_min, step, np));

        // np >= 1 and at least one component exists, so this cannot fail.
        Some(
            TrUnifField::new(bx, bz, s_min, step, zero_tol)
                .expect("summed field construction is infallible"),
        )
    }
}
