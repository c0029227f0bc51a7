// ─────────────────────────────────────────────────────────────────────
// SCPN Undulator Core — Element Container
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ordered, queryable collection of beamline elements.
//!
//! Lifecycle: unsorted on assembly, sorted by longitudinal start, then
//! normalized (overlaps rejected, gaps filled with explicit drifts)
//! before the radiation integrals may consume it. Sorting and
//! normalization are idempotent: re-running them neither reorders a
//! sorted container nor duplicates drifts.

use und_field::truniform::TrUnifField;
use und_types::config::ContainerConfig;
use und_types::error::{MagError, MagResult};

use crate::element::{Drift, MagneticElement};

/// Opaque element key, assigned monotonically per container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

/// Insertion-ordered element collection with cached longitudinal bounds.
#[derive(Debug, Clone, Default)]
pub struct ElementContainer {
    entries: Vec<(ElementId, MagneticElement)>,
    next_id: u32,
    gs_start: f64,
    gs_end: f64,
}

impl ElementContainer {
    pub fn new() -> Self {
        ElementContainer::default()
    }

    /// Append an element; amortized O(1).
    pub fn insert(&mut self, element: MagneticElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, element));
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<MagneticElement> {
        let pos = self.entries.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn get(&self, id: ElementId) -> Option<&MagneticElement> {
        self.entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &MagneticElement)> {
        self.entries.iter().map(|(id, e)| (*id, e))
    }

    /// Cached start bound from the last extent pass.
    pub fn gs_start(&self) -> f64 {
        self.gs_start
    }

    /// Cached end bound from the last extent pass.
    pub fn gs_end(&self) -> f64 {
        self.gs_end
    }

    /// Longitudinal bounds over all members, descending into groups.
    /// `(0, 0)` for an empty container.
    pub fn extent(&self) -> (f64, f64) {
        if self.entries.is_empty() {
            return (0.0, 0.0);
        }
        let mut start = f64::INFINITY;
        let mut end = f64::NEG_INFINITY;
        for (_, elem) in &self.entries {
            let (s, e) = elem.extent();
            start = start.min(s);
            end = end.max(e);
        }
        (start, end)
    }

    /// Recompute and cache the bounds, recursing into nested groups so
    /// their caches refresh as well.
    pub fn determine_extent(&mut self) -> (f64, f64) {
        for (_, elem) in self.entries.iter_mut() {
            if let MagneticElement::Group(group) = elem {
                group.determine_extent();
            }
        }
        let (start, end) = self.extent();
        self.gs_start = start;
        self.gs_end = end;
        (start, end)
    }

    /// Order members ascending by longitudinal start, insertion order
    /// breaking ties. Selection sort: element counts are tens, not
    /// millions, and stability under ties is what matters.
    pub fn sort_by_start(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.determine_extent();

        let mut remaining = std::mem::take(&mut self.entries);
        self.entries.reserve(remaining.len());
        while !remaining.is_empty() {
            let mut best = 0;
            let mut best_start = remaining[0].1.extent().0;
            for (i, entry) in remaining.iter().enumerate().skip(1) {
                let start = entry.1.extent().0;
                if start < best_start {
                    best = i;
                    best_start = start;
                }
            }
            self.entries.push(remaining.remove(best));
        }
    }

    /// Sort, validate overlaps, and fill gaps with explicit drifts so
    /// the sequence is contiguous for particle propagation.
    ///
    /// Overlap beyond `overlap_tol_factor * length_tol` aborts with
    /// [`MagError::OverlappingElements`]; the container is left in its
    /// sorted, pre-normalization state. Gaps wider than `length_tol` get
    /// a drift of exactly the gap length. Transversely-uniform members
    /// are dropped here; they are expected to have been filtered into
    /// the summed field beforehand.
    pub fn normalize(&mut self, cfg: &ContainerConfig) -> MagResult<()> {
        if self.entries.is_empty() {
            return Ok(());
        }
        self.sort_by_start();

        let overlap_tol = cfg.overlap_tol_factor * cfg.length_tol;
        let mut out: Vec<(ElementId, MagneticElement)> = Vec::with_capacity(self.entries.len());
        let mut next_id = self.next_id;
        let mut prev_end: Option<f64> = None;

        for (idx, (id, elem)) in self.entries.iter().enumerate() {
            if matches!(elem, MagneticElement::TrUnif(_)) {
                continue;
            }
            let (cur_start, cur_end) = elem.extent();
            if let Some(pe) = prev_end {
                if cur_start < pe - overlap_tol {
                    return Err(MagError::OverlappingElements {
                        index: idx,
                        prev_end: pe,
                        cur_start,
                    });
                }
                if cur_start > pe + cfg.length_tol {
                    out.push((
                        ElementId(next_id),
                        MagneticElement::Drift(Drift {
                            length: cur_start - pe,
                            s_start: pe,
                        }),
                    ));
                    next_id += 1;
                }
            }
            out.push((*id, elem.clone()));
            prev_end = Some(cur_end);
        }

        self.entries = out;
        self.next_id = next_id;
        self.determine_extent();
        Ok(())
    }

    /// Partition members into transversely-uniform fields (summable into
    /// one effective field) and everything else. Nested groups are
    /// flattened into the partition; periodic sources are reduced to
    /// sampled uniform fields on the way.
    pub fn filter_transversely_uniform(
        self,
        cfg: &ContainerConfig,
    ) -> MagResult<(ElementContainer, ElementContainer)> {
        let mut uniform = ElementContainer::new();
        let mut others = ElementContainer::new();
        self.filter_into(cfg, &mut uniform, &mut others)?;
        Ok((uniform, others))
    }

    fn filter_into(
        self,
        cfg: &ContainerConfig,
        uniform: &mut ElementContainer,
        others: &mut ElementContainer,
    ) -> MagResult<()> {
        for (_, elem) in self.entries {
            match elem {
                MagneticElement::Group(group) => group.filter_into(cfg, uniform, others)?,
                MagneticElement::TrUnif(field) => {
                    uniform.insert(MagneticElement::TrUnif(field));
                }
                MagneticElement::Periodic(model) => {
                    let reduced = TrUnifField::from_periodic(&model, cfg)?;
                    uniform.insert(MagneticElement::TrUnif(reduced));
                }
                other => {
                    others.insert(other);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Multipole;
    use und_types::model::{FieldAxis, MagneticHarmonic, PeriodicFieldModel, UndulatorKind};

    fn quad(s_center: f64, length: f64) -> MagneticElement {
        MagneticElement::Multipole(Multipole {
            strength: 1.0,
            length,
            s_center,
            center: (0.0, 0.0),
        })
    }

    fn starts(c: &ElementContainer) -> Vec<f64> {
        c.iter().map(|(_, e)| e.extent().0).collect()
    }

    #[test]
    fn test_insert_remove_get() {
        let mut c = ElementContainer::new();
        let a = c.insert(quad(1.0, 0.2));
        let b = c.insert(quad(2.0, 0.2));
        assert_eq!(c.len(), 2);
        assert!(c.get(a).is_some());
        let removed = c.remove(a).unwrap();
        assert_eq!(removed.kind_name(), "multipole");
        assert_eq!(c.len(), 1);
        assert!(c.get(a).is_none());
        assert!(c.get(b).is_some());
        assert!(c.remove(a).is_none());
    }

    #[test]
    fn test_extent_recurses_into_groups() {
        let mut inner = ElementContainer::new();
        inner.insert(quad(10.0, 0.4));
        let mut c = ElementContainer::new();
        c.insert(quad(1.0, 0.2));
        c.insert(MagneticElement::Group(inner));
        let (start, end) = c.determine_extent();
        assert!((start - 0.9).abs() < 1e-12);
        assert!((end - 10.2).abs() < 1e-12);
        assert!((c.gs_start() - 0.9).abs() < 1e-12);
        assert!((c.gs_end() - 10.2).abs() < 1e-12);
    }

    #[test]
    fn test_sort_orders_by_start() {
        let mut c = ElementContainer::new();
        c.insert(quad(3.0, 0.2));
        c.insert(quad(1.0, 0.2));
        c.insert(quad(2.0, 0.2));
        c.sort_by_start();
        assert_eq!(starts(&c), vec![0.9, 1.9, 2.9]);
    }

    #[test]
    fn test_sort_is_idempotent_and_stable() {
        let mut c = ElementContainer::new();
        let first = c.insert(quad(1.0, 0.2));
        let second = c.insert(quad(1.0, 0.2)); // same start: insertion order holds
        c.insert(quad(0.5, 0.2));
        c.sort_by_start();
        let once: Vec<ElementId> = c.iter().map(|(id, _)| id).collect();
        c.sort_by_start();
        let twice: Vec<ElementId> = c.iter().map(|(id, _)| id).collect();
        assert_eq!(once, twice);
        assert_eq!(once[1], first);
        assert_eq!(once[2], second);
    }

    #[test]
    fn test_normalize_fills_gap_with_one_drift() {
        let cfg = ContainerConfig::default();
        let mut c = ElementContainer::new();
        c.insert(quad(0.1, 0.2)); // [0.0, 0.2]
        c.insert(quad(1.1, 0.2)); // [1.0, 1.2], gap of 0.8
        c.normalize(&cfg).unwrap();
        assert_eq!(c.len(), 3);
        let (_, drift) = c.iter().nth(1).unwrap();
        match drift {
            MagneticElement::Drift(d) => {
                assert!((d.length - 0.8).abs() < 1e-12, "drift length {}", d.length);
                assert!((d.s_start - 0.2).abs() < 1e-12);
            }
            other => panic!("expected drift, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_normalize_skips_sub_tolerance_gap() {
        let cfg = ContainerConfig::default();
        let mut c = ElementContainer::new();
        c.insert(quad(0.1, 0.2)); // ends at 0.2
        c.insert(quad(0.3005, 0.2)); // starts at 0.2005, gap 0.0005 < 0.001
        c.normalize(&cfg).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_normalize_rejects_gross_overlap() {
        let cfg = ContainerConfig::default();
        let mut c = ElementContainer::new();
        c.insert(quad(0.5, 1.0)); // [0.0, 1.0]
        c.insert(quad(1.0, 1.0)); // [0.5, 1.5], overlap 0.5 > 0.1
        let err = c.normalize(&cfg).unwrap_err();
        match err {
            MagError::OverlappingElements {
                prev_end,
                cur_start,
                ..
            } => {
                assert!((prev_end - 1.0).abs() < 1e-12);
                assert!((cur_start - 0.5).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_tolerates_small_overlap() {
        let cfg = ContainerConfig::default();
        let mut c = ElementContainer::new();
        c.insert(quad(0.5, 1.0)); // [0.0, 1.0]
        c.insert(quad(1.49, 1.0)); // [0.99, 1.99], overlap 0.01 < 0.1
        c.normalize(&cfg).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_normalize_twice_adds_nothing() {
        let cfg = ContainerConfig::default();
        let mut c = ElementContainer::new();
        c.insert(quad(0.1, 0.2));
        c.insert(quad(2.0, 0.4));
        c.insert(quad(5.0, 0.2));
        c.normalize(&cfg).unwrap();
        let len_once = c.len();
        let starts_once = starts(&c);
        c.normalize(&cfg).unwrap();
        assert_eq!(c.len(), len_once);
        assert_eq!(starts(&c), starts_once);
    }

    #[test]
    fn test_filter_splits_and_reduces() {
        let cfg = ContainerConfig::default();
        let model = PeriodicFieldModel::new(
            0.05,
            1.0,
            0.5,
            vec![MagneticHarmonic {
                order: 1,
                axis: FieldAxis::Vertical,
                k: 1.5,
                phase: 0.0,
            }],
            UndulatorKind::Normal,
        )
        .unwrap();

        let mut inner = ElementContainer::new();
        inner.insert(quad(3.0, 0.2));
        inner.insert(MagneticElement::Periodic(model.clone()));

        let mut c = ElementContainer::new();
        c.insert(quad(1.0, 0.2));
        c.insert(MagneticElement::Group(inner));

        let (uniform, others) = c.filter_transversely_uniform(&cfg).unwrap();
        // The periodic source is reduced to a sampled uniform field.
        assert_eq!(uniform.len(), 1);
        let (_, reduced) = uniform.iter().next().unwrap();
        assert_eq!(reduced.kind_name(), "transversely-uniform");
        let (start, end) = reduced.extent();
        assert!((start - 0.0).abs() < 1e-9);
        assert!(end <= 1.0 + 1e-9);
        // Both quadrupoles, including the nested one, land in others.
        assert_eq!(others.len(), 2);
        assert!(others
            .iter()
            .all(|(_, e)| e.kind_name() == "multipole"));
    }
}
