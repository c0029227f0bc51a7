//! Capability seam toward the external trajectory-generation module.
//!
//! Trajectory integrators decide their integration strategy from which
//! transverse field components are actually present; this trait is the
//! only contract the field layer has with them.

use und_types::model::{FieldAxis, PeriodicFieldModel};

use crate::truniform::TrUnifField;

/// A field description a trajectory model can be built from.
pub trait TrajectorySource {
    fn has_horizontal_field(&self) -> bool;
    fn has_vertical_field(&self) -> bool;
}

impl TrajectorySource for TrUnifField {
    fn has_horizontal_field(&self) -> bool {
        !self.hor_field_is_zero()
    }

    fn has_vertical_field(&self) -> bool {
        !self.ver_field_is_zero()
    }
}

impl TrajectorySource for PeriodicFieldModel {
    fn has_horizontal_field(&self) -> bool {
        self.has_axis(FieldAxis::Horizontal)
    }

    fn has_vertical_field(&self) -> bool {
        self.has_axis(FieldAxis::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use und_types::model::{MagneticHarmonic, UndulatorKind};

    #[test]
    fn test_truniform_capability_flags() {
        let f = TrUnifField::new(Some(vec![1e-9; 8]), Some(vec![0.5; 8]), 0.0, 0.01, 1e-6).unwrap();
        assert!(!f.has_horizontal_field());
        assert!(f.has_vertical_field());
    }

    #[test]
    fn test_model_capability_flags() {
        let model = PeriodicFieldModel::new(
            0.05,
            1.0,
            0.0,
            vec![MagneticHarmonic {
                order: 1,
                axis: FieldAxis::Horizontal,
                k: 1.2,
                phase: 0.0,
            }],
            UndulatorKind::Normal,
        )
        .unwrap();
        assert!(model.has_horizontal_field());
        assert!(!model.has_vertical_field());
    }
}
