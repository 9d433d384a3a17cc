//! # Predimensioning Calculations
//!
//! Each calculator is a pure function of already-validated numbers:
//!
//! - [`beam`] - Beam height and width from span
//! - [`column`] - Minimum column area from axial load and f'c
//! - [`seismic`] - Seismic weight, base shear and floor distribution
//! - [`stairs`] - Step count and horizontal run
//! - [`nonstructural`] - Seismic force on attached elements
//!
//! None of them can fail; input checks live in
//! [`ProjectInputs::validate`](crate::project::ProjectInputs::validate).

pub mod beam;
pub mod column;
pub mod nonstructural;
pub mod seismic;
pub mod stairs;

use serde::{Deserialize, Serialize};

use crate::project::ProjectInputs;

// Re-export commonly used types
pub use beam::{size_beam, BeamSize};
pub use column::{size_column, ColumnFormula, ColumnSize};
pub use nonstructural::{fp, NonStructuralForce};
pub use seismic::{base_shear, distribute, total_seismic_weight, SeismicResult};
pub use stairs::{stairs, stairs_default, StairGeometry};

/// Every quantity derived from one set of project inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedResults {
    pub beam: BeamSize,
    pub column: ColumnSize,
    pub seismic: SeismicResult,
    pub stairs: StairGeometry,
    pub nonstructural: NonStructuralForce,
}

impl DerivedResults {
    /// Run all calculators on validated inputs.
    pub(crate) fn calculate(inputs: &ProjectInputs) -> Self {
        let beam = size_beam(inputs.beam_span_m);
        let column = size_column(
            inputs.column_axial_load_kn,
            inputs.concrete_fc_mpa,
            inputs.tributary_width_m,
        );
        let seismic = SeismicResult::calculate(
            inputs.dead_load_kn_m2,
            inputs.live_load_kn_m2,
            inputs.floor_height_m,
            inputs.floor_count,
            inputs.seismic_coefficient,
        );
        // One flight per story
        let stairs = stairs(inputs.floor_height_m, inputs.stair.riser_m, inputs.stair.tread_m);
        let nonstructural = NonStructuralForce::calculate(
            inputs.nonstructural.ap,
            inputs.nonstructural.sds,
            inputs.nonstructural.wp_kn,
        );

        DerivedResults {
            beam,
            column,
            seismic,
            stairs,
            nonstructural,
        }
    }

    /// Total estimated seismic weight W (kN)
    pub fn total_weight_kn(&self) -> f64 {
        self.seismic.total_weight_kn
    }

    /// Base shear V (kN)
    pub fn base_shear_kn(&self) -> f64 {
        self.seismic.base_shear_kn
    }

    /// Per-floor seismic forces, lowest floor first (kN)
    pub fn floor_forces_kn(&self) -> &[f64] {
        &self.seismic.floor_forces_kn
    }
}
