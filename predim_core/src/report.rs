//! # Report Data
//!
//! [`compute`] is the single entry point of the engine. It validates the
//! inputs, runs every calculator, looks up the assembly recommendations and
//! returns one immutable [`ReportData`] for an external renderer.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::project::ProjectInputs;
//! use predim_core::report::compute;
//!
//! let report = compute(&ProjectInputs::default()).unwrap();
//! assert_eq!(report.recommendations.len(), 3);
//!
//! for row in report.result_rows() {
//!     println!("{}: {} {}", row.label, row.value, row.unit);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::assembly::{recommendations_for, AssemblyRecommendation};
use crate::calculations::{ColumnFormula, DerivedResults};
use crate::equations::{normative_notes, Equation};
use crate::errors::CalcResult;
use crate::project::{
    PrimaryMaterial, ProjectInfo, ProjectInputs, SeismicZone, SoilType, StructuralSystem, UsageClass,
};

/// Version of the calculation rules, printed on every report
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The subset of the inputs shown in the "project data" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub info: ProjectInfo,
    pub seismic_zone: SeismicZone,
    pub usage_class: UsageClass,
    pub soil_type: SoilType,
    pub structural_system: StructuralSystem,
    pub primary_material: PrimaryMaterial,
    pub dead_load_kn_m2: f64,
    pub live_load_kn_m2: f64,
    pub floor_height_m: f64,
    pub floor_count: u32,
    pub building_height_m: f64,
}

impl From<&ProjectInputs> for ProjectSummary {
    fn from(inputs: &ProjectInputs) -> Self {
        ProjectSummary {
            info: inputs.info.clone(),
            seismic_zone: inputs.seismic_zone,
            usage_class: inputs.usage_class,
            soil_type: inputs.soil_type,
            structural_system: inputs.structural_system,
            primary_material: inputs.primary_material,
            dead_load_kn_m2: inputs.dead_load_kn_m2,
            live_load_kn_m2: inputs.live_load_kn_m2,
            floor_height_m: inputs.floor_height_m,
            floor_count: inputs.floor_count,
            building_height_m: inputs.building_height_m,
        }
    }
}

/// One labelled value in a report table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
    pub unit: String,
}

impl ReportRow {
    fn new(label: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        ReportRow {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }
}

/// Everything a renderer needs for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    /// Calculation rules version
    pub engine_version: String,

    /// Inputs shown in the project data section
    pub project: ProjectSummary,

    /// All derived quantities
    pub results: DerivedResults,

    /// Ceilings, partition walls and facades, in that order
    pub recommendations: Vec<AssemblyRecommendation>,

    /// Equations applied, in report order
    pub equations: Vec<Equation>,

    /// Normative notes block
    pub notes: Vec<String>,
}

impl ReportData {
    /// Ordered rows for the "project data" section
    pub fn project_rows(&self) -> Vec<ReportRow> {
        let p = &self.project;
        let mut rows = Vec::with_capacity(11);
        if !p.info.name.is_empty() {
            rows.push(ReportRow::new("Project name", p.info.name.clone(), ""));
        }
        if !p.info.location.is_empty() {
            rows.push(ReportRow::new("Location", p.info.location.clone(), ""));
        }
        rows.extend([
            ReportRow::new("Seismic zone", p.seismic_zone.to_string(), ""),
            ReportRow::new("Usage class", p.usage_class.to_string(), ""),
            ReportRow::new("Soil type", p.soil_type.to_string(), ""),
            ReportRow::new("Structural system", p.structural_system.to_string(), ""),
            ReportRow::new("Primary material", p.primary_material.to_string(), ""),
            ReportRow::new("Dead load", format!("{:.2}", p.dead_load_kn_m2), "kN/m²"),
            ReportRow::new("Live load", format!("{:.2}", p.live_load_kn_m2), "kN/m²"),
            ReportRow::new("Story height", format!("{:.2}", p.floor_height_m), "m"),
            ReportRow::new("Number of floors", p.floor_count.to_string(), ""),
            ReportRow::new("Building height", format!("{:.2}", p.building_height_m), "m"),
        ]);
        rows
    }

    /// Ordered rows for the "results" section
    pub fn result_rows(&self) -> Vec<ReportRow> {
        let r = &self.results;
        let column_label = match r.column.formula {
            ColumnFormula::Simple => "Column minimum area".to_string(),
            ColumnFormula::Tributary { width_m } => {
                format!("Column minimum area (tw = {:.2} m)", width_m)
            }
        };
        vec![
            ReportRow::new("Total seismic weight", format!("{:.2}", r.total_weight_kn()), "kN"),
            ReportRow::new("Beam height", format!("{:.2}", r.beam.height_cm().value()), "cm"),
            ReportRow::new("Beam width", format!("{:.2}", r.beam.width_cm().value()), "cm"),
            ReportRow::new(column_label, format!("{:.2}", r.column.area_cm2().value()), "cm²"),
            ReportRow::new("Seismic coefficient Cs", format!("{:.3}", r.seismic.seismic_coefficient), ""),
            ReportRow::new("Base shear", format!("{:.2}", r.base_shear_kn()), "kN"),
            ReportRow::new("Stair steps", r.stairs.step_count.to_string(), ""),
            ReportRow::new("Stair run", format!("{:.2}", r.stairs.total_run_m), "m"),
            ReportRow::new("Non-structural force Fp", format!("{:.2}", r.nonstructural.fp_kn), "kN"),
        ]
    }

    /// Per-floor force rows, top floor first (the order a building is drawn)
    pub fn floor_rows(&self) -> Vec<ReportRow> {
        self.results
            .floor_forces_kn()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, force)| ReportRow::new(format!("Floor {}", i + 1), format!("{:.2}", force), "kN"))
            .collect()
    }
}

/// Equations applied for these inputs, in report order
fn applied_equations(results: &DerivedResults) -> Vec<Equation> {
    Equation::ALL
        .into_iter()
        .filter(|equation| match equation {
            Equation::ColumnAreaSimple => results.column.formula == ColumnFormula::Simple,
            Equation::ColumnAreaTributary => results.column.formula != ColumnFormula::Simple,
            _ => true,
        })
        .collect()
}

/// Run a complete predimensioning request.
///
/// Validates first; on failure no calculator runs and the first violation is
/// returned. The inputs are never modified.
///
/// ```rust
/// use predim_core::project::ProjectInputs;
/// use predim_core::report::compute;
///
/// let inputs = ProjectInputs { floor_height_m: 0.0, ..ProjectInputs::default() };
/// assert_eq!(compute(&inputs).unwrap_err().field(), "floor_height_m");
/// ```
pub fn compute(inputs: &ProjectInputs) -> CalcResult<ReportData> {
    let inputs = inputs.validate()?;

    let results = DerivedResults::calculate(inputs);
    let recommendations = recommendations_for(inputs.seismic_zone);
    let equations = applied_equations(&results);

    Ok(ReportData {
        engine_version: ENGINE_VERSION.to_string(),
        project: ProjectSummary::from(inputs),
        results,
        recommendations,
        equations,
        notes: normative_notes(inputs.seismic_zone),
    })
}
