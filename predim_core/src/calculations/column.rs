//! # Column Predimensioning
//!
//! Minimum gross section of a reinforced concrete column under a factored
//! axial load, using the usual empirical allowance of 35% of f'c:
//!
//! - Simple: `A = Pu / (0.35 f'c)`
//! - Tributary-adjusted: `A = Pu / (0.35 f'c tw)`
//!
//! With Pu in kN and f'c in MPa the quotient reads directly in cm², which is
//! how the result is reported. `area_m2` holds the same area in m².
//!
//! ## Example
//!
//! ```rust
//! use predim_core::calculations::column::{size_column, ColumnFormula};
//!
//! let column = size_column(200.0, 21.0, None);
//! assert_eq!(column.formula, ColumnFormula::Simple);
//! assert!((column.area_cm2().0 - 27.21).abs() < 0.01);
//! assert!((column.area_m2 - 0.0027211).abs() < 1e-7);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{SquareCentimeters, SquareMeters};

/// Fraction of f'c allowed on the gross section at predimensioning stage
pub const ALLOWABLE_FC_FRACTION: f64 = 0.35;

/// Which column formula produced the area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant")]
pub enum ColumnFormula {
    /// `Pu / (0.35 f'c)`
    Simple,
    /// `Pu / (0.35 f'c tw)`
    Tributary { width_m: f64 },
}

impl ColumnFormula {
    /// Select the variant from an optional tributary width
    pub fn from_tributary_width(tributary_width_m: Option<f64>) -> Self {
        match tributary_width_m {
            Some(width_m) => ColumnFormula::Tributary { width_m },
            None => ColumnFormula::Simple,
        }
    }

    /// Divisor applied beyond `0.35 f'c` (1 for the simple variant)
    pub fn width_factor(&self) -> f64 {
        match self {
            ColumnFormula::Simple => 1.0,
            ColumnFormula::Tributary { width_m } => *width_m,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnFormula::Simple => "Pu / (0.35 f'c)",
            ColumnFormula::Tributary { .. } => "Pu / (0.35 f'c tw)",
        }
    }
}

/// Predimensioned column section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "axial_load_kn": 200.0,
///   "fc_mpa": 21.0,
///   "formula": { "variant": "Simple" },
///   "area_m2": 0.0027210884353741495
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSize {
    /// Factored axial load Pu (kN)
    pub axial_load_kn: f64,

    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Formula variant used
    pub formula: ColumnFormula,

    /// Minimum gross area (m²)
    pub area_m2: f64,
}

impl ColumnSize {
    /// Minimum gross area in cm², for display
    pub fn area_cm2(&self) -> SquareCentimeters {
        SquareMeters(self.area_m2).into()
    }

    /// Side of a square column with the minimum area (m)
    pub fn square_side_m(&self) -> f64 {
        self.area_m2.sqrt()
    }
}

/// Raw formula value `Pu / (0.35 f'c [tw])`, in cm².
pub fn minimum_area_cm2(axial_load_kn: f64, fc_mpa: f64, formula: ColumnFormula) -> f64 {
    axial_load_kn / (ALLOWABLE_FC_FRACTION * fc_mpa * formula.width_factor())
}

/// Size a column.
///
/// A tributary width selects the tributary-adjusted formula; `None` selects
/// the simple one. Callers pass validated, non-zero `fc_mpa` and width.
pub fn size_column(axial_load_kn: f64, fc_mpa: f64, tributary_width_m: Option<f64>) -> ColumnSize {
    let formula = ColumnFormula::from_tributary_width(tributary_width_m);
    let area = SquareCentimeters(minimum_area_cm2(axial_load_kn, fc_mpa, formula));
    ColumnSize {
        axial_load_kn,
        fc_mpa,
        formula,
        area_m2: SquareMeters::from(area).value(),
    }
}
