//! # Equation Registry
//!
//! Every formula the engine applies, with plain-text and Typst notation,
//! variable definitions and the code or rule of thumb it comes from. The
//! report prints this list as its equations appendix so each number can be
//! traced back to a formula.
//!
//! ## Usage
//!
//! ```rust
//! use predim_core::equations::Equation;
//!
//! let meta = Equation::BaseShear.metadata();
//! assert_eq!(meta.formula_plain, "V = Cs · W");
//! println!("{}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

use crate::project::SeismicZone;

// ============================================================================
// Code References
// ============================================================================

/// Source of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// NSR-10 Colombian seismic-resistant construction code
    Nsr10 { section: &'static str },
    /// ACI 318 Building Code Requirements for Structural Concrete
    Aci318 { year: u16, section: &'static str },
    /// Customary predimensioning rule, no code clause
    RuleOfThumb,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Nsr10 { section } => format!("NSR-10 {}", section),
            CodeReference::Aci318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::RuleOfThumb => "Predimensioning rule of thumb".to_string(),
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// The formula in Typst math notation for PDF rendering
    pub formula_typst: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the engine, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// h = L/10
    BeamHeight,
    /// b = h/2
    BeamWidth,
    /// A = Pu/(0.35 f'c)
    ColumnAreaSimple,
    /// A = Pu/(0.35 f'c tw)
    ColumnAreaTributary,
    /// W = (D + L) h n
    SeismicWeight,
    /// V = Cs W
    BaseShear,
    /// Fi = V wi / Σw
    FloorDistribution,
    /// n = round(H / riser), run = n · tread
    StairSteps,
    /// Fp = 0.4 ap Sds Wp
    NonStructuralForce,
}

impl Equation {
    pub const ALL: [Equation; 9] = [
        Equation::BeamHeight,
        Equation::BeamWidth,
        Equation::ColumnAreaSimple,
        Equation::ColumnAreaTributary,
        Equation::SeismicWeight,
        Equation::BaseShear,
        Equation::FloorDistribution,
        Equation::StairSteps,
        Equation::NonStructuralForce,
    ];

    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::BeamHeight => EquationMetadata {
                name: "Beam Height",
                formula_typst: r#"$h = L / 10$"#,
                formula_plain: "h = L / 10",
                reference: CodeReference::Aci318 { year: 2019, section: "9.3.1.1" },
                variables: vec![
                    Variable::new("h", "Total beam height", "m"),
                    Variable::new("L", "Clear span", "m"),
                ],
                assumptions: vec!["Continuous or simply supported beam of ordinary proportions"],
            },

            Equation::BeamWidth => EquationMetadata {
                name: "Beam Width",
                formula_typst: r#"$b = h / 2$"#,
                formula_plain: "b = h / 2",
                reference: CodeReference::RuleOfThumb,
                variables: vec![
                    Variable::new("b", "Beam width", "m"),
                    Variable::new("h", "Total beam height", "m"),
                ],
                assumptions: vec![],
            },

            Equation::ColumnAreaSimple => EquationMetadata {
                name: "Column Area",
                formula_typst: r#"$A_g = P_u / (0.35 f'_c)$"#,
                formula_plain: "Ag = Pu / (0.35 f'c)",
                reference: CodeReference::RuleOfThumb,
                variables: vec![
                    Variable::new("Ag", "Minimum gross area", "cm²"),
                    Variable::new("Pu", "Factored axial load", "kN"),
                    Variable::new("f'c", "Concrete compressive strength", "MPa"),
                ],
                assumptions: vec!["Axial load only", "Tied column, gross section"],
            },

            Equation::ColumnAreaTributary => EquationMetadata {
                name: "Column Area (tributary width)",
                formula_typst: r#"$A_g = P_u / (0.35 f'_c t_w)$"#,
                formula_plain: "Ag = Pu / (0.35 f'c tw)",
                reference: CodeReference::RuleOfThumb,
                variables: vec![
                    Variable::new("Ag", "Minimum gross area", "cm²"),
                    Variable::new("Pu", "Factored axial load", "kN"),
                    Variable::new("f'c", "Concrete compressive strength", "MPa"),
                    Variable::new("tw", "Tributary width", "m"),
                ],
                assumptions: vec!["Axial load only", "Tied column, gross section"],
            },

            Equation::SeismicWeight => EquationMetadata {
                name: "Total Seismic Weight",
                formula_typst: r#"$W = (D + L) h n$"#,
                formula_plain: "W = (D + L) · h · n",
                reference: CodeReference::RuleOfThumb,
                variables: vec![
                    Variable::new("W", "Total estimated seismic weight", "kN"),
                    Variable::new("D", "Dead load", "kN/m²"),
                    Variable::new("L", "Live load", "kN/m²"),
                    Variable::new("h", "Story height", "m"),
                    Variable::new("n", "Number of floors", "-"),
                ],
                assumptions: vec!["Uniform floors", "Full live load included"],
            },

            Equation::BaseShear => EquationMetadata {
                name: "Base Shear",
                formula_typst: r#"$V = C_s W$"#,
                formula_plain: "V = Cs · W",
                reference: CodeReference::Nsr10 { section: "A.4.3" },
                variables: vec![
                    Variable::new("V", "Base shear", "kN"),
                    Variable::new("Cs", "Seismic coefficient", "-"),
                    Variable::new("W", "Total seismic weight", "kN"),
                ],
                assumptions: vec!["Equivalent lateral force method"],
            },

            Equation::FloorDistribution => EquationMetadata {
                name: "Floor Force Distribution",
                formula_typst: r#"$F_i = V w_i / (sum_j w_j), w_i = 1 + (i - 1) / (n - 1)$"#,
                formula_plain: "Fi = V · wi / Σw, wi rising linearly from 1.0 to 2.0",
                reference: CodeReference::Nsr10 { section: "A.4.3.2" },
                variables: vec![
                    Variable::new("Fi", "Lateral force at floor i", "kN"),
                    Variable::new("wi", "Profile weight of floor i", "-"),
                ],
                assumptions: vec!["Linear profile in place of the code's k-exponent distribution"],
            },

            Equation::StairSteps => EquationMetadata {
                name: "Stair Steps and Run",
                formula_typst: r#"$n = "round"(H / c_h), R = n t$"#,
                formula_plain: "n = round(H / riser), run = n · tread",
                reference: CodeReference::Nsr10 { section: "K.3.8.3" },
                variables: vec![
                    Variable::new("n", "Number of steps", "-"),
                    Variable::new("H", "Story height", "m"),
                    Variable::new("ch", "Riser height", "m"),
                    Variable::new("t", "Tread depth", "m"),
                ],
                assumptions: vec!["One straight flight per story", "Rounded half up"],
            },

            Equation::NonStructuralForce => EquationMetadata {
                name: "Force on Non-Structural Element",
                formula_typst: r#"$F_p = 0.4 a_p S_(d s) W_p$"#,
                formula_plain: "Fp = 0.4 · ap · Sds · Wp",
                reference: CodeReference::Nsr10 { section: "A.9.4.2" },
                variables: vec![
                    Variable::new("Fp", "Seismic force on the element", "kN"),
                    Variable::new("ap", "Component amplification factor", "-"),
                    Variable::new("Sds", "Design spectral acceleration", "-"),
                    Variable::new("Wp", "Element weight", "kN"),
                ],
                assumptions: vec!["Element at roof level not considered separately"],
            },
        }
    }
}

/// Fixed normative notes printed at the end of the report.
pub fn normative_notes(zone: SeismicZone) -> Vec<String> {
    let mut notes = vec![
        "Preliminary sizes only: final member design must follow a full structural analysis \
         under NSR-10 and be reviewed by a licensed structural engineer."
            .to_string(),
        "Non-structural elements must meet NSR-10 Chapter A.9; anchors are designed for Fp."
            .to_string(),
    ];
    let zone_note = match zone {
        SeismicZone::Low => "Low seismic hazard zone: minimum detailing requirements apply (DMI).",
        SeismicZone::Moderate => "Moderate seismic hazard zone: moderate ductility detailing required (DMO).",
        SeismicZone::High => "High seismic hazard zone: special ductility detailing required (DES).",
    };
    notes.push(zone_note.to_string());
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for equation in Equation::ALL {
            let meta = equation.metadata();
            assert!(!meta.name.is_empty());
            assert!(meta.formula_typst.starts_with('$'));
            assert!(!meta.formula_plain.is_empty());
            assert!(!meta.variables.is_empty());
        }
    }

    #[test]
    fn test_citations() {
        assert_eq!(CodeReference::Nsr10 { section: "A.9" }.citation(), "NSR-10 A.9");
        assert_eq!(
            CodeReference::Aci318 { year: 2019, section: "9.3.1.1" }.citation(),
            "ACI 318-19 Section 9.3.1.1"
        );
    }

    #[test]
    fn test_notes_depend_on_zone() {
        let low = normative_notes(SeismicZone::Low);
        let high = normative_notes(SeismicZone::High);
        assert_eq!(low.len(), 3);
        assert_ne!(low.last(), high.last());
        assert!(high.last().unwrap().contains("DES"));
    }
}
