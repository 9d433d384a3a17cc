//! # predim_core - Structural Predimensioning Engine
//!
//! `predim_core` turns coarse project data (story height and count, loads,
//! spans, concrete strength, seismic coefficients) into first-pass member
//! sizes, a base shear with its floor distribution, stair geometry, the
//! force on non-structural elements and assembly recommendations for the
//! site's seismic zone.
//!
//! ## Design Philosophy
//!
//! - **Pure**: [`compute`] is a function of its inputs; no I/O, no logging
//! - **Validate once**: inputs are checked up front, calculators never fail
//! - **JSON-First**: every input and output type implements Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use predim_core::{compute, ProjectInputs};
//!
//! let inputs = ProjectInputs {
//!     beam_span_m: 6.0,
//!     tributary_width_m: Some(4.0),
//!     ..ProjectInputs::default()
//! };
//!
//! let report = compute(&inputs).unwrap();
//! assert!((report.results.beam.height_m - 0.6).abs() < 1e-12);
//!
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Input types and validation
//! - [`calculations`] - Beam, column, seismic, stair and Fp calculators
//! - [`assembly`] - Assembly recommendations by zone and element category
//! - [`equations`] - Registry of the formulas applied
//! - [`report`] - The `compute` entry point and `ReportData`
//! - [`units`] - Display unit wrappers
//! - [`errors`] - Structured error type

pub mod assembly;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use assembly::{AssemblyRecommendation, ElementCategory};
pub use calculations::DerivedResults;
pub use errors::{CalcError, CalcResult};
pub use project::{ProjectInputs, SeismicZone};
pub use report::{compute, ReportData, ReportRow, ENGINE_VERSION};
