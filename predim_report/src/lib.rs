//! # predim_report - Report Rendering
//!
//! Turns the [`ReportData`](predim_core::ReportData) produced by
//! `predim_core::compute` into documents. The engine knows nothing about
//! layout; everything presentational lives here.
//!
//! - [`render_text`] - Plain-text report for terminals
//! - [`render_pdf`] - Typst-compiled PDF, returned as bytes
//! - [`floor_force_diagram`] - ASCII bar chart of the floor forces
//!
//! ```rust
//! use predim_core::{compute, ProjectInputs};
//! use predim_report::render_text;
//!
//! let report = compute(&ProjectInputs::default()).unwrap();
//! let text = render_text(&report);
//! assert!(text.contains("Assembly Recommendations"));
//! ```

pub mod diagram;
pub mod errors;
pub mod pdf;
pub mod text;

pub use diagram::{floor_bars, floor_force_diagram, FloorBar};
pub use errors::{ReportError, ReportResult};
pub use pdf::render_pdf;
pub use text::render_text;
