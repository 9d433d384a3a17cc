//! # PDF Generation Module
//!
//! Renders a [`ReportData`] to PDF using Typst, entirely in memory.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via placeholder replacement before compilation
//! - Fonts come from `typst-assets`; no file is read or written
//! - Output is raw PDF bytes (`Vec<u8>`); the caller decides where they go
//!
//! ## Example
//!
//! ```rust,no_run
//! use predim_core::{compute, ProjectInputs};
//! use predim_report::render_pdf;
//!
//! let report = compute(&ProjectInputs::default()).unwrap();
//! let pdf_bytes = render_pdf(&report).unwrap();
//! std::fs::write("predimensioning.pdf", pdf_bytes).unwrap();
//! ```

use chrono::Utc;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use predim_core::report::ReportRow;
use predim_core::ReportData;

use crate::diagram::floor_bars;
use crate::errors::{ReportError, ReportResult};

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling one in-memory document.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }
        log::debug!("loaded {} bundled fonts", fonts.len());
        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// PDF Template
// ============================================================================

/// Typst template for the predimensioning report
const REPORT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 2.5cm, bottom: 2.5cm, left: 2.2cm, right: 2.2cm),
  header: align(right)[
    #text(size: 9pt, fill: gray)[Structural Predimensioning]
  ],
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 9pt)[{{PROJECT_NAME}}]],
      align(center)[#text(size: 9pt)[Page #counter(page).display()]],
      align(right)[#text(size: 9pt)[{{DATE}}]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 11pt)

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Structural Predimensioning Report]
    #v(4pt)
    #text(size: 12pt)[{{PROJECT_NAME}} · {{LOCATION}}]
  ]
]

#v(8pt)
#text(size: 9pt, fill: gray)[Engine version {{ENGINE_VERSION}}]

== Project Data

#table(
  columns: (1fr, auto, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Parameter*], [*Value*], [*Unit*]),
{{PROJECT_ROWS}}
)

== Predimensioning Results

#table(
  columns: (1fr, auto, auto),
  inset: 7pt,
  stroke: 0.5pt,
  align: (left, right, left),
  table.header([*Quantity*], [*Value*], [*Unit*]),
{{RESULT_ROWS}}
)

== Seismic Force per Floor

Base shear $V = {{BASE_SHEAR}}$ kN distributed with a linear profile from 1.0 (lowest floor) to 2.0 (top floor).

#grid(
  columns: (auto, 1fr, auto),
  column-gutter: 8pt,
  row-gutter: 5pt,
  align: horizon,
{{FLOOR_BARS}}
)

== Assembly Recommendations

Seismic zone: *{{SEISMIC_ZONE}}*

#table(
  columns: (auto, 1fr),
  inset: 7pt,
  stroke: 0.5pt,
  table.header([*Element*], [*Recommendation*]),
{{RECOMMENDATION_ROWS}}
)

== Normative Notes

{{NOTES}}

#pagebreak()

== Appendix: List of Equations

{{EQUATIONS}}

#v(24pt)
#line(length: 100%, stroke: 0.5pt)
#v(8pt)

#text(size: 9pt, fill: gray)[
  Preliminary sizing for early design stages. \
  Results must be verified by a licensed structural engineer.
]
"##;

// ============================================================================
// Template Fragments
// ============================================================================

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn table_rows(rows: &[ReportRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "  [{}], [{}], [{}],",
                escape_typst(&row.label),
                escape_typst(&row.value),
                escape_typst(&row.unit)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bar_rows(report: &ReportData) -> String {
    floor_bars(report)
        .iter()
        .map(|bar| {
            format!(
                "  [Floor {}], rect(width: {:.1}%, height: 10pt, fill: rgb(\"#4a7ab5\")), [{:.2} kN],",
                bar.floor,
                bar.fraction * 100.0,
                bar.force_kn
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn recommendation_rows(report: &ReportData) -> String {
    report
        .recommendations
        .iter()
        .map(|rec| {
            format!(
                "  [{}], [{}],",
                escape_typst(rec.category.display_name()),
                escape_typst(&rec.text)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn notes_list(report: &ReportData) -> String {
    report
        .notes
        .iter()
        .map(|note| format!("- {}", escape_typst(note)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn equations_appendix(report: &ReportData) -> String {
    let mut output = String::new();
    for equation in &report.equations {
        let meta = equation.metadata();
        output.push_str(&format!("=== {}\n\n", meta.name));
        output.push_str(&format!("{}\n\n", meta.formula_typst));
        output.push_str(&format!(
            "#text(size: 9pt, fill: gray)[{}]\n\n",
            escape_typst(&meta.reference.citation())
        ));
        let variables = meta
            .variables
            .iter()
            .map(|v| {
                format!(
                    "{} = {} [{}]",
                    escape_typst(v.symbol),
                    escape_typst(v.description),
                    escape_typst(v.units)
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        output.push_str(&format!("#text(size: 9pt)[{}]\n\n", variables));
        for assumption in &meta.assumptions {
            output.push_str(&format!("- _{}_\n", escape_typst(assumption)));
        }
        output.push('\n');
    }
    output
}

/// Fill the template with the report values.
fn build_source(report: &ReportData) -> String {
    let info = &report.project.info;
    let name = if info.name.is_empty() { "Untitled project" } else { &info.name };
    let location = if info.location.is_empty() { "Location not given" } else { &info.location };

    REPORT_TEMPLATE
        .replace("{{PROJECT_NAME}}", &escape_typst(name))
        .replace("{{LOCATION}}", &escape_typst(location))
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d").to_string())
        .replace("{{ENGINE_VERSION}}", &escape_typst(&report.engine_version))
        .replace("{{PROJECT_ROWS}}", &table_rows(&report.project_rows()))
        .replace("{{RESULT_ROWS}}", &table_rows(&report.result_rows()))
        .replace("{{BASE_SHEAR}}", &format!("{:.2}", report.results.base_shear_kn()))
        .replace("{{FLOOR_BARS}}", &bar_rows(report))
        .replace("{{SEISMIC_ZONE}}", report.project.seismic_zone.display_name())
        .replace("{{RECOMMENDATION_ROWS}}", &recommendation_rows(report))
        .replace("{{NOTES}}", &notes_list(report))
        .replace("{{EQUATIONS}}", &equations_appendix(report))
}

// ============================================================================
// PDF Rendering
// ============================================================================

/// Render a report to PDF.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(ReportError)` - If the Typst source fails to compile or export
pub fn render_pdf(report: &ReportData) -> ReportResult<Vec<u8>> {
    let source = build_source(report);
    log::debug!("compiling report source ({} bytes)", source.len());

    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);
    for warning in &warned.warnings {
        log::warn!("typst: {}", warning.message);
    }

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        ReportError::Compile(error_msgs.join("; "))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        ReportError::Render(error_msgs.join("; "))
    })?;

    log::info!("rendered PDF report ({} bytes)", pdf_bytes.len());
    Ok(pdf_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use predim_core::project::ProjectInfo;
    use predim_core::{compute, ProjectInputs};

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("Bloque #2 [norte]"), "Bloque \\#2 \\[norte\\]");
        assert_eq!(escape_typst("f'c"), "f'c");
    }

    #[test]
    fn test_source_has_no_placeholders() {
        let report = compute(&ProjectInputs::default()).unwrap();
        let source = build_source(&report);
        assert!(!source.contains("{{"), "unfilled placeholder in template");
        assert!(source.contains("[Floor 4], rect(width: 100.0%"));
        assert!(source.contains("Untitled project"));
    }

    #[test]
    fn test_pdf_generation() {
        let inputs = ProjectInputs {
            info: ProjectInfo {
                name: "Bloque_A #1".to_string(),
                location: "Bogotá".to_string(),
            },
            tributary_width_m: Some(4.5),
            ..ProjectInputs::default()
        };
        let report = compute(&inputs).unwrap();
        let pdf = render_pdf(&report);

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }
}
