//! # Plain-Text Report
//!
//! Terminal rendering of a [`ReportData`], section by section in the same
//! order as the PDF.

use std::fmt::Write;

use predim_core::report::ReportRow;
use predim_core::ReportData;

use crate::diagram::floor_force_diagram;

const RULE: &str = "═══════════════════════════════════════════════════════";
const DIAGRAM_WIDTH: usize = 30;

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

fn rows(out: &mut String, rows: &[ReportRow]) {
    let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    for row in rows {
        let pad = width - row.label.chars().count();
        let line = format!("  {}{}  {} {}", row.label, " ".repeat(pad), row.value, row.unit);
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

/// Render the full report as plain text.
pub fn render_text(report: &ReportData) -> String {
    let mut out = String::with_capacity(4096);

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  STRUCTURAL PREDIMENSIONING REPORT");
    let _ = writeln!(out, "  engine v{}", report.engine_version);
    let _ = writeln!(out, "{}", RULE);

    section(&mut out, "1. Project Data");
    rows(&mut out, &report.project_rows());

    section(&mut out, "2. Results");
    rows(&mut out, &report.result_rows());

    section(&mut out, "3. Seismic Force per Floor");
    let _ = writeln!(out, "{}", floor_force_diagram(report, DIAGRAM_WIDTH));

    section(&mut out, "4. Assembly Recommendations");
    let _ = writeln!(out, "  Seismic zone: {}", report.project.seismic_zone);
    for rec in &report.recommendations {
        let _ = writeln!(out, "  - {}: {}", rec.category, rec.text);
    }

    section(&mut out, "5. Equations");
    for equation in &report.equations {
        let meta = equation.metadata();
        let _ = writeln!(
            out,
            "  {:<32} {:<42} [{}]",
            meta.name,
            meta.formula_plain,
            meta.reference.citation()
        );
    }

    section(&mut out, "6. Normative Notes");
    for note in &report.notes {
        let _ = writeln!(out, "  * {}", note);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use predim_core::project::ProjectInfo;
    use predim_core::{compute, ProjectInputs, SeismicZone};

    fn sample_report() -> ReportData {
        let inputs = ProjectInputs {
            info: ProjectInfo {
                name: "Casa Taller".to_string(),
                location: "Manizales".to_string(),
            },
            seismic_zone: SeismicZone::High,
            ..ProjectInputs::default()
        };
        compute(&inputs).unwrap()
    }

    #[test]
    fn test_sections_in_order() {
        let text = render_text(&sample_report());
        let positions: Vec<_> = [
            "1. Project Data",
            "2. Results",
            "3. Seismic Force per Floor",
            "4. Assembly Recommendations",
            "5. Equations",
            "6. Normative Notes",
        ]
        .iter()
        .map(|title| text.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_contains_values_and_recommendations() {
        let report = sample_report();
        let text = render_text(&report);
        assert!(text.contains("Casa Taller"));
        assert!(text.contains("Manizales"));
        assert!(text.contains("27.21 cm²"));
        for rec in &report.recommendations {
            assert!(text.contains(&rec.text));
        }
        assert!(text.contains("Fp = 0.4 · ap · Sds · Wp"));
        assert!(text.contains("DES"));
    }
}
