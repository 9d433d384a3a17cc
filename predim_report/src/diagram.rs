//! # Floor Force Diagram
//!
//! Horizontal bar chart of the per-floor seismic forces, top floor first so
//! the chart reads like a building elevation. Bars are scaled to the largest
//! force; the text renderer draws them with block characters and the PDF
//! renderer with Typst rectangles, both from the same [`FloorBar`] list.

use predim_core::ReportData;

/// One bar of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorBar {
    /// 1-based floor number (1 = lowest)
    pub floor: usize,
    pub force_kn: f64,
    /// Bar length relative to the largest force, in [0, 1]
    pub fraction: f64,
}

/// Bars for every floor, top floor first.
pub fn floor_bars(report: &ReportData) -> Vec<FloorBar> {
    let forces = report.results.floor_forces_kn();
    let max = forces.iter().copied().fold(0.0_f64, f64::max);
    forces
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &force_kn)| FloorBar {
            floor: i + 1,
            force_kn,
            fraction: if max > 0.0 { force_kn / max } else { 0.0 },
        })
        .collect()
}

/// ASCII rendering, `width` characters for the longest bar.
///
/// ```text
/// Floor 4 | ############################## 4.80 kN
/// Floor 3 | #########################      4.00 kN
/// ```
pub fn floor_force_diagram(report: &ReportData, width: usize) -> String {
    let bars = floor_bars(report);
    let label_width = bars.first().map_or(1, |bar| bar.floor.to_string().len());
    bars.iter()
        .map(|bar| {
            let filled = (bar.fraction * width as f64).round() as usize;
            format!(
                "Floor {:>lw$} | {}{} {:.2} kN",
                bar.floor,
                "#".repeat(filled),
                " ".repeat(width.saturating_sub(filled)),
                bar.force_kn,
                lw = label_width,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
