//! # Assembly Recommendations
//!
//! Fastening and assembly guidance for non-structural elements, keyed by the
//! seismic zone of the site and the element category. The lookup is a single
//! exhaustive `match` over both enums, so adding a zone or a category fails
//! to compile until every new pair has its text.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::assembly::{recommend, recommend_by_name, ElementCategory, FALLBACK_RECOMMENDATION};
//! use predim_core::project::SeismicZone;
//!
//! let text = recommend(SeismicZone::High, ElementCategory::Facades);
//! assert!(!text.is_empty());
//!
//! assert_eq!(recommend_by_name(SeismicZone::High, "skylights"), FALLBACK_RECOMMENDATION);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::project::SeismicZone;

/// Returned for element categories the table does not cover
pub const FALLBACK_RECOMMENDATION: &str =
    "No specific guidance for this element: consult the governing seismic code (NSR-10 Chapter A.9).";

/// Non-structural element category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    Ceilings,
    PartitionWalls,
    Facades,
}

impl ElementCategory {
    /// Report order
    pub const ALL: [ElementCategory; 3] = [
        ElementCategory::Ceilings,
        ElementCategory::PartitionWalls,
        ElementCategory::Facades,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ElementCategory::Ceilings => "Ceilings",
            ElementCategory::PartitionWalls => "Partition walls",
            ElementCategory::Facades => "Facades",
        }
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for category names outside the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for ElementCategory {
    type Err = UnknownCategory;

    /// Case-insensitive; accepts English and Spanish names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();
        match key.as_str() {
            "ceilings" | "ceiling" | "cielorrasos" | "cielorraso" | "cielos" => Ok(ElementCategory::Ceilings),
            "partitionwalls" | "partitions" | "partition" | "muros" | "murosdivisorios" | "particiones" => {
                Ok(ElementCategory::PartitionWalls)
            }
            "facades" | "facade" | "fachadas" | "fachada" => Ok(ElementCategory::Facades),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Guidance for one (zone, category) pair.
pub fn recommend(zone: SeismicZone, category: ElementCategory) -> &'static str {
    use ElementCategory::*;
    use SeismicZone::*;

    match (zone, category) {
        (Low, Ceilings) => {
            "Suspended grid hung from the slab with wire ties at 1.2 m maximum spacing; \
             perimeter angles fixed to walls with mechanical anchors."
        }
        (Low, PartitionWalls) => {
            "Masonry or drywall partitions anchored to slab and beams; leave a \
             10 mm top joint filled with flexible sealant."
        }
        (Low, Facades) => {
            "Cladding fixed with corrosion-resistant mechanical anchors; \
             verify out-of-plane stability of parapets."
        }
        (Moderate, Ceilings) => {
            "Braced suspended grid: diagonal splay wires in four directions plus a \
             compression strut at 3.6 m maximum spacing; 10 mm perimeter clearance."
        }
        (Moderate, PartitionWalls) => {
            "Partitions separated from the structure with a 20 mm flexible joint; \
             top restrained by slotted angles that allow in-plane drift."
        }
        (Moderate, Facades) => {
            "Panels on connections that accommodate story drift (slotted or sliding); \
             anchors designed for Fp with ductile steel."
        }
        (High, Ceilings) => {
            "Fully braced grid with splay wires and rigid struts, seismic separation \
             joints every 18 m and independent support for light fixtures."
        }
        (High, PartitionWalls) => {
            "Isolate partitions from the frame with 25 mm joints and sliding top \
             tracks; reinforce masonry with horizontal ladder reinforcement and tie columns."
        }
        (High, Facades) => {
            "Drift-compatible connections sized for the design story drift; \
             redundant ductile anchors and no brittle glazing without a flexible frame."
        }
    }
}

/// Guidance for a free-form category name.
///
/// Names outside the three known categories return
/// [`FALLBACK_RECOMMENDATION`]; this never fails.
pub fn recommend_by_name(zone: SeismicZone, category: &str) -> &'static str {
    match category.parse::<ElementCategory>() {
        Ok(category) => recommend(zone, category),
        Err(_) => FALLBACK_RECOMMENDATION,
    }
}

/// One recommendation as carried in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyRecommendation {
    pub category: ElementCategory,
    pub zone: SeismicZone,
    pub text: String,
}

/// The three recommendations for a zone, in report order.
pub fn recommendations_for(zone: SeismicZone) -> Vec<AssemblyRecommendation> {
    ElementCategory::ALL
        .iter()
        .map(|&category| AssemblyRecommendation {
            category,
            zone,
            text: recommend(zone, category).to_string(),
        })
        .collect()
}
