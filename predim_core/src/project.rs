//! # Project Inputs
//!
//! `ProjectInputs` is the complete, immutable input set of one calculation
//! request. It deserializes from JSON, with defaults for the optional
//! sections (project info, stair dimensions, tributary width).
//!
//! ## Structure
//!
//! ```text
//! ProjectInputs
//! ├── info: ProjectInfo (name, location)
//! ├── geometry and loads (floor height/count, D, L, span)
//! ├── column (Pu, f'c, optional tributary width)
//! ├── seismic (Cs, zone, usage class, soil type, building height)
//! ├── nonstructural: NonStructuralInputs (ap, Sds, Wp)
//! ├── stair: StairSettings (riser, tread)
//! └── classification (structural system, primary material)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use predim_core::project::ProjectInputs;
//!
//! let inputs = ProjectInputs::default();
//! assert!(inputs.validate().is_ok());
//!
//! let json = serde_json::to_string_pretty(&inputs).unwrap();
//! let roundtrip: ProjectInputs = serde_json::from_str(&json).unwrap();
//! assert_eq!(inputs, roundtrip);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::stairs::{DEFAULT_RISER_M, DEFAULT_TREAD_M, MAX_STEP_COUNT};
use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Classification Enums
// ============================================================================

/// Seismic hazard zone of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeismicZone {
    Low,
    Moderate,
    High,
}

impl SeismicZone {
    pub const ALL: [SeismicZone; 3] = [SeismicZone::Low, SeismicZone::Moderate, SeismicZone::High];

    pub fn display_name(&self) -> &'static str {
        match self {
            SeismicZone::Low => "Low",
            SeismicZone::Moderate => "Moderate",
            SeismicZone::High => "High",
        }
    }
}

impl Default for SeismicZone {
    fn default() -> Self {
        SeismicZone::Moderate
    }
}

impl fmt::Display for SeismicZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SeismicZone {
    type Err = CalcError;

    /// Accepts English and Spanish names, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baja" => Ok(SeismicZone::Low),
            "moderate" | "moderada" | "intermedia" => Ok(SeismicZone::Moderate),
            "high" | "alta" => Ok(SeismicZone::High),
            _ => Err(CalcError::invalid_input("seismic_zone", s, "must be Low, Moderate or High")),
        }
    }
}

/// Occupancy / usage class (I = minor structures, IV = essential facilities)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageClass {
    I,
    II,
    III,
    IV,
}

impl Default for UsageClass {
    fn default() -> Self {
        UsageClass::I
    }
}

impl fmt::Display for UsageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UsageClass::I => "I",
            UsageClass::II => "II",
            UsageClass::III => "III",
            UsageClass::IV => "IV",
        };
        f.write_str(name)
    }
}

/// Site soil profile type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    A,
    B,
    C,
    D,
}

impl Default for SoilType {
    fn default() -> Self {
        SoilType::C
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoilType::A => "A",
            SoilType::B => "B",
            SoilType::C => "C",
            SoilType::D => "D",
        };
        f.write_str(name)
    }
}

/// Lateral force resisting system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralSystem {
    Framed,
    Masonry,
    Dual,
    Mixed,
}

impl Default for StructuralSystem {
    fn default() -> Self {
        StructuralSystem::Framed
    }
}

impl fmt::Display for StructuralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructuralSystem::Framed => "Moment frame",
            StructuralSystem::Masonry => "Bearing masonry",
            StructuralSystem::Dual => "Dual system",
            StructuralSystem::Mixed => "Mixed system",
        };
        f.write_str(name)
    }
}

/// Primary structural material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryMaterial {
    ReinforcedConcrete,
    StructuralSteel,
    Masonry,
}

impl Default for PrimaryMaterial {
    fn default() -> Self {
        PrimaryMaterial::ReinforcedConcrete
    }
}

impl fmt::Display for PrimaryMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimaryMaterial::ReinforcedConcrete => "Reinforced concrete",
            PrimaryMaterial::StructuralSteel => "Structural steel",
            PrimaryMaterial::Masonry => "Masonry",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Input Sections
// ============================================================================

/// Free-text project identification, shown on the report only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project name
    #[serde(default)]
    pub name: String,

    /// Site location
    #[serde(default)]
    pub location: String,
}

/// Coefficients for the non-structural element force Fp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonStructuralInputs {
    /// Component amplification factor ap
    pub ap: f64,

    /// Design spectral acceleration parameter Sds
    pub sds: f64,

    /// Element weight Wp (kN)
    pub wp_kn: f64,
}

impl Default for NonStructuralInputs {
    fn default() -> Self {
        NonStructuralInputs {
            ap: 1.0,
            sds: 0.5,
            wp_kn: 10.0,
        }
    }
}

/// Riser and tread dimensions for the stair flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairSettings {
    /// Riser height (m)
    #[serde(default = "default_riser_m")]
    pub riser_m: f64,

    /// Tread depth (m)
    #[serde(default = "default_tread_m")]
    pub tread_m: f64,
}

fn default_riser_m() -> f64 {
    DEFAULT_RISER_M
}

fn default_tread_m() -> f64 {
    DEFAULT_TREAD_M
}

impl Default for StairSettings {
    fn default() -> Self {
        StairSettings {
            riser_m: DEFAULT_RISER_M,
            tread_m: DEFAULT_TREAD_M,
        }
    }
}

// ============================================================================
// ProjectInputs
// ============================================================================

/// All inputs of one predimensioning request.
///
/// Units are fixed: meters, kN, kN/m² and MPa.
///
/// ## JSON Example
///
/// ```json
/// {
///   "info": { "name": "Edificio Aula", "location": "Medellín" },
///   "floor_height_m": 3.0,
///   "floor_count": 4,
///   "dead_load_kn_m2": 6.0,
///   "live_load_kn_m2": 2.0,
///   "beam_span_m": 5.0,
///   "column_axial_load_kn": 200.0,
///   "concrete_fc_mpa": 21.0,
///   "tributary_width_m": null,
///   "seismic_coefficient": 0.1,
///   "nonstructural": { "ap": 1.0, "sds": 0.5, "wp_kn": 10.0 },
///   "building_height_m": 12.0,
///   "seismic_zone": "Moderate",
///   "usage_class": "I",
///   "soil_type": "C",
///   "structural_system": "Framed",
///   "primary_material": "ReinforcedConcrete"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    /// Project name and location
    #[serde(default)]
    pub info: ProjectInfo,

    /// Story height (m)
    pub floor_height_m: f64,

    /// Number of floors above the base
    pub floor_count: u32,

    /// Dead load (kN/m²)
    pub dead_load_kn_m2: f64,

    /// Live load (kN/m²)
    pub live_load_kn_m2: f64,

    /// Governing beam clear span (m)
    pub beam_span_m: f64,

    /// Factored column axial load Pu (kN)
    pub column_axial_load_kn: f64,

    /// Concrete compressive strength f'c (MPa)
    pub concrete_fc_mpa: f64,

    /// Tributary width of the column line (m); `None` uses the simple formula
    #[serde(default)]
    pub tributary_width_m: Option<f64>,

    /// Seismic base shear coefficient Cs
    pub seismic_coefficient: f64,

    /// Non-structural element coefficients
    pub nonstructural: NonStructuralInputs,

    /// Total building height (m)
    pub building_height_m: f64,

    pub seismic_zone: SeismicZone,

    pub usage_class: UsageClass,

    pub soil_type: SoilType,

    pub structural_system: StructuralSystem,

    pub primary_material: PrimaryMaterial,

    /// Stair riser and tread
    #[serde(default)]
    pub stair: StairSettings,
}

impl Default for ProjectInputs {
    /// A four-story reinforced concrete frame on moderate-hazard soil C.
    fn default() -> Self {
        ProjectInputs {
            info: ProjectInfo::default(),
            floor_height_m: 3.0,
            floor_count: 4,
            dead_load_kn_m2: 6.0,
            live_load_kn_m2: 2.0,
            beam_span_m: 5.0,
            column_axial_load_kn: 200.0,
            concrete_fc_mpa: 21.0,
            tributary_width_m: None,
            seismic_coefficient: 0.1,
            nonstructural: NonStructuralInputs::default(),
            building_height_m: 12.0,
            seismic_zone: SeismicZone::default(),
            usage_class: UsageClass::default(),
            soil_type: SoilType::default(),
            structural_system: StructuralSystem::default(),
            primary_material: PrimaryMaterial::default(),
            stair: StairSettings::default(),
        }
    }
}

/// Tallest building accepted, in stories
pub const MAX_FLOOR_COUNT: u32 = 200;

/// Fail unless `value` is finite and > 0
fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "must be > 0"))
    }
}

/// Fail unless `value` is finite and >= 0
fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "must be >= 0"))
    }
}

impl ProjectInputs {
    /// Validate every physical constraint, in field order.
    ///
    /// Returns the inputs unchanged on success, or the first violation as
    /// `CalcError::InvalidInput` naming the field. Guarantees the
    /// calculators never divide by zero (f'c, tributary width, riser).
    ///
    /// ```rust
    /// use predim_core::project::ProjectInputs;
    ///
    /// let inputs = ProjectInputs { floor_height_m: 0.0, ..ProjectInputs::default() };
    /// let err = inputs.validate().unwrap_err();
    /// assert_eq!(err.field(), "floor_height_m");
    /// ```
    pub fn validate(&self) -> CalcResult<&Self> {
        require_positive("floor_height_m", self.floor_height_m)?;
        if self.floor_count < 1 {
            return Err(CalcError::invalid_input(
                "floor_count",
                self.floor_count.to_string(),
                "must be >= 1",
            ));
        }
        if self.floor_count > MAX_FLOOR_COUNT {
            return Err(CalcError::invalid_input(
                "floor_count",
                self.floor_count.to_string(),
                format!("must be <= {}", MAX_FLOOR_COUNT),
            ));
        }
        require_non_negative("dead_load_kn_m2", self.dead_load_kn_m2)?;
        require_non_negative("live_load_kn_m2", self.live_load_kn_m2)?;
        require_positive("beam_span_m", self.beam_span_m)?;
        require_positive("column_axial_load_kn", self.column_axial_load_kn)?;
        require_positive("concrete_fc_mpa", self.concrete_fc_mpa)?;
        if let Some(width) = self.tributary_width_m {
            require_positive("tributary_width_m", width)?;
        }
        require_positive("seismic_coefficient", self.seismic_coefficient)?;
        require_positive("nonstructural.ap", self.nonstructural.ap)?;
        require_positive("nonstructural.sds", self.nonstructural.sds)?;
        require_positive("nonstructural.wp_kn", self.nonstructural.wp_kn)?;
        require_positive("building_height_m", self.building_height_m)?;
        require_positive("stair.riser_m", self.stair.riser_m)?;
        require_positive("stair.tread_m", self.stair.tread_m)?;
        if self.floor_height_m / self.stair.riser_m > f64::from(MAX_STEP_COUNT) {
            return Err(CalcError::invalid_input(
                "stair.riser_m",
                self.stair.riser_m.to_string(),
                format!("must give at most {} steps per story", MAX_STEP_COUNT),
            ));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let inputs = ProjectInputs::default();
        let validated = inputs.validate().unwrap();
        assert_eq!(validated, &inputs);
    }

    #[test]
    fn test_zero_floor_height() {
        let inputs = ProjectInputs {
            floor_height_m: 0.0,
            ..ProjectInputs::default()
        };
        let err = inputs.validate().unwrap_err();
        assert_eq!(err.field(), "floor_height_m");
        assert!(err.to_string().contains("floor_height_m must be > 0"));
    }

    #[test]
    fn test_zero_floors() {
        let inputs = ProjectInputs {
            floor_count: 0,
            ..ProjectInputs::default()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), "floor_count");
    }

    #[test]
    fn test_zero_loads_are_allowed() {
        let inputs = ProjectInputs {
            dead_load_kn_m2: 0.0,
            live_load_kn_m2: 0.0,
            ..ProjectInputs::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_negative_live_load() {
        let inputs = ProjectInputs {
            live_load_kn_m2: -1.0,
            ..ProjectInputs::default()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), "live_load_kn_m2");
    }

    #[test]
    fn test_nan_rejected() {
        let inputs = ProjectInputs {
            concrete_fc_mpa: f64::NAN,
            ..ProjectInputs::default()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), "concrete_fc_mpa");

        let inputs = ProjectInputs {
            beam_span_m: f64::INFINITY,
            ..ProjectInputs::default()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), "beam_span_m");
    }

    #[test]
    fn test_zero_tributary_width() {
        let inputs = ProjectInputs {
            tributary_width_m: Some(0.0),
            ..ProjectInputs::default()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), "tributary_width_m");
    }

    #[test]
    fn test_nested_fields_are_dotted() {
        let mut inputs = ProjectInputs::default();
        inputs.stair.riser_m = 0.0;
        assert_eq!(inputs.validate().unwrap_err().field(), "stair.riser_m");

        let mut inputs = ProjectInputs::default();
        inputs.nonstructural.sds = -0.2;
        assert_eq!(inputs.validate().unwrap_err().field(), "nonstructural.sds");
    }

    #[test]
    fn test_each_positive_field_rejected() {
        let cases: [(&str, fn(&mut ProjectInputs, f64)); 13] = [
            ("floor_height_m", |i, v| i.floor_height_m = v),
            ("beam_span_m", |i, v| i.beam_span_m = v),
            ("column_axial_load_kn", |i, v| i.column_axial_load_kn = v),
            ("concrete_fc_mpa", |i, v| i.concrete_fc_mpa = v),
            ("tributary_width_m", |i, v| i.tributary_width_m = Some(v)),
            ("seismic_coefficient", |i, v| i.seismic_coefficient = v),
            ("nonstructural.ap", |i, v| i.nonstructural.ap = v),
            ("nonstructural.sds", |i, v| i.nonstructural.sds = v),
            ("nonstructural.wp_kn", |i, v| i.nonstructural.wp_kn = v),
            ("building_height_m", |i, v| i.building_height_m = v),
            ("stair.riser_m", |i, v| i.stair.riser_m = v),
            ("stair.tread_m", |i, v| i.stair.tread_m = v),
            ("dead_load_kn_m2", |i, v| i.dead_load_kn_m2 = v - 1.0),
        ];
        for (field, set) in cases {
            for value in [0.0, -2.5] {
                let mut inputs = ProjectInputs::default();
                set(&mut inputs, value);
                let err = inputs.validate().unwrap_err();
                assert_eq!(err.field(), field, "{field} = {value}");
                assert_eq!(err.error_code(), "INVALID_INPUT");
            }
        }
    }

    #[test]
    fn test_floor_count_upper_bound() {
        let inputs = ProjectInputs {
            floor_count: MAX_FLOOR_COUNT,
            ..ProjectInputs::default()
        };
        assert!(inputs.validate().is_ok());

        for floor_count in [MAX_FLOOR_COUNT + 1, u32::MAX] {
            let inputs = ProjectInputs {
                floor_count,
                ..ProjectInputs::default()
            };
            let err = inputs.validate().unwrap_err();
            assert_eq!(err.field(), "floor_count");
            assert!(err.to_string().contains("must be <= 200"));
        }
    }

    #[test]
    fn test_step_count_upper_bound() {
        let mut inputs = ProjectInputs::default();
        inputs.floor_height_m = 1e300;
        assert_eq!(inputs.validate().unwrap_err().field(), "stair.riser_m");

        let mut inputs = ProjectInputs::default();
        inputs.stair.riser_m = 1e-6;
        assert_eq!(inputs.validate().unwrap_err().field(), "stair.riser_m");

        let mut inputs = ProjectInputs::default();
        inputs.floor_height_m = 150.0;
        inputs.building_height_m = 600.0;
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        let inputs = ProjectInputs {
            floor_height_m: -3.0,
            concrete_fc_mpa: 0.0,
            ..ProjectInputs::default()
        };
        assert_eq!(inputs.validate().unwrap_err().field(), "floor_height_m");
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{
            "floor_height_m": 2.8,
            "floor_count": 2,
            "dead_load_kn_m2": 5.0,
            "live_load_kn_m2": 2.0,
            "beam_span_m": 4.0,
            "column_axial_load_kn": 300.0,
            "concrete_fc_mpa": 28.0,
            "seismic_coefficient": 0.2,
            "nonstructural": { "ap": 2.5, "sds": 0.6, "wp_kn": 4.0 },
            "building_height_m": 5.6,
            "seismic_zone": "High",
            "usage_class": "III",
            "soil_type": "D",
            "structural_system": "Dual",
            "primary_material": "StructuralSteel"
        }"#;
        let inputs: ProjectInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.tributary_width_m, None);
        assert_eq!(inputs.stair, StairSettings::default());
        assert_eq!(inputs.info, ProjectInfo::default());
        assert_eq!(inputs.seismic_zone, SeismicZone::High);
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_zone_parsing() {
        assert_eq!("Alta".parse::<SeismicZone>().unwrap(), SeismicZone::High);
        assert_eq!(" low ".parse::<SeismicZone>().unwrap(), SeismicZone::Low);
        assert_eq!("Moderada".parse::<SeismicZone>().unwrap(), SeismicZone::Moderate);
        assert_eq!("extreme".parse::<SeismicZone>().unwrap_err().field(), "seismic_zone");
    }

    #[test]
    fn test_usage_class_serialization() {
        let json = serde_json::to_string(&UsageClass::III).unwrap();
        assert_eq!(json, "\"III\"");
        let roundtrip: UsageClass = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, UsageClass::III);
    }
}
