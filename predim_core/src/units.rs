//! # Unit Types
//!
//! Thin newtype wrappers for the few display conversions the engine needs.
//! Every formula works in fixed SI units (m, kN, kN/m², MPa); these types
//! exist so that a value in m² is never printed as cm² by accident.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::units::{Centimeters, Meters, SquareCentimeters, SquareMeters};
//!
//! let depth: Centimeters = Meters(0.5).into();
//! assert_eq!(depth.0, 50.0);
//!
//! let area: SquareCentimeters = SquareMeters(0.0025).into();
//! assert!((area.0 - 25.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareCentimeters(pub f64);

/// cm² per m²
pub const CM2_PER_M2: f64 = 10_000.0;

impl From<SquareMeters> for SquareCentimeters {
    fn from(m2: SquareMeters) -> Self {
        SquareCentimeters(m2.0 * CM2_PER_M2)
    }
}

impl From<SquareCentimeters> for SquareMeters {
    fn from(cm2: SquareCentimeters) -> Self {
        SquareMeters(cm2.0 / CM2_PER_M2)
    }
}

// ============================================================================
// Raw Value Access
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Meters);
impl_value!(Centimeters);
impl_value!(SquareMeters);
impl_value!(SquareCentimeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let cm: Centimeters = Meters(0.25).into();
        assert_eq!(cm.value(), 25.0);
    }

    #[test]
    fn test_area_conversion() {
        let cm2: SquareCentimeters = SquareMeters(1.0).into();
        assert_eq!(cm2.0, 10_000.0);
        let m2: SquareMeters = SquareCentimeters(27.21).into();
        assert!((m2.0 - 0.002721).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(5.04);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "5.04");
    }
}
