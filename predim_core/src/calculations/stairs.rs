//! # Stair Geometry
//!
//! Step count and horizontal run of one flight covering a given rise.
//!
//! The step count is `total_rise / riser` rounded half up: 17.5 risers
//! become 18 steps. The quotient is nudged by [`ROUNDING_TOLERANCE`] before
//! rounding so that decimal halves such as 0.425 / 0.17 (2.4999999999999996
//! in binary) still round up.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::calculations::stairs::stairs_default;
//!
//! let flight = stairs_default(3.0);
//! assert_eq!(flight.step_count, 18);
//! assert!((flight.total_run_m - 5.04).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Default riser height (m)
pub const DEFAULT_RISER_M: f64 = 0.17;

/// Default tread depth (m)
pub const DEFAULT_TREAD_M: f64 = 0.28;

/// Most steps accepted for one flight; `ProjectInputs::validate` rejects
/// a story height / riser pair above this.
pub const MAX_STEP_COUNT: u32 = 1_000;

/// Absolute slack added to `rise / riser` before rounding half up
pub const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Stair geometry for one flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairGeometry {
    /// Vertical rise covered (m)
    pub total_rise_m: f64,

    /// Riser height used (m)
    pub riser_m: f64,

    /// Tread depth used (m)
    pub tread_m: f64,

    /// Number of steps
    pub step_count: u32,

    /// Horizontal run = step_count · tread (m)
    pub total_run_m: f64,
}

impl StairGeometry {
    /// Riser height actually built once the rise is split into whole steps
    pub fn actual_riser_m(&self) -> f64 {
        if self.step_count == 0 {
            0.0
        } else {
            self.total_rise_m / f64::from(self.step_count)
        }
    }
}

/// Round half up, within [`ROUNDING_TOLERANCE`]. Callers pass non-negative values.
fn round_half_up(value: f64) -> u32 {
    // Saturating cast; validated inputs stay under MAX_STEP_COUNT.
    (value + 0.5 + ROUNDING_TOLERANCE).floor() as u32
}

/// Compute a flight with explicit riser and tread (m).
pub fn stairs(total_rise_m: f64, riser_m: f64, tread_m: f64) -> StairGeometry {
    let step_count = round_half_up(total_rise_m / riser_m);
    StairGeometry {
        total_rise_m,
        riser_m,
        tread_m,
        step_count,
        total_run_m: f64::from(step_count) * tread_m,
    }
}

/// Compute a flight with the default 0.17 m riser and 0.28 m tread.
pub fn stairs_default(total_rise_m: f64) -> StairGeometry {
    stairs(total_rise_m, DEFAULT_RISER_M, DEFAULT_TREAD_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_meter_rise() {
        let flight = stairs(3.0, 0.17, 0.28);
        // 3 / 0.17 = 17.65
        assert_eq!(flight.step_count, 18);
        assert_relative_eq!(flight.total_run_m, 5.04, epsilon = 1e-9);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(stairs(0.75, 0.5, 0.3).step_count, 2);
        assert_eq!(stairs(1.25, 0.5, 0.3).step_count, 3);
        assert_eq!(stairs(2.5, 1.0, 0.3).step_count, 3);
        assert_eq!(stairs(3.5, 1.0, 0.3).step_count, 4);
    }

    #[test]
    fn test_decimal_half_rounds_up() {
        // 0.425 / 0.17 evaluates to 2.4999999999999996
        assert_eq!(stairs(0.425, 0.17, 0.28).step_count, 3);
        assert_eq!(stairs(0.45, 0.18, 0.28).step_count, 3);
        assert_eq!(stairs(2.975, 0.17, 0.28).step_count, 18);
        assert_eq!(stairs(0.85, 0.17, 0.28).step_count, 5);
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        assert_eq!(stairs(2.49, 1.0, 0.3).step_count, 2);
        assert_eq!(stairs(0.42, 0.17, 0.28).step_count, 2);
    }

    #[test]
    fn test_custom_dimensions() {
        let flight = stairs(2.8, 0.175, 0.30);
        assert_eq!(flight.step_count, 16);
        assert_relative_eq!(flight.total_run_m, 4.8, epsilon = 1e-9);
        assert_relative_eq!(flight.actual_riser_m(), 0.175, epsilon = 1e-9);
    }

    #[test]
    fn test_run_matches_rounded_count() {
        for rise in [0.9, 2.4, 2.75, 3.1, 4.5] {
            for (riser, tread) in [(0.15, 0.30), (0.17, 0.28), (0.18, 0.25)] {
                let flight = stairs(rise, riser, tread);
                let expected = (rise / riser).round();
                assert_eq!(f64::from(flight.step_count), expected);
                assert_relative_eq!(flight.total_run_m, expected * tread, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_tiny_rise_has_no_steps() {
        let flight = stairs_default(0.05);
        assert_eq!(flight.step_count, 0);
        assert_eq!(flight.total_run_m, 0.0);
        assert_eq!(flight.actual_riser_m(), 0.0);
    }
}
