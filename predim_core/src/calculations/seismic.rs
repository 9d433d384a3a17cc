//! # Seismic Base Shear and Floor Distribution
//!
//! Equivalent lateral force procedure reduced to its predimensioning core:
//!
//! 1. Total seismic weight `W = (D + L) · h · n`
//! 2. Base shear `V = Cs · W`
//! 3. Distribution of `V` over the floors with a weight profile rising
//!    linearly from 1.0 at the lowest floor to 2.0 at the top, so upper
//!    floors take a larger share.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::calculations::seismic::{base_shear, distribute};
//!
//! let v = base_shear(1200.0, 0.1);
//! let forces = distribute(v, 4);
//! assert_eq!(forces.len(), 4);
//! assert!((forces.iter().sum::<f64>() - 120.0).abs() < 1e-9);
//! assert!(forces[3] > forces[0]);
//! ```

use serde::{Deserialize, Serialize};

/// Profile weight at the lowest floor
pub const BOTTOM_PROFILE_WEIGHT: f64 = 1.0;

/// Profile weight at the top floor
pub const TOP_PROFILE_WEIGHT: f64 = 2.0;

/// Total estimated seismic weight `(D + L) · h · n` (kN).
///
/// Computed once per request and shared by the base shear and the report.
pub fn total_seismic_weight(dead_load_kn_m2: f64, live_load_kn_m2: f64, floor_height_m: f64, floor_count: u32) -> f64 {
    (dead_load_kn_m2 + live_load_kn_m2) * floor_height_m * f64::from(floor_count)
}

/// Base shear `V = Cs · W` (kN).
pub fn base_shear(total_weight_kn: f64, seismic_coefficient: f64) -> f64 {
    seismic_coefficient * total_weight_kn
}

/// Linear floor-weight profile, lowest floor first.
///
/// Evenly spaced from 1.0 to 2.0; a single floor gets 1.0.
pub fn floor_profile(floor_count: u32) -> Vec<f64> {
    match floor_count {
        0 => Vec::new(),
        1 => vec![BOTTOM_PROFILE_WEIGHT],
        n => {
            let step = (TOP_PROFILE_WEIGHT - BOTTOM_PROFILE_WEIGHT) / f64::from(n - 1);
            (0..n)
                .map(|i| BOTTOM_PROFILE_WEIGHT + step * f64::from(i))
                .collect()
        }
    }
}

/// Distribute the base shear over `floor_count` floors (kN, lowest first).
///
/// The result has `floor_count` entries, sums to `base_shear_kn` and is
/// non-decreasing. Zero floors yield an empty vector.
pub fn distribute(base_shear_kn: f64, floor_count: u32) -> Vec<f64> {
    let profile = floor_profile(floor_count);
    let total: f64 = profile.iter().sum();
    profile
        .into_iter()
        .map(|weight| base_shear_kn * weight / total)
        .collect()
}

/// Seismic results carried in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicResult {
    /// Total estimated seismic weight W (kN)
    pub total_weight_kn: f64,

    /// Seismic coefficient Cs used
    pub seismic_coefficient: f64,

    /// Base shear V = Cs · W (kN)
    pub base_shear_kn: f64,

    /// Lateral force per floor, lowest floor first (kN)
    pub floor_forces_kn: Vec<f64>,
}

impl SeismicResult {
    /// Run weight, base shear and distribution in sequence
    pub fn calculate(
        dead_load_kn_m2: f64,
        live_load_kn_m2: f64,
        floor_height_m: f64,
        floor_count: u32,
        seismic_coefficient: f64,
    ) -> Self {
        let total_weight_kn = total_seismic_weight(dead_load_kn_m2, live_load_kn_m2, floor_height_m, floor_count);
        let base_shear_kn = base_shear(total_weight_kn, seismic_coefficient);
        SeismicResult {
            total_weight_kn,
            seismic_coefficient,
            base_shear_kn,
            floor_forces_kn: distribute(base_shear_kn, floor_count),
        }
    }

    /// Story shear below each floor, lowest floor first.
    ///
    /// The shear in story i is the sum of the floor forces at and above it,
    /// so the first entry equals the base shear.
    pub fn story_shears_kn(&self) -> Vec<f64> {
        let mut shears: Vec<f64> = self
            .floor_forces_kn
            .iter()
            .rev()
            .scan(0.0, |acc, force| {
                *acc += force;
                Some(*acc)
            })
            .collect();
        shears.reverse();
        shears
    }
}
