//! # Non-Structural Element Force
//!
//! Design seismic force on an element attached to the structure
//! (ceilings, partitions, façade panels): `Fp = 0.4 · ap · Sds · Wp`.

use serde::{Deserialize, Serialize};

/// Constant factor of the Fp expression
pub const FP_FACTOR: f64 = 0.4;

/// Seismic force on a non-structural element (kN).
///
/// ```rust
/// use predim_core::calculations::nonstructural::fp;
///
/// assert!((fp(1.0, 1.0, 1.0) - 0.4).abs() < 1e-12);
/// ```
pub fn fp(ap: f64, sds: f64, wp_kn: f64) -> f64 {
    FP_FACTOR * ap * sds * wp_kn
}

/// Fp together with the coefficients it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NonStructuralForce {
    pub ap: f64,
    pub sds: f64,
    pub wp_kn: f64,
    /// Fp (kN)
    pub fp_kn: f64,
}

impl NonStructuralForce {
    pub fn calculate(ap: f64, sds: f64, wp_kn: f64) -> Self {
        NonStructuralForce {
            ap,
            sds,
            wp_kn,
            fp_kn: fp(ap, sds, wp_kn),
        }
    }

    /// Fp as a fraction of the element weight
    pub fn weight_ratio(&self) -> f64 {
        self.fp_kn / self.wp_kn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_inputs() {
        assert_relative_eq!(fp(1.0, 1.0, 1.0), 0.4);
    }

    #[test]
    fn test_linear_in_each_argument() {
        let base = fp(1.5, 0.6, 12.0);
        assert_relative_eq!(fp(3.0, 0.6, 12.0), 2.0 * base, max_relative = 1e-12);
        assert_relative_eq!(fp(1.5, 1.8, 12.0), 3.0 * base, max_relative = 1e-12);
        assert_relative_eq!(fp(1.5, 0.6, 6.0), 0.5 * base, max_relative = 1e-12);
    }

    #[test]
    fn test_weight_ratio() {
        let force = NonStructuralForce::calculate(2.5, 0.5, 10.0);
        assert_relative_eq!(force.fp_kn, 5.0, max_relative = 1e-12);
        assert_relative_eq!(force.weight_ratio(), 0.5, max_relative = 1e-12);
    }
}
