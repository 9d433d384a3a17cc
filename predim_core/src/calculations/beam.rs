//! # Beam Predimensioning
//!
//! Rule-of-thumb beam section from clear span: depth L/10, width half the
//! depth. Appropriate for reinforced concrete beams in ordinary framed
//! buildings; detailed flexural design happens later.
//!
//! ## Example
//!
//! ```rust
//! use predim_core::calculations::beam::size_beam;
//!
//! let beam = size_beam(5.0);
//! assert!((beam.height_m - 0.5).abs() < 1e-12);
//! assert!((beam.width_m - 0.25).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Centimeters, Meters};

/// Span-to-depth ratio used for the beam height
pub const SPAN_TO_DEPTH: f64 = 10.0;

/// Depth-to-width ratio used for the beam width
pub const DEPTH_TO_WIDTH: f64 = 2.0;

/// Predimensioned beam section.
///
/// ## JSON Example
///
/// ```json
/// { "span_m": 5.0, "height_m": 0.5, "width_m": 0.25 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSize {
    /// Clear span the section was derived from (m)
    pub span_m: f64,

    /// Total section height h = L/10 (m)
    pub height_m: f64,

    /// Section width b = h/2 (m)
    pub width_m: f64,
}

impl BeamSize {
    /// Height in centimeters, for display
    pub fn height_cm(&self) -> Centimeters {
        Meters(self.height_m).into()
    }

    /// Width in centimeters, for display
    pub fn width_cm(&self) -> Centimeters {
        Meters(self.width_m).into()
    }
}

/// Size a beam from its span in meters.
///
/// Monotonic in span. Callers pass a validated positive span.
pub fn size_beam(span_m: f64) -> BeamSize {
    let height_m = span_m / SPAN_TO_DEPTH;
    BeamSize {
        span_m,
        height_m,
        width_m: height_m / DEPTH_TO_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_five_meter_span() {
        let beam = size_beam(5.0);
        assert_relative_eq!(beam.height_m, 0.5);
        assert_relative_eq!(beam.width_m, 0.25);
        assert_relative_eq!(beam.height_cm().0, 50.0);
        assert_relative_eq!(beam.width_cm().0, 25.0);
    }

    #[test]
    fn test_width_is_span_over_twenty() {
        for span in [0.5, 3.2, 6.0, 7.75, 12.0] {
            let beam = size_beam(span);
            assert_relative_eq!(beam.height_m, span / 10.0);
            assert_relative_eq!(beam.width_m, beam.height_m / 2.0);
            assert_relative_eq!(beam.width_m, span / 20.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_monotonic_in_span() {
        let short = size_beam(4.0);
        let long = size_beam(4.5);
        assert!(long.height_m > short.height_m);
        assert!(long.width_m > short.width_m);
    }
}
