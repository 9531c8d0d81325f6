//! Population-to-radius scaling for proportional symbols
//!
//! Radii grow with the square root of population, so symbol area grows
//! linearly with it. The same scale instance serves live rendering and the
//! legend swatches, keeping the two visually consistent.

use crate::error::{MapError, Result};

/// Smallest symbol radius in pixels, also the floor for degenerate inputs
pub const MIN_RADIUS: f64 = 4.0;

/// Radius given to the site holding the dataset maximum, in pixels
pub const MAX_RADIUS: f64 = 32.0;

/// Maps a population to a bounded pixel radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    min: f64,
    max: f64,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self { min: MIN_RADIUS, max: MAX_RADIUS }
    }
}

impl RadiusScale {
    /// Create a scale with custom bounds. Requires `0 < min < max`, both
    /// finite.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(MapError::InvalidRadiusBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Radius for `magnitude` against the dataset maximum `max_magnitude`.
    ///
    /// Degenerate inputs floor to the minimum radius: an absent,
    /// non-positive or non-finite magnitude, or a maximum that is zero,
    /// negative or non-finite. Otherwise the radius interpolates between
    /// the bounds on `sqrt(magnitude) / sqrt(max_magnitude)`; magnitudes
    /// above the maximum saturate at the full radius rather than exceeding
    /// it.
    pub fn radius(&self, magnitude: Option<f64>, max_magnitude: f64) -> f64 {
        if !max_magnitude.is_finite() || max_magnitude <= 0.0 {
            return self.min;
        }
        let magnitude = match magnitude {
            Some(m) if m.is_finite() && m > 0.0 => m,
            _ => return self.min,
        };

        let t = (magnitude.sqrt() / max_magnitude.sqrt()).min(1.0);
        self.min + t * (self.max - self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_uses_the_pixel_constants() {
        let scale = RadiusScale::default();
        assert_eq!(scale.min(), MIN_RADIUS);
        assert_eq!(scale.max(), MAX_RADIUS);
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        assert!(RadiusScale::new(0.0, 10.0).is_err());
        assert!(RadiusScale::new(-1.0, 10.0).is_err());
        assert!(RadiusScale::new(10.0, 10.0).is_err());
        assert!(RadiusScale::new(12.0, 10.0).is_err());
        assert!(RadiusScale::new(f64::NAN, 10.0).is_err());
        assert!(RadiusScale::new(2.0, 20.0).is_ok());
    }

    #[test]
    fn test_degenerate_inputs_floor_to_min() {
        let scale = RadiusScale::default();
        assert_eq!(scale.radius(None, 10_000.0), MIN_RADIUS);
        assert_eq!(scale.radius(Some(0.0), 10_000.0), MIN_RADIUS);
        assert_eq!(scale.radius(Some(-50.0), 10_000.0), MIN_RADIUS);
        assert_eq!(scale.radius(Some(f64::NAN), 10_000.0), MIN_RADIUS);
        assert_eq!(scale.radius(Some(500.0), 0.0), MIN_RADIUS);
        assert_eq!(scale.radius(Some(500.0), f64::NAN), MIN_RADIUS);
    }

    #[test]
    fn test_dataset_maximum_gets_full_radius() {
        let scale = RadiusScale::default();
        assert_eq!(scale.radius(Some(10_000.0), 10_000.0), MAX_RADIUS);
    }

    #[test]
    fn test_quarter_of_maximum_lands_at_the_midpoint() {
        // sqrt(2500) / sqrt(10000) = 0.5, so the radius is halfway between
        // the bounds.
        let scale = RadiusScale::default();
        let expected = MIN_RADIUS + 0.5 * (MAX_RADIUS - MIN_RADIUS);
        assert_eq!(scale.radius(Some(2_500.0), 10_000.0), expected);
        assert_eq!(expected, 18.0);
    }

    #[test]
    fn test_magnitudes_above_the_maximum_saturate() {
        let scale = RadiusScale::default();
        assert_eq!(scale.radius(Some(40_000.0), 10_000.0), MAX_RADIUS);
    }

    #[test]
    fn test_custom_bounds_interpolate() {
        let scale = RadiusScale::new(2.0, 10.0).unwrap();
        assert_eq!(scale.radius(Some(2_500.0), 10_000.0), 6.0);
        assert_eq!(scale.radius(None, 10_000.0), 2.0);
    }

    proptest! {
        #[test]
        fn prop_radius_is_monotonic_in_magnitude(
            a in 0.0f64..1_000_000.0,
            b in 0.0f64..1_000_000.0,
            max in 1.0f64..1_000_000.0,
        ) {
            let scale = RadiusScale::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scale.radius(Some(lo), max) <= scale.radius(Some(hi), max));
        }

        #[test]
        fn prop_radius_stays_within_bounds(
            magnitude in proptest::option::of(-1_000.0f64..1_000_000.0),
            max in 0.0f64..1_000_000.0,
        ) {
            let scale = RadiusScale::default();
            let radius = scale.radius(magnitude, max);
            prop_assert!(radius >= MIN_RADIUS);
            prop_assert!(radius <= MAX_RADIUS);
        }
    }
}
