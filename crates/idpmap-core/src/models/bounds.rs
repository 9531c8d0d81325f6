use serde::{Deserialize, Serialize};

use super::observation::GeoPoint;

/// A geographic bounding box in WGS84 coordinates, used for initial view
/// framing. Grown point by point while the index is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Western longitude boundary
    pub west: f64,
    /// Southern latitude boundary
    pub south: f64,
    /// Eastern longitude boundary
    pub east: f64,
    /// Northern latitude boundary
    pub north: f64,
}

impl GeoBounds {
    /// A degenerate box covering a single point
    pub fn around(point: &GeoPoint) -> Self {
        Self {
            west: point.longitude,
            south: point.latitude,
            east: point.longitude,
            north: point.latitude,
        }
    }

    /// Grow the box to include `point`
    pub fn extend(&mut self, point: &GeoPoint) {
        self.west = self.west.min(point.longitude);
        self.south = self.south.min(point.latitude);
        self.east = self.east.max(point.longitude);
        self.north = self.north.max(point.latitude);
    }

    /// Midpoint of the box, the default framing center
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }

    /// Fold a point into an optional running box
    pub fn accumulate(bounds: &mut Option<GeoBounds>, point: &GeoPoint) {
        match bounds {
            Some(b) => b.extend(point),
            None => *bounds = Some(GeoBounds::around(point)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_grow_to_cover_points() {
        let mut bounds = GeoBounds::around(&GeoPoint::new(38.0, 8.0));
        bounds.extend(&GeoPoint::new(42.5, 6.1));
        bounds.extend(&GeoPoint::new(36.2, 12.9));

        assert_eq!(bounds.west, 36.2);
        assert_eq!(bounds.south, 6.1);
        assert_eq!(bounds.east, 42.5);
        assert_eq!(bounds.north, 12.9);
    }

    #[test]
    fn test_center_is_midpoint() {
        let mut bounds = GeoBounds::around(&GeoPoint::new(30.0, 5.0));
        bounds.extend(&GeoPoint::new(40.0, 15.0));

        let center = bounds.center();
        assert_eq!(center.longitude, 35.0);
        assert_eq!(center.latitude, 10.0);
    }

    #[test]
    fn test_accumulate_starts_from_none() {
        let mut bounds = None;
        GeoBounds::accumulate(&mut bounds, &GeoPoint::new(38.0, 8.0));
        GeoBounds::accumulate(&mut bounds, &GeoPoint::new(39.0, 9.0));

        let bounds = bounds.unwrap();
        assert_eq!(bounds.west, 38.0);
        assert_eq!(bounds.north, 9.0);
    }
}
