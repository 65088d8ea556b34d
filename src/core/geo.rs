use crate::constants::{EARTH_RADIUS, MAX_LNG_SPAN};
use crate::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.is_valid_lat() && (-180.0..=180.0).contains(&self.lng)
    }

    pub fn is_valid_lat(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat)
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Calculates the distance to another LatLng using the Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// GeoJSON position order: `[lng, lat]`
    pub fn to_position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<geo_types::Coord<f64>> for LatLng {
    fn from(value: geo_types::Coord<f64>) -> Self {
        LatLng::new(value.y, value.x)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    pub fn south(&self) -> f64 {
        self.south_west.lat
    }

    pub fn north(&self) -> f64 {
        self.north_east.lat
    }

    pub fn west(&self) -> f64 {
        self.south_west.lng
    }

    pub fn east(&self) -> f64 {
        self.north_east.lng
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    /// Rejects bounds that are non-finite, leave the latitude range, span
    /// more than one turn of longitude, or have a non-positive span on
    /// either axis.
    ///
    /// Longitudes outside `[-180, 180]` are accepted for wrapped cameras.
    pub fn validate(&self) -> Result<()> {
        if !self.south_west.is_finite() || !self.north_east.is_finite() {
            return Err(GridError::InvalidViewport(format!(
                "bounds must be finite, got {:?}",
                self
            )));
        }
        if !self.south_west.is_valid_lat() || !self.north_east.is_valid_lat() {
            return Err(GridError::InvalidViewport(format!(
                "latitudes must lie within [-90, 90], got {} to {}",
                self.south(),
                self.north()
            )));
        }
        if self.east() - self.west() > MAX_LNG_SPAN {
            return Err(GridError::InvalidViewport(format!(
                "longitude span {} exceeds {}",
                self.east() - self.west(),
                MAX_LNG_SPAN
            )));
        }
        if self.south() >= self.north() {
            return Err(GridError::InvalidViewport(format!(
                "south ({}) must be below north ({})",
                self.south(),
                self.north()
            )));
        }
        if self.west() >= self.east() {
            return Err(GridError::InvalidViewport(format!(
                "west ({}) must be below east ({})",
                self.west(),
                self.east()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(35.6812, 139.7671);
        assert_eq!(coord.lat, 35.6812);
        assert_eq!(coord.lng, 139.7671);
        assert!(coord.is_valid());
        assert_eq!(coord.to_position(), [139.7671, 35.6812]);
    }

    #[test]
    fn test_lat_lng_distance() {
        let tokyo = LatLng::new(35.6812, 139.7671);
        let osaka = LatLng::new(34.7025, 135.4959);
        let distance = tokyo.distance_to(&osaka);

        // Tokyo Station to Osaka Station is roughly 403 km as the crow flies
        assert!((distance - 403_000.0).abs() < 10_000.0);
    }

    #[test]
    fn test_geo_types_round_trip() {
        let coord = LatLng::new(20.0, 122.0);
        let c: geo_types::Coord<f64> = coord.into();
        assert_eq!(c.x, 122.0);
        assert_eq!(c.y, 20.0);
        assert_eq!(LatLng::from(c), coord);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(35.65, 139.70, 35.71, 139.80);
        assert!(bounds.contains(&LatLng::new(35.68, 139.75)));
        assert!(!bounds.contains(&LatLng::new(35.72, 139.75)));
        assert_eq!(bounds.south(), 35.65);
        assert_eq!(bounds.east(), 139.80);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(LatLngBounds::from_coords(35.65, 139.70, 35.71, 139.80)
            .validate()
            .is_ok());
        assert!(matches!(
            LatLngBounds::from_coords(35.7, 139.7, 35.7, 139.8).validate(),
            Err(GridError::InvalidViewport(_))
        ));
        assert!(matches!(
            LatLngBounds::from_coords(35.6, 139.8, 35.7, 139.8).validate(),
            Err(GridError::InvalidViewport(_))
        ));
        assert!(matches!(
            LatLngBounds::from_coords(f64::NAN, 139.7, 35.7, 139.8).validate(),
            Err(GridError::InvalidViewport(_))
        ));
    }

    #[test]
    fn test_bounds_out_of_range() {
        assert!(matches!(
            LatLngBounds::from_coords(-1e300, 139.70, 1e300, 139.80).validate(),
            Err(GridError::InvalidViewport(_))
        ));
        assert!(matches!(
            LatLngBounds::from_coords(35.6, 139.7, 90.5, 139.8).validate(),
            Err(GridError::InvalidViewport(_))
        ));
        assert!(matches!(
            LatLngBounds::from_coords(35.6, -200.0, 35.7, 200.0).validate(),
            Err(GridError::InvalidViewport(_))
        ));

        // Wrapped cameras and the poles themselves are fine.
        assert!(LatLngBounds::from_coords(35.6, 179.9, 35.7, 180.1)
            .validate()
            .is_ok());
        assert!(LatLngBounds::from_coords(-90.0, -180.0, 90.0, 180.0)
            .validate()
            .is_ok());
    }
}
