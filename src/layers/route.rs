use crate::core::geo::LatLng;
use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};
use serde::{Deserialize, Serialize};

/// Straight line from the user's position to a destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteLine {
    pub origin: LatLng,
    pub destination: LatLng,
}

impl RouteLine {
    pub fn new(origin: LatLng, destination: LatLng) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Great-circle length in meters
    pub fn length_meters(&self) -> f64 {
        self.origin.distance_to(&self.destination)
    }

    pub fn to_line_string(&self) -> geo_types::LineString<f64> {
        geo_types::LineString::new(vec![self.origin.into(), self.destination.into()])
    }
}

impl From<&RouteLine> for GeoJson {
    fn from(route: &RouteLine) -> Self {
        GeoJson::from_features(vec![GeoJsonFeature::new(GeoJsonGeometry::LineString {
            coordinates: vec![route.origin.to_position(), route.destination.to_position()],
        })
        .with_property("length_m", route.length_meters())])
    }
}

/// Holds the active route, if any. Navigation ends with [`cancel`].
///
/// [`cancel`]: RouteOverlay::cancel
#[derive(Debug, Clone, Default)]
pub struct RouteOverlay {
    active: Option<RouteLine>,
}

impl RouteOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active route
    pub fn set_route(&mut self, origin: LatLng, destination: LatLng) -> &RouteLine {
        log::debug!(
            "route to ({:.6}, {:.6}) set",
            destination.lat,
            destination.lng
        );
        self.active.insert(RouteLine::new(origin, destination))
    }

    /// Clears the route; returns the one that was active
    pub fn cancel(&mut self) -> Option<RouteLine> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&RouteLine> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lifecycle() {
        let mut overlay = RouteOverlay::new();
        assert!(!overlay.is_active());

        let tokyo_station = LatLng::new(35.6812, 139.7671);
        let skytree = LatLng::new(35.7101, 139.8107);
        let route = *overlay.set_route(tokyo_station, skytree);
        assert_eq!(overlay.active(), Some(&route));

        // Roughly 5 km apart
        assert!((route.length_meters() - 5_100.0).abs() < 500.0);

        assert_eq!(overlay.cancel(), Some(route));
        assert!(overlay.cancel().is_none());
    }

    #[test]
    fn test_route_geojson() {
        let route = RouteLine::new(LatLng::new(35.0, 139.0), LatLng::new(35.1, 139.1));
        let geojson = GeoJson::from(&route);
        let feature = geojson.features()[0];
        assert_eq!(
            feature.geometry,
            Some(GeoJsonGeometry::LineString {
                coordinates: vec![[139.0, 35.0], [139.1, 35.1]]
            })
        );
        assert!(feature.property("length_m").is_some());
        assert_eq!(route.to_line_string().0.len(), 2);
    }
}
