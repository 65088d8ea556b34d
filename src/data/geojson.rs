use crate::core::geo::{LatLng, LatLngBounds};
use crate::grid::highlight::HighlightedCell;
use crate::grid::lines::{GridLine, GridLineSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// GeoJSON geometry types emitted by the overlay. Positions are `[lng, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl GeoJsonGeometry {
    /// Converts coordinates to LatLng points (exterior ring for polygons)
    pub fn to_lat_lng_points(&self) -> Vec<LatLng> {
        let positions = match self {
            GeoJsonGeometry::LineString { coordinates } => coordinates.as_slice(),
            GeoJsonGeometry::Polygon { coordinates } => {
                coordinates.first().map(Vec::as_slice).unwrap_or(&[])
            }
        };
        positions.iter().map(|c| LatLng::new(c[1], c[0])).collect()
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoJsonFeature {
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    pub fn new(geometry: GeoJsonGeometry) -> Self {
        Self {
            geometry: Some(geometry),
            properties: None,
        }
    }

    pub fn with_property<V: Into<serde_json::Value>>(mut self, key: &str, value: V) -> Self {
        self.properties
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<GeoJsonFeature>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoJson {
    FeatureCollection(FeatureCollection),
    Feature(GeoJsonFeature),
}

impl GeoJson {
    pub fn from_features(features: Vec<GeoJsonFeature>) -> Self {
        GeoJson::FeatureCollection(FeatureCollection { features })
    }

    /// Parses a GeoJSON document
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(geojson_str)?)
    }

    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Gets all features
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::FeatureCollection(collection) => collection.features.iter().collect(),
            GeoJson::Feature(feature) => vec![feature],
        }
    }

    /// Gets the bounding box of all features
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = self
            .features()
            .into_iter()
            .filter_map(|f| f.geometry.as_ref())
            .flat_map(GeoJsonGeometry::to_lat_lng_points)
            .collect();
        let (first, rest) = points.split_first()?;

        let mut bounds = LatLngBounds::new(*first, *first);
        for point in rest {
            bounds.south_west.lat = bounds.south_west.lat.min(point.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(point.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(point.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(point.lng);
        }
        Some(bounds)
    }
}

impl From<&GridLine> for GeoJsonFeature {
    fn from(line: &GridLine) -> Self {
        GeoJsonFeature::new(GeoJsonGeometry::LineString {
            coordinates: vec![line.from.to_position(), line.to.to_position()],
        })
        .with_property("orientation", line.orientation.to_string())
        .with_property("index", line.index)
    }
}

impl From<&GridLineSet> for GeoJson {
    fn from(lines: &GridLineSet) -> Self {
        GeoJson::from_features(lines.iter().map(GeoJsonFeature::from).collect())
    }
}

impl From<&HighlightedCell> for GeoJson {
    fn from(cell: &HighlightedCell) -> Self {
        let ring = cell.ring().iter().map(LatLng::to_position).collect();
        GeoJson::from_features(vec![GeoJsonFeature::new(GeoJsonGeometry::Polygon {
            coordinates: vec![ring],
        })])
    }
}
