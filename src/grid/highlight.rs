use crate::core::geo::{LatLng, LatLngBounds};
use crate::grid::size::GridCellSize;
use geo_types::{LineString, Polygon};

/// A single grid cell selected by the user, drawn as a filled overlay.
///
/// The ring is always closed: four corners followed by the first corner
/// again.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedCell {
    polygon: Polygon<f64>,
}

impl HighlightedCell {
    /// Builds a cell from its four corners, in drawing order.
    pub fn from_corners(corners: [LatLng; 4]) -> Self {
        let mut ring: Vec<geo_types::Coord<f64>> = corners.iter().map(|c| (*c).into()).collect();
        ring.push(corners[0].into());
        Self {
            polygon: Polygon::new(LineString::new(ring), Vec::new()),
        }
    }

    /// Builds a cell covering `bounds`, starting at the south-west corner and
    /// running counter-clockwise.
    pub fn from_bounds(bounds: &LatLngBounds) -> Self {
        Self::from_corners([
            LatLng::new(bounds.south(), bounds.west()),
            LatLng::new(bounds.south(), bounds.east()),
            LatLng::new(bounds.north(), bounds.east()),
            LatLng::new(bounds.north(), bounds.west()),
        ])
    }

    /// The grid cell of `cell_size` containing `point`, for a grid anchored at
    /// `origin`. Points exactly on a line belong to the cell north/east of it.
    pub fn containing(point: LatLng, cell_size: GridCellSize, origin: LatLng) -> Self {
        let d_lat = cell_size.lat_delta();
        let d_lng = cell_size.lng_delta(origin.lat);

        let row = ((point.lat - origin.lat) / d_lat).floor();
        let col = ((point.lng - origin.lng) / d_lng).floor();

        let south = origin.lat + row * d_lat;
        let west = origin.lng + col * d_lng;
        Self::from_bounds(&LatLngBounds::from_coords(
            south,
            west,
            origin.lat + (row + 1.0) * d_lat,
            origin.lng + (col + 1.0) * d_lng,
        ))
    }

    /// Accepts a host-supplied polygon, closing its exterior ring if needed.
    pub fn from_polygon(mut polygon: Polygon<f64>) -> Self {
        polygon.exterior_mut(|ring| ring.close());
        Self { polygon }
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    /// Exterior ring as coordinates, closing position included
    pub fn ring(&self) -> Vec<LatLng> {
        self.polygon.exterior().0.iter().map(|c| LatLng::from(*c)).collect()
    }

    /// Smallest bounds enclosing the ring, `None` for an empty polygon
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let ring = self.ring();
        let (first, rest) = ring.split_first()?;
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

impl From<Polygon<f64>> for HighlightedCell {
    fn from(polygon: Polygon<f64>) -> Self {
        Self::from_polygon(polygon)
    }
}
