use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::viewport::ViewportState;
use crate::grid::size::GridCellSize;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Which axis a grid line runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrientation {
    /// Constant longitude, south to north
    Vertical,
    /// Constant latitude, west to east
    Horizontal,
}

impl std::fmt::Display for LineOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineOrientation::Vertical => write!(f, "vertical"),
            LineOrientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// One grid line clipped to the visible bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub orientation: LineOrientation,
    /// Signed multiple of the cell spacing away from the origin
    pub index: i64,
    pub from: LatLng,
    pub to: LatLng,
}

impl GridLine {
    /// Fixed coordinate of the line: longitude for vertical lines, latitude
    /// for horizontal ones.
    pub fn coordinate(&self) -> f64 {
        match self.orientation {
            LineOrientation::Vertical => self.from.lng,
            LineOrientation::Horizontal => self.from.lat,
        }
    }

    pub fn to_line_string(&self) -> geo_types::LineString<f64> {
        geo_types::LineString::new(vec![self.from.into(), self.to.into()])
    }
}

/// All lines of one grid snapshot: vertical lines first, then horizontal,
/// each in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLineSet {
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
}

impl GridLineSet {
    /// Generates the lines of `cell_size` that intersect `bounds`.
    pub fn generate(bounds: &LatLngBounds, cell_size: GridCellSize, origin: LatLng) -> Self {
        let d_lat = cell_size.lat_delta();
        let d_lng = cell_size.lng_delta(origin.lat);

        let vertical = index_range(bounds.west(), bounds.east(), origin.lng, d_lng)
            .map(|range| {
                range
                    .map(|n| {
                        let lng = origin.lng + n as f64 * d_lng;
                        GridLine {
                            orientation: LineOrientation::Vertical,
                            index: n,
                            from: LatLng::new(bounds.south(), lng),
                            to: LatLng::new(bounds.north(), lng),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let horizontal = index_range(bounds.south(), bounds.north(), origin.lat, d_lat)
            .map(|range| {
                range
                    .map(|m| {
                        let lat = origin.lat + m as f64 * d_lat;
                        GridLine {
                            orientation: LineOrientation::Horizontal,
                            index: m,
                            from: LatLng::new(lat, bounds.west()),
                            to: LatLng::new(lat, bounds.east()),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            vertical,
            horizontal,
        }
    }

    pub fn len(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    /// Lines in render order
    pub fn iter(&self) -> impl Iterator<Item = &GridLine> {
        self.vertical.iter().chain(self.horizontal.iter())
    }

    pub fn to_multi_line_string(&self) -> geo_types::MultiLineString<f64> {
        geo_types::MultiLineString::new(self.iter().map(GridLine::to_line_string).collect())
    }
}

/// Largest line index magnitude; past this `f64` no longer holds every
/// integer exactly.
const MAX_LINE_INDEX: f64 = 9_007_199_254_740_992.0;

/// Steps allowed when settling an end of the range against the emitted
/// coordinates. The quotient estimate is never off by more than one.
const EDGE_SETTLE_STEPS: usize = 2;

fn to_index(value: f64) -> Option<i64> {
    (value.is_finite() && value.abs() <= MAX_LINE_INDEX).then_some(value as i64)
}

/// Inclusive range of line indices `n` with `origin + n * delta` inside
/// `[min, max]`, or `None` when no line falls inside or the indices are
/// out of range.
///
/// Membership is decided on the same `origin + n * delta` expression the
/// lines are emitted with, so a line landing exactly on an edge is kept.
pub fn index_range(min: f64, max: f64, origin: f64, delta: f64) -> Option<RangeInclusive<i64>> {
    let line_at = |n: i64| origin + n as f64 * delta;
    let mut first = to_index(((min - origin) / delta).ceil())?;
    let mut last = to_index(((max - origin) / delta).floor())?;

    for _ in 0..EDGE_SETTLE_STEPS {
        if line_at(first) < min {
            first += 1;
        } else if line_at(first - 1) >= min {
            first -= 1;
        }
        if line_at(last) > max {
            last -= 1;
        } else if line_at(last + 1) <= max {
            last += 1;
        }
    }
    (first <= last).then_some(first..=last)
}

/// Outcome of a grid computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridComputation {
    /// Zoomed out past the suppression threshold; nothing is drawn
    Suppressed,
    Grid {
        cell_size: GridCellSize,
        lines: GridLineSet,
    },
}

impl GridComputation {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, GridComputation::Suppressed)
    }
}

/// Computes the grid for a viewport.
///
/// Suppression is checked before the bounds, so a zoomed-out viewport is
/// suppressed whatever its bounds look like. A non-finite zoom is always
/// an error.
pub fn compute_grid_lines(
    viewport: &ViewportState,
    origin: LatLng,
    suppress_below_zoom: f64,
) -> Result<GridComputation> {
    viewport.validate_zoom()?;
    if viewport.zoom < suppress_below_zoom {
        return Ok(GridComputation::Suppressed);
    }
    viewport.bounds.validate()?;

    let cell_size = GridCellSize::classify(viewport.zoom);
    let lines = GridLineSet::generate(&viewport.bounds, cell_size, origin);
    Ok(GridComputation::Grid { cell_size, lines })
}
