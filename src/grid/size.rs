use crate::constants::{
    METERS_PER_DEGREE_LAT, METERS_PER_DEGREE_LNG_EQUATOR, ZOOM_TIER_500M, ZOOM_TIER_50M,
    ZOOM_TIER_5M,
};
use serde::{Deserialize, Serialize};

/// Spacing between adjacent grid lines for a zoom tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GridCellSize {
    Meters5,
    Meters50,
    Meters500,
    Meters5000,
}

impl GridCellSize {
    /// Every size class, finest first.
    pub const ALL: [GridCellSize; 4] = [
        GridCellSize::Meters5,
        GridCellSize::Meters50,
        GridCellSize::Meters500,
        GridCellSize::Meters5000,
    ];

    /// Picks the size class for a zoom level.
    ///
    /// Total over `f64`: anything that is not at or above one of the tier
    /// thresholds (NaN included) lands in the coarsest class. Whether a grid
    /// is drawn at all is decided separately by the suppression threshold.
    pub fn classify(zoom: f64) -> Self {
        if zoom >= ZOOM_TIER_5M {
            GridCellSize::Meters5
        } else if zoom >= ZOOM_TIER_50M {
            GridCellSize::Meters50
        } else if zoom >= ZOOM_TIER_500M {
            GridCellSize::Meters500
        } else {
            GridCellSize::Meters5000
        }
    }

    pub fn meters(&self) -> f64 {
        match self {
            GridCellSize::Meters5 => 5.0,
            GridCellSize::Meters50 => 50.0,
            GridCellSize::Meters500 => 500.0,
            GridCellSize::Meters5000 => 5000.0,
        }
    }

    /// Latitude spacing in degrees
    pub fn lat_delta(&self) -> f64 {
        self.meters() / METERS_PER_DEGREE_LAT
    }

    /// Longitude spacing in degrees, corrected at `reference_lat` (the grid
    /// origin's latitude) rather than at the viewport's own latitude.
    pub fn lng_delta(&self, reference_lat: f64) -> f64 {
        self.meters() / (METERS_PER_DEGREE_LNG_EQUATOR * reference_lat.to_radians().cos())
    }

    /// Human readable size, e.g. `"50m"` or `"5.0km"`.
    pub fn label(&self) -> String {
        format_size_label(self.meters())
    }
}

impl std::fmt::Display for GridCellSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Formats a cell size in meters for display.
pub fn format_size_label(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1}km", meters / 1000.0)
    } else {
        format!("{:.0}m", meters)
    }
}
