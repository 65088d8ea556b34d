use crate::core::geo::{LatLng, LatLngBounds};
use crate::{GridError, Result};
use serde::{Deserialize, Serialize};

/// A camera snapshot pushed by the host on every pan or zoom.
///
/// Nothing here is retained beyond the next camera change; the engine keeps
/// the latest value only so the overlay can be recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// The current zoom level
    pub zoom: f64,
    /// The visible region in geographical coordinates
    pub bounds: LatLngBounds,
}

impl ViewportState {
    /// Creates a new viewport snapshot
    pub fn new(zoom: f64, bounds: LatLngBounds) -> Self {
        Self { zoom, bounds }
    }

    /// Creates a snapshot from individual bound edges
    pub fn from_edges(zoom: f64, south: f64, north: f64, west: f64, east: f64) -> Self {
        Self::new(zoom, LatLngBounds::from_coords(south, west, north, east))
    }

    /// Center of the visible region
    pub fn center(&self) -> LatLng {
        self.bounds.center()
    }

    /// Fails on a non-finite zoom level.
    pub fn validate_zoom(&self) -> Result<()> {
        if self.zoom.is_finite() {
            Ok(())
        } else {
            Err(GridError::InvalidViewport(format!(
                "zoom must be finite, got {}",
                self.zoom
            )))
        }
    }

    /// Fails on a non-finite zoom or degenerate bounds.
    pub fn validate(&self) -> Result<()> {
        self.validate_zoom()?;
        self.bounds.validate()
    }
}
