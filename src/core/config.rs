//! Configuration for the grid overlay
//!
//! Options can be built in code, picked from a preset profile, or loaded from
//! JSON. Every field has a default, so a partial document only overrides what
//! it names.

use crate::constants::{DEFAULT_LABEL_PREFIX, GRID_MIN_ZOOM, GRID_ORIGIN_LAT, GRID_ORIGIN_LNG};
use crate::core::geo::LatLng;
use crate::grid::size::GridCellSize;
use crate::layers::style::{FillStyle, Rgba, StrokeStyle};
use crate::{GridError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum GridProfile {
    Standard,
    HighContrast,
    Custom(GridOptions),
}

impl GridProfile {
    pub fn resolve(&self) -> GridOptions {
        match self {
            Self::Standard => GridOptions::default(),
            Self::HighContrast => GridOptions {
                styles: GridStyles {
                    fine_line: StrokeStyle::new(Rgba::orange().with_alpha(0.6), 2.0),
                    coarse_line: StrokeStyle::new(Rgba::grid_blue().with_alpha(0.6), 2.0),
                    highlight: FillStyle {
                        fill: Rgba::orange().with_alpha(0.5),
                        outline: Rgba::orange(),
                    },
                    route: StrokeStyle::new(Rgba::route_blue(), 6.0).rounded(),
                },
                ..GridOptions::default()
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for GridProfile {
    fn default() -> Self {
        Self::Standard
    }
}

/// Engine-wide options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Phase origin shared by every grid tier
    pub origin: LatLng,
    /// No grid is produced below this zoom
    pub suppress_below_zoom: f64,
    /// Text a host shows in front of the size label
    pub label_prefix: String,
    pub styles: GridStyles,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            origin: LatLng::new(GRID_ORIGIN_LAT, GRID_ORIGIN_LNG),
            suppress_below_zoom: GRID_MIN_ZOOM,
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            styles: GridStyles::default(),
        }
    }
}

impl GridOptions {
    pub fn with_origin(mut self, origin: LatLng) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    /// Parses and validates options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: GridOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() {
            return Err(GridError::InvalidOptions(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }
        // The longitude spacing divides by cos(origin latitude).
        if self.origin.lat.abs() >= 90.0 {
            return Err(GridError::InvalidOptions(format!(
                "origin latitude must lie strictly between the poles, got {}",
                self.origin.lat
            )));
        }
        if !self.suppress_below_zoom.is_finite() {
            return Err(GridError::InvalidOptions(format!(
                "suppress_below_zoom must be finite, got {}",
                self.suppress_below_zoom
            )));
        }
        Ok(())
    }
}

/// Render styles for every slot the overlay draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyles {
    /// Lines of the 5 m tier
    pub fine_line: StrokeStyle,
    /// Lines of every coarser tier
    pub coarse_line: StrokeStyle,
    pub highlight: FillStyle,
    pub route: StrokeStyle,
}

impl Default for GridStyles {
    fn default() -> Self {
        Self {
            fine_line: StrokeStyle::new(Rgba::orange().with_alpha(0.18), 1.0),
            coarse_line: StrokeStyle::new(Rgba::grid_blue().with_alpha(0.18), 1.0),
            highlight: FillStyle::default(),
            route: StrokeStyle::new(Rgba::route_blue(), 4.0).rounded(),
        }
    }
}

impl GridStyles {
    /// Line style for a size class
    pub fn line_for(&self, size: GridCellSize) -> StrokeStyle {
        match size {
            GridCellSize::Meters5 => self.fine_line,
            _ => self.coarse_line,
        }
    }
}
