//! Prelude module for common gridlet types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use gridlet::prelude::*;`

pub use crate::core::{
    config::{GridOptions, GridProfile, GridStyles},
    geo::{LatLng, LatLngBounds},
    viewport::ViewportState,
};

pub use crate::grid::{
    engine::{render_highlight, GridOverlay, GridOverlayEngine, GridSnapshot},
    highlight::HighlightedCell,
    lines::{compute_grid_lines, GridComputation, GridLine, GridLineSet, LineOrientation},
    size::{format_size_label, GridCellSize},
};

pub use crate::layers::{
    renderer::OverlayRenderer,
    route::{RouteLine, RouteOverlay},
    style::{FillStyle, LineCap, Rgba, StrokeStyle},
    target::{LayerKind, LayerSpec, MemoryStyle, StyleOp},
};

pub use crate::data::geojson::{FeatureCollection, GeoJson, GeoJsonFeature, GeoJsonGeometry};

pub use crate::input::{
    events::{EventHandled, OverlayEvent},
    handler::OverlaySession,
};

pub use crate::traits::{StyleTarget, ViewportAware};

pub use crate::{GridError, Result};

pub use fxhash::FxHashMap as HashMap;
