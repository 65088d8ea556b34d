//! # Gridlet
//!
//! An adaptive geographic reference grid for interactive maps.
//!
//! The engine turns a camera snapshot (zoom level plus visible bounds) into
//! grid line geometry whose cell size follows the zoom tier, anchored at a
//! fixed global origin so lines stay put while the map pans. Rendering is
//! left to the host: snapshots are immutable values that a [`StyleTarget`]
//! adapter applies slot by slot.

pub mod core;
pub mod data;
pub mod grid;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{GridOptions, GridProfile, GridStyles},
    geo::{LatLng, LatLngBounds},
    viewport::ViewportState,
};

pub use crate::grid::{
    engine::{GridOverlay, GridOverlayEngine, GridSnapshot},
    highlight::HighlightedCell,
    lines::{GridComputation, GridLine, GridLineSet, LineOrientation},
    size::GridCellSize,
};

pub use crate::input::{
    events::{EventHandled, OverlayEvent},
    handler::OverlaySession,
};

pub use crate::layers::{
    renderer::OverlayRenderer,
    route::{RouteLine, RouteOverlay},
    style::{Rgba, StrokeStyle},
    target::{LayerKind, LayerSpec, MemoryStyle},
};

pub use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};

pub use crate::traits::{StyleTarget, ViewportAware};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GridError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Duplicate style id: {0}")]
    DuplicateId(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = GridError;
