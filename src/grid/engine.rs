//! The grid overlay engine
//!
//! Pure computation from a viewport to grid geometry. The only state kept
//! between calls is the last accepted viewport (so the overlay can be rebuilt
//! on demand) and the user's highlighted cell, which survives camera changes
//! until it is replaced or cleared.

use crate::core::config::{GridOptions, GridProfile};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::viewport::ViewportState;
use crate::grid::highlight::HighlightedCell;
use crate::grid::lines::{compute_grid_lines, GridComputation, GridLineSet};
use crate::grid::size::{format_size_label, GridCellSize};
use crate::layers::style::StrokeStyle;
use crate::traits::ViewportAware;
use crate::Result;
use geo_types::Polygon;

/// Everything a host needs to draw one frame of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub cell_size: GridCellSize,
    pub lines: GridLineSet,
    /// Size label without any prefix, e.g. `"500m"`
    pub label: String,
    pub line_style: StrokeStyle,
    pub highlight: Option<HighlightedCell>,
}

impl GridSnapshot {
    pub fn cell_size_meters(&self) -> f64 {
        self.cell_size.meters()
    }
}

/// Result of a camera change
#[derive(Debug, Clone, PartialEq)]
pub enum GridOverlay {
    /// No grid at this zoom; the host hides the grid and its label
    Suppressed,
    Visible(GridSnapshot),
}

impl GridOverlay {
    pub fn is_suppressed(&self) -> bool {
        matches!(self, GridOverlay::Suppressed)
    }

    pub fn snapshot(&self) -> Option<&GridSnapshot> {
        match self {
            GridOverlay::Visible(snapshot) => Some(snapshot),
            GridOverlay::Suppressed => None,
        }
    }
}

/// Produces the polygon to draw for an optional highlighted cell.
pub fn render_highlight(cell: Option<&HighlightedCell>) -> Option<Polygon<f64>> {
    cell.map(|cell| cell.polygon().clone())
}

pub struct GridOverlayEngine {
    options: GridOptions,
    last_viewport: Option<ViewportState>,
    highlight: Option<HighlightedCell>,
    was_suppressed: Option<bool>,
}

impl GridOverlayEngine {
    /// Creates an engine after validating `options`.
    pub fn new(options: GridOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            last_viewport: None,
            highlight: None,
            was_suppressed: None,
        })
    }

    pub fn from_profile(profile: &GridProfile) -> Result<Self> {
        Self::new(profile.resolve())
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn origin(&self) -> LatLng {
        self.options.origin
    }

    pub fn classify_grid_size(&self, zoom: f64) -> GridCellSize {
        GridCellSize::classify(zoom)
    }

    /// Computes grid lines for `viewport` without touching engine state.
    pub fn compute_grid_lines(&self, viewport: &ViewportState) -> Result<GridComputation> {
        compute_grid_lines(viewport, self.options.origin, self.options.suppress_below_zoom)
    }

    pub fn format_size_label(cell_size: GridCellSize) -> String {
        format_size_label(cell_size.meters())
    }

    /// Label with the configured prefix, e.g. `"Grid: 500m"`
    pub fn prefixed_label(&self, cell_size: GridCellSize) -> String {
        format!("{}{}", self.options.label_prefix, cell_size.label())
    }

    /// Handles a camera change pushed by the host.
    ///
    /// On error the previous viewport is kept, so a later [`refresh`] still
    /// reflects the last good camera.
    ///
    /// [`refresh`]: GridOverlayEngine::refresh
    pub fn on_viewport_changed(&mut self, zoom: f64, bounds: LatLngBounds) -> Result<GridOverlay> {
        let viewport = ViewportState::new(zoom, bounds);
        let overlay = self.build_overlay(&viewport)?;
        self.last_viewport = Some(viewport);

        let suppressed = overlay.is_suppressed();
        if self.was_suppressed != Some(suppressed) {
            if suppressed {
                log::info!("grid suppressed at zoom {:.2}", zoom);
            } else {
                log::info!("grid shown at zoom {:.2}", zoom);
            }
            self.was_suppressed = Some(suppressed);
        }
        Ok(overlay)
    }

    /// Rebuilds the overlay from the last accepted viewport, if any.
    pub fn refresh(&self) -> Option<Result<GridOverlay>> {
        self.last_viewport
            .as_ref()
            .map(|viewport| self.build_overlay(viewport))
    }

    pub fn last_viewport(&self) -> Option<&ViewportState> {
        self.last_viewport.as_ref()
    }

    /// Sets or clears the highlighted cell. It stays until replaced.
    pub fn set_highlighted_cell(&mut self, cell: Option<HighlightedCell>) {
        log::trace!(
            "highlight {}",
            if cell.is_some() { "set" } else { "cleared" }
        );
        self.highlight = cell;
    }

    pub fn highlighted_cell(&self) -> Option<&HighlightedCell> {
        self.highlight.as_ref()
    }

    pub fn render_highlight(&self) -> Option<Polygon<f64>> {
        render_highlight(self.highlight.as_ref())
    }

    /// Cell of the current size class containing `point`.
    ///
    /// `None` before the first camera change or while the grid is suppressed.
    pub fn cell_containing(&self, point: LatLng) -> Option<HighlightedCell> {
        let viewport = self.last_viewport.as_ref()?;
        if viewport.zoom < self.options.suppress_below_zoom {
            return None;
        }
        let cell_size = GridCellSize::classify(viewport.zoom);
        Some(HighlightedCell::containing(point, cell_size, self.options.origin))
    }

    fn build_overlay(&self, viewport: &ViewportState) -> Result<GridOverlay> {
        match self.compute_grid_lines(viewport)? {
            GridComputation::Suppressed => Ok(GridOverlay::Suppressed),
            GridComputation::Grid { cell_size, lines } => {
                log::debug!(
                    "grid {} at zoom {:.2}: {} vertical, {} horizontal lines",
                    cell_size,
                    viewport.zoom,
                    lines.vertical.len(),
                    lines.horizontal.len()
                );
                Ok(GridOverlay::Visible(GridSnapshot {
                    cell_size,
                    label: cell_size.label(),
                    line_style: self.options.styles.line_for(cell_size),
                    highlight: self.highlight.clone(),
                    lines,
                }))
            }
        }
    }
}

impl Default for GridOverlayEngine {
    fn default() -> Self {
        Self {
            options: GridOptions::default(),
            last_viewport: None,
            highlight: None,
            was_suppressed: None,
        }
    }
}

impl ViewportAware for GridOverlayEngine {
    type Output = GridOverlay;

    fn viewport_changed(&mut self, viewport: &ViewportState) -> Result<GridOverlay> {
        self.on_viewport_changed(viewport.zoom, viewport.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridError;

    fn tokyo() -> LatLngBounds {
        LatLngBounds::from_coords(35.65, 139.70, 35.71, 139.80)
    }

    #[test]
    fn test_zoom_20_is_5m() {
        let mut engine = GridOverlayEngine::default();
        let bounds = LatLngBounds::from_coords(35.6810, 139.7669, 35.6814, 139.7673);
        let overlay = engine.on_viewport_changed(20.0, bounds).unwrap();
        let snapshot = overlay.snapshot().unwrap();
        assert_eq!(snapshot.cell_size, GridCellSize::Meters5);
        assert_eq!(snapshot.cell_size_meters(), 5.0);
        assert_eq!(snapshot.label, "5m");
        assert_eq!(snapshot.line_style, engine.options().styles.fine_line);
    }

    #[test]
    fn test_low_zoom_suppressed() {
        let mut engine = GridOverlayEngine::default();
        let overlay = engine.on_viewport_changed(10.0, tokyo()).unwrap();
        assert!(overlay.is_suppressed());
        assert!(overlay.snapshot().is_none());
        assert!(engine.cell_containing(tokyo().center()).is_none());
    }

    #[test]
    fn test_highlight_persists_across_changes() {
        let mut engine = GridOverlayEngine::default();
        let cell = HighlightedCell::containing(
            LatLng::new(35.68, 139.76),
            GridCellSize::Meters500,
            engine.origin(),
        );
        engine.set_highlighted_cell(Some(cell.clone()));

        let first = engine.on_viewport_changed(14.0, tokyo()).unwrap();
        let panned = LatLngBounds::from_coords(35.66, 139.72, 35.72, 139.82);
        let second = engine.on_viewport_changed(17.0, panned).unwrap();

        assert_eq!(first.snapshot().unwrap().highlight.as_ref(), Some(&cell));
        assert_eq!(second.snapshot().unwrap().highlight.as_ref(), Some(&cell));
        assert_eq!(engine.render_highlight().as_ref(), Some(cell.polygon()));

        engine.set_highlighted_cell(None);
        assert!(engine.render_highlight().is_none());
        let third = engine.refresh().unwrap().unwrap();
        assert!(third.snapshot().unwrap().highlight.is_none());
    }

    #[test]
    fn test_invalid_viewport_keeps_last_good() {
        let mut engine = GridOverlayEngine::default();
        assert!(engine.refresh().is_none());

        engine.on_viewport_changed(14.0, tokyo()).unwrap();
        let bad = LatLngBounds::from_coords(35.7, 139.7, 35.7, 139.8);
        assert!(matches!(
            engine.on_viewport_changed(14.0, bad),
            Err(GridError::InvalidViewport(_))
        ));
        assert_eq!(engine.last_viewport().unwrap().bounds, tokyo());
        assert!(engine.refresh().unwrap().is_ok());
    }

    #[test]
    fn test_out_of_range_bounds_are_rejected() {
        let mut engine = GridOverlayEngine::default();
        engine.on_viewport_changed(14.0, tokyo()).unwrap();

        let huge = LatLngBounds::from_coords(-1e300, 139.70, 1e300, 139.80);
        assert!(matches!(
            engine.on_viewport_changed(14.0, huge),
            Err(GridError::InvalidViewport(_))
        ));
        let wide = LatLngBounds::from_coords(35.65, -400.0, 35.71, 400.0);
        assert!(matches!(
            engine.on_viewport_changed(14.0, wide),
            Err(GridError::InvalidViewport(_))
        ));
        assert_eq!(engine.last_viewport().unwrap().bounds, tokyo());
    }

    #[test]
    fn test_prefixed_label() {
        let engine =
            GridOverlayEngine::new(GridOptions::default().with_label_prefix("グリッド: ")).unwrap();
        assert_eq!(engine.prefixed_label(GridCellSize::Meters500), "グリッド: 500m");
        assert_eq!(GridOverlayEngine::format_size_label(GridCellSize::Meters5000), "5.0km");
    }

    #[test]
    fn test_cell_containing_uses_current_size() {
        let mut engine = GridOverlayEngine::default();
        engine.on_viewport_changed(17.0, tokyo()).unwrap();
        let point = LatLng::new(35.68, 139.76);
        let cell = engine.cell_containing(point).unwrap();
        let span = cell.bounds().unwrap().span();
        assert!((span.lat - GridCellSize::Meters50.lat_delta()).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_invalid_options() {
        let options = GridOptions::default().with_origin(LatLng::new(f64::NAN, 0.0));
        assert!(matches!(
            GridOverlayEngine::new(options),
            Err(GridError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_viewport_aware() {
        let mut engine = GridOverlayEngine::from_profile(&GridProfile::Standard).unwrap();
        let viewport = ViewportState::new(14.0, tokyo());
        let overlay = engine.viewport_changed(&viewport).unwrap();
        assert_eq!(overlay.snapshot().unwrap().cell_size, GridCellSize::Meters500);
    }
}
