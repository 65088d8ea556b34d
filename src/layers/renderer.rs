//! Applies engine snapshots to a retained map style.
//!
//! Each logical slot (grid, highlight, route) maps to a fixed source id and
//! layer id. Every update removes the slot's layer and source before adding
//! the new ones; the style rejects duplicate ids, so this order is required.

use crate::constants::{
    GRID_LAYER_ID, GRID_SOURCE_ID, HIGHLIGHT_LAYER_ID, HIGHLIGHT_SOURCE_ID, ROUTE_LAYER_ID,
    ROUTE_SOURCE_ID,
};
use crate::core::config::GridStyles;
use crate::data::geojson::GeoJson;
use crate::grid::engine::{GridOverlay, GridSnapshot};
use crate::grid::highlight::HighlightedCell;
use crate::layers::route::RouteLine;
use crate::layers::target::LayerSpec;
use crate::traits::StyleTarget;
use crate::Result;

pub struct OverlayRenderer {
    styles: GridStyles,
}

impl OverlayRenderer {
    pub fn new(styles: GridStyles) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &GridStyles {
        &self.styles
    }

    /// Replaces the grid and highlight slots with `overlay`.
    ///
    /// A suppressed overlay leaves both slots empty.
    pub fn apply<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        overlay: &GridOverlay,
    ) -> Result<()> {
        target.remove_slot(GRID_LAYER_ID, GRID_SOURCE_ID);
        match overlay {
            GridOverlay::Suppressed => {
                self.clear_highlight(target);
                Ok(())
            }
            GridOverlay::Visible(snapshot) => {
                self.draw_grid(target, snapshot)?;
                match &snapshot.highlight {
                    Some(cell) => self.draw_highlight(target, cell),
                    None => {
                        self.clear_highlight(target);
                        Ok(())
                    }
                }
            }
        }
    }

    fn draw_grid<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        snapshot: &GridSnapshot,
    ) -> Result<()> {
        log::trace!("replacing {} with {} lines", GRID_SOURCE_ID, snapshot.lines.len());
        fill_slot(
            target,
            GeoJson::from(&snapshot.lines),
            LayerSpec::line(GRID_LAYER_ID, GRID_SOURCE_ID, snapshot.line_style),
        )
    }

    /// Replaces the highlight slot with `cell`
    pub fn draw_highlight<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        cell: &HighlightedCell,
    ) -> Result<()> {
        target.remove_slot(HIGHLIGHT_LAYER_ID, HIGHLIGHT_SOURCE_ID);
        log::trace!("replacing {}", HIGHLIGHT_SOURCE_ID);
        fill_slot(
            target,
            GeoJson::from(cell),
            LayerSpec::fill(HIGHLIGHT_LAYER_ID, HIGHLIGHT_SOURCE_ID, self.styles.highlight),
        )
    }

    pub fn clear_highlight<T: StyleTarget + ?Sized>(&self, target: &mut T) {
        target.remove_slot(HIGHLIGHT_LAYER_ID, HIGHLIGHT_SOURCE_ID);
    }

    /// Replaces the route slot with `route`
    pub fn apply_route<T: StyleTarget + ?Sized>(
        &self,
        target: &mut T,
        route: &RouteLine,
    ) -> Result<()> {
        target.remove_slot(ROUTE_LAYER_ID, ROUTE_SOURCE_ID);
        fill_slot(
            target,
            GeoJson::from(route),
            LayerSpec::line(ROUTE_LAYER_ID, ROUTE_SOURCE_ID, self.styles.route),
        )
    }

    pub fn clear_route<T: StyleTarget + ?Sized>(&self, target: &mut T) {
        target.remove_slot(ROUTE_LAYER_ID, ROUTE_SOURCE_ID);
    }
}

/// Adds a source and the layer drawing it. A rejected layer takes its
/// source back out, so a slot is either complete or empty.
fn fill_slot<T: StyleTarget + ?Sized>(
    target: &mut T,
    data: GeoJson,
    layer: LayerSpec,
) -> Result<()> {
    let source_id = layer.source.clone();
    target.add_source(&source_id, data)?;
    if let Err(err) = target.add_layer(layer) {
        log::warn!("layer for {} rejected, removing source: {}", source_id, err);
        target.remove_source(&source_id);
        return Err(err);
    }
    Ok(())
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(GridStyles::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LatLng, LatLngBounds};
    use crate::grid::engine::GridOverlayEngine;
    use crate::layers::target::{LayerKind, MemoryStyle, StyleOp};
    use crate::GridError;

    fn tokyo() -> LatLngBounds {
        LatLngBounds::from_coords(35.65, 139.70, 35.71, 139.80)
    }

    #[test]
    fn test_repeated_apply_replaces_slot() {
        let mut engine = GridOverlayEngine::default();
        let renderer = OverlayRenderer::default();
        let mut style = MemoryStyle::new();

        for zoom in [14.0, 14.5, 17.0, 19.5] {
            let overlay = engine.on_viewport_changed(zoom, tokyo()).unwrap();
            renderer.apply(&mut style, &overlay).unwrap();
            assert_eq!(style.layer_count(), 1);
            assert_eq!(style.source_count(), 1);
            assert!(style.has_layer(GRID_LAYER_ID));
        }
    }

    #[test]
    fn test_remove_precedes_add() {
        let mut engine = GridOverlayEngine::default();
        let renderer = OverlayRenderer::default();
        let mut style = MemoryStyle::new();

        let overlay = engine.on_viewport_changed(14.0, tokyo()).unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        style.clear_history();

        let overlay = engine.on_viewport_changed(15.0, tokyo()).unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        assert_eq!(
            &style.history()[..4],
            &[
                StyleOp::RemoveLayer(GRID_LAYER_ID.into()),
                StyleOp::RemoveSource(GRID_SOURCE_ID.into()),
                StyleOp::AddSource(GRID_SOURCE_ID.into()),
                StyleOp::AddLayer(GRID_LAYER_ID.into()),
            ]
        );
    }

    #[test]
    fn test_suppression_clears_grid_and_highlight() {
        let mut engine = GridOverlayEngine::default();
        let renderer = OverlayRenderer::default();
        let mut style = MemoryStyle::new();

        let cell = engine.cell_containing(LatLng::new(35.68, 139.76));
        assert!(cell.is_none());
        engine.on_viewport_changed(14.0, tokyo()).unwrap();
        engine.set_highlighted_cell(engine.cell_containing(LatLng::new(35.68, 139.76)));

        let overlay = engine.refresh().unwrap().unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        assert!(style.has_layer(HIGHLIGHT_LAYER_ID));
        assert!(matches!(
            style.layer(HIGHLIGHT_LAYER_ID).unwrap().kind,
            LayerKind::Fill(_)
        ));

        let overlay = engine.on_viewport_changed(9.0, tokyo()).unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        assert!(style.is_empty());

        // Highlight comes back once the grid does.
        let overlay = engine.on_viewport_changed(14.0, tokyo()).unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        assert!(style.has_layer(HIGHLIGHT_LAYER_ID));
    }

    #[test]
    fn test_grid_layer_style_tracks_size() {
        let mut engine = GridOverlayEngine::default();
        let renderer = OverlayRenderer::default();
        let mut style = MemoryStyle::new();

        let street = LatLngBounds::from_coords(35.680, 139.766, 35.682, 139.768);
        let overlay = engine.on_viewport_changed(19.0, street).unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        assert_eq!(
            style.layer(GRID_LAYER_ID).unwrap().kind,
            LayerKind::Line(renderer.styles().fine_line)
        );

        let overlay = engine.on_viewport_changed(14.0, tokyo()).unwrap();
        renderer.apply(&mut style, &overlay).unwrap();
        assert_eq!(
            style.layer(GRID_LAYER_ID).unwrap().kind,
            LayerKind::Line(renderer.styles().coarse_line)
        );
    }

    #[test]
    fn test_route_slot() {
        let renderer = OverlayRenderer::default();
        let mut style = MemoryStyle::new();
        let route = RouteLine::new(LatLng::new(35.6812, 139.7671), LatLng::new(35.7101, 139.8107));

        renderer.apply_route(&mut style, &route).unwrap();
        renderer.apply_route(&mut style, &route).unwrap();
        assert!(style.has_source(ROUTE_SOURCE_ID));
        assert_eq!(style.layer_count(), 1);

        renderer.clear_route(&mut style);
        assert!(style.is_empty());
    }

    /// Style that accepts sources but refuses every layer
    #[derive(Default)]
    struct LayerlessStyle(MemoryStyle);

    impl StyleTarget for LayerlessStyle {
        fn add_source(&mut self, id: &str, data: GeoJson) -> Result<()> {
            self.0.add_source(id, data)
        }

        fn remove_source(&mut self, id: &str) -> bool {
            self.0.remove_source(id)
        }

        fn add_layer(&mut self, layer: LayerSpec) -> Result<()> {
            Err(GridError::DuplicateId(layer.id))
        }

        fn remove_layer(&mut self, id: &str) -> bool {
            self.0.remove_layer(id)
        }

        fn has_source(&self, id: &str) -> bool {
            self.0.has_source(id)
        }

        fn has_layer(&self, id: &str) -> bool {
            self.0.has_layer(id)
        }
    }

    #[test]
    fn test_rejected_layer_leaves_slot_empty() {
        let mut engine = GridOverlayEngine::default();
        let renderer = OverlayRenderer::default();
        let mut style = LayerlessStyle::default();

        let overlay = engine.on_viewport_changed(14.0, tokyo()).unwrap();
        assert!(matches!(
            renderer.apply(&mut style, &overlay),
            Err(GridError::DuplicateId(_))
        ));
        assert!(!style.has_source(GRID_SOURCE_ID));

        let cell = HighlightedCell::from_bounds(&tokyo());
        assert!(renderer.draw_highlight(&mut style, &cell).is_err());
        assert!(!style.has_source(HIGHLIGHT_SOURCE_ID));

        let route = RouteLine::new(LatLng::new(35.6812, 139.7671), LatLng::new(35.7101, 139.8107));
        assert!(renderer.apply_route(&mut style, &route).is_err());
        assert!(style.0.is_empty());
    }
}
