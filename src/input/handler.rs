use crate::{
    core::config::GridOptions,
    grid::engine::{GridOverlay, GridOverlayEngine},
    input::events::{EventHandled, OverlayEvent},
    layers::{renderer::OverlayRenderer, route::RouteOverlay},
    traits::StyleTarget,
    Result,
};

/// Engine, route and renderer bound to one style target.
///
/// The host forwards camera changes and user actions as [`OverlayEvent`]s;
/// the session keeps the style in sync and exposes the size label to show.
pub struct OverlaySession<T: StyleTarget> {
    engine: GridOverlayEngine,
    route: RouteOverlay,
    renderer: OverlayRenderer,
    target: T,
    /// Prefixed size label, `None` while no grid is visible
    label: Option<String>,
}

impl<T: StyleTarget> OverlaySession<T> {
    pub fn new(options: GridOptions, target: T) -> Result<Self> {
        let renderer = OverlayRenderer::new(options.styles.clone());
        Ok(Self {
            engine: GridOverlayEngine::new(options)?,
            route: RouteOverlay::new(),
            renderer,
            target,
            label: None,
        })
    }

    pub fn handle(&mut self, event: OverlayEvent) -> Result<EventHandled> {
        match event {
            OverlayEvent::CameraChanged { zoom, bounds } => {
                let overlay = self.engine.on_viewport_changed(zoom, bounds)?;
                self.show(&overlay)?;
                Ok(EventHandled::Handled)
            }
            OverlayEvent::HighlightCell(cell) => {
                self.engine.set_highlighted_cell(cell);
                self.redraw()?;
                Ok(EventHandled::Handled)
            }
            OverlayEvent::SelectCellAt(point) => match self.engine.cell_containing(point) {
                Some(cell) => {
                    self.engine.set_highlighted_cell(Some(cell));
                    self.redraw()?;
                    Ok(EventHandled::Handled)
                }
                None => Ok(EventHandled::NotHandled),
            },
            OverlayEvent::RouteTo {
                origin,
                destination,
            } => {
                let route = self.route.set_route(origin, destination);
                self.renderer.apply_route(&mut self.target, route)?;
                Ok(EventHandled::Handled)
            }
            OverlayEvent::CancelRoute => {
                if self.route.cancel().is_some() {
                    self.renderer.clear_route(&mut self.target);
                    Ok(EventHandled::Handled)
                } else {
                    Ok(EventHandled::NotHandled)
                }
            }
        }
    }

    /// Re-applies the overlay for the last camera, if there was one.
    fn redraw(&mut self) -> Result<()> {
        match self.engine.refresh() {
            Some(overlay) => self.show(&overlay?),
            None => Ok(()),
        }
    }

    fn show(&mut self, overlay: &GridOverlay) -> Result<()> {
        self.renderer.apply(&mut self.target, overlay)?;
        self.label = overlay
            .snapshot()
            .map(|snapshot| self.engine.prefixed_label(snapshot.cell_size));
        Ok(())
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn engine(&self) -> &GridOverlayEngine {
        &self.engine
    }

    pub fn route(&self) -> &RouteOverlay {
        &self.route
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
