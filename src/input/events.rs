use crate::core::geo::{LatLng, LatLngBounds};
use crate::grid::highlight::HighlightedCell;

/// Events the host pushes into an overlay session
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayEvent {
    /// Camera moved or zoomed
    CameraChanged { zoom: f64, bounds: LatLngBounds },
    /// Set (`Some`) or clear (`None`) the highlighted cell
    HighlightCell(Option<HighlightedCell>),
    /// Highlight the grid cell under a tapped coordinate
    SelectCellAt(LatLng),
    /// Show a straight-line route
    RouteTo { origin: LatLng, destination: LatLng },
    /// End navigation and remove the route
    CancelRoute,
}

/// Whether an event changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventHandled::Handled)
    }
}
