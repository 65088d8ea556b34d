//! Shared trait abstractions at the seams between the engine and its host.

use crate::{
    core::viewport::ViewportState, data::geojson::GeoJson, layers::target::LayerSpec, Result,
};

/// Trait for viewport-aware components
/// Standardizes viewport change handling
pub trait ViewportAware {
    type Output;

    /// Handle a camera change pushed by the host
    fn viewport_changed(&mut self, viewport: &ViewportState) -> Result<Self::Output>;
}

/// A retained map style made of named sources and the layers drawing them.
///
/// Ids are unique per kind: adding an id that is already present fails with
/// [`GridError::DuplicateId`](crate::GridError::DuplicateId), so callers
/// remove the old entry first. Removing a missing id is not an error.
pub trait StyleTarget {
    fn add_source(&mut self, id: &str, data: GeoJson) -> Result<()>;

    /// Returns whether a source was removed
    fn remove_source(&mut self, id: &str) -> bool;

    fn add_layer(&mut self, layer: LayerSpec) -> Result<()>;

    /// Returns whether a layer was removed
    fn remove_layer(&mut self, id: &str) -> bool;

    fn has_source(&self, id: &str) -> bool;

    fn has_layer(&self, id: &str) -> bool;

    /// Removes a layer and then its source
    fn remove_slot(&mut self, layer_id: &str, source_id: &str) {
        self.remove_layer(layer_id);
        self.remove_source(source_id);
    }
}
