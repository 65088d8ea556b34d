use crate::data::geojson::GeoJson;
use crate::layers::style::{FillStyle, StrokeStyle};
use crate::prelude::HashMap;
use crate::traits::StyleTarget;
use crate::{GridError, Result};

/// How a layer draws its source
#[derive(Debug, Clone, PartialEq)]
pub enum LayerKind {
    Line(StrokeStyle),
    Fill(FillStyle),
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Line(_) => write!(f, "line"),
            LayerKind::Fill(_) => write!(f, "fill"),
        }
    }
}

/// A style layer bound to a source
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub id: String,
    pub source: String,
    pub kind: LayerKind,
}

impl LayerSpec {
    pub fn line(id: &str, source: &str, style: StrokeStyle) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            kind: LayerKind::Line(style),
        }
    }

    pub fn fill(id: &str, source: &str, style: FillStyle) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            kind: LayerKind::Fill(style),
        }
    }
}

/// One mutation applied to a [`MemoryStyle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOp {
    AddSource(String),
    RemoveSource(String),
    AddLayer(String),
    RemoveLayer(String),
}

/// In-memory style keeping sources and layers by id, with layers in the
/// order they were added.
#[derive(Debug, Default)]
pub struct MemoryStyle {
    sources: HashMap<String, GeoJson>,
    layers: HashMap<String, LayerSpec>,
    /// Layer ids in draw order
    render_order: Vec<String>,
    history: Vec<StyleOp>,
}

impl MemoryStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self, id: &str) -> Option<&GeoJson> {
        self.sources.get(id)
    }

    pub fn layer(&self, id: &str) -> Option<&LayerSpec> {
        self.layers.get(id)
    }

    /// Gets all layers in draw order
    pub fn layers(&self) -> Vec<&LayerSpec> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id))
            .collect()
    }

    /// Every mutation so far, oldest first
    pub fn history(&self) -> &[StyleOp] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.layers.is_empty()
    }
}

impl StyleTarget for MemoryStyle {
    fn add_source(&mut self, id: &str, data: GeoJson) -> Result<()> {
        if self.sources.contains_key(id) {
            return Err(GridError::DuplicateId(id.to_string()));
        }
        self.sources.insert(id.to_string(), data);
        self.history.push(StyleOp::AddSource(id.to_string()));
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> bool {
        let removed = self.sources.remove(id).is_some();
        if removed {
            self.history.push(StyleOp::RemoveSource(id.to_string()));
        }
        removed
    }

    fn add_layer(&mut self, layer: LayerSpec) -> Result<()> {
        if self.layers.contains_key(&layer.id) {
            return Err(GridError::DuplicateId(layer.id));
        }
        self.render_order.push(layer.id.clone());
        self.history.push(StyleOp::AddLayer(layer.id.clone()));
        self.layers.insert(layer.id.clone(), layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> bool {
        let removed = self.layers.remove(id).is_some();
        if removed {
            self.render_order.retain(|layer_id| layer_id != id);
            self.history.push(StyleOp::RemoveLayer(id.to_string()));
        }
        removed
    }

    fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    fn has_layer(&self, id: &str) -> bool {
        self.layers.contains_key(id)
    }
}
