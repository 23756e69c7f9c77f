//! Priority-ordered layer rendering

use crate::error::EngineError;
use crate::render::context::RenderContext;
use crate::render::layer::SharedLayer;
use std::rc::Rc;

/// Renders a set of layers in priority order
///
/// Layers are kept sorted ascending by priority with a stable sort, so
/// layers sharing a priority draw in the order they were added. Rendering
/// is fail-fast: the first layer error aborts the frame and later layers
/// do not run.
#[derive(Default)]
pub struct LayerRenderingManager {
    layers: Vec<SharedLayer>,
}

impl LayerRenderingManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer and restore priority order
    pub fn add(&mut self, layer: SharedLayer) {
        self.layers.push(layer);
        self.sort();
    }

    /// Replace the whole layer set
    pub fn set_layers(&mut self, layers: impl IntoIterator<Item = SharedLayer>) {
        self.layers = layers.into_iter().collect();
        self.sort();
    }

    /// Remove a layer by handle identity
    ///
    /// Returns whether the layer was present.
    pub fn remove(&mut self, layer: &SharedLayer) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| !Rc::ptr_eq(l, layer));
        self.layers.len() != before
    }

    /// Remove all layers
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Number of managed layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the manager holds no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Render all visible layers in priority order
    ///
    /// Invisible layers are skipped without running any of their hooks.
    pub fn render_all(&self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        for layer in &self.layers {
            let mut layer = layer.borrow_mut();
            if !layer.is_visible() {
                continue;
            }
            if let Err(e) = layer.render(ctx) {
                if matches!(e, EngineError::Cancelled) {
                    log::debug!("Render pass cancelled at layer '{}'", layer.name());
                } else {
                    log::error!("Layer '{}' failed to render: {}", layer.name(), e);
                }
                return Err(e);
            }
        }
        Ok(())
    }

    // Stable, so equal priorities keep insertion order.
    fn sort(&mut self) {
        self.layers.sort_by_key(|l| l.borrow().priority());
    }
}
