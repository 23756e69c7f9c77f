//! Layer trait and the per-layer render template

use crate::error::EngineError;
use crate::render::context::RenderContext;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a layer
///
/// Layers are shared single-threaded: a scene, the rendering manager, and
/// a behavior that animates the layer can all hold the same handle.
pub type SharedLayer = Rc<RefCell<dyn Layer>>;

/// Wrap a layer in a shared handle
pub fn shared_layer<L: Layer + 'static>(layer: L) -> SharedLayer {
    Rc::new(RefCell::new(layer))
}

/// A renderable slice of a frame
///
/// Layers draw in ascending [`priority`](Layer::priority) order, so low
/// priorities are backgrounds and high priorities draw over them. The
/// provided [`render`](Layer::render) template runs the hook sequence;
/// implementors supply [`render_content`](Layer::render_content) and
/// override the hooks they need.
pub trait Layer {
    /// Diagnostic name, not required to be unique
    fn name(&self) -> &str;

    /// Draw order; lower renders first
    fn priority(&self) -> i32 {
        0
    }

    /// Whether the rendering manager should draw this layer
    ///
    /// Gating happens in the manager. Calling [`render`](Layer::render)
    /// directly draws regardless of visibility.
    fn is_visible(&self) -> bool {
        true
    }

    /// Hook before content drawing
    fn on_pre_render(&mut self, _ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        Ok(())
    }

    /// Draw the layer content
    fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError>;

    /// Hook after content drawing
    fn on_post_render(&mut self, _ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        Ok(())
    }

    /// Render this layer
    ///
    /// Checks cancellation, then runs `on_pre_render`, `render_content`
    /// and `on_post_render` in order. The first failure aborts the
    /// remaining phases.
    fn render(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        ctx.check_cancelled()?;
        self.on_pre_render(ctx)?;
        self.render_content(ctx)?;
        self.on_post_render(ctx)
    }
}
