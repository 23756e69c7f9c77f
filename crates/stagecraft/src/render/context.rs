//! Per-frame rendering context

use crate::error::EngineError;
use crate::foundation::cancel::CancelToken;
use crate::foundation::time::FrameInfo;
use crate::input::InputDevice;
use crate::render::backend::Renderer;
use crate::render::visual::{CellPos, SurfaceSize, TextStyle, TileVisual};

/// Everything a layer needs to draw one frame
///
/// Built by the loop for each rendered frame and threaded through every
/// layer. Draw calls go through the context rather than the backend
/// directly so that a draw origin can shift a whole set of layers, which
/// is how push transitions slide scene content across the surface.
pub struct RenderContext<'a> {
    renderer: &'a mut dyn Renderer,
    input: &'a dyn InputDevice,
    frame: FrameInfo,
    surface: SurfaceSize,
    origin: CellPos,
    cancel: CancelToken,
}

impl<'a> RenderContext<'a> {
    /// Build a context for one frame
    ///
    /// The surface size is sampled from the renderer once, so every layer
    /// in the frame sees the same dimensions.
    pub fn new(
        renderer: &'a mut dyn Renderer,
        input: &'a dyn InputDevice,
        frame: FrameInfo,
        cancel: CancelToken,
    ) -> Self {
        let surface = renderer.surface_size();
        Self {
            renderer,
            input,
            frame,
            surface,
            origin: CellPos::default(),
            cancel,
        }
    }

    /// Timing snapshot for this frame
    pub fn frame(&self) -> FrameInfo {
        self.frame
    }

    /// Input device state
    pub fn input(&self) -> &dyn InputDevice {
        self.input
    }

    /// Surface size sampled at the start of the frame
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Current draw origin
    pub fn origin(&self) -> CellPos {
        self.origin
    }

    /// Shift the draw origin for subsequent draw calls
    ///
    /// Callers that change the origin restore the previous value when
    /// they are done.
    pub fn set_origin(&mut self, origin: CellPos) {
        self.origin = origin;
    }

    /// Error if cancellation has been requested
    pub fn check_cancelled(&self) -> Result<(), EngineError> {
        self.cancel.check()
    }

    /// Draw styled text at `pos`, offset by the draw origin
    pub fn draw_text(
        &mut self,
        pos: CellPos,
        text: &str,
        style: TextStyle,
    ) -> Result<(), EngineError> {
        let shifted = CellPos::new(pos.x + self.origin.x, pos.y + self.origin.y);
        self.renderer.draw_text(shifted, text, style)
    }

    /// Draw a single cell at `pos`, offset by the draw origin
    pub fn draw_tile(&mut self, pos: CellPos, visual: TileVisual) -> Result<(), EngineError> {
        let shifted = CellPos::new(pos.x + self.origin.x, pos.y + self.origin.y);
        self.renderer.draw_tile(shifted, visual)
    }

    /// Fill the whole surface with one cell visual
    ///
    /// Ignores the draw origin: fills cover the surface itself, which is
    /// what transition veils need.
    pub fn fill_surface(&mut self, visual: TileVisual) -> Result<(), EngineError> {
        for y in 0..self.surface.height {
            for x in 0..self.surface.width {
                self.renderer
                    .draw_tile(CellPos::new(x as i32, y as i32), visual)?;
            }
        }
        Ok(())
    }
}
