//! Rendering backend abstraction

use crate::error::EngineError;
use crate::render::visual::{CellPos, SurfaceSize, TextStyle, TileVisual};

/// Drawing backend implemented by embedders
///
/// The engine brackets every rendered frame with `begin_draw` and
/// `end_draw` and issues draw calls in between. Implementations own the
/// actual output target: a terminal, a pixel buffer, or an in-memory grid
/// in tests.
///
/// A begun frame is abandoned without `end_draw` when cancellation is
/// observed mid-frame; implementations must tolerate that.
///
/// Resizing is observed rather than signalled: the engine reads
/// `surface_size` before every frame and hands the fresh dimensions to
/// layers, so a backend just reports whatever its target currently
/// measures.
pub trait Renderer {
    /// Start a new frame
    fn begin_draw(&mut self) -> Result<(), EngineError>;

    /// Draw a run of styled text starting at `pos`
    fn draw_text(&mut self, pos: CellPos, text: &str, style: TextStyle)
        -> Result<(), EngineError>;

    /// Draw a single cell
    fn draw_tile(&mut self, pos: CellPos, visual: TileVisual) -> Result<(), EngineError>;

    /// Present the frame
    fn end_draw(&mut self) -> Result<(), EngineError>;

    /// Current drawable surface size
    fn surface_size(&self) -> SurfaceSize;
}
