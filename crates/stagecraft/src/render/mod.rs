//! Rendering pipeline
//!
//! The engine draws through three pieces:
//!
//! ```text
//! Renderer (embedder backend)
//!      ↑
//! RenderContext (per-frame state + draw origin)
//!      ↑
//! Layer / LayerRenderingManager (priority-ordered content)
//! ```
//!
//! Embedders implement [`Renderer`] over their output target; the loop
//! builds a [`RenderContext`] per frame and the [`LayerRenderingManager`]
//! walks the composed layer set through it.

mod backend;
mod context;
mod layer;
mod manager;
mod visual;

pub use backend::Renderer;
pub use context::RenderContext;
pub use layer::{shared_layer, Layer, SharedLayer};
pub use manager::LayerRenderingManager;
pub use visual::{CellPos, Color, SurfaceSize, TextStyle, TileVisual};
