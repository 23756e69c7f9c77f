//! # Stagecraft
//!
//! A scene and layer driven presentation engine core with frame
//! scheduling and transitions.
//!
//! ## Features
//!
//! - **Frame Scheduling**: Elapsed-time frame numbering with a decoupled
//!   render cadence
//! - **Layered Rendering**: Priority-ordered layers with a three-phase
//!   render template
//! - **Scene Management**: Named scenes with lifecycle hooks and
//!   exactly-once switching
//! - **Transitions**: Timed fade and push effects between scenes
//! - **Cooperative Cancellation**: Single-threaded loop that shuts down
//!   cleanly from any layer, scene or external handler
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stagecraft::prelude::*;
//!
//! struct HelloLayer;
//!
//! impl Layer for HelloLayer {
//!     fn name(&self) -> &str {
//!         "hello"
//!     }
//!
//!     fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
//!         ctx.draw_text(CellPos::new(2, 1), "Hello!", TextStyle::default())
//!     }
//! }
//!
//! struct StdoutRenderer;
//!
//! impl Renderer for StdoutRenderer {
//!     fn begin_draw(&mut self) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn draw_text(&mut self, pos: CellPos, text: &str, _style: TextStyle) -> Result<(), EngineError> {
//!         println!("[{},{}] {}", pos.x, pos.y, text);
//!         Ok(())
//!     }
//!
//!     fn draw_tile(&mut self, _pos: CellPos, _visual: TileVisual) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn end_draw(&mut self) -> Result<(), EngineError> {
//!         Ok(())
//!     }
//!
//!     fn surface_size(&self) -> SurfaceSize {
//!         SurfaceSize::new(80, 24)
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut game_loop = GameLoop::new(GameLoopConfig::default());
//!     let mut scene = Scene::new("hello");
//!     scene.add_layer(shared_layer(HelloLayer));
//!     game_loop.scenes.register_scene(scene)?;
//!     game_loop.scenes.switch_to("hello")?;
//!
//!     let mut renderer = StdoutRenderer;
//!     let mut input = NullInput;
//!     game_loop.run(&mut renderer, &mut input)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

mod error;
mod game_loop;

pub use error::EngineError;
pub use game_loop::{GameLoop, GameLoopConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::cancel::CancelToken,
        foundation::time::{FrameClock, FrameInfo},
        input::{InputDevice, KeyCode, MouseButtons, NullInput, PointerState},
        render::{
            shared_layer, CellPos, Color, Layer, LayerRenderingManager, RenderContext, Renderer,
            SharedLayer, SurfaceSize, TextStyle, TileVisual,
        },
        scene::{
            Easing, FadeDirection, FadeTransition, PushDirection, PushTransition, Scene,
            SceneBehavior, SceneManager, SwitchRequest, TransitionEffect, UpdateContext,
        },
        EngineError, GameLoop, GameLoopConfig,
    };
}
