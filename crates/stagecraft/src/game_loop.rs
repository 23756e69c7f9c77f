//! Core loop implementation
//!
//! Single-threaded cooperative loop that owns the scene manager and the
//! frame clock. Each iteration polls input, advances any transition,
//! updates the current scene and renders when the render step has
//! elapsed; the only suspension point is the cancellable sleep between
//! iterations.

use crate::config::Config;
use crate::error::EngineError;
use crate::foundation::cancel::CancelToken;
use crate::foundation::time::FrameClock;
use crate::input::InputDevice;
use crate::render::{LayerRenderingManager, RenderContext, Renderer, SurfaceSize};
use crate::scene::{SceneManager, SwitchRequest, UpdateContext};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Loop timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameLoopConfig {
    /// Minimum time between rendered frames
    pub render_step: Duration,

    /// Time slept between loop iterations
    pub sleep_time: Duration,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            render_step: Duration::from_millis(33),
            sleep_time: Duration::from_millis(1),
        }
    }
}

impl Config for GameLoopConfig {}

/// Main loop struct
///
/// The loop coordinates the scene manager, the frame clock and the
/// backend traits, and keeps the composed layer set in sync with the
/// scene manager between frames.
pub struct GameLoop {
    /// Scene registry, switching and transitions
    pub scenes: SceneManager,

    /// Loop timing configuration
    config: GameLoopConfig,

    /// Frame numbering and timing
    clock: FrameClock,

    /// Cooperative shutdown flag shared with scenes and layers
    cancel: CancelToken,

    /// Composed layer set, rebuilt when the scene manager's revision moves
    layers: LayerRenderingManager,

    /// Revision the composed set was last rebuilt at
    synced_revision: Option<u64>,

    /// When the last frame rendered; `None` until the first frame
    last_render: Option<Instant>,

    /// Surface size seen on the last rendered frame
    last_surface: Option<SurfaceSize>,
}

impl GameLoop {
    /// Create a loop from timing configuration
    pub fn new(config: GameLoopConfig) -> Self {
        log::info!(
            "Initializing game loop ({} ms render step)",
            config.render_step.as_millis()
        );
        Self {
            scenes: SceneManager::new(),
            clock: FrameClock::new(config.render_step),
            cancel: CancelToken::new(),
            layers: LayerRenderingManager::new(),
            synced_revision: None,
            last_render: None,
            last_surface: None,
            config,
        }
    }

    /// Run until cancelled
    pub fn run(
        &mut self,
        renderer: &mut dyn Renderer,
        input: &mut dyn InputDevice,
    ) -> Result<(), EngineError> {
        self.run_while(renderer, input, || true)
    }

    /// Run while the predicate holds and no cancellation is observed
    ///
    /// Per iteration: poll input, advance the in-flight transition by the
    /// iteration delta, update the current scene (applying any switch it
    /// requested), render when the render step has elapsed since the last
    /// frame (the first frame always renders), close the input frame and
    /// sleep. Cancellation anywhere exits the loop with `Ok`; render and
    /// input faults propagate.
    pub fn run_while<F>(
        &mut self,
        renderer: &mut dyn Renderer,
        input: &mut dyn InputDevice,
        mut predicate: F,
    ) -> Result<(), EngineError>
    where
        F: FnMut() -> bool,
    {
        log::info!("Starting main loop...");
        let mut last_tick = Instant::now();

        while predicate() {
            if self.cancel.is_cancelled() {
                log::info!("Cancellation observed, leaving main loop");
                break;
            }

            input.poll()?;

            let now = Instant::now();
            let delta = now.duration_since(last_tick);
            last_tick = now;

            self.scenes.advance_transition(delta);

            let mut update_ctx = UpdateContext::new(delta, &*input, self.cancel.clone());
            match self.scenes.update_current_scene(&mut update_ctx) {
                Ok(()) => {}
                Err(EngineError::Cancelled) => break,
                Err(e) => return Err(e),
            }
            if let Some(request) = update_ctx.take_switch_request() {
                let result = match request {
                    SwitchRequest::Direct { target } => self.scenes.switch_to(&target),
                    SwitchRequest::Effect {
                        target,
                        duration,
                        effect,
                    } => self.scenes.switch_with(&target, duration, effect),
                };
                if let Err(e) = result {
                    log::error!("Requested scene switch failed: {}", e);
                }
            }

            let now = Instant::now();
            let (first_frame, since_last) = match self.last_render {
                Some(last) => (false, now.duration_since(last)),
                None => (true, Duration::ZERO),
            };
            if first_frame || since_last >= self.config.render_step {
                match self.render_frame(renderer, &*input, now, since_last, first_frame) {
                    Ok(()) => {}
                    Err(EngineError::Cancelled) => {
                        log::debug!("Frame abandoned, cancellation observed mid-render");
                        break;
                    }
                    Err(e) => return Err(e),
                }
            }

            input.end_frame();
            self.cancel.sleep(self.config.sleep_time);
        }

        log::info!("Main loop finished");
        Ok(())
    }

    /// Token that stops the loop when cancelled
    ///
    /// Clones share the flag, so a Ctrl-C handler on another thread can
    /// hold one.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Loop timing configuration
    pub fn config(&self) -> &GameLoopConfig {
        &self.config
    }

    /// Get the scene manager
    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }

    /// Get mutable access to the scene manager
    pub fn scenes_mut(&mut self) -> &mut SceneManager {
        &mut self.scenes
    }

    /// Render one frame through the composed layer set
    fn render_frame(
        &mut self,
        renderer: &mut dyn Renderer,
        input: &dyn InputDevice,
        now: Instant,
        since_last_render: Duration,
        first_frame: bool,
    ) -> Result<(), EngineError> {
        renderer.begin_draw()?;
        let frame = self.clock.tick(now, since_last_render, first_frame);

        let revision = self.scenes.layers_revision();
        if self.synced_revision != Some(revision) {
            self.layers.set_layers(self.scenes.active_layer_set());
            self.synced_revision = Some(revision);
        }

        let mut ctx = RenderContext::new(renderer, input, frame, self.cancel.clone());
        let surface = ctx.surface();
        if self.last_surface != Some(surface) {
            if self.last_surface.is_some() {
                log::info!("Surface resized to {}x{}", surface.width, surface.height);
            }
            self.last_surface = Some(surface);
        }

        self.layers.render_all(&mut ctx)?;
        renderer.end_draw()?;
        self.last_render = Some(now);
        Ok(())
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(GameLoopConfig::default())
    }
}
