//! Scene transitions, effects and easing

use crate::error::EngineError;
use crate::render::{
    CellPos, Color, Layer, LayerRenderingManager, RenderContext, SharedLayer, SurfaceSize,
    TileVisual,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Easing functions for transition animations
///
/// These control the acceleration curve applied to linear progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed throughout
    #[default]
    Linear,
    /// Start slow, accelerate
    EaseIn,
    /// Start fast, decelerate
    EaseOut,
    /// Slow at both ends
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a linear progress value (0.0 to 1.0)
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Lifecycle state of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    /// Created but not started
    #[default]
    NotStarted,
    /// Advancing between scenes
    Running,
    /// Elapsed time reached the duration
    Complete,
}

/// One side of a transition: a scene name and its layer stack
///
/// Endpoints hold cloned layer handles sorted by priority, so effects can
/// draw either scene's content without reaching back into the scene
/// manager.
pub struct TransitionEndpoint {
    name: String,
    layers: LayerRenderingManager,
}

impl TransitionEndpoint {
    /// Capture an endpoint from a scene's layers
    pub fn new(name: impl Into<String>, layers: &[SharedLayer]) -> Self {
        let mut stack = LayerRenderingManager::new();
        stack.set_layers(layers.iter().cloned());
        Self {
            name: name.into(),
            layers: stack,
        }
    }

    /// Scene name this endpoint stands for
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Draws the frames of a transition
///
/// Effects are pure with respect to transition state: they read progress
/// and the endpoint stacks from the borrowed transition and never advance
/// it.
pub trait TransitionEffect {
    /// Effect name for diagnostics
    fn name(&self) -> &str;

    /// Draw one frame of the transition
    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        transition: &Transition,
    ) -> Result<(), EngineError>;
}

/// An animated switch between two scenes
///
/// Owns the timer, both endpoints and the effect. The scene manager
/// drives it: `start` on switch, `advance` once per loop tick, and the
/// overlay layer calls `render` once per rendered frame.
pub struct Transition {
    source: Option<TransitionEndpoint>,
    target: TransitionEndpoint,
    duration: Duration,
    elapsed: Duration,
    state: TransitionState,
    effect: Box<dyn TransitionEffect>,
}

impl Transition {
    /// Build a transition between two endpoints
    ///
    /// `source` is `None` when there is no current scene yet, e.g. a
    /// fade-in at startup.
    pub fn new(
        source: Option<TransitionEndpoint>,
        target: TransitionEndpoint,
        duration: Duration,
        effect: Box<dyn TransitionEffect>,
    ) -> Self {
        Self {
            source,
            target,
            duration,
            elapsed: Duration::ZERO,
            state: TransitionState::NotStarted,
            effect,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Configured duration
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Name of the outgoing scene, if any
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().map(TransitionEndpoint::name)
    }

    /// Name of the incoming scene
    pub fn target_name(&self) -> &str {
        self.target.name()
    }

    /// Name of the effect drawing this transition
    pub fn effect_name(&self) -> &str {
        self.effect.name()
    }

    /// Start (or restart) the transition
    ///
    /// Resets elapsed time and enters the running state.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = TransitionState::Running;
        log::debug!(
            "Transition '{}' to scene '{}' started",
            self.effect.name(),
            self.target.name()
        );
    }

    /// Advance the timer
    ///
    /// Silent no-op unless running. Elapsed time clamps at the duration
    /// and reaching it flips the state to complete.
    pub fn advance(&mut self, dt: Duration) {
        if self.state != TransitionState::Running {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.state = TransitionState::Complete;
            log::debug!(
                "Transition '{}' to scene '{}' complete",
                self.effect.name(),
                self.target.name()
            );
        }
    }

    /// Linear progress in `[0.0, 1.0]`
    ///
    /// A zero duration reports full progress as soon as the transition
    /// has started.
    pub fn progress(&self) -> f32 {
        match self.state {
            TransitionState::NotStarted => 0.0,
            TransitionState::Complete => 1.0,
            TransitionState::Running => {
                if self.duration.is_zero() {
                    1.0
                } else {
                    (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
                }
            }
        }
    }

    /// Whether the transition has run its full duration
    pub fn is_complete(&self) -> bool {
        match self.state {
            TransitionState::Complete => true,
            TransitionState::Running => self.elapsed >= self.duration,
            TransitionState::NotStarted => false,
        }
    }

    /// Draw the current transition frame
    ///
    /// No-op unless running; delegates to the effect otherwise. Drawing
    /// never advances transition state.
    pub fn render(&self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        if self.state != TransitionState::Running {
            return Ok(());
        }
        self.effect.render(ctx, self)
    }

    /// Draw the outgoing scene's layers, if there is an outgoing scene
    pub fn render_source(&self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        match &self.source {
            Some(endpoint) => endpoint.layers.render_all(ctx),
            None => Ok(()),
        }
    }

    /// Draw the incoming scene's layers
    pub fn render_target(&self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        self.target.layers.render_all(ctx)
    }
}

/// Which way a fade runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Veil the outgoing scene: overlay alpha rises 0 to 1
    Out,
    /// Unveil the incoming scene: overlay alpha falls 1 to 0
    In,
    /// Veil the outgoing scene, swap behind full cover, then unveil
    InOut,
}

/// Fade through a solid color
pub struct FadeTransition {
    color: Color,
    direction: FadeDirection,
    easing: Easing,
}

impl FadeTransition {
    /// Fade through `color` in the given direction
    pub fn new(color: Color, direction: FadeDirection) -> Self {
        Self {
            color,
            direction,
            easing: Easing::EaseInOut,
        }
    }

    /// Replace the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Overlay opacity at the given linear progress
    ///
    /// For `InOut` the easing applies per half, so the veil closes over
    /// the first half and opens over the second.
    pub fn overlay_alpha(&self, progress: f32) -> f32 {
        match self.direction {
            FadeDirection::Out => self.easing.apply(progress),
            FadeDirection::In => 1.0 - self.easing.apply(progress),
            FadeDirection::InOut => {
                if progress < 0.5 {
                    self.easing.apply(progress * 2.0)
                } else {
                    1.0 - self.easing.apply((progress - 0.5) * 2.0)
                }
            }
        }
    }

    /// Whether the incoming scene's content shows at the given progress
    ///
    /// `Out` keeps the outgoing scene on screen for its whole run; `In`
    /// shows the incoming scene from the start; `InOut` swaps behind the
    /// fully closed veil at the midpoint.
    pub fn shows_target(&self, progress: f32) -> bool {
        match self.direction {
            FadeDirection::Out => false,
            FadeDirection::In => true,
            FadeDirection::InOut => progress >= 0.5,
        }
    }
}

impl TransitionEffect for FadeTransition {
    fn name(&self) -> &str {
        "fade"
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        transition: &Transition,
    ) -> Result<(), EngineError> {
        let progress = transition.progress();

        if self.shows_target(progress) {
            transition.render_target(ctx)?;
        } else {
            transition.render_source(ctx)?;
        }

        let alpha = alpha_byte(self.overlay_alpha(progress));
        if alpha > 0 {
            let veil = self.color.with_alpha(alpha);
            ctx.fill_surface(TileVisual {
                glyph: ' ',
                fg: veil,
                bg: veil,
            })?;
        }
        Ok(())
    }
}

/// Edge the incoming scene slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDirection {
    /// Incoming scene slides in from the left edge
    FromLeft,
    /// Incoming scene slides in from the right edge
    FromRight,
    /// Incoming scene slides in from the top edge
    FromTop,
    /// Incoming scene slides in from the bottom edge
    FromBottom,
}

/// Slide the incoming scene in while pushing the outgoing scene out
pub struct PushTransition {
    direction: PushDirection,
    easing: Easing,
}

impl PushTransition {
    /// Push from the given edge
    pub fn new(direction: PushDirection) -> Self {
        Self {
            direction,
            easing: Easing::EaseOut,
        }
    }

    /// Replace the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Draw origins for both scenes at the given linear progress
    ///
    /// Returns `(source_origin, target_origin)` in cells. Both scenes
    /// travel together: the outgoing scene exits one edge exactly as the
    /// incoming scene covers the surface.
    pub fn offsets(&self, progress: f32, surface: SurfaceSize) -> (CellPos, CellPos) {
        let t = self.easing.apply(progress);
        let width = surface.width as i32;
        let height = surface.height as i32;

        match self.direction {
            PushDirection::FromRight => {
                let shift = travel(t, width);
                (CellPos::new(-shift, 0), CellPos::new(width - shift, 0))
            }
            PushDirection::FromLeft => {
                let shift = travel(t, width);
                (CellPos::new(shift, 0), CellPos::new(shift - width, 0))
            }
            PushDirection::FromBottom => {
                let shift = travel(t, height);
                (CellPos::new(0, -shift), CellPos::new(0, height - shift))
            }
            PushDirection::FromTop => {
                let shift = travel(t, height);
                (CellPos::new(0, shift), CellPos::new(0, shift - height))
            }
        }
    }
}

impl TransitionEffect for PushTransition {
    fn name(&self) -> &str {
        "push"
    }

    fn render(
        &self,
        ctx: &mut RenderContext<'_>,
        transition: &Transition,
    ) -> Result<(), EngineError> {
        let (source_origin, target_origin) = self.offsets(transition.progress(), ctx.surface());
        let prev = ctx.origin();

        ctx.set_origin(CellPos::new(
            prev.x + source_origin.x,
            prev.y + source_origin.y,
        ));
        let mut result = transition.render_source(ctx);
        if result.is_ok() {
            ctx.set_origin(CellPos::new(
                prev.x + target_origin.x,
                prev.y + target_origin.y,
            ));
            result = transition.render_target(ctx);
        }
        ctx.set_origin(prev);
        result
    }
}

/// Slot shared between the scene manager and the overlay layer
pub type SharedTransitionSlot = Rc<RefCell<Option<Transition>>>;

/// Layer that draws the in-flight transition
///
/// Installed by the scene manager as a global layer at maximum priority
/// so it draws after everything else. Renders nothing while the slot is
/// empty.
pub struct TransitionOverlayLayer {
    slot: SharedTransitionSlot,
}

impl TransitionOverlayLayer {
    /// Overlay reading the given slot
    pub fn new(slot: SharedTransitionSlot) -> Self {
        Self { slot }
    }
}

impl Layer for TransitionOverlayLayer {
    fn name(&self) -> &str {
        "transition-overlay"
    }

    fn priority(&self) -> i32 {
        i32::MAX
    }

    fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
        if let Some(transition) = self.slot.borrow().as_ref() {
            transition.render(ctx)?;
        }
        Ok(())
    }
}

fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn travel(t: f32, extent: i32) -> i32 {
    (t * extent as f32).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::cancel::CancelToken;
    use crate::foundation::time::FrameInfo;
    use crate::input::NullInput;
    use crate::render::{shared_layer, Renderer, TextStyle};
    use approx::assert_relative_eq;

    struct CountingRenderer {
        size: SurfaceSize,
        tiles: Vec<CellPos>,
        texts: Vec<(CellPos, String)>,
    }

    impl CountingRenderer {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: SurfaceSize::new(width, height),
                tiles: Vec::new(),
                texts: Vec::new(),
            }
        }
    }

    impl Renderer for CountingRenderer {
        fn begin_draw(&mut self) -> Result<(), EngineError> {
            Ok(())
        }

        fn draw_text(
            &mut self,
            pos: CellPos,
            text: &str,
            _style: TextStyle,
        ) -> Result<(), EngineError> {
            self.texts.push((pos, text.to_string()));
            Ok(())
        }

        fn draw_tile(&mut self, pos: CellPos, _visual: TileVisual) -> Result<(), EngineError> {
            self.tiles.push(pos);
            Ok(())
        }

        fn end_draw(&mut self) -> Result<(), EngineError> {
            Ok(())
        }

        fn surface_size(&self) -> SurfaceSize {
            self.size
        }
    }

    fn test_frame() -> FrameInfo {
        FrameInfo {
            frame_number: 0,
            delta_time: Duration::ZERO,
            total_time: Duration::ZERO,
            fps: 0.0,
        }
    }

    struct MarkerLayer {
        label: &'static str,
    }

    impl Layer for MarkerLayer {
        fn name(&self) -> &str {
            self.label
        }

        fn render_content(&mut self, ctx: &mut RenderContext<'_>) -> Result<(), EngineError> {
            ctx.draw_text(CellPos::new(0, 0), self.label, TextStyle::default())
        }
    }

    fn endpoint(name: &str, label: &'static str) -> TransitionEndpoint {
        TransitionEndpoint::new(name, &[shared_layer(MarkerLayer { label })])
    }

    fn fade_transition(direction: FadeDirection, duration_ms: u64) -> Transition {
        Transition::new(
            Some(endpoint("old", "source")),
            endpoint("new", "target"),
            Duration::from_millis(duration_ms),
            Box::new(FadeTransition::new(Color::BLACK, direction).easing(Easing::Linear)),
        )
    }

    #[test]
    fn test_easing_values() {
        assert_relative_eq!(Easing::Linear.apply(0.3), 0.3);
        assert_relative_eq!(Easing::EaseIn.apply(0.5), 0.25);
        assert_relative_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert_relative_eq!(Easing::EaseInOut.apply(0.25), 0.125);
        assert_relative_eq!(Easing::EaseInOut.apply(0.75), 0.875);
    }

    #[test]
    fn test_easing_endpoints_and_clamping() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_relative_eq!(easing.apply(0.0), 0.0);
            assert_relative_eq!(easing.apply(1.0), 1.0);
            assert_relative_eq!(easing.apply(-2.0), 0.0);
            assert_relative_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_transition_starts_not_started() {
        let transition = fade_transition(FadeDirection::Out, 100);

        assert_eq!(transition.state(), TransitionState::NotStarted);
        assert_relative_eq!(transition.progress(), 0.0);
        assert!(!transition.is_complete());
    }

    #[test]
    fn test_advance_before_start_is_a_noop() {
        let mut transition = fade_transition(FadeDirection::Out, 100);

        transition.advance(Duration::from_secs(5));

        assert_eq!(transition.state(), TransitionState::NotStarted);
        assert_relative_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn test_advance_accumulates_and_completes() {
        let mut transition = fade_transition(FadeDirection::Out, 100);
        transition.start();
        assert_eq!(transition.state(), TransitionState::Running);

        transition.advance(Duration::from_millis(50));
        assert_relative_eq!(transition.progress(), 0.5);
        assert!(!transition.is_complete());

        transition.advance(Duration::from_millis(75));
        assert_eq!(transition.state(), TransitionState::Complete);
        assert_relative_eq!(transition.progress(), 1.0);
        assert!(transition.is_complete());
    }

    #[test]
    fn test_zero_duration_is_complete_after_start() {
        let mut transition = fade_transition(FadeDirection::Out, 0);
        transition.start();

        assert_relative_eq!(transition.progress(), 1.0);
        assert!(transition.is_complete());

        transition.advance(Duration::ZERO);
        assert_eq!(transition.state(), TransitionState::Complete);
    }

    #[test]
    fn test_fade_out_alpha_rises_over_source() {
        let fade = FadeTransition::new(Color::BLACK, FadeDirection::Out).easing(Easing::Linear);

        assert_relative_eq!(fade.overlay_alpha(0.0), 0.0);
        assert_relative_eq!(fade.overlay_alpha(0.5), 0.5);
        assert_relative_eq!(fade.overlay_alpha(1.0), 1.0);
        assert!(!fade.shows_target(0.0));
        assert!(!fade.shows_target(1.0));
    }

    #[test]
    fn test_fade_in_alpha_falls_over_target() {
        let fade = FadeTransition::new(Color::BLACK, FadeDirection::In).easing(Easing::Linear);

        assert_relative_eq!(fade.overlay_alpha(0.0), 1.0);
        assert_relative_eq!(fade.overlay_alpha(1.0), 0.0);
        assert!(fade.shows_target(0.0));
        assert!(fade.shows_target(1.0));
    }

    #[test]
    fn test_fade_in_out_closes_then_opens() {
        let fade = FadeTransition::new(Color::BLACK, FadeDirection::InOut).easing(Easing::Linear);

        assert_relative_eq!(fade.overlay_alpha(0.0), 0.0);
        assert_relative_eq!(fade.overlay_alpha(0.25), 0.5);
        assert_relative_eq!(fade.overlay_alpha(0.5), 1.0);
        assert_relative_eq!(fade.overlay_alpha(0.75), 0.5);
        assert_relative_eq!(fade.overlay_alpha(1.0), 0.0);
        assert!(!fade.shows_target(0.49));
        assert!(fade.shows_target(0.5));
    }

    #[test]
    fn test_alpha_byte_rounding() {
        assert_eq!(alpha_byte(0.0), 0);
        assert_eq!(alpha_byte(1.0), 255);
        assert_eq!(alpha_byte(0.5), 128);
        assert_eq!(alpha_byte(-1.0), 0);
        assert_eq!(alpha_byte(2.0), 255);
    }

    #[test]
    fn test_push_offsets_from_right() {
        let push = PushTransition::new(PushDirection::FromRight).easing(Easing::Linear);
        let surface = SurfaceSize::new(80, 24);

        assert_eq!(
            push.offsets(0.0, surface),
            (CellPos::new(0, 0), CellPos::new(80, 0))
        );
        assert_eq!(
            push.offsets(0.5, surface),
            (CellPos::new(-40, 0), CellPos::new(40, 0))
        );
        assert_eq!(
            push.offsets(1.0, surface),
            (CellPos::new(-80, 0), CellPos::new(0, 0))
        );
    }

    #[test]
    fn test_push_offsets_from_left() {
        let push = PushTransition::new(PushDirection::FromLeft).easing(Easing::Linear);
        let surface = SurfaceSize::new(80, 24);

        assert_eq!(
            push.offsets(0.0, surface),
            (CellPos::new(0, 0), CellPos::new(-80, 0))
        );
        assert_eq!(
            push.offsets(0.5, surface),
            (CellPos::new(40, 0), CellPos::new(-40, 0))
        );
        assert_eq!(
            push.offsets(1.0, surface),
            (CellPos::new(80, 0), CellPos::new(0, 0))
        );
    }

    #[test]
    fn test_push_offsets_vertical() {
        let surface = SurfaceSize::new(80, 24);

        let from_top = PushTransition::new(PushDirection::FromTop).easing(Easing::Linear);
        assert_eq!(
            from_top.offsets(0.5, surface),
            (CellPos::new(0, 12), CellPos::new(0, -12))
        );

        let from_bottom = PushTransition::new(PushDirection::FromBottom).easing(Easing::Linear);
        assert_eq!(
            from_bottom.offsets(0.5, surface),
            (CellPos::new(0, -12), CellPos::new(0, 12))
        );
    }

    #[test]
    fn test_render_is_a_noop_unless_running() {
        let mut renderer = CountingRenderer::new(4, 2);
        let input = NullInput;
        let mut ctx = RenderContext::new(&mut renderer, &input, test_frame(), CancelToken::new());

        let mut transition = fade_transition(FadeDirection::Out, 100);
        transition.render(&mut ctx).unwrap();

        transition.start();
        transition.advance(Duration::from_millis(200));
        assert_eq!(transition.state(), TransitionState::Complete);
        transition.render(&mut ctx).unwrap();

        assert!(renderer.tiles.is_empty());
        assert!(renderer.texts.is_empty());
    }

    #[test]
    fn test_fade_out_renders_source_without_veil_at_start() {
        let mut renderer = CountingRenderer::new(4, 2);
        let input = NullInput;
        let mut ctx = RenderContext::new(&mut renderer, &input, test_frame(), CancelToken::new());

        let mut transition = fade_transition(FadeDirection::Out, 100);
        transition.start();
        transition.render(&mut ctx).unwrap();

        assert_eq!(renderer.texts.len(), 1);
        assert_eq!(renderer.texts[0].1, "source");
        assert!(renderer.tiles.is_empty());
    }

    #[test]
    fn test_fade_in_renders_target_under_the_veil() {
        let mut renderer = CountingRenderer::new(4, 2);
        let input = NullInput;
        let mut ctx = RenderContext::new(&mut renderer, &input, test_frame(), CancelToken::new());

        let mut transition = fade_transition(FadeDirection::In, 100);
        transition.start();
        transition.advance(Duration::from_millis(50));
        transition.render(&mut ctx).unwrap();

        assert_eq!(renderer.texts.len(), 1);
        assert_eq!(renderer.texts[0].1, "target");
        // Half-open veil still covers the whole 4x2 surface.
        assert_eq!(renderer.tiles.len(), 8);
    }

    #[test]
    fn test_push_renders_both_scenes_shifted() {
        let mut renderer = CountingRenderer::new(8, 4);
        let input = NullInput;
        let mut ctx = RenderContext::new(&mut renderer, &input, test_frame(), CancelToken::new());

        let mut transition = Transition::new(
            Some(endpoint("old", "source")),
            endpoint("new", "target"),
            Duration::from_millis(100),
            Box::new(PushTransition::new(PushDirection::FromRight).easing(Easing::Linear)),
        );
        transition.start();
        transition.advance(Duration::from_millis(50));
        transition.render(&mut ctx).unwrap();
        assert_eq!(ctx.origin(), CellPos::new(0, 0));

        assert_eq!(
            renderer.texts,
            vec![
                (CellPos::new(-4, 0), "source".to_string()),
                (CellPos::new(4, 0), "target".to_string()),
            ]
        );
    }

    #[test]
    fn test_overlay_layer_draws_slot_contents() {
        let slot: SharedTransitionSlot = Rc::new(RefCell::new(None));
        let mut overlay = TransitionOverlayLayer::new(Rc::clone(&slot));
        assert_eq!(overlay.priority(), i32::MAX);

        let mut renderer = CountingRenderer::new(4, 2);
        let input = NullInput;

        {
            let mut ctx =
                RenderContext::new(&mut renderer, &input, test_frame(), CancelToken::new());
            overlay.render_content(&mut ctx).unwrap();
        }
        assert!(renderer.texts.is_empty());

        let mut transition = fade_transition(FadeDirection::Out, 100);
        transition.start();
        *slot.borrow_mut() = Some(transition);

        {
            let mut ctx =
                RenderContext::new(&mut renderer, &input, test_frame(), CancelToken::new());
            overlay.render_content(&mut ctx).unwrap();
        }
        assert_eq!(renderer.texts.len(), 1);
    }
}
