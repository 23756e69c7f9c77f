//! Scenes and their lifecycle

use crate::error::EngineError;
use crate::foundation::cancel::CancelToken;
use crate::input::InputDevice;
use crate::render::SharedLayer;
use crate::scene::transition::TransitionEffect;
use std::time::Duration;

/// Scene lifecycle and per-tick hooks
///
/// All hooks default to no-ops; implement the ones the scene needs. The
/// activation and deactivation hooks are infallible bookkeeping, while
/// `on_update` runs game logic and may fail.
///
/// Behaviors usually hold their own handles to the layers they animate,
/// so hooks can flip visibility or update content without reaching back
/// into the scene.
pub trait SceneBehavior {
    /// Runs first when the scene activates
    fn on_before_activate(&mut self) {}

    /// Runs when the scene activates
    fn on_activate(&mut self) {}

    /// Runs last when the scene activates
    fn on_after_activate(&mut self) {}

    /// Runs first when the scene deactivates
    fn on_before_deactivate(&mut self) {}

    /// Runs when the scene deactivates
    fn on_deactivate(&mut self) {}

    /// Runs last when the scene deactivates
    fn on_after_deactivate(&mut self) {}

    /// Runs every tick while the scene is active
    fn on_update(&mut self, _ctx: &mut UpdateContext<'_>) -> Result<(), EngineError> {
        Ok(())
    }
}

/// Hook-less behavior for scenes that are pure layer containers
impl SceneBehavior for () {}

/// A named, activatable group of layers
///
/// Scenes own their layer list and a boxed behavior. The layer list is
/// fixed once the scene is registered; behaviors keep their own handles
/// when they need to mutate layers at runtime.
pub struct Scene {
    name: String,
    layers: Vec<SharedLayer>,
    behavior: Box<dyn SceneBehavior>,
    active: bool,
}

impl Scene {
    /// Create a scene with no behavior hooks
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_behavior(name, ())
    }

    /// Create a scene with a behavior
    pub fn with_behavior(name: impl Into<String>, behavior: impl SceneBehavior + 'static) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            behavior: Box::new(behavior),
            active: false,
        }
    }

    /// Append a layer to the scene
    pub fn add_layer(&mut self, layer: SharedLayer) {
        self.layers.push(layer);
    }

    /// Scene name, unique within a manager
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the scene is currently active
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Layers in registration order
    pub fn layers(&self) -> &[SharedLayer] {
        &self.layers
    }

    /// Activate the scene
    ///
    /// Runs the before/on/after activation hooks exactly once and marks
    /// the scene active. No-op if the scene is already active.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        log::debug!("Activating scene '{}'", self.name);
        self.behavior.on_before_activate();
        self.behavior.on_activate();
        self.behavior.on_after_activate();
        self.active = true;
    }

    /// Deactivate the scene
    ///
    /// Mirror of [`activate`](Scene::activate): runs the deactivation
    /// hooks exactly once and clears the active flag. No-op if the scene
    /// is not active.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        log::debug!("Deactivating scene '{}'", self.name);
        self.behavior.on_before_deactivate();
        self.behavior.on_deactivate();
        self.behavior.on_after_deactivate();
        self.active = false;
    }

    /// Advance the scene by one tick
    ///
    /// No-op unless the scene is active. Observes cancellation before
    /// running the behavior.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), EngineError> {
        if !self.active {
            return Ok(());
        }
        ctx.check_cancelled()?;
        self.behavior.on_update(ctx)
    }
}

/// A scene-initiated request to switch scenes
///
/// Scenes cannot reach the manager that owns them; they queue one of
/// these on the update context instead and the loop applies it after the
/// update phase.
pub enum SwitchRequest {
    /// Switch immediately, no effect
    Direct {
        /// Name of the scene to switch to
        target: String,
    },
    /// Switch through a transition effect
    Effect {
        /// Name of the scene to switch to
        target: String,
        /// Transition duration
        duration: Duration,
        /// Effect that draws the transition
        effect: Box<dyn TransitionEffect>,
    },
}

impl SwitchRequest {
    /// Request an immediate switch
    pub fn direct(target: impl Into<String>) -> Self {
        Self::Direct {
            target: target.into(),
        }
    }

    /// Request an animated switch
    pub fn with_effect(
        target: impl Into<String>,
        duration: Duration,
        effect: impl TransitionEffect + 'static,
    ) -> Self {
        Self::Effect {
            target: target.into(),
            duration,
            effect: Box::new(effect),
        }
    }

    /// Name of the requested target scene
    pub fn target(&self) -> &str {
        match self {
            Self::Direct { target } | Self::Effect { target, .. } => target,
        }
    }
}

/// Everything a scene behavior sees during one tick
pub struct UpdateContext<'a> {
    delta: Duration,
    input: &'a dyn InputDevice,
    cancel: CancelToken,
    switch_request: Option<SwitchRequest>,
}

impl<'a> UpdateContext<'a> {
    /// Build a context for one tick
    pub fn new(delta: Duration, input: &'a dyn InputDevice, cancel: CancelToken) -> Self {
        Self {
            delta,
            input,
            cancel,
            switch_request: None,
        }
    }

    /// Time since the previous tick
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Input device state
    pub fn input(&self) -> &dyn InputDevice {
        self.input
    }

    /// Error if cancellation has been requested
    pub fn check_cancelled(&self) -> Result<(), EngineError> {
        self.cancel.check()
    }

    /// Ask the loop to shut down after this tick
    pub fn request_shutdown(&self) {
        self.cancel.cancel();
    }

    /// Queue a scene switch for the loop to apply after this tick
    ///
    /// A second request in the same tick replaces the first.
    pub fn request_switch(&mut self, request: SwitchRequest) {
        self.switch_request = Some(request);
    }

    /// Take the queued switch request, if any
    pub fn take_switch_request(&mut self) -> Option<SwitchRequest> {
        self.switch_request.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::NullInput;
    use std::cell::RefCell;
    use std::rc::Rc;

    type HookLog = Rc<RefCell<Vec<&'static str>>>;

    struct RecordingBehavior {
        log: HookLog,
    }

    impl SceneBehavior for RecordingBehavior {
        fn on_before_activate(&mut self) {
            self.log.borrow_mut().push("before_activate");
        }

        fn on_activate(&mut self) {
            self.log.borrow_mut().push("activate");
        }

        fn on_after_activate(&mut self) {
            self.log.borrow_mut().push("after_activate");
        }

        fn on_before_deactivate(&mut self) {
            self.log.borrow_mut().push("before_deactivate");
        }

        fn on_deactivate(&mut self) {
            self.log.borrow_mut().push("deactivate");
        }

        fn on_after_deactivate(&mut self) {
            self.log.borrow_mut().push("after_deactivate");
        }

        fn on_update(&mut self, _ctx: &mut UpdateContext<'_>) -> Result<(), EngineError> {
            self.log.borrow_mut().push("update");
            Ok(())
        }
    }

    fn recording_scene(log: &HookLog) -> Scene {
        Scene::with_behavior(
            "probe",
            RecordingBehavior {
                log: Rc::clone(log),
            },
        )
    }

    fn update_ctx(input: &NullInput) -> UpdateContext<'_> {
        UpdateContext::new(Duration::from_millis(16), input, CancelToken::new())
    }

    #[test]
    fn test_activation_runs_hooks_in_order() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut scene = recording_scene(&log);

        scene.activate();

        assert!(scene.is_active());
        assert_eq!(
            *log.borrow(),
            vec!["before_activate", "activate", "after_activate"]
        );
    }

    #[test]
    fn test_double_activation_is_a_noop() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut scene = recording_scene(&log);

        scene.activate();
        scene.activate();

        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_deactivation_mirrors_activation() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut scene = recording_scene(&log);

        scene.activate();
        log.borrow_mut().clear();
        scene.deactivate();
        scene.deactivate();

        assert!(!scene.is_active());
        assert_eq!(
            *log.borrow(),
            vec!["before_deactivate", "deactivate", "after_deactivate"]
        );
    }

    #[test]
    fn test_deactivating_inactive_scene_runs_no_hooks() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut scene = recording_scene(&log);

        scene.deactivate();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_update_only_runs_while_active() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut scene = recording_scene(&log);
        let input = NullInput;

        scene.update(&mut update_ctx(&input)).unwrap();
        assert!(log.borrow().is_empty());

        scene.activate();
        log.borrow_mut().clear();
        scene.update(&mut update_ctx(&input)).unwrap();
        assert_eq!(*log.borrow(), vec!["update"]);

        scene.deactivate();
        log.borrow_mut().clear();
        scene.update(&mut update_ctx(&input)).unwrap();
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_update_observes_cancellation() {
        let log: HookLog = Rc::new(RefCell::new(Vec::new()));
        let mut scene = recording_scene(&log);
        scene.activate();
        log.borrow_mut().clear();

        let input = NullInput;
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut ctx = UpdateContext::new(Duration::from_millis(16), &input, cancel);

        let result = scene.update(&mut ctx);

        assert!(matches!(result, Err(EngineError::Cancelled)));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_switch_request_round_trip() {
        let input = NullInput;
        let mut ctx = update_ctx(&input);

        assert!(ctx.take_switch_request().is_none());

        ctx.request_switch(SwitchRequest::direct("next"));
        let request = ctx.take_switch_request().unwrap();

        assert_eq!(request.target(), "next");
        assert!(ctx.take_switch_request().is_none());
    }

    #[test]
    fn test_request_shutdown_cancels_token() {
        let input = NullInput;
        let cancel = CancelToken::new();
        let ctx = UpdateContext::new(Duration::ZERO, &input, cancel.clone());

        ctx.request_shutdown();

        assert!(cancel.is_cancelled());
    }
}
