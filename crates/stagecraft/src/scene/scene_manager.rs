//! Scene registry, switching and transition orchestration

use crate::error::EngineError;
use crate::render::{shared_layer, SharedLayer};
use crate::scene::scene::{Scene, UpdateContext};
use crate::scene::transition::{
    SharedTransitionSlot, Transition, TransitionEffect, TransitionEndpoint, TransitionOverlayLayer,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Owns scenes and drives switches between them
///
/// At most one scene is current and at most one transition is in flight.
/// Global layers render with every scene; the transition overlay is
/// installed as a global at construction and draws whatever transition
/// sits in the shared slot.
///
/// The loop watches [`layers_revision`](SceneManager::layers_revision) to
/// learn when the composed layer set changed, instead of rebuilding it
/// every frame.
pub struct SceneManager {
    scenes: HashMap<String, Scene>,
    global_layers: Vec<SharedLayer>,
    current: Option<String>,
    transition: SharedTransitionSlot,
    revision: u64,
}

impl SceneManager {
    /// Create a manager with no scenes and the transition overlay installed
    pub fn new() -> Self {
        let transition: SharedTransitionSlot = Rc::new(RefCell::new(None));
        let overlay = shared_layer(TransitionOverlayLayer::new(Rc::clone(&transition)));
        Self {
            scenes: HashMap::new(),
            global_layers: vec![overlay],
            current: None,
            transition,
            revision: 0,
        }
    }

    /// Register a scene under its own name
    ///
    /// Fails without touching the registry if the name is taken.
    pub fn register_scene(&mut self, scene: Scene) -> Result<(), EngineError> {
        if self.scenes.contains_key(scene.name()) {
            return Err(EngineError::SceneAlreadyRegistered(scene.name().to_string()));
        }
        log::debug!("Registered scene '{}'", scene.name());
        self.scenes.insert(scene.name().to_string(), scene);
        Ok(())
    }

    /// Remove a scene from the registry
    ///
    /// Returns whether the scene was present. The current scene and the
    /// endpoints of an in-flight transition cannot be removed.
    pub fn unregister_scene(&mut self, name: &str) -> Result<bool, EngineError> {
        if !self.scenes.contains_key(name) {
            return Ok(false);
        }
        if self.current.as_deref() == Some(name) {
            return Err(EngineError::SceneInUse(name.to_string()));
        }
        {
            let slot = self.transition.borrow();
            if let Some(transition) = slot.as_ref() {
                if transition.target_name() == name || transition.source_name() == Some(name) {
                    return Err(EngineError::SceneInUse(name.to_string()));
                }
            }
        }
        self.scenes.remove(name);
        log::debug!("Unregistered scene '{}'", name);
        Ok(true)
    }

    /// Add a layer that renders with every scene
    pub fn add_global_layer(&mut self, layer: SharedLayer) {
        self.global_layers.push(layer);
        self.revision += 1;
    }

    /// Remove a global layer by handle identity
    ///
    /// Returns whether the layer was present.
    pub fn remove_global_layer(&mut self, layer: &SharedLayer) -> bool {
        let before = self.global_layers.len();
        self.global_layers.retain(|l| !Rc::ptr_eq(l, layer));
        let removed = self.global_layers.len() != before;
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Switch to a scene immediately
    ///
    /// Deactivates the current scene, activates the target and makes it
    /// current, all within this call. An unknown target fails before any
    /// state changes; switching is rejected while a transition runs.
    pub fn switch_to(&mut self, name: &str) -> Result<(), EngineError> {
        if !self.scenes.contains_key(name) {
            return Err(EngineError::SceneNotFound(name.to_string()));
        }
        if self.is_transitioning() {
            return Err(EngineError::TransitionInFlight(name.to_string()));
        }

        if let Some(current) = self.current.take() {
            if let Some(scene) = self.scenes.get_mut(&current) {
                scene.deactivate();
            }
        }
        if let Some(scene) = self.scenes.get_mut(name) {
            scene.activate();
        }
        self.current = Some(name.to_string());
        self.revision += 1;
        log::info!("Switched to scene '{}'", name);
        Ok(())
    }

    /// Switch to a scene through a transition effect
    ///
    /// The current scene stays current (and keeps updating) while the
    /// transition runs; the swap happens when it completes. A zero
    /// duration completes inside this call. Only one transition may be
    /// in flight at a time.
    pub fn switch_with(
        &mut self,
        name: &str,
        duration: Duration,
        effect: Box<dyn TransitionEffect>,
    ) -> Result<(), EngineError> {
        if self.is_transitioning() {
            return Err(EngineError::TransitionInFlight(name.to_string()));
        }
        let target = match self.scenes.get(name) {
            Some(scene) => TransitionEndpoint::new(name, scene.layers()),
            None => return Err(EngineError::SceneNotFound(name.to_string())),
        };
        let source = self.current.as_ref().and_then(|current| {
            self.scenes
                .get(current)
                .map(|scene| TransitionEndpoint::new(current.clone(), scene.layers()))
        });

        let mut transition = Transition::new(source, target, duration, effect);
        transition.start();
        log::info!(
            "Transitioning to scene '{}' with '{}' effect over {} ms",
            name,
            transition.effect_name(),
            duration.as_millis()
        );
        *self.transition.borrow_mut() = Some(transition);
        self.revision += 1;

        // A zero duration is already complete; finish it synchronously.
        self.advance_transition(Duration::ZERO);
        Ok(())
    }

    /// Advance the in-flight transition, swapping scenes on completion
    ///
    /// Called once per loop tick; no-op when nothing is in flight.
    pub fn advance_transition(&mut self, dt: Duration) {
        let finished = {
            let mut slot = self.transition.borrow_mut();
            match slot.as_mut() {
                Some(transition) => {
                    transition.advance(dt);
                    transition.is_complete()
                }
                None => false,
            }
        };
        if finished {
            self.finish_transition();
        }
    }

    /// Run the current scene's per-tick update
    pub fn update_current_scene(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), EngineError> {
        if let Some(name) = self.current.as_deref() {
            if let Some(scene) = self.scenes.get_mut(name) {
                return scene.update(ctx);
            }
        }
        Ok(())
    }

    /// The composed layer set for rendering
    ///
    /// Current scene layers followed by global layers. While a transition
    /// runs the set is the globals alone; the overlay draws both
    /// endpoints' content through the transition itself.
    pub fn active_layer_set(&self) -> Vec<SharedLayer> {
        let mut layers = Vec::new();
        if !self.is_transitioning() {
            if let Some(scene) = self
                .current
                .as_deref()
                .and_then(|name| self.scenes.get(name))
            {
                layers.extend(scene.layers().iter().cloned());
            }
        }
        layers.extend(self.global_layers.iter().cloned());
        layers
    }

    /// Counter that moves whenever the composed layer set changes
    pub fn layers_revision(&self) -> u64 {
        self.revision
    }

    /// Name of the current scene
    pub fn current_scene_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.transition.borrow().is_some()
    }

    /// Progress of the in-flight transition, if any
    pub fn transition_progress(&self) -> Option<f32> {
        self.transition.borrow().as_ref().map(Transition::progress)
    }

    /// Number of registered scenes
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Whether a scene is registered under `name`
    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Look up a registered scene
    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    fn finish_transition(&mut self) {
        let taken = self.transition.borrow_mut().take();
        let transition = match taken {
            Some(transition) => transition,
            None => return,
        };

        if let Some(source) = transition.source_name() {
            if let Some(scene) = self.scenes.get_mut(source) {
                scene.deactivate();
            }
        }

        let target = transition.target_name().to_string();
        match self.scenes.get_mut(&target) {
            Some(scene) => {
                scene.activate();
                log::info!("Transition complete, scene '{}' is now current", target);
                self.current = Some(target);
            }
            None => {
                // Unregistering in-flight endpoints is rejected, so the
                // target is always present here.
                log::error!("Transition target scene '{}' disappeared", target);
                self.current = None;
            }
        }
        self.revision += 1;
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}
