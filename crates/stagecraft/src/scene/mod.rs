//! Scene management system
//!
//! Provides the scene layer that sits between applications and the
//! rendering layer. A scene bundles layers with a behavior; the scene
//! manager owns every registered scene and drives switches between
//! them, directly or through timed transitions.
//!
//! ## Architecture
//!
//! ```text
//! SceneBehavior (application logic)
//!      ↓
//! Scene (layers + lifecycle)
//!      ↓
//! SceneManager (registry, switching, transitions)
//!      ↓
//! LayerRenderingManager (draw order)
//! ```
//!
//! The Scene Manager:
//! - Keeps exactly one scene current and activates/deactivates on switch
//! - Runs at most one transition at a time and swaps scenes on completion
//! - Composes the active layer set (scene layers plus global layers)
//! - Exposes a revision counter so callers can detect layer set changes

mod scene;
mod scene_manager;
mod transition;

pub use scene::{Scene, SceneBehavior, SwitchRequest, UpdateContext};
pub use scene_manager::SceneManager;
pub use transition::{
    Easing, FadeDirection, FadeTransition, PushDirection, PushTransition, SharedTransitionSlot,
    Transition, TransitionEffect, TransitionEndpoint, TransitionOverlayLayer, TransitionState,
};
