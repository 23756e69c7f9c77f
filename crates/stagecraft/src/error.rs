//! Engine error types

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// No scene with the given name is registered
    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    /// A scene with the same name is already registered
    #[error("Scene already registered: {0}")]
    SceneAlreadyRegistered(String),

    /// The scene is current or referenced by a running transition
    #[error("Scene is in use: {0}")]
    SceneInUse(String),

    /// A switch was requested while a transition is still running
    #[error("Transition in flight, cannot switch to: {0}")]
    TransitionInFlight(String),

    /// Cooperative cancellation was observed
    #[error("Cancelled")]
    Cancelled,

    /// Rendering error
    #[error("Rendering error: {0}")]
    RenderError(String),

    /// Input handling error
    #[error("Input error: {0}")]
    InputError(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}
