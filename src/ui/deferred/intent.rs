use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DeferredIntent {
    /// First display. `already_loaded` skips straight to `Ready`.
    Mount { already_loaded: bool },
    /// The pending load settled successfully.
    Loaded,
    /// The pending load failed.
    Failed { message: String },
    /// Spinner animation tick.
    AnimationTick,
}

impl Intent for DeferredIntent {}
