use crate::ui::mvi::UiState;

/// Phase of a deferred view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeferredState {
    /// Not mounted yet.
    #[default]
    Uninitialized,

    /// Waiting for the module; the placeholder is shown.
    Loading {
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// Module loaded and content built.
    Ready,

    /// Module failed to load. Terminal; the placeholder stays up.
    Failed {
        /// Error message from the load.
        error: String,
    },
}

impl UiState for DeferredState {}

impl DeferredState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Everything short of `Ready` renders the placeholder.
    pub fn shows_placeholder(&self) -> bool {
        !self.is_ready()
    }

    pub fn animation_tick(&self) -> u8 {
        match self {
            Self::Loading { animation_tick } => *animation_tick,
            _ => 0,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_is_default() {
        assert_eq!(DeferredState::default(), DeferredState::Uninitialized);
    }

    #[test]
    fn only_ready_hides_placeholder() {
        assert!(DeferredState::Uninitialized.shows_placeholder());
        assert!(DeferredState::Loading { animation_tick: 0 }.shows_placeholder());
        assert!(DeferredState::Failed {
            error: "boom".into()
        }
        .shows_placeholder());
        assert!(!DeferredState::Ready.shows_placeholder());
    }

    #[test]
    fn animation_tick_only_while_loading() {
        assert_eq!(DeferredState::Loading { animation_tick: 4 }.animation_tick(), 4);
        assert_eq!(DeferredState::Ready.animation_tick(), 0);
    }

    #[test]
    fn error_message_only_when_failed() {
        assert_eq!(DeferredState::Ready.error_message(), None);
        assert_eq!(
            DeferredState::Failed {
                error: "offline".into()
            }
            .error_message(),
            Some("offline")
        );
    }
}
