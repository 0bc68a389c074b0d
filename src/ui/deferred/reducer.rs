use crate::ui::deferred::intent::DeferredIntent;
use crate::ui::deferred::state::DeferredState;
use crate::ui::mvi::Reducer;
use crate::ui::placeholder::SPINNER_FRAME_COUNT;

pub struct DeferredReducer;

impl Reducer for DeferredReducer {
    type State = DeferredState;
    type Intent = DeferredIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeferredIntent::Mount { already_loaded } => match state {
                DeferredState::Uninitialized if already_loaded => DeferredState::Ready,
                DeferredState::Uninitialized => DeferredState::Loading { animation_tick: 0 },
                // Mounting twice is a no-op
                other => other,
            },
            DeferredIntent::Loaded => match state {
                DeferredState::Loading { .. } => DeferredState::Ready,
                other => other,
            },
            DeferredIntent::Failed { message } => match state {
                DeferredState::Loading { .. } => DeferredState::Failed { error: message },
                other => other,
            },
            DeferredIntent::AnimationTick => match state {
                DeferredState::Loading { animation_tick } => DeferredState::Loading {
                    animation_tick: (animation_tick % SPINNER_FRAME_COUNT + 1)
                        % SPINNER_FRAME_COUNT,
                },
                other => other,
            },
        }
    }
}
