use super::intent::FeedIntent;
use super::state::{FeedPhase, FeedState};
use crate::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::FetchStarted => FeedState {
                phase: FeedPhase::Fetching,
                pending: state.pending.saturating_add(1),
            },
            // Completions apply in arrival order; whichever lands last
            // decides the terminal phase.
            FeedIntent::FetchSucceeded => FeedState {
                phase: FeedPhase::Ready,
                pending: state.pending.saturating_sub(1),
            },
            FeedIntent::FetchFailed => FeedState {
                phase: FeedPhase::Errored,
                pending: state.pending.saturating_sub(1),
            },
        }
    }
}
