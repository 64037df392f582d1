//! Reducer for the item store.

use crate::ui::mvi::Reducer;

use super::intent::ContentsIntent;
use super::state::{ContentsState, FetchStatus, DEFAULT_FETCH_ERROR};

/// Reducer for fetch lifecycle transitions.
///
/// Results only land while a fetch is in flight; a late or duplicate
/// result is ignored so each fetch resolves exactly once.
pub struct ContentsReducer;

impl Reducer for ContentsReducer {
    type State = ContentsState;
    type Intent = ContentsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContentsIntent::FetchStarted => ContentsState {
                status: FetchStatus::Loading,
                error: None,
                ..state
            },

            ContentsIntent::FetchSucceeded { items } => match state.status {
                FetchStatus::Loading => ContentsState {
                    status: FetchStatus::Succeeded,
                    data: items,
                    error: None,
                    generation: state.generation + 1,
                },
                _ => state,
            },

            ContentsIntent::FetchFailed { message } => match state.status {
                FetchStatus::Loading => {
                    let message = if message.trim().is_empty() {
                        DEFAULT_FETCH_ERROR.to_string()
                    } else {
                        message
                    };
                    ContentsState {
                        status: FetchStatus::Failed,
                        error: Some(message),
                        ..state
                    }
                }
                _ => state,
            },
        }
    }
}
