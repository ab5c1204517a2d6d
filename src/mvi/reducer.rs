//! Reducer trait.

use super::action::Action;
use super::state::UiState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action, &Env) -> State.
/// `Env` carries read-only inputs gathered by the caller before reducing;
/// the reducer itself never performs I/O.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Read-only inputs available to the reducer.
    type Env;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action, env: &Self::Env) -> Self::State;
}
