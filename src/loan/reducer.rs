//! Reducer for the loan calculator.

use crate::mvi::Reducer;

use super::action::LoanAction;
use super::params::{LoanParams, DEFAULT_PERIOD_DAYS};
use super::state::{LoanState, SubmissionResult};

/// Reducer for loan state transitions.
///
/// `Env` is the persisted parameter snapshot. The store reads it only for
/// [`LoanAction::LoadSavedState`]; every other action ignores it.
pub struct LoanReducer;

impl Reducer for LoanReducer {
    type State = LoanState;
    type Action = LoanAction;
    type Env = Option<LoanParams>;

    fn reduce(state: Self::State, action: Self::Action, saved: &Self::Env) -> Self::State {
        match action {
            LoanAction::SetAmount(amount) => LoanState {
                amount,
                submission_result: None,
                ..state
            },

            LoanAction::SetPeriod(period_days) => LoanState {
                period_days,
                submission_result: None,
                ..state
            },

            LoanAction::SubmissionStarted => LoanState {
                is_loading: true,
                submission_result: None,
                ..state
            },

            LoanAction::SubmissionSuccess(response_id) => LoanState {
                is_loading: false,
                submission_result: Some(SubmissionResult::Success { response_id }),
                ..state
            },

            LoanAction::SubmissionFailure(message) => LoanState {
                is_loading: false,
                submission_result: Some(SubmissionResult::Failure { message }),
                ..state
            },

            LoanAction::DismissResult => LoanState {
                submission_result: None,
                ..state
            },

            LoanAction::LoadSavedState => match saved {
                // A zero amount means nothing was ever saved.
                Some(params) if params.amount != 0.0 => LoanState {
                    amount: params.amount,
                    period_days: if params.period_days == 0 {
                        DEFAULT_PERIOD_DAYS
                    } else {
                        params.period_days
                    },
                    ..state
                },
                _ => state,
            },

            // The store intercepts submissions; reaching here must not change anything.
            LoanAction::SubmitApplication => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: LoanState, action: LoanAction) -> LoanState {
        LoanReducer::reduce(state, action, &None)
    }

    fn with_result(result: SubmissionResult) -> LoanState {
        LoanState {
            submission_result: Some(result),
            ..LoanState::default()
        }
    }

    #[test]
    fn set_amount_updates_and_clears_result() {
        let state = with_result(SubmissionResult::Success { response_id: 1 });
        let new_state = reduce(state, LoanAction::SetAmount(15_000.0));
        assert_eq!(new_state.amount, 15_000.0);
        assert!(new_state.submission_result.is_none());
    }

    #[test]
    fn set_period_updates_and_clears_result() {
        let state = with_result(SubmissionResult::Failure {
            message: "old".into(),
        });
        let new_state = reduce(state, LoanAction::SetPeriod(21));
        assert_eq!(new_state.period_days, 21);
        assert!(new_state.submission_result.is_none());
    }

    #[test]
    fn set_amount_keeps_out_of_range_value() {
        let new_state = reduce(LoanState::default(), LoanAction::SetAmount(1.0));
        assert_eq!(new_state.amount, 1.0);
        assert!(!new_state.is_valid());
    }

    #[test]
    fn submission_started_sets_loading_and_clears_result() {
        let state = with_result(SubmissionResult::Success { response_id: 123 });
        let new_state = reduce(state, LoanAction::SubmissionStarted);
        assert!(new_state.is_loading);
        assert!(new_state.submission_result.is_none());
    }

    #[test]
    fn started_then_success() {
        let state = reduce(LoanState::default(), LoanAction::SubmissionStarted);
        let state = reduce(state, LoanAction::SubmissionSuccess(7));
        assert!(!state.is_loading);
        assert_eq!(
            state.submission_result,
            Some(SubmissionResult::Success { response_id: 7 })
        );
    }

    #[test]
    fn started_then_failure() {
        let state = reduce(LoanState::default(), LoanAction::SubmissionStarted);
        let state = reduce(state, LoanAction::SubmissionFailure("x".into()));
        assert!(!state.is_loading);
        assert_eq!(
            state.submission_result,
            Some(SubmissionResult::Failure {
                message: "x".into()
            })
        );
    }

    #[test]
    fn dismiss_clears_result() {
        let state = with_result(SubmissionResult::Success { response_id: 789 });
        let new_state = reduce(state, LoanAction::DismissResult);
        assert!(new_state.submission_result.is_none());
    }

    #[test]
    fn dismiss_without_result_is_noop() {
        let state = LoanState {
            amount: 22_000.0,
            period_days: 28,
            ..LoanState::default()
        };
        assert_eq!(reduce(state.clone(), LoanAction::DismissResult), state);
    }

    #[test]
    fn submit_application_is_noop() {
        let state = with_result(SubmissionResult::Success { response_id: 5 });
        assert_eq!(reduce(state.clone(), LoanAction::SubmitApplication), state);
    }

    #[test]
    fn load_saved_state_overwrites_params() {
        let saved = Some(LoanParams::new(30_000.0, 28));
        let new_state =
            LoanReducer::reduce(LoanState::default(), LoanAction::LoadSavedState, &saved);
        assert_eq!(new_state.amount, 30_000.0);
        assert_eq!(new_state.period_days, 28);
    }

    #[test]
    fn load_saved_state_defaults_missing_period() {
        let saved = Some(LoanParams::new(12_000.0, 0));
        let state = LoanState {
            period_days: 7,
            ..LoanState::default()
        };
        let new_state = LoanReducer::reduce(state, LoanAction::LoadSavedState, &saved);
        assert_eq!(new_state.amount, 12_000.0);
        assert_eq!(new_state.period_days, 14);
    }

    #[test]
    fn load_saved_state_ignores_empty_snapshot() {
        let state = LoanState {
            amount: 8_000.0,
            ..LoanState::default()
        };
        assert_eq!(
            LoanReducer::reduce(state.clone(), LoanAction::LoadSavedState, &None),
            state
        );
        assert_eq!(
            LoanReducer::reduce(
                state.clone(),
                LoanAction::LoadSavedState,
                &Some(LoanParams::new(0.0, 21))
            ),
            state
        );
    }

    #[test]
    fn saved_snapshot_ignored_by_other_actions() {
        let saved = Some(LoanParams::new(40_000.0, 7));
        let new_state =
            LoanReducer::reduce(LoanState::default(), LoanAction::DismissResult, &saved);
        assert_eq!(new_state, LoanState::default());
    }
}
