//! Side effects derived from a completed reduction.
//!
//! The reducer stays pure; the store runs these after every dispatch,
//! comparing the state before and after.

use super::action::LoanAction;
use super::params::LoanParams;
use super::state::LoanState;

/// Parameters to persist after `action` turned `old` into `new`.
///
/// Only user edits are saved. Restoring from storage changes the same
/// fields but writing them straight back would be redundant.
pub fn persist_effect(action: &LoanAction, old: &LoanState, new: &LoanState) -> Option<LoanParams> {
    if !action.is_param_edit() {
        return None;
    }
    let params = new.params();
    (old.params() != params).then_some(params)
}
