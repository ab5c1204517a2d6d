//! Actions accepted by the loan store.

use crate::mvi::Action;

/// Every event that may change [`LoanState`](super::LoanState).
#[derive(Debug, Clone, PartialEq)]
pub enum LoanAction {
    /// User picked a new principal.
    SetAmount(f64),
    /// User picked a new repayment term, in days.
    SetPeriod(i32),
    /// User asked to send the application. Intercepted by the store.
    SubmitApplication,
    /// A submission request has been issued.
    SubmissionStarted,
    /// The endpoint accepted the application.
    SubmissionSuccess(i64),
    /// Validation or the request failed.
    SubmissionFailure(String),
    /// User acknowledged the result.
    DismissResult,
    /// Restore the last persisted amount and period.
    LoadSavedState,
}

impl Action for LoanAction {
    fn name(&self) -> &'static str {
        match self {
            Self::SetAmount(_) => "set_amount",
            Self::SetPeriod(_) => "set_period",
            Self::SubmitApplication => "submit_application",
            Self::SubmissionStarted => "submission_started",
            Self::SubmissionSuccess(_) => "submission_success",
            Self::SubmissionFailure(_) => "submission_failure",
            Self::DismissResult => "dismiss_result",
            Self::LoadSavedState => "load_saved_state",
        }
    }
}

impl LoanAction {
    /// Check if this action edits a loan parameter.
    pub fn is_param_edit(&self) -> bool {
        matches!(self, Self::SetAmount(_) | Self::SetPeriod(_))
    }
}
