//! Loan calculator state.

use chrono::{Days, Local, NaiveDate};

use crate::mvi::UiState;

use super::params::{
    is_amount_in_range, is_period_offered, LoanParams, AMOUNT_MIN, DEFAULT_PERIOD_DAYS,
    INTEREST_RATE,
};

/// Terminal outcome of the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// The endpoint accepted the application and assigned it an id.
    Success { response_id: i64 },
    /// Validation or the network call failed.
    Failure { message: String },
}

/// Everything a shell needs to render the calculator.
///
/// Validity is derived, not enforced: shells may push out-of-range values
/// and the state will hold them until the next edit.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanState {
    pub amount: f64,
    pub period_days: i32,
    pub interest_rate: f64,
    /// True exactly while a submission request is in flight.
    pub is_loading: bool,
    pub submission_result: Option<SubmissionResult>,
}

impl Default for LoanState {
    fn default() -> Self {
        Self {
            amount: AMOUNT_MIN,
            period_days: DEFAULT_PERIOD_DAYS,
            interest_rate: INTEREST_RATE,
            is_loading: false,
            submission_result: None,
        }
    }
}

impl UiState for LoanState {}

impl LoanState {
    /// Principal plus interest.
    pub fn total_repayment(&self) -> f64 {
        self.amount * (1.0 + self.interest_rate)
    }

    /// Due date counted from today in the local timezone.
    pub fn repayment_date(&self) -> NaiveDate {
        self.repayment_date_from(Local::now().date_naive())
    }

    /// Due date counted from `start`. Falls back to `start` if the
    /// addition would leave the calendar's range.
    pub fn repayment_date_from(&self, start: NaiveDate) -> NaiveDate {
        let days = Days::new(u64::from(self.period_days.unsigned_abs()));
        let due = if self.period_days >= 0 {
            start.checked_add_days(days)
        } else {
            start.checked_sub_days(days)
        };
        due.unwrap_or(start)
    }

    /// Whether the current parameters may be submitted.
    pub fn is_valid(&self) -> bool {
        is_amount_in_range(self.amount) && is_period_offered(self.period_days)
    }

    /// The persisted subset of the state.
    pub fn params(&self) -> LoanParams {
        LoanParams::new(self.amount, self.period_days)
    }

    /// Check if a result is waiting to be acknowledged.
    pub fn has_result(&self) -> bool {
        self.submission_result.is_some()
    }

    /// Response id of a successful submission, if any.
    pub fn response_id(&self) -> Option<i64> {
        match self.submission_result {
            Some(SubmissionResult::Success { response_id }) => Some(response_id),
            _ => None,
        }
    }

    /// Failure message of the last submission, if any.
    pub fn failure_message(&self) -> Option<&str> {
        match &self.submission_result {
            Some(SubmissionResult::Failure { message }) => Some(message),
            _ => None,
        }
    }
}
