use serde::{Deserialize, Serialize};

use crate::loan::LoanState;

/// Request body sent to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub amount: f64,
    pub period: i32,
    pub total_repayment: f64,
}

impl LoanApplication {
    /// Build the request from a state snapshot.
    pub fn from_state(state: &LoanState) -> Self {
        Self {
            amount: state.amount,
            period: state.period_days,
            total_repayment: state.total_repayment(),
        }
    }
}

/// Response body: the submitted fields plus the assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationResponse {
    pub id: i64,
    pub amount: f64,
    pub period: i32,
    pub total_repayment: f64,
}
