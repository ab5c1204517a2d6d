//! Loan application submission.
//!
//! One capability: POST the application as JSON, decode the echoed record.
//! Anything that satisfies [`LoanApi`] can stand in for the HTTP client.

mod client;
mod error;
mod types;

pub use client::{HttpLoanApi, LoanApi};
pub use error::ApiError;
pub use types::{LoanApplication, LoanApplicationResponse};
