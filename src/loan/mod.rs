//! Loan calculator core.
//!
//! # Architecture
//!
//! - `state.rs` - Loan state and derived values
//! - `action.rs` - User/system actions
//! - `reducer.rs` - Pure state transitions
//! - `effects.rs` - Persistence computed from state diffs
//! - `store.rs` - State owner and submission orchestration
//! - `params.rs` - Bounds and slider value helpers

mod action;
mod effects;
mod params;
mod reducer;
mod state;
mod store;

pub use action::LoanAction;
pub use effects::persist_effect;
pub use params::{
    is_amount_in_range, is_period_offered, period_at, period_index, snap_amount, LoanParams,
    AMOUNT_MAX, AMOUNT_MIN, AMOUNT_STEP, DEFAULT_PERIOD_DAYS, INTEREST_RATE, PERIOD_OPTIONS,
};
pub use reducer::LoanReducer;
pub use state::{LoanState, SubmissionResult};
pub use store::{LoanStore, StorePhase, INVALID_PARAMS_MESSAGE};
