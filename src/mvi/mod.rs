//! Unidirectional data flow primitives.
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Shell (Android / iOS / CLI)
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot the shell renders from
//! - **Action**: user interactions and system events (API responses)
//! - **Reducer**: pure function that derives the next state

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::UiState;
