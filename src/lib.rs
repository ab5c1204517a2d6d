//! Loan calculator core: state, actions, reducer and store, plus the
//! network, persistence and configuration capabilities the store uses.

pub mod api;
pub mod config;
pub mod format;
pub mod loan;
pub mod logging;
pub mod mvi;
pub mod persistence;
