//! Persistence of the last-edited loan parameters.
//!
//! Shells only ever need two scalars across launches, so the capability is
//! deliberately narrow: save the pair, load the pair.

mod error;
mod file;
mod memory;

pub use error::PersistenceError;
pub use file::FileParamsStore;
pub use memory::MemoryParamsStore;

use crate::loan::LoanParams;

/// Key-value storage for the persisted loan parameters.
pub trait LoanParamsStore: Send + Sync {
    /// Overwrite the stored pair.
    fn save_params(&self, params: LoanParams) -> Result<(), PersistenceError>;

    /// Read the stored pair. `Ok(None)` when nothing was saved, including
    /// a stored amount of zero.
    fn load_params(&self) -> Result<Option<LoanParams>, PersistenceError>;
}
