use parking_lot::Mutex;

use crate::loan::LoanParams;

use super::{LoanParamsStore, PersistenceError};

/// In-process store. Nothing survives the process; used by tests and by
/// shells that run without a writable data directory.
#[derive(Debug, Default)]
pub struct MemoryParamsStore {
    saved: Mutex<Option<LoanParams>>,
    writes: Mutex<usize>,
}

impl MemoryParamsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pair already saved.
    pub fn with_params(params: LoanParams) -> Self {
        Self {
            saved: Mutex::new(Some(params)),
            writes: Mutex::new(0),
        }
    }

    /// Number of successful `save_params` calls.
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }
}

impl LoanParamsStore for MemoryParamsStore {
    fn save_params(&self, params: LoanParams) -> Result<(), PersistenceError> {
        *self.saved.lock() = Some(params);
        *self.writes.lock() += 1;
        Ok(())
    }

    fn load_params(&self) -> Result<Option<LoanParams>, PersistenceError> {
        Ok(self.saved.lock().filter(|p| p.amount != 0.0))
    }
}
