use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::loan::{LoanParams, DEFAULT_PERIOD_DAYS};

use super::{LoanParamsStore, PersistenceError};

/// TOML-file store for the loan parameters.
///
/// Writes take an exclusive lock on `{path}.lock` and replace the file via
/// a temporary sibling and rename, so readers never see a partial file.
#[derive(Debug, Clone)]
pub struct FileParamsStore {
    path: PathBuf,
}

impl FileParamsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/loancalc/params.toml`, or the current directory when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("loancalc").join("params.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn lock(&self) -> Result<File, PersistenceError> {
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.sibling(".lock"))
            .map_err(|e| self.io_error(e))?;
        lock.lock_exclusive().map_err(|e| self.io_error(e))?;
        Ok(lock)
    }
}

impl LoanParamsStore for FileParamsStore {
    fn save_params(&self, params: LoanParams) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let content = toml::to_string(&params)?;

        // Held until the rename completes; released on drop.
        let _lock = self.lock()?;
        let tmp = self.sibling(".tmp");
        fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            amount = params.amount,
            period = params.period_days,
            "Loan params saved"
        );
        Ok(())
    }

    fn load_params(&self) -> Result<Option<LoanParams>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let stored: LoanParams = toml::from_str(&content).map_err(|e| PersistenceError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        if stored.amount == 0.0 {
            return Ok(None);
        }

        let period_days = if stored.period_days == 0 {
            DEFAULT_PERIOD_DAYS
        } else {
            stored.period_days
        };
        Ok(Some(LoanParams::new(stored.amount, period_days)))
    }
}
