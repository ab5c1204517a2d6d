//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use loancalc::api::{HttpLoanApi, LoanApi};
use loancalc::config::ApiConfig;
use loancalc::loan::LoanStore;
use loancalc::persistence::{LoanParamsStore, MemoryParamsStore};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::runtime::Handle;

use mock_backend::MockBackend;

/// API settings pointed at the mock server.
pub fn api_config(backend: &MockBackend) -> ApiConfig {
    ApiConfig {
        base_url: backend.base_url(),
        endpoint: "/posts".to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// HTTP client pointed at the mock server.
pub fn http_api(backend: &MockBackend) -> HttpLoanApi {
    HttpLoanApi::new(&api_config(backend)).expect("Failed to build client")
}

/// Store wired to the mock server with in-memory persistence.
///
/// Must be called from inside a Tokio runtime.
pub fn store_with(backend: &MockBackend) -> (LoanStore, Arc<MemoryParamsStore>) {
    let params = Arc::new(MemoryParamsStore::new());
    let store = LoanStore::new(
        Arc::new(http_api(backend)),
        params.clone() as Arc<dyn LoanParamsStore>,
        Handle::current(),
    );
    (store, params)
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
