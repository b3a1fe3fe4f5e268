use crate::errors::CoreError;
use crate::models::state::AppState;

use super::format;

/// High-level storage operations: save/load the application state
/// to/from snapshot strings or files.
pub struct StorageManager;

impl StorageManager {
    /// Serialize the state to a snapshot string (portable, platform-independent).
    ///
    /// Flow: AppState → JSON envelope with storage key + version
    pub fn save_to_string(state: &AppState) -> Result<String, CoreError> {
        format::write_snapshot(state)
    }

    /// Parse a snapshot string back into application state.
    /// Use this for WASM / mobile shells where the frontend owns storage.
    pub fn load_from_str(json: &str) -> Result<AppState, CoreError> {
        format::read_snapshot(json)
    }

    /// Save the state to a snapshot file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(state: &AppState, path: &str) -> Result<(), CoreError> {
        let json = Self::save_to_string(state)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load state from a snapshot file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<AppState, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::load_from_str(&json)
    }
}
