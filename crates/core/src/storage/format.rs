use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::state::AppState;

/// Identifier the snapshot is keyed by — the same key the mobile shell
/// uses for its local-storage entry.
pub const STORAGE_KEY: &str = "@fuel_tracker_data";

/// Current snapshot format version.
pub const CURRENT_VERSION: u16 = 1;

/// Envelope around the persisted state.
///
/// Layout (JSON):
/// ```text
/// { "storage_key": "@fuel_tracker_data", "version": 1, "state": { … } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    storage_key: String,
    version: u16,
    state: AppState,
}

/// Serialize a state into a complete snapshot string.
pub fn write_snapshot(state: &AppState) -> Result<String, CoreError> {
    let snapshot = Snapshot {
        storage_key: STORAGE_KEY.to_string(),
        version: CURRENT_VERSION,
        state: state.clone(),
    };
    serde_json::to_string(&snapshot)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
}

/// Parse a snapshot string, validating the envelope before handing the
/// state back.
pub fn read_snapshot(json: &str) -> Result<AppState, CoreError> {
    let snapshot: Snapshot = serde_json::from_str(json)
        .map_err(|e| CoreError::Deserialization(format!("Failed to parse snapshot: {e}")))?;

    if snapshot.storage_key != STORAGE_KEY {
        return Err(CoreError::InvalidFileFormat(format!(
            "Unknown storage key '{}' — not a fuel tracker snapshot",
            snapshot.storage_key
        )));
    }

    if snapshot.version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedVersion(snapshot.version));
    }

    Ok(snapshot.state)
}
