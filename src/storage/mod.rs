//! Project file persistence.
//!
//! Projects are JSON files holding the building structure and the persisted
//! selection flags. In-session ids are not part of the format: every load
//! assigns fresh ones, which is why callers reconcile selections through
//! structural-key snapshots rather than ids.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, LoadError};
use crate::model::Building;

/// Reads a project file and assigns in-session ids to the loaded tree.
///
/// # Errors
///
/// Returns [`LoadError::FileRead`] if the file cannot be read.
/// Returns [`LoadError::InvalidProject`] if the JSON is malformed.
pub fn load_project<P: AsRef<Path>>(path: P) -> Result<Building, LoadError> {
    let content = std::fs::read_to_string(&path).map_err(|source| LoadError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    let mut building: Building = serde_json::from_str(&content)?;
    building.assign_ids();
    Ok(building)
}

/// Writes a project file.
///
/// Callers are expected to have committed the live selection stores first,
/// so the room flags reflect what the user sees.
pub fn save_project<P: AsRef<Path>>(building: &Building, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(building)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
