use crate::error::ExportError;
use crate::model::Building;
use crate::select::Subsystem;
use std::fs::File;
use std::path::Path;

/// Writes the room report for one subsystem: one row per room whose
/// persisted flag for that subsystem is set. Commit the live store first.
pub fn export_csv<P: AsRef<Path>>(
    building: &Building,
    subsystem: Subsystem,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Section", "Floor", "Space", "Room", "Volume"])?;

    let kind = subsystem.kind();
    for room_path in building.rooms() {
        if !room_path.room.flag(kind) {
            continue;
        }
        let section = building
            .section_name(room_path.section_index)
            .unwrap_or_default();
        let volume = room_path
            .room
            .volume
            .map(|v| format!("{v:.1}"))
            .unwrap_or_default();
        writer.write_record([
            section,
            room_path.floor.label.as_str(),
            room_path.space.identifier.as_str(),
            room_path.room.name.as_str(),
            volume.as_str(),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
