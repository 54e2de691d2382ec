pub mod rules;
pub mod snapshot;
pub mod store;

pub use rules::AutoSelector;
pub use snapshot::{restore_selections, save_selections, Snapshot};
pub use store::SelectionStore;

use crate::model::SelectionKind;

/// The reporting subsystems that track per-room inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Radiation,
    Microclimate,
    Noise,
    Ventilation,
}

impl Subsystem {
    pub const ALL: [Subsystem; 4] = [
        Subsystem::Radiation,
        Subsystem::Microclimate,
        Subsystem::Noise,
        Subsystem::Ventilation,
    ];

    /// The persisted room flag this subsystem commits to. Rooms carry three
    /// flags; noise and ventilation share the generic one.
    #[must_use]
    pub fn kind(self) -> SelectionKind {
        match self {
            Subsystem::Radiation => SelectionKind::Radiation,
            Subsystem::Microclimate => SelectionKind::Microclimate,
            Subsystem::Noise | Subsystem::Ventilation => SelectionKind::General,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Subsystem::Radiation => "Radiation",
            Subsystem::Microclimate => "Microclimate",
            Subsystem::Noise => "Noise",
            Subsystem::Ventilation => "Ventilation",
        }
    }
}
