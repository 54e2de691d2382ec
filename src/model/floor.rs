use serde::{Deserialize, Serialize};

use super::Space;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorType {
    Residential,
    Office,
    Public,
    Mixed,
    Street,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    /// Free text, not necessarily numeric ("1 этаж", "Подвал", "Этаж 3").
    pub label: String,
    pub kind: FloorType,
    /// Index into [`Building::sections`](super::Building::sections).
    /// `None` means the building has no sections defined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_index: Option<usize>,
    /// Ordering within the section.
    pub position: usize,
    #[serde(default)]
    pub spaces: Vec<Space>,
}

impl Floor {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        kind: FloorType,
        section_index: Option<usize>,
        position: usize,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            section_index,
            position,
            spaces: Vec::new(),
        }
    }

    pub fn space_mut(&mut self, id: super::SpaceId) -> Option<&mut Space> {
        self.spaces.iter_mut().find(|s| s.id == id)
    }
}
