use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoteResolution {
    #[default]
    Unresolved,
    Hit,
    Missed,
}

/// A note that has been spawned but not yet resolved.
///
/// Owned by the [`NoteField`](crate::play::NoteField) and removed
/// from the active set once its resolution leaves `Unresolved`. Ids
/// are unique within a field and increase in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveNote {
    pub id: u64,
    pub column: usize,
    /// Distance travelled from the spawn edge, in travel units.
    pub position: f32,
    pub resolution: NoteResolution,
}

impl ActiveNote {
    pub fn is_unresolved(&self) -> bool {
        self.resolution == NoteResolution::Unresolved
    }
}
