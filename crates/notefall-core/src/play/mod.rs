//! In-flight note tracking, spawning, judgment, and scoring.

mod field;
mod judge;
mod note;
mod spawn;
mod stats;

pub use field::NoteField;
pub use judge::{JudgeTier, classify, score_delta};
pub use note::{ActiveNote, NoteResolution};
pub use spawn::{SpawnMode, SpawnScheduler};
pub use stats::SessionStats;
