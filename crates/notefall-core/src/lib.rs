pub mod backend;
pub mod beatmap;
pub mod config;
pub mod error;
pub mod export;
pub mod play;
pub mod session;

pub use backend::{AudioBackend, NullAudio};
pub use beatmap::{Beatmap, BeatmapEvent};
pub use error::{Error, Result};
pub use play::{
    ActiveNote, JudgeTier, NoteField, NoteResolution, SessionStats, SpawnMode, SpawnScheduler,
};
pub use session::{InputEvent, JudgmentDisplay, Session, SessionPhase};
