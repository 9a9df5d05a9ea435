use serde::{Deserialize, Serialize};

/// A single timed note event from a beatmap file.
///
/// Immutable once parsed. Events are ordered by `time` ascending;
/// ties keep their original file order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatmapEvent {
    /// Seconds from the start of the song.
    pub time: f32,
    /// Target column, in `0..COLUMN_COUNT`.
    pub column: usize,
}

/// A parsed beatmap: song metadata plus the time-sorted event list.
///
/// Built once per load and replaced wholesale on reload, never
/// mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beatmap {
    pub title: String,
    pub music_ref: String,
    /// Shift applied to all comparisons between elapsed time and
    /// event time, in seconds.
    pub offset_secs: f32,
    /// Max event time plus the trailing pad. Only used as an
    /// end-of-song heuristic.
    pub total_length_secs: f32,
    pub events: Vec<BeatmapEvent>,
}
