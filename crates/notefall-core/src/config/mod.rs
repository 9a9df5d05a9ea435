//! Gameplay tuning constants.
//!
//! This module groups the fixed parameters of the simulation:
//! - `field` - playfield geometry and note travel speed
//! - `judge` - timing window widths and judgment display duration
//! - `spawn` - procedural generation intervals and group sizes
//! - `beatmap` - beatmap-driven scheduling constants

/// Playfield geometry and note movement.
pub mod field {
    /// Number of playable columns.
    pub const COLUMN_COUNT: usize = 4;

    /// Height of a note in travel units.
    pub const NOTE_HEIGHT: f32 = 20.0;

    /// Note travel speed in units per second.
    pub const NOTE_SPEED: f32 = 1000.0;

    /// Travel position of the judgment line.
    pub const JUDGMENT_LINE: f32 = 500.0;

    /// Extra travel allowed past the judgment line before a note
    /// is auto-missed.
    pub const MISS_SLACK: f32 = NOTE_HEIGHT * 2.0;
}

/// Timing windows, as absolute distance from the judgment line.
///
/// The windows are strictly nested (Perfect inside Great inside Good)
/// and compared with strict `<`, so a distance exactly on a boundary
/// falls into the outer tier.
pub mod judge {
    /// Perfect window half-width.
    pub const PERFECT_WINDOW: f32 = 20.0;

    /// Great window half-width.
    pub const GREAT_WINDOW: f32 = 50.0;

    /// Good window half-width. Beyond this a key press has no effect.
    pub const GOOD_WINDOW: f32 = 100.0;

    /// How long a judgment stays on screen, in seconds.
    pub const DISPLAY_SECS: f32 = 0.5;
}

/// Procedural spawn generation.
pub mod spawn {
    /// Shortest pause between spawn groups, in seconds.
    pub const MIN_INTERVAL: f32 = 0.3;

    /// Longest pause between spawn groups, in seconds.
    pub const MAX_INTERVAL: f32 = 0.7;

    /// Smallest spawn group size.
    pub const MIN_GROUP: usize = 1;

    /// Largest spawn group size.
    pub const MAX_GROUP: usize = 3;
}

/// Beatmap-driven scheduling.
pub mod beatmap {
    /// Tolerance when matching song time against event timestamps,
    /// in seconds.
    pub const EVENT_EPSILON: f32 = 0.01;

    /// Seconds appended after the last event to form the total
    /// song length used by the end-of-song heuristic.
    pub const TRAILING_PAD: f32 = 5.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_strictly_nested() {
        assert!(judge::PERFECT_WINDOW < judge::GREAT_WINDOW);
        assert!(judge::GREAT_WINDOW < judge::GOOD_WINDOW);
    }

    #[test]
    fn test_spawn_interval_range() {
        assert!(spawn::MIN_INTERVAL < spawn::MAX_INTERVAL);
        assert!(spawn::MIN_GROUP >= 1);
        assert!(spawn::MAX_GROUP <= field::COLUMN_COUNT);
    }

    #[test]
    fn test_miss_slack_beyond_line() {
        assert!(field::MISS_SLACK > 0.0);
        assert!(field::JUDGMENT_LINE + field::MISS_SLACK > judge::GOOD_WINDOW);
    }
}
