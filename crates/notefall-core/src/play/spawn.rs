use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::beatmap::Beatmap;
use crate::config::beatmap::EVENT_EPSILON;
use crate::config::field::COLUMN_COUNT;
use crate::config::spawn::{MAX_GROUP, MAX_INTERVAL, MIN_GROUP, MIN_INTERVAL};
use crate::play::field::NoteField;

/// How new notes enter the field. Selected once at load time.
#[derive(Debug)]
pub enum SpawnMode {
    /// Consume a time-sorted beatmap event sequence via a cursor.
    /// Each event spawns exactly one note, at most once.
    Beatmap { beatmap: Beatmap, cursor: usize },
    /// Endless mode: fire a random column pattern each time the
    /// countdown passes a uniformly redrawn interval.
    Procedural { timer: f32, interval: f32 },
}

/// Decides, each tick, whether new notes enter the note field.
#[derive(Debug)]
pub struct SpawnScheduler {
    mode: SpawnMode,
    rng: StdRng,
}

impl SpawnScheduler {
    pub fn beatmap_driven(beatmap: Beatmap) -> Self {
        Self {
            mode: SpawnMode::Beatmap { beatmap, cursor: 0 },
            rng: StdRng::from_entropy(),
        }
    }

    pub fn procedural() -> Self {
        Self::procedural_with_rng(StdRng::from_entropy())
    }

    /// Procedural mode with a fixed seed, for deterministic runs.
    pub fn procedural_seeded(seed: u64) -> Self {
        Self::procedural_with_rng(StdRng::seed_from_u64(seed))
    }

    fn procedural_with_rng(mut rng: StdRng) -> Self {
        let interval = rng.gen_range(MIN_INTERVAL..MAX_INTERVAL);
        Self {
            mode: SpawnMode::Procedural {
                timer: 0.0,
                interval,
            },
            rng,
        }
    }

    /// Feed due notes into the field for this tick. `elapsed` is the
    /// session clock; `dt` is this tick's delta. Returns the number
    /// of notes spawned.
    pub fn tick(&mut self, elapsed: f32, dt: f32, field: &mut NoteField) -> usize {
        match &mut self.mode {
            SpawnMode::Beatmap { beatmap, cursor } => {
                let song_time = elapsed - beatmap.offset_secs;
                let mut spawned = 0;
                while let Some(event) = beatmap.events.get(*cursor) {
                    if event.time > song_time + EVENT_EPSILON {
                        break;
                    }
                    field.spawn(event.column);
                    *cursor += 1;
                    spawned += 1;
                }
                spawned
            }
            SpawnMode::Procedural { timer, interval } => {
                *timer += dt;
                if *timer <= *interval {
                    return 0;
                }

                let group = self.rng.gen_range(MIN_GROUP..=MAX_GROUP);
                let columns = pattern_for_group(group, &mut self.rng);
                debug!("Procedural spawn: group {} -> {:?}", group, columns);
                for &column in &columns {
                    field.spawn(column);
                }

                *timer = 0.0;
                *interval = self.rng.gen_range(MIN_INTERVAL..MAX_INTERVAL);
                columns.len()
            }
        }
    }

    pub fn is_beatmap_driven(&self) -> bool {
        matches!(self.mode, SpawnMode::Beatmap { .. })
    }

    /// True once every beatmap event has been consumed. Procedural
    /// mode never exhausts.
    pub fn is_exhausted(&self) -> bool {
        match &self.mode {
            SpawnMode::Beatmap { beatmap, cursor } => *cursor >= beatmap.events.len(),
            SpawnMode::Procedural { .. } => false,
        }
    }

    pub fn beatmap(&self) -> Option<&Beatmap> {
        match &self.mode {
            SpawnMode::Beatmap { beatmap, .. } => Some(beatmap),
            SpawnMode::Procedural { .. } => None,
        }
    }
}

/// Column pattern for a spawn group.
///
/// Size 1: one uniform random column. Size 2: 50/50 between two
/// horizontally adjacent columns (uniform start) and the two
/// outermost columns. Size 3: a shuffled prefix of all columns.
fn pattern_for_group(group: usize, rng: &mut StdRng) -> Vec<usize> {
    match group {
        2 => {
            if rng.gen_range(0..2) == 0 {
                let start = rng.gen_range(0..COLUMN_COUNT - 1);
                vec![start, start + 1]
            } else {
                vec![0, COLUMN_COUNT - 1]
            }
        }
        3 => {
            let mut columns: Vec<usize> = (0..COLUMN_COUNT).collect();
            columns.shuffle(rng);
            columns.truncate(3);
            columns
        }
        _ => vec![rng.gen_range(0..COLUMN_COUNT)],
    }
}
