use std::path::{Path, PathBuf};

use strum::IntoStaticStr;
use tracing::{info, warn};

use crate::backend::AudioBackend;
use crate::beatmap::Beatmap;
use crate::config::field::COLUMN_COUNT;
use crate::config::judge::DISPLAY_SECS;
use crate::play::{JudgeTier, NoteField, SessionStats, SpawnScheduler, classify};

/// Where the session gets its notes when (re)loading.
#[derive(Debug, Clone)]
enum NoteSource {
    /// Re-parse this file on every reload.
    File(PathBuf),
    /// An already-parsed beatmap, reused as-is on reload.
    Fixed(Beatmap),
    /// Endless procedural play.
    Endless,
}

/// Lifecycle of a play session.
///
/// `Idle` accepts only start (and reload); `Running` ticks the
/// simulation and accepts key events and reload; `Ended` accepts only
/// a restart. Beatmap-driven play is the only path into `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IntoStaticStr)]
pub enum SessionPhase {
    #[default]
    Idle,
    Running,
    Ended,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Input events delivered once per tick, in arrival order, strictly
/// before that tick's movement update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(usize),
    KeyUp(usize),
    Start,
    Reload,
    /// Handled by the shell; the core ignores it.
    Quit,
}

/// Transient on-screen judgment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JudgmentDisplay {
    pub tier: JudgeTier,
    pub remaining_secs: f32,
}

/// One play session: game clock, note field, scheduler, statistics,
/// and the audio collaborator.
///
/// Everything here is owned by the single session loop; there is no
/// shared mutable state.
pub struct Session<A: AudioBackend> {
    phase: SessionPhase,
    clock: f32,
    field: NoteField,
    scheduler: SpawnScheduler,
    stats: SessionStats,
    display: Option<JudgmentDisplay>,
    keys_down: [bool; COLUMN_COUNT],
    source: NoteSource,
    /// Pristine parsed beatmap, if one loaded. Restart builds a
    /// fresh scheduler from this without touching the disk.
    loaded: Option<Beatmap>,
    seed: Option<u64>,
    audio: A,
}

impl<A: AudioBackend> Session<A> {
    /// Build a session from a beatmap file, falling back to
    /// procedural mode when the file is unreadable or not a valid
    /// beatmap. Loading never blocks the session from starting.
    pub fn from_file<P: AsRef<Path>>(path: P, audio: A) -> Self {
        let path = path.as_ref().to_path_buf();
        let loaded = match Beatmap::load(&path) {
            Ok(beatmap) => Some(beatmap),
            Err(e) => {
                warn!("Beatmap not loaded ({}), using procedural mode", e);
                None
            }
        };
        Self::with_source(NoteSource::File(path), loaded, None, audio)
    }

    /// Build a session from an already-parsed beatmap.
    pub fn from_beatmap(beatmap: Beatmap, audio: A) -> Self {
        Self::with_source(
            NoteSource::Fixed(beatmap.clone()),
            Some(beatmap),
            None,
            audio,
        )
    }

    /// Endless procedural session.
    pub fn endless(audio: A) -> Self {
        Self::with_source(NoteSource::Endless, None, None, audio)
    }

    /// Endless procedural session with a fixed RNG seed.
    pub fn endless_seeded(seed: u64, audio: A) -> Self {
        Self::with_source(NoteSource::Endless, None, Some(seed), audio)
    }

    fn with_source(
        source: NoteSource,
        loaded: Option<Beatmap>,
        seed: Option<u64>,
        audio: A,
    ) -> Self {
        let scheduler = build_scheduler(&loaded, seed);
        Self {
            phase: SessionPhase::Idle,
            clock: 0.0,
            field: NoteField::new(),
            scheduler,
            stats: SessionStats::new(),
            display: None,
            keys_down: [false; COLUMN_COUNT],
            source,
            loaded,
            seed,
            audio,
        }
    }

    /// Dispatch one input event according to the current phase.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(column) => self.handle_key_down(column),
            InputEvent::KeyUp(column) => {
                if let Some(state) = self.keys_down.get_mut(column) {
                    *state = false;
                }
            }
            InputEvent::Start => match self.phase {
                SessionPhase::Idle | SessionPhase::Ended => self.start(),
                SessionPhase::Running => {}
            },
            InputEvent::Reload => match self.phase {
                SessionPhase::Idle | SessionPhase::Running => self.reload(),
                SessionPhase::Ended => {}
            },
            InputEvent::Quit => {}
        }
    }

    /// Advance the simulation by one tick. Only the Running phase
    /// ticks; spawning happens before movement, movement before
    /// purge.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != SessionPhase::Running {
            return;
        }

        self.clock += dt;

        self.scheduler.tick(self.clock, dt, &mut self.field);

        let missed = self.field.advance(dt);
        for _ in 0..missed {
            self.stats.record(JudgeTier::Miss);
            self.show_judgment(JudgeTier::Miss);
        }

        self.field.purge_resolved();

        if let Some(display) = &mut self.display {
            display.remaining_secs -= dt;
            if display.remaining_secs <= 0.0 {
                self.display = None;
            }
        }

        if self.song_finished() {
            info!(
                "Session ended: score {} max combo {} accuracy {:.2}%",
                self.stats.score,
                self.stats.max_combo,
                self.stats.accuracy()
            );
            self.phase = SessionPhase::Ended;
        }
    }

    /// Start (or restart) a run: statistics, field, clock, and
    /// scheduler are replaced wholesale.
    fn start(&mut self) {
        self.reset_run();
        self.phase = SessionPhase::Running;
        if let Some(beatmap) = &self.loaded {
            self.audio.play(&beatmap.music_ref);
        }
        info!("Session started ({})", self.mode_label());
    }

    /// Stop the run, discard all in-flight notes and timers in one
    /// step, re-resolve the note source, and return to Idle.
    fn reload(&mut self) {
        self.audio.stop();

        self.loaded = match &self.source {
            NoteSource::File(path) => match Beatmap::load(path) {
                Ok(beatmap) => {
                    info!("Reloaded beatmap \"{}\"", beatmap.title);
                    Some(beatmap)
                }
                Err(e) => {
                    warn!("Beatmap reload failed ({}), using procedural mode", e);
                    None
                }
            },
            NoteSource::Fixed(beatmap) => Some(beatmap.clone()),
            NoteSource::Endless => None,
        };

        self.reset_run();
        self.phase = SessionPhase::Idle;
    }

    fn reset_run(&mut self) {
        self.stats.reset();
        self.field = NoteField::new();
        self.scheduler = build_scheduler(&self.loaded, self.seed);
        self.display = None;
        self.clock = 0.0;
    }

    fn handle_key_down(&mut self, column: usize) {
        let Some(state) = self.keys_down.get_mut(column) else {
            return;
        };
        // Held keys repeat at the event source; only the edge judges.
        if *state {
            return;
        }
        *state = true;

        if self.phase != SessionPhase::Running {
            return;
        }

        let Some((index, distance)) = self.field.best_candidate(column) else {
            return;
        };
        // Out-of-window presses have no effect: not scored, not a miss.
        let Some(tier) = classify(distance) else {
            return;
        };

        self.field.resolve_hit(index);
        self.stats.record(tier);
        self.show_judgment(tier);
    }

    fn show_judgment(&mut self, tier: JudgeTier) {
        self.display = Some(JudgmentDisplay {
            tier,
            remaining_secs: DISPLAY_SECS,
        });
    }

    /// Beatmap-mode termination: all events consumed, no notes in
    /// flight, the clock past the padded song length, and the track
    /// finished. Procedural mode never ends on its own.
    fn song_finished(&self) -> bool {
        let Some(beatmap) = self.scheduler.beatmap() else {
            return false;
        };
        self.scheduler.is_exhausted()
            && self.field.is_empty()
            && self.clock > beatmap.total_length_secs + beatmap.offset_secs
            && self.audio.is_finished()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn notes(&self) -> &[crate::play::ActiveNote] {
        self.field.notes()
    }

    pub fn judgment_display(&self) -> Option<&JudgmentDisplay> {
        self.display.as_ref()
    }

    pub fn is_key_down(&self, column: usize) -> bool {
        self.keys_down.get(column).copied().unwrap_or(false)
    }

    pub fn is_beatmap_driven(&self) -> bool {
        self.scheduler.is_beatmap_driven()
    }

    /// Title for display: the beatmap title, or the endless-mode
    /// label.
    pub fn mode_label(&self) -> &str {
        match &self.loaded {
            Some(beatmap) => &beatmap.title,
            None => "Random Mode",
        }
    }
}

fn build_scheduler(loaded: &Option<Beatmap>, seed: Option<u64>) -> SpawnScheduler {
    match loaded {
        Some(beatmap) => SpawnScheduler::beatmap_driven(beatmap.clone()),
        None => match seed {
            Some(seed) => SpawnScheduler::procedural_seeded(seed),
            None => SpawnScheduler::procedural(),
        },
    }
}
