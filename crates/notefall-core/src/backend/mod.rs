//! Collaborator seams for the surrounding system.
//!
//! The core drives playback through these traits but never
//! implements decoding or device handling itself. A no-op backend is
//! always a valid collaborator; the simulation must run unchanged on
//! top of one.

/// Music playback as the session sees it.
pub trait AudioBackend {
    /// Begin playing the referenced track.
    fn play(&mut self, music_ref: &str);

    /// Halt playback.
    fn stop(&mut self);

    /// Whether the current track has run out. Feeds the
    /// beatmap-driven end-of-song condition.
    fn is_finished(&self) -> bool;
}

/// Backend that plays nothing and reports the track as finished.
///
/// Used for endless mode, for tests, and whenever no real audio
/// device is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn play(&mut self, _music_ref: &str) {}

    fn stop(&mut self) {}

    fn is_finished(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_audio_is_always_finished() {
        let mut audio = NullAudio;
        audio.play("anything.ogg");
        assert!(audio.is_finished());
        audio.stop();
        assert!(audio.is_finished());
    }
}
