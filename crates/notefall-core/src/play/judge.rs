use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::config::judge::{GOOD_WINDOW, GREAT_WINDOW, PERFECT_WINDOW};

/// Hit accuracy classification.
///
/// `Miss` is only ever produced by the note field's auto-miss path;
/// an out-of-window key press classifies to `None` and has no effect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, IntoStaticStr,
)]
pub enum JudgeTier {
    #[strum(serialize = "PERFECT")]
    Perfect,
    #[strum(serialize = "GREAT")]
    Great,
    #[strum(serialize = "GOOD")]
    Good,
    #[strum(serialize = "MISS")]
    Miss,
}

impl JudgeTier {
    pub fn display_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for JudgeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Classify a key press by its distance from the judgment line.
///
/// Windows are compared with strict `<`, so a distance exactly on a
/// boundary belongs to the outer tier. Beyond the Good window the
/// press has no effect and `None` is returned.
pub fn classify(distance: f32) -> Option<JudgeTier> {
    if distance < PERFECT_WINDOW {
        Some(JudgeTier::Perfect)
    } else if distance < GREAT_WINDOW {
        Some(JudgeTier::Great)
    } else if distance < GOOD_WINDOW {
        Some(JudgeTier::Good)
    } else {
        None
    }
}

/// Score awarded for a hit, scaled by the combo *before* this hit.
pub fn score_delta(tier: JudgeTier, combo: u32) -> u64 {
    let combo = combo as u64;
    match tier {
        JudgeTier::Perfect => 300 + combo * 5,
        JudgeTier::Great => 200 + combo * 3,
        JudgeTier::Good => 100 + combo,
        JudgeTier::Miss => 0,
    }
}
