use serde::{Deserialize, Serialize};

use crate::play::judge::{self, JudgeTier};

/// Score, combo, and per-tier hit counters for one play session.
///
/// Invariant: `total_hits` always equals the sum of the four tier
/// counters, and `combo <= max_combo`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: u64,
    pub combo: u32,
    pub max_combo: u32,
    pub total_hits: u32,
    pub perfect_hits: u32,
    pub great_hits: u32,
    pub good_hits: u32,
    pub missed_hits: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved note.
    ///
    /// Hits add score scaled by the combo before this hit, then
    /// extend the combo. A miss resets the combo and adds no score.
    pub fn record(&mut self, tier: JudgeTier) {
        self.total_hits += 1;

        if tier == JudgeTier::Miss {
            self.combo = 0;
            self.missed_hits += 1;
            return;
        }

        self.score += judge::score_delta(tier, self.combo);
        match tier {
            JudgeTier::Perfect => self.perfect_hits += 1,
            JudgeTier::Great => self.great_hits += 1,
            _ => self.good_hits += 1,
        }
        self.combo += 1;
        if self.combo > self.max_combo {
            self.max_combo = self.combo;
        }
    }

    /// Weighted accuracy percentage. Defined as 100% before any note
    /// has resolved.
    pub fn accuracy(&self) -> f64 {
        if self.total_hits == 0 {
            return 100.0;
        }
        let earned = 300.0 * f64::from(self.perfect_hits)
            + 200.0 * f64::from(self.great_hits)
            + 100.0 * f64::from(self.good_hits);
        earned / (300.0 * f64::from(self.total_hits)) * 100.0
    }

    /// Zero everything at session start or restart.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_counters_sum_to_total() {
        let mut stats = SessionStats::new();
        for tier in [
            JudgeTier::Perfect,
            JudgeTier::Great,
            JudgeTier::Good,
            JudgeTier::Miss,
            JudgeTier::Perfect,
        ] {
            stats.record(tier);
            assert_eq!(
                stats.total_hits,
                stats.perfect_hits + stats.great_hits + stats.good_hits + stats.missed_hits
            );
        }
    }

    #[test]
    fn test_perfect_at_combo_ten_scores_350() {
        let mut stats = SessionStats::new();
        for _ in 0..10 {
            stats.record(JudgeTier::Good);
        }
        assert_eq!(stats.combo, 10);

        let before = stats.score;
        stats.record(JudgeTier::Perfect);
        assert_eq!(stats.score - before, 350);
        assert_eq!(stats.combo, 11);
    }

    #[test]
    fn test_miss_resets_combo_without_score() {
        let mut stats = SessionStats::new();
        stats.record(JudgeTier::Perfect);
        stats.record(JudgeTier::Perfect);
        let before = stats.score;

        stats.record(JudgeTier::Miss);
        assert_eq!(stats.score, before);
        assert_eq!(stats.combo, 0);
        assert_eq!(stats.missed_hits, 1);
        assert_eq!(stats.max_combo, 2);
    }

    #[test]
    fn test_max_combo_is_non_decreasing() {
        let mut stats = SessionStats::new();
        let mut last_max = 0;
        for tier in [
            JudgeTier::Good,
            JudgeTier::Good,
            JudgeTier::Miss,
            JudgeTier::Perfect,
            JudgeTier::Miss,
        ] {
            stats.record(tier);
            assert!(stats.combo <= stats.max_combo);
            assert!(stats.max_combo >= last_max);
            last_max = stats.max_combo;
        }
    }

    #[test]
    fn test_accuracy_with_no_hits_is_100() {
        let stats = SessionStats::new();
        assert_eq!(stats.accuracy(), 100.0);
    }

    #[test]
    fn test_accuracy_weighting() {
        let mut stats = SessionStats::new();
        stats.record(JudgeTier::Perfect);
        stats.record(JudgeTier::Great);
        stats.record(JudgeTier::Good);
        stats.record(JudgeTier::Miss);
        // (300 + 200 + 100 + 0) / (300 * 4) = 50%
        assert!((stats.accuracy() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut stats = SessionStats::new();
        stats.record(JudgeTier::Perfect);
        stats.record(JudgeTier::Miss);
        stats.reset();
        assert_eq!(stats, SessionStats::default());
    }
}
