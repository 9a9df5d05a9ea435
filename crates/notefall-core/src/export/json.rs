use chrono::Local;
use serde_json::{Value as JsonValue, json};

use crate::play::SessionStats;

/// Build a JSON results entry for a finished (or abandoned) run.
pub fn results_json(title: &str, stats: &SessionStats) -> JsonValue {
    json!({
        "title": title,
        "recorded_at": Local::now().to_rfc3339(),
        "score": stats.score,
        "max_combo": stats.max_combo,
        "accuracy": stats.accuracy(),
        "judgments": {
            "perfect": stats.perfect_hits,
            "great": stats.great_hits,
            "good": stats.good_hits,
            "miss": stats.missed_hits,
        },
        "total_hits": stats.total_hits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::JudgeTier;

    #[test]
    fn test_results_json_shape() {
        let mut stats = SessionStats::new();
        stats.record(JudgeTier::Perfect);
        stats.record(JudgeTier::Miss);

        let value = results_json("Test Song", &stats);
        assert_eq!(value["title"], "Test Song");
        assert_eq!(value["score"], 300);
        assert_eq!(value["max_combo"], 1);
        assert_eq!(value["judgments"]["perfect"], 1);
        assert_eq!(value["judgments"]["miss"], 1);
        assert_eq!(value["total_hits"], 2);
        assert!(value["recorded_at"].is_string());
    }

    #[test]
    fn test_results_json_accuracy_of_empty_run() {
        let value = results_json("empty", &SessionStats::new());
        assert_eq!(value["accuracy"], 100.0);
    }
}
