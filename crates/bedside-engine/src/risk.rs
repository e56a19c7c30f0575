//! Score-to-risk-level resolution.

use bedside_core::config::RiskLevel;

/// Resolve a score against a validated risk table. Containment wins; a
/// score outside every interval clamps to the nearest boundary level, so
/// no reachable score is ever left unlabeled.
pub fn resolve_level(levels: &[RiskLevel], score: f64) -> Option<&RiskLevel> {
    if let Some(hit) = levels
        .iter()
        .find(|l| score >= l.min_score && score <= l.max_score)
    {
        return Some(hit);
    }
    match levels.iter().position(|l| l.min_score > score) {
        Some(0) => levels.first(),
        Some(i) => Some(&levels[i - 1]),
        None => levels.last(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bedside_core::models::Severity;

    fn table() -> Vec<RiskLevel> {
        let level = |min, max, label: &str| RiskLevel {
            min_score: min,
            max_score: max,
            label: label.to_string(),
            severity: Severity::Info,
            recommendation: None,
        };
        vec![
            level(0.0, 4.0, "low"),
            level(5.0, 6.0, "moderate"),
            level(7.0, 10.0, "high"),
        ]
    }

    #[test]
    fn containment_wins() {
        assert_eq!(resolve_level(&table(), 5.0).unwrap().label, "moderate");
        assert_eq!(resolve_level(&table(), 0.0).unwrap().label, "low");
    }

    #[test]
    fn scores_above_the_table_clamp_to_the_last_level() {
        assert_eq!(resolve_level(&table(), 11.0).unwrap().label, "high");
    }

    #[test]
    fn scores_below_the_table_clamp_to_the_first_level() {
        assert_eq!(resolve_level(&table(), -2.0).unwrap().label, "low");
    }

    #[test]
    fn empty_table_resolves_to_nothing() {
        assert!(resolve_level(&[], 3.0).is_none());
    }
}
