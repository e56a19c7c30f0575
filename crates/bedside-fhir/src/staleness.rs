//! Staleness classification.
//!
//! Each quantity kind carries its own horizon: a heart rate from six
//! hours ago is already suspect for an acute-care score, while a height
//! from six months ago is still perfectly fresh. The verdict is advisory
//! only: it annotates the resolved value for display and never blocks
//! auto-population.

use jiff::Timestamp;

use bedside_core::models::{StalenessAnnotation, StalenessVerdict};
use bedside_units::QuantityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalenessPolicy {
    pub aging_after_hours: i64,
    pub stale_after_hours: i64,
}

const HOURS_PER_DAY: i64 = 24;

/// 90-day stale horizon for anything without a more specific policy,
/// matching the long-standing default for lab values.
pub const DEFAULT_POLICY: StalenessPolicy = StalenessPolicy {
    aging_after_hours: 30 * HOURS_PER_DAY,
    stale_after_hours: 90 * HOURS_PER_DAY,
};

const VITALS: StalenessPolicy = StalenessPolicy {
    aging_after_hours: 6,
    stale_after_hours: 48,
};

const ANTHROPOMETRIC: StalenessPolicy = StalenessPolicy {
    aging_after_hours: 90 * HOURS_PER_DAY,
    stale_after_hours: 365 * HOURS_PER_DAY,
};

const HEIGHT: StalenessPolicy = StalenessPolicy {
    aging_after_hours: 365 * HOURS_PER_DAY,
    stale_after_hours: 5 * 365 * HOURS_PER_DAY,
};

impl StalenessPolicy {
    pub fn for_kind(kind: Option<QuantityKind>) -> StalenessPolicy {
        use QuantityKind::*;
        match kind {
            Some(
                Temperature | HeartRate | RespiratoryRate | BloodPressure | OxygenSaturation,
            ) => VITALS,
            Some(Weight) => ANTHROPOMETRIC,
            Some(Height) => HEIGHT,
            _ => DEFAULT_POLICY,
        }
    }
}

/// Classify an observation's age against the kind's policy.
pub fn classify(
    observed_at: Timestamp,
    now: Timestamp,
    kind: Option<QuantityKind>,
) -> StalenessAnnotation {
    let age_hours = (now.as_second() - observed_at.as_second()).max(0) / 3600;
    let policy = StalenessPolicy::for_kind(kind);

    let verdict = if age_hours >= policy.stale_after_hours {
        StalenessVerdict::Stale
    } else if age_hours >= policy.aging_after_hours {
        StalenessVerdict::Aging
    } else {
        StalenessVerdict::Fresh
    };

    StalenessAnnotation {
        verdict,
        age_days: age_hours / HOURS_PER_DAY,
        description: format_age(age_hours),
    }
}

fn plural(n: i64, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn format_age(hours: i64) -> String {
    let days = hours / HOURS_PER_DAY;
    if days >= 365 {
        let years = days / 365;
        let months = (days % 365) / 30;
        if months > 0 {
            format!("{} {} ago", plural(years, "year"), plural(months, "month"))
        } else {
            format!("{} ago", plural(years, "year"))
        }
    } else if days >= 30 {
        format!("{} ago", plural(days / 30, "month"))
    } else if days >= 1 {
        format!("{} ago", plural(days, "day"))
    } else if hours >= 1 {
        format!("{} ago", plural(hours, "hour"))
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn a_six_hour_old_heart_rate_is_aging() {
        let annotation = classify(
            ts("2025-08-01T06:00:00Z"),
            ts("2025-08-01T12:00:00Z"),
            Some(QuantityKind::HeartRate),
        );
        assert_eq!(annotation.verdict, StalenessVerdict::Aging);
        assert_eq!(annotation.description, "6 hours ago");
    }

    #[test]
    fn a_six_month_old_height_is_fresh() {
        let annotation = classify(
            ts("2025-02-01T00:00:00Z"),
            ts("2025-08-01T00:00:00Z"),
            Some(QuantityKind::Height),
        );
        assert_eq!(annotation.verdict, StalenessVerdict::Fresh);
        assert_eq!(annotation.description, "6 months ago");
    }

    #[test]
    fn a_six_month_old_lab_is_stale() {
        let annotation = classify(
            ts("2025-02-01T00:00:00Z"),
            ts("2025-08-01T00:00:00Z"),
            Some(QuantityKind::Creatinine),
        );
        assert_eq!(annotation.verdict, StalenessVerdict::Stale);
    }

    #[test]
    fn unknown_kind_gets_the_default_policy() {
        let annotation = classify(ts("2025-07-25T00:00:00Z"), ts("2025-08-01T00:00:00Z"), None);
        assert_eq!(annotation.verdict, StalenessVerdict::Fresh);
        assert_eq!(annotation.description, "7 days ago");
    }

    #[test]
    fn long_ages_read_in_years_and_months() {
        let annotation = classify(
            ts("2023-04-01T00:00:00Z"),
            ts("2025-08-01T00:00:00Z"),
            Some(QuantityKind::Cholesterol),
        );
        assert_eq!(annotation.verdict, StalenessVerdict::Stale);
        assert!(annotation.description.starts_with("2 years"));
    }

    #[test]
    fn clock_skew_is_not_negative_age() {
        let annotation = classify(ts("2025-08-01T12:00:00Z"), ts("2025-08-01T11:00:00Z"), None);
        assert_eq!(annotation.verdict, StalenessVerdict::Fresh);
        assert_eq!(annotation.description, "just now");
    }
}
