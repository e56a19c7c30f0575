use bedside_core::CalculatorConfig;
use bedside_core::config::{RiskLevel, ScoringOption, ScoringRules, SectionSpec};
use bedside_core::models::Severity;

/// HEART score for major adverse cardiac events. Five radio sections,
/// each scored 0-2; the total is incomplete until every section is
/// answered.
pub fn config() -> CalculatorConfig {
    let option = |id: &str, label: &str, points: f64| ScoringOption {
        id: id.to_string(),
        label: label.to_string(),
        points,
        description: None,
        condition_code: None,
    };
    let section = |id: &str, title: &str, subtitle: Option<&str>, options: Vec<ScoringOption>| {
        SectionSpec {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            options,
        }
    };
    let level = |min: f64, max: f64, label: &str, severity, recommendation: &str| RiskLevel {
        min_score: min,
        max_score: max,
        label: label.to_string(),
        severity,
        recommendation: Some(recommendation.to_string()),
    };

    let mut config = CalculatorConfig::new(
        "heart-score",
        "HEART Score for Major Cardiac Events",
        "Predicts 6-week risk of major adverse cardiac events in patients \
         presenting with chest pain.",
        ScoringRules::RadioSum {
            sections: vec![
                section(
                    "heart-history",
                    "History",
                    None,
                    vec![
                        option("heart-history-0", "Slightly suspicious (low risk features)", 0.0),
                        option("heart-history-1", "Moderately suspicious (mixture)", 1.0),
                        option("heart-history-2", "Highly suspicious (classic angina)", 2.0),
                    ],
                ),
                section(
                    "heart-ecg",
                    "EKG",
                    None,
                    vec![
                        option("heart-ecg-0", "Normal", 0.0),
                        option("heart-ecg-1", "Non-specific repolarization disturbance", 1.0),
                        option("heart-ecg-2", "Significant ST deviation", 2.0),
                    ],
                ),
                section(
                    "heart-age",
                    "Age",
                    None,
                    vec![
                        option("heart-age-0", "< 45 years", 0.0),
                        option("heart-age-1", "45-64 years", 1.0),
                        option("heart-age-2", "≥ 65 years", 2.0),
                    ],
                ),
                section(
                    "heart-risk",
                    "Risk Factors",
                    Some(
                        "HTN, hypercholesterolemia, DM, obesity, smoking, family history \
                         of atherosclerotic disease",
                    ),
                    vec![
                        option("heart-risk-0", "No known risk factors", 0.0),
                        option("heart-risk-1", "1-2 risk factors", 1.0),
                        option(
                            "heart-risk-2",
                            "≥ 3 risk factors or history of atherosclerotic disease",
                            2.0,
                        ),
                    ],
                ),
                section(
                    "heart-troponin",
                    "Initial Troponin",
                    Some("Use local assay cutoffs"),
                    vec![
                        option("heart-troponin-0", "≤ normal limit", 0.0),
                        option("heart-troponin-1", "1-3× normal limit", 1.0),
                        option("heart-troponin-2", "> 3× normal limit", 2.0),
                    ],
                ),
            ],
        },
    );
    config.score_label = "HEART Score".to_string();
    config.risk_levels = vec![
        level(
            0.0,
            3.0,
            "Low Risk (0-3)",
            Severity::Success,
            "0.9-1.7% MACE risk. Supports early discharge.",
        ),
        level(
            4.0,
            6.0,
            "Moderate Risk (4-6)",
            Severity::Warning,
            "12-16.6% MACE risk. Admit for clinical observation and further testing.",
        ),
        level(
            7.0,
            10.0,
            "High Risk (7-10)",
            Severity::Danger,
            "50-65% MACE risk. Candidate for early invasive measures.",
        ),
    ];
    config.references = vec![
        "Six AJ, Backus BE, Kelder JC. Chest pain in the emergency room: value of \
         the HEART score. Neth Heart J. 2008;16(6):191-196."
            .to_string(),
    ];
    config
}
