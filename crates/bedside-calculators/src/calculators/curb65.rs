use bedside_core::CalculatorConfig;
use bedside_core::config::{QuestionSpec, RiskLevel, ScoringRules};
use bedside_core::models::Severity;

/// CURB-65: community-acquired pneumonia severity. Five yes/no criteria,
/// one point each.
pub fn config() -> CalculatorConfig {
    let question = |id: &str, label: &str| QuestionSpec {
        id: id.to_string(),
        label: label.to_string(),
        points: 1.0,
        description: None,
        condition_code: None,
    };
    let level = |min: f64, max: f64, label: &str, severity, recommendation: &str| RiskLevel {
        min_score: min,
        max_score: max,
        label: label.to_string(),
        severity,
        recommendation: Some(recommendation.to_string()),
    };

    let mut config = CalculatorConfig::new(
        "curb-65",
        "CURB-65 Score for Pneumonia Severity",
        "Estimates mortality of community-acquired pneumonia to help determine \
         inpatient vs. outpatient treatment.",
        ScoringRules::YesNoSum {
            questions: vec![
                question(
                    "curb-confusion",
                    "Confusion (new disorientation to person, place, or time)",
                ),
                question("curb-bun", "Urea > 7 mmol/L (BUN > 19 mg/dL)"),
                question("curb-rr", "Respiratory rate ≥ 30 breaths/min"),
                question("curb-bp", "Blood pressure (SBP < 90 or DBP ≤ 60 mmHg)"),
                question("curb-age", "Age ≥ 65 years"),
            ],
        },
    );
    config.score_label = "CURB-65 Score".to_string();
    config.risk_levels = vec![
        level(
            0.0,
            0.0,
            "Low Risk",
            Severity::Success,
            "Low risk (0.6% mortality), consider outpatient treatment.",
        ),
        level(
            1.0,
            1.0,
            "Low Risk",
            Severity::Success,
            "Low risk (2.7% mortality), consider outpatient treatment.",
        ),
        level(
            2.0,
            2.0,
            "Moderate Risk",
            Severity::Warning,
            "Moderate risk (6.8% mortality), consider short inpatient hospitalization \
             or closely supervised outpatient treatment.",
        ),
        level(
            3.0,
            3.0,
            "High Risk",
            Severity::Danger,
            "Severe pneumonia (14% mortality); manage in hospital.",
        ),
        level(
            4.0,
            5.0,
            "Very High Risk",
            Severity::Danger,
            "Severe pneumonia (27.8% mortality); manage in hospital and assess for \
             ICU admission.",
        ),
    ];
    config.references =
        vec!["Lim WS, et al. Defining community acquired pneumonia severity. Thorax. 2003;58(5):377-382.".to_string()];
    config
}
