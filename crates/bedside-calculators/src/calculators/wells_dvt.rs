use bedside_core::CalculatorConfig;
use bedside_core::config::{RiskLevel, ScoringOption, ScoringRules, SectionSpec};
use bedside_core::models::Severity;

// SNOMED CT codes that auto-check their criteria when on the problem list.
const MALIGNANCY: &str = "363346000";
const PARALYSIS: &str = "166001";
const DEEP_VEIN_THROMBOSIS: &str = "128053003";

/// Wells' criteria for DVT. Nine one-point criteria plus a two-point
/// deduction when an alternative diagnosis is at least as likely.
pub fn config() -> CalculatorConfig {
    let option = |id: &str, label: &str, points: f64, condition_code: Option<&str>| ScoringOption {
        id: id.to_string(),
        label: label.to_string(),
        points,
        description: None,
        condition_code: condition_code.map(str::to_string),
    };
    let level = |min: f64, max: f64, label: &str, severity, recommendation: &str| RiskLevel {
        min_score: min,
        max_score: max,
        label: label.to_string(),
        severity,
        recommendation: Some(recommendation.to_string()),
    };

    let mut config = CalculatorConfig::new(
        "wells-dvt",
        "Wells' Criteria for DVT",
        "Estimates pretest probability of deep vein thrombosis.",
        ScoringRules::CheckboxSum {
            sections: vec![SectionSpec {
                id: "dvt-criteria".to_string(),
                title: "Clinical Features".to_string(),
                subtitle: None,
                options: vec![
                    option(
                        "dvt-cancer",
                        "Active cancer (treatment or palliation within 6 months)",
                        1.0,
                        Some(MALIGNANCY),
                    ),
                    option(
                        "dvt-paralysis",
                        "Paralysis, paresis, or recent plaster immobilization of the lower extremities",
                        1.0,
                        Some(PARALYSIS),
                    ),
                    option(
                        "dvt-bedridden",
                        "Recently bedridden > 3 days or major surgery within 12 weeks requiring \
                         general or regional anesthesia",
                        1.0,
                        None,
                    ),
                    option(
                        "dvt-tenderness",
                        "Localized tenderness along the deep venous system",
                        1.0,
                        None,
                    ),
                    option("dvt-swelling", "Entire leg swollen", 1.0, None),
                    option(
                        "dvt-calf",
                        "Calf swelling at least 3 cm larger than asymptomatic side",
                        1.0,
                        None,
                    ),
                    option(
                        "dvt-pitting",
                        "Pitting edema confined to the symptomatic leg",
                        1.0,
                        None,
                    ),
                    option(
                        "dvt-collateral",
                        "Collateral superficial veins (nonvaricose)",
                        1.0,
                        None,
                    ),
                    option(
                        "dvt-previous",
                        "Previously documented DVT",
                        1.0,
                        Some(DEEP_VEIN_THROMBOSIS),
                    ),
                    option(
                        "dvt-alternative",
                        "Alternative diagnosis at least as likely as DVT",
                        -2.0,
                        None,
                    ),
                ],
            }],
            adjustments: vec![],
        },
    );
    config.score_label = "Wells' Score".to_string();
    config.risk_levels = vec![
        level(
            -2.0,
            0.0,
            "Low Risk",
            Severity::Success,
            "DVT unlikely (5% prevalence). A negative D-dimer rules out DVT.",
        ),
        level(
            1.0,
            2.0,
            "Moderate Risk",
            Severity::Warning,
            "Moderate risk (17% prevalence). Obtain high-sensitivity D-dimer or \
             proceed to ultrasound.",
        ),
        level(
            3.0,
            9.0,
            "High Risk",
            Severity::Danger,
            "High risk (17-53% prevalence). D-dimer insufficient to rule out; \
             proceed to ultrasound.",
        ),
    ];
    config.references = vec![
        "Wells PS, et al. Evaluation of D-dimer in the diagnosis of suspected \
         deep-vein thrombosis. N Engl J Med. 2003;349(13):1227-1235."
            .to_string(),
    ];
    config
}
