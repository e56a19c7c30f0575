use bedside_core::CalculatorConfig;
use bedside_core::config::{ScoringRules, WeightedItemOption};

/// Benzodiazepine conversion. Each row is (drug, dose in mg, factor to
/// diazepam-equivalent mg); the total is the summed diazepam equivalent.
/// Factors are 10 mg diazepam divided by the drug's equipotent oral dose.
/// Reference ranges in the literature are wide; not for dosing a
/// benzo-naïve patient.
pub fn config() -> CalculatorConfig {
    let drug = |id: &str, label: &str, equivalent_dose_mg: f64| WeightedItemOption {
        id: id.to_string(),
        label: label.to_string(),
        factor: 10.0 / equivalent_dose_mg,
    };

    let mut config = CalculatorConfig::new(
        "benzo-conversion",
        "Benzodiazepine Conversion Calculator",
        "Provides equivalents between different benzodiazepines based on a \
         conversion factor table.",
        ScoringRules::WeightedList {
            field: "doses".to_string(),
            item_label: "Benzodiazepine".to_string(),
            value_label: "Dose".to_string(),
            value_unit: Some("mg".to_string()),
            result_label: "Total Diazepam Equivalent".to_string(),
            result_unit: Some("mg".to_string()),
            options: vec![
                drug("alprazolam", "Alprazolam (Xanax)", 0.5),
                drug("chlordiazepoxide", "Chlordiazepoxide (Librium)", 25.0),
                drug("diazepam", "Diazepam (Valium)", 10.0),
                drug("clonazepam", "Clonazepam (Klonopin)", 0.5),
                drug("lorazepam", "Lorazepam (Ativan)", 1.0),
                drug("oxazepam", "Oxazepam (Serax)", 20.0),
                drug("temazepam", "Temazepam (Restoril)", 20.0),
                drug("triazolam", "Triazolam (Halcion)", 0.25),
            ],
        },
    );
    config.score_decimals = 1;
    config.references = vec![
        "Ashton CH. Benzodiazepines: how they work and how to withdraw. \
         The Ashton Manual. 2002."
            .to_string(),
    ];
    config
}
