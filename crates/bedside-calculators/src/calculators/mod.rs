pub mod benzo_conversion;
pub mod bmi_bsa;
pub mod crcl;
pub mod curb65;
pub mod fena;
pub mod heart_score;
pub mod wells_dvt;

use bedside_core::CalculatorConfig;

/// Every builtin calculator, in display order.
pub fn all_calculators() -> Vec<CalculatorConfig> {
    vec![
        curb65::config(),
        wells_dvt::config(),
        heart_score::config(),
        fena::config(),
        crcl::config(),
        bmi_bsa::config(),
        benzo_conversion::config(),
    ]
}

/// Look up a builtin calculator by id.
pub fn get_calculator(id: &str) -> Option<CalculatorConfig> {
    all_calculators().into_iter().find(|c| c.id == id)
}
