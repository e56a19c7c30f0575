use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tag identifying which conversion table and staleness policy apply to a
/// measured quantity.
///
/// A field that declares a unit must declare one of these; an unrecognized
/// tag fails configuration deserialization rather than surfacing at
/// calculation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuantityKind {
    Weight,
    Height,
    Temperature,
    HeartRate,
    RespiratoryRate,
    BloodPressure,
    OxygenSaturation,
    Creatinine,
    Sodium,
    Potassium,
    Glucose,
    Cholesterol,
    Triglycerides,
    Calcium,
    Albumin,
    Bilirubin,
    Hemoglobin,
    Bun,
    Platelets,
    Wbc,
    DDimer,
    Fibrinogen,
    Inr,
}

impl QuantityKind {
    /// The canonical unit values of this kind are normalized into before
    /// any arithmetic. Matches the first entry of the conversion table.
    pub fn canonical_unit(&self) -> &'static str {
        crate::convert::supported_units(*self)[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityKind::Weight => "weight",
            QuantityKind::Height => "height",
            QuantityKind::Temperature => "temperature",
            QuantityKind::HeartRate => "heart_rate",
            QuantityKind::RespiratoryRate => "respiratory_rate",
            QuantityKind::BloodPressure => "blood_pressure",
            QuantityKind::OxygenSaturation => "oxygen_saturation",
            QuantityKind::Creatinine => "creatinine",
            QuantityKind::Sodium => "sodium",
            QuantityKind::Potassium => "potassium",
            QuantityKind::Glucose => "glucose",
            QuantityKind::Cholesterol => "cholesterol",
            QuantityKind::Triglycerides => "triglycerides",
            QuantityKind::Calcium => "calcium",
            QuantityKind::Albumin => "albumin",
            QuantityKind::Bilirubin => "bilirubin",
            QuantityKind::Hemoglobin => "hemoglobin",
            QuantityKind::Bun => "bun",
            QuantityKind::Platelets => "platelets",
            QuantityKind::Wbc => "wbc",
            QuantityKind::DDimer => "d_dimer",
            QuantityKind::Fibrinogen => "fibrinogen",
            QuantityKind::Inr => "inr",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
