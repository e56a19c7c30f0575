use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// The patient a resolver session is scoped to. Cache entries are keyed
/// by `patient_id` and never outlive the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientContext {
    pub patient_id: String,
    pub birth_date: Option<Date>,
    pub sex: Option<Sex>,
}

impl PatientContext {
    pub fn new(patient_id: impl Into<String>) -> Self {
        PatientContext {
            patient_id: patient_id.into(),
            birth_date: None,
            sex: None,
        }
    }

    /// Age in whole years as of `today`, if a birth date is on record.
    pub fn age_years(&self, today: Date) -> Option<i16> {
        let birth = self.birth_date?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        (age >= 0).then_some(age)
    }
}
