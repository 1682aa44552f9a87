use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::facts::FactMap;

/// Administrative sex as carried on the inbound case payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: String,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub sex: Option<Sex>,
}

/// Free-text clinical note, the source for keyword evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalNote {
    pub id: String,
    pub text: String,
}

/// One weight measurement. Entries with the same date are permitted and
/// never deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub code: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(rename = "effectiveDate", default)]
    pub effective_date: Option<NaiveDate>,
}

/// Aggregate input for one determination. Owned by the caller and read-only
/// to the engine; validation of dates, units and weights happens upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientBundle {
    pub patient: Patient,
    #[serde(default)]
    pub notes: Vec<ClinicalNote>,
    #[serde(default)]
    pub weights: Vec<WeightEntry>,
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub bmi: Option<f64>,
    /// Caller-supplied facts that override anything the extractor computes.
    #[serde(default)]
    pub facts: FactMap,
}

impl PatientBundle {
    /// Bundle with a patient id and nothing else, useful as a test fixture.
    pub fn for_patient(id: impl Into<String>) -> Self {
        Self {
            patient: Patient {
                id: id.into(),
                birth_date: None,
                sex: None,
            },
            notes: Vec::new(),
            weights: Vec::new(),
            observations: Vec::new(),
            bmi: None,
            facts: FactMap::new(),
        }
    }
}
