//! Shared fixtures for the workspace integration tests.

use chrono::NaiveDate;
use endet::{ClinicalNote, PatientBundle, WeightEntry};

pub fn note(id: &str, text: &str) -> ClinicalNote {
    ClinicalNote {
        id: id.to_string(),
        text: text.to_string(),
    }
}

pub fn weight(date: &str, kg: f64) -> WeightEntry {
    WeightEntry {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        kg,
    }
}

/// A bundle that satisfies EN1, EN2 and EN3 of the reference policy.
pub fn qualifying_bundle() -> PatientBundle {
    let mut bundle = PatientBundle::for_patient("patient-1");
    bundle.notes.push(note(
        "n-1",
        "Progressive dysphagia; unable to meet caloric needs orally.",
    ));
    bundle.notes.push(note(
        "n-2",
        "PEG tube placement ordered. Nutrition plan prepared by dietitian.",
    ));
    bundle.weights.push(weight("2025-01-02", 82.0));
    bundle.weights.push(weight("2025-05-20", 72.0));
    bundle
}
