//! End-to-end enteral nutrition (EN) necessity determination.
//!
//! The engine is two pure steps behind one call: heuristic fact extraction
//! from a [`PatientBundle`] (`endet_extract`) and declarative criteria
//! evaluation over the resulting fact map (`endet_rules`). Everything here
//! is synchronous, side-effect-free and safe to run concurrently for
//! different cases; transport, persistence and document rendering live with
//! the caller.
//!
//! ```
//! use endet::{determine, ClinicalNote, PatientBundle, Status};
//!
//! let mut bundle = PatientBundle::for_patient("p-1");
//! bundle.notes.push(ClinicalNote {
//!     id: "n-1".into(),
//!     text: "Dysphagia confirmed on swallow study. PEG tube ordered, \
//!            nutrition plan by dietitian on file."
//!         .into(),
//! });
//! let det = determine(&bundle);
//! assert_eq!(det.status, Status::Meets);
//! ```

pub mod record;

pub use endet_extract::{extract, weight_loss_percent, WeightLoss};
pub use endet_model::{
    ClinicalNote, CriterionResult, Determination, EvidenceItem, FactMap, FactValue, Observation,
    Outcome, Patient, PatientBundle, Sex, Status, WeightEntry,
};
pub use endet_rules::{evaluate, Check, Criterion, Policy, PolicyError, Predicate};
pub use record::{DeterminationRecord, DeterminationRequest};

/// Extracts facts from the bundle and evaluates them against the reference
/// policy.
pub fn determine(bundle: &PatientBundle) -> Determination {
    determine_with_policy(bundle, &Policy::enteral_nutrition_2025())
}

/// Extracts facts from the bundle and evaluates them against a
/// caller-supplied policy.
pub fn determine_with_policy(bundle: &PatientBundle, policy: &Policy) -> Determination {
    let facts = extract(bundle);
    policy.evaluate(&facts)
}
