//! Heuristic fact extraction from patient bundles.
//!
//! This is a best-effort keyword matcher plus a weight-trend computation,
//! not a clinical NLP system. Extraction is pure and deterministic: the same
//! bundle always yields the same fact map, and caller-supplied override
//! facts are merged in last with highest precedence.
//!
//! ```
//! use endet_extract::extract;
//! use endet_model::{ClinicalNote, FactValue, PatientBundle};
//!
//! let mut bundle = PatientBundle::for_patient("p-1");
//! bundle.notes.push(ClinicalNote {
//!     id: "n-1".into(),
//!     text: "Progressive dysphagia, dietitian consulted.".into(),
//! });
//! let facts = extract(&bundle);
//! assert_eq!(facts["dysphagia_evidence"], FactValue::evidence(true, 0.8));
//! ```

pub mod extract;
pub mod keywords;
pub mod trend;

pub use extract::extract;
pub use keywords::{contains_any_plain, contains_keyword};
pub use trend::{weight_loss_percent, WeightLoss, DEFAULT_LOOKBACK_DAYS};
