//! Data model for enteral nutrition (EN) necessity determinations.
//!
//! The engine takes a caller-owned [`PatientBundle`], derives a [`FactMap`]
//! of named clinical signals, and produces an immutable [`Determination`]
//! with per-criterion outcomes. This crate only defines the shared types;
//! extraction lives in `endet_extract` and rule evaluation in `endet_rules`.
//!
//! Fact values are heterogeneous by design and round-trip the original JSON
//! shapes:
//! ```
//! use endet_model::facts::FactValue;
//! let v: FactValue = serde_json::from_str(r#"{"present": true, "confidence": 0.8}"#).unwrap();
//! assert!(matches!(v, FactValue::Evidence { present: true, .. }));
//! let n: FactValue = serde_json::from_str("12.5").unwrap();
//! assert!(matches!(n, FactValue::Number(_)));
//! ```

pub mod bundle;
pub mod determination;
pub mod facts;

pub use bundle::{ClinicalNote, Observation, Patient, PatientBundle, Sex, WeightEntry};
pub use determination::{CriterionResult, Determination, EvidenceItem, Outcome, Status};
pub use facts::{FactMap, FactValue};
