//! Declarative criteria evaluation for enteral nutrition determinations.
//!
//! A [`Policy`] is an ordered list of named criteria, each a boolean
//! [`Predicate`] tree over the fact map. Evaluation is pure and total:
//! missing facts and shape mismatches fail closed to `false`, never panic,
//! so every input maps to a defensible, inspectable outcome.
//!
//! ```
//! use endet_model::{FactMap, FactValue, Status};
//! use endet_rules::evaluate;
//!
//! let mut facts = FactMap::new();
//! facts.insert("dysphagia_evidence".into(), FactValue::evidence(true, 0.8));
//! facts.insert("physician_order_present".into(), FactValue::Bool(true));
//! facts.insert("nutrition_plan_documented".into(), FactValue::Bool(true));
//!
//! let det = evaluate(&facts);
//! assert_eq!(det.status, Status::Meets);
//! ```

pub mod criteria;
pub mod predicate;

pub use criteria::{evaluate, Criterion, Policy, PolicyError};
pub use predicate::{eval, Check, Predicate};
