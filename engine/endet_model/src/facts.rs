use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical fact names emitted by the extractor and referenced by the
/// reference policy.
pub mod names {
    pub const DYSPHAGIA_EVIDENCE: &str = "dysphagia_evidence";
    pub const GI_DYSFUNCTION: &str = "gi_dysfunction";
    pub const FAILURE_OF_ORAL_INTAKE: &str = "failure_of_oral_intake";
    pub const WEIGHT_LOSS_PCT: &str = "weight_loss_pct";
    pub const BMI_VALUE: &str = "bmi_value";
    pub const NUTRITION_PLAN_DOCUMENTED: &str = "nutrition_plan_documented";
    pub const PHYSICIAN_ORDER_PRESENT: &str = "physician_order_present";
}

/// One clinical signal. Facts are heterogeneous: heuristic extraction yields
/// an evidence object with a confidence score, while scalar facts (weight
/// loss percentage, BMI) and documentation flags are bare values. The
/// `untagged` representation round-trips the original JSON shapes.
///
/// Absence of a fact is modeled by map lookup, not by a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FactValue {
    Evidence { present: bool, confidence: f64 },
    Bool(bool),
    Number(f64),
}

impl FactValue {
    pub fn evidence(present: bool, confidence: f64) -> Self {
        FactValue::Evidence {
            present,
            confidence,
        }
    }

    /// Truthiness coercion used by predicate fallthrough and the
    /// no-signal check. An evidence fact is truthy regardless of its
    /// `present` flag: on the wire it is a non-empty object, and the
    /// insufficiency check counts it as signal either way.
    pub fn truthy(&self) -> bool {
        match self {
            FactValue::Evidence { .. } => true,
            FactValue::Bool(b) => *b,
            FactValue::Number(n) => *n != 0.0,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for FactValue {
    fn from(b: bool) -> Self {
        FactValue::Bool(b)
    }
}

impl From<f64> for FactValue {
    fn from(n: f64) -> Self {
        FactValue::Number(n)
    }
}

/// Fact mapping keyed by fact name. BTreeMap keeps iteration (and serialized
/// output) deterministic.
pub type FactMap = BTreeMap<String, FactValue>;
