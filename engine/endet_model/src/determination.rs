use serde::{Deserialize, Serialize};

/// Per-criterion verdict. The current reference policy only produces `Pass`
/// and `Fail`; `Unknown` is reserved for future predicates that can abstain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Pass,
    Fail,
    Unknown,
}

/// Overall determination status. `Insufficient` means there was no clinical
/// signal to evaluate against, distinct from an evaluated `NotMeets`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Meets,
    NotMeets,
    Insufficient,
}

/// Supporting item attached to a criterion result. The reference policy
/// leaves the list empty; the shape is part of the output contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvidenceItem {
    pub fact: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CriterionResult {
    pub id: String,
    pub label: String,
    pub outcome: Outcome,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

/// Final output of one evaluation: overall status, a human-readable summary,
/// and per-criterion results in policy definition order. Created once per
/// evaluation and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Determination {
    pub status: Status,
    pub summary: String,
    pub criteria: Vec<CriterionResult>,
}

impl Determination {
    /// Ids of criteria that passed, in definition order.
    pub fn passed_ids(&self) -> Vec<&str> {
        self.criteria
            .iter()
            .filter(|c| c.outcome == Outcome::Pass)
            .map(|c| c.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::NotMeets).unwrap(),
            "\"NOT_MEETS\""
        );
        assert_eq!(serde_json::to_string(&Status::Meets).unwrap(), "\"MEETS\"");
        assert_eq!(
            serde_json::to_string(&Outcome::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }
}
