use serde::{Deserialize, Serialize};

use endet_model::facts::names;
use endet_model::{CriterionResult, Determination, FactMap, Outcome, Status};

use crate::predicate::{eval, Predicate};

/// One named, labeled policy requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Criterion {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub predicate: Predicate,
}

/// Errors raised while loading a policy definition. Malformed predicate
/// nodes inside a structurally valid policy are not errors; they fail
/// closed at evaluation time instead.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid policy JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("policy defines no criteria")]
    Empty,
    #[error("duplicate criterion id {0:?}")]
    DuplicateId(String),
    #[error("required id {0:?} names no defined criterion")]
    UnknownRequiredId(String),
}

/// Ordered list of criteria plus the subset of ids that gate the overall
/// outcome. Criteria are always evaluated and reported in definition order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Policy {
    pub criteria: Vec<Criterion>,
    pub required: Vec<String>,
}

impl Policy {
    /// Reference enteral nutrition policy. EN1 and EN3 gate the outcome;
    /// EN2 (nutritional risk) is informative only.
    pub fn enteral_nutrition_2025() -> Self {
        Policy {
            criteria: vec![
                Criterion {
                    id: "EN1".to_string(),
                    label: "Impaired swallowing or GI dysfunction necessitating EN".to_string(),
                    predicate: Predicate::any(vec![
                        Predicate::present(names::DYSPHAGIA_EVIDENCE, true),
                        Predicate::all(vec![
                            Predicate::present(names::GI_DYSFUNCTION, true),
                            Predicate::present(names::FAILURE_OF_ORAL_INTAKE, true),
                        ]),
                    ]),
                },
                Criterion {
                    id: "EN2".to_string(),
                    label: "Nutritional risk (weight loss ≥10%/180d or BMI < 18.5)".to_string(),
                    predicate: Predicate::any(vec![
                        Predicate::gte(names::WEIGHT_LOSS_PCT, 10.0),
                        Predicate::lt(names::BMI_VALUE, 18.5),
                    ]),
                },
                Criterion {
                    id: "EN3".to_string(),
                    label: "Physician order and nutrition plan documented".to_string(),
                    predicate: Predicate::all(vec![
                        Predicate::present(names::PHYSICIAN_ORDER_PRESENT, true),
                        Predicate::present(names::NUTRITION_PLAN_DOCUMENTED, true),
                    ]),
                },
            ],
            required: vec!["EN1".to_string(), "EN3".to_string()],
        }
    }

    /// Loads a policy from its JSON definition and validates its structure.
    pub fn from_json(s: &str) -> Result<Policy, PolicyError> {
        let policy: Policy = serde_json::from_str(s)?;
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if self.criteria.is_empty() {
            return Err(PolicyError::Empty);
        }
        for (i, c) in self.criteria.iter().enumerate() {
            if self.criteria[..i].iter().any(|prev| prev.id == c.id) {
                return Err(PolicyError::DuplicateId(c.id.clone()));
            }
        }
        for req in &self.required {
            if !self.criteria.iter().any(|c| &c.id == req) {
                return Err(PolicyError::UnknownRequiredId(req.clone()));
            }
        }
        Ok(())
    }

    /// Evaluates every criterion in definition order and aggregates the
    /// overall status. Criteria are independent: all are evaluated and
    /// reported regardless of earlier outcomes.
    ///
    /// Status resolution: all required criteria passed means the case
    /// meets policy; otherwise a fact map with no signal at all (every
    /// value falsy) is insufficient to evaluate, and anything else is a
    /// reasoned not-meets.
    pub fn evaluate(&self, facts: &FactMap) -> Determination {
        let mut criteria = Vec::with_capacity(self.criteria.len());
        for c in &self.criteria {
            let passed = eval(facts, &c.predicate);
            log::debug!("criterion {} -> {}", c.id, if passed { "PASS" } else { "FAIL" });
            criteria.push(CriterionResult {
                id: c.id.clone(),
                label: c.label.clone(),
                outcome: if passed { Outcome::Pass } else { Outcome::Fail },
                evidence: Vec::new(),
            });
        }

        let required_met = self.required.iter().all(|req| {
            criteria
                .iter()
                .any(|c| &c.id == req && c.outcome == Outcome::Pass)
        });

        let (status, summary) = if required_met {
            (
                Status::Meets,
                format!(
                    "Criteria {} satisfied; remaining criteria optional.",
                    self.required.join(" and ")
                ),
            )
        } else if facts.values().all(|v| !v.truthy()) {
            (
                Status::Insufficient,
                "Insufficient clinical facts provided to evaluate criteria.".to_string(),
            )
        } else {
            (
                Status::NotMeets,
                "Required criteria not satisfied.".to_string(),
            )
        };

        Determination {
            status,
            summary,
            criteria,
        }
    }
}

/// Evaluates the fact map against the reference policy.
pub fn evaluate(facts: &FactMap) -> Determination {
    Policy::enteral_nutrition_2025().evaluate(facts)
}
