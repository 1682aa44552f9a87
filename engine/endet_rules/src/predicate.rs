use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use endet_model::{FactMap, FactValue};

/// Leaf constraint on a single fact.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Expected presence. Against an evidence fact this compares the
    /// `present` flag; against any other shape it compares coerced
    /// truthiness.
    Present(bool),
    /// Numeric greater-or-equal threshold.
    Gte(f64),
    /// Numeric strictly-less-than threshold.
    Lt(f64),
    /// Bare truthiness of the fact value.
    Truthy,
}

/// Node in a boolean predicate tree. Leaves constrain one fact; composites
/// combine children with AND/OR. The tagged representation makes malformed
/// nodes unrepresentable once constructed, so evaluation is total.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Fact { fact: String, check: Check },
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn present(fact: impl Into<String>, expected: bool) -> Self {
        Predicate::Fact {
            fact: fact.into(),
            check: Check::Present(expected),
        }
    }

    pub fn gte(fact: impl Into<String>, threshold: f64) -> Self {
        Predicate::Fact {
            fact: fact.into(),
            check: Check::Gte(threshold),
        }
    }

    pub fn lt(fact: impl Into<String>, threshold: f64) -> Self {
        Predicate::Fact {
            fact: fact.into(),
            check: Check::Lt(threshold),
        }
    }

    pub fn all(children: Vec<Predicate>) -> Self {
        Predicate::All(children)
    }

    pub fn any(children: Vec<Predicate>) -> Self {
        Predicate::Any(children)
    }

    /// A node that always evaluates false, used when a config node has no
    /// recognized shape and must fail closed.
    pub fn never() -> Self {
        Predicate::Any(Vec::new())
    }
}

/// Evaluates a predicate against the fact map. Pure and total: missing
/// facts, shape mismatches and empty composites all resolve to a boolean,
/// never an error.
///
/// Leaf resolution order mirrors the policy contract: an evidence-shaped
/// value answers `Present` via its flag; `Gte`/`Lt` require a numeric value
/// and otherwise fall through to bare truthiness coercion (so a threshold
/// against a missing fact fails closed).
pub fn eval(facts: &FactMap, pred: &Predicate) -> bool {
    match pred {
        Predicate::All(children) => children.iter().all(|p| eval(facts, p)),
        Predicate::Any(children) => children.iter().any(|p| eval(facts, p)),
        Predicate::Fact { fact, check } => {
            let value = facts.get(fact);
            match check {
                Check::Present(expected) => match value {
                    Some(FactValue::Evidence { present, .. }) => present == expected,
                    other => truthy(other) == *expected,
                },
                Check::Gte(threshold) => match value {
                    Some(FactValue::Number(n)) => n >= threshold,
                    other => truthy(other),
                },
                Check::Lt(threshold) => match value {
                    Some(FactValue::Number(n)) => n < threshold,
                    other => truthy(other),
                },
                Check::Truthy => truthy(value),
            }
        }
    }
}

fn truthy(value: Option<&FactValue>) -> bool {
    value.map(FactValue::truthy).unwrap_or(false)
}

/// Wire shape of a predicate node: `{"fact": …, "present"|"gte"|"lt": …}`
/// or `{"all": […]}` / `{"any": […]}`. Unknown extra keys are ignored.
#[derive(Debug, Deserialize)]
struct RawPredicate {
    #[serde(default)]
    fact: Option<String>,
    #[serde(default)]
    present: Option<bool>,
    #[serde(default)]
    gte: Option<f64>,
    #[serde(default)]
    lt: Option<f64>,
    #[serde(default)]
    all: Option<Vec<RawPredicate>>,
    #[serde(default)]
    any: Option<Vec<RawPredicate>>,
}

impl From<RawPredicate> for Predicate {
    fn from(raw: RawPredicate) -> Self {
        if let Some(fact) = raw.fact {
            let check = if let Some(expected) = raw.present {
                Check::Present(expected)
            } else if let Some(threshold) = raw.gte {
                Check::Gte(threshold)
            } else if let Some(threshold) = raw.lt {
                Check::Lt(threshold)
            } else {
                Check::Truthy
            };
            return Predicate::Fact { fact, check };
        }
        if let Some(children) = raw.all {
            return Predicate::All(children.into_iter().map(Predicate::from).collect());
        }
        if let Some(children) = raw.any {
            return Predicate::Any(children.into_iter().map(Predicate::from).collect());
        }
        // No recognized key: fail closed instead of erroring.
        log::warn!("predicate node with no recognized key, treating as always-false");
        Predicate::never()
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawPredicate::deserialize(deserializer).map(Predicate::from)
    }
}

impl Serialize for Predicate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Predicate::Fact { fact, check } => {
                map.serialize_entry("fact", fact)?;
                match check {
                    Check::Present(expected) => map.serialize_entry("present", expected)?,
                    Check::Gte(threshold) => map.serialize_entry("gte", threshold)?,
                    Check::Lt(threshold) => map.serialize_entry("lt", threshold)?,
                    Check::Truthy => {}
                }
            }
            Predicate::All(children) => map.serialize_entry("all", children)?,
            Predicate::Any(children) => map.serialize_entry("any", children)?,
        }
        map.end()
    }
}
