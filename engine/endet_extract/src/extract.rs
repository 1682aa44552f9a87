use endet_model::facts::names;
use endet_model::{FactMap, FactValue, PatientBundle};

use crate::keywords::{self, contains_any_plain, contains_keyword};
use crate::trend::{weight_loss_percent, DEFAULT_LOOKBACK_DAYS};

/// Substrings that mark a documented nutrition plan.
const PLAN_NEEDLES: [&str; 2] = ["nutrition plan", "dietitian"];

/// Substrings that mark a physician order for enteral access. Plain
/// substring semantics, so "tube" inside a longer word also counts.
const ORDER_NEEDLES: [&str; 3] = ["peg", "tube", "nutrition order"];

/// Derives the canonical fact map from a patient bundle.
///
/// Evidence facts are emitted unconditionally with a fixed confidence per
/// category; the weight-loss and BMI scalars are emitted only when
/// available. Caller-supplied facts from `bundle.facts` are overlaid last
/// and overwrite any same-named computed fact: the caller is authoritative
/// over the heuristics. The overlay is a separate final step so computed
/// and overridden values stay distinguishable for audit.
pub fn extract(bundle: &PatientBundle) -> FactMap {
    let mut facts = FactMap::new();

    let dysphagia = any_note_matches(bundle, &keywords::DYSPHAGIA);
    let gi = any_note_matches(bundle, &keywords::GI_DYSFUNCTION);
    let intake_fail = any_note_matches(bundle, &keywords::INTAKE_FAILURE);
    log::debug!("note evidence: dysphagia={dysphagia} gi={gi} intake_fail={intake_fail}");

    facts.insert(
        names::DYSPHAGIA_EVIDENCE.to_string(),
        FactValue::evidence(dysphagia, if dysphagia { 0.8 } else { 0.2 }),
    );
    facts.insert(
        names::GI_DYSFUNCTION.to_string(),
        FactValue::evidence(gi, if gi { 0.7 } else { 0.2 }),
    );
    facts.insert(
        names::FAILURE_OF_ORAL_INTAKE.to_string(),
        FactValue::evidence(intake_fail, if intake_fail { 0.7 } else { 0.2 }),
    );

    if let Some(loss) = weight_loss_percent(&bundle.weights, DEFAULT_LOOKBACK_DAYS) {
        facts.insert(names::WEIGHT_LOSS_PCT.to_string(), loss.pct.into());
    }
    if let Some(bmi) = bundle.bmi {
        // Passed through unmodified; validation happened upstream.
        facts.insert(names::BMI_VALUE.to_string(), bmi.into());
    }

    let plan = bundle
        .notes
        .iter()
        .any(|n| contains_any_plain(&n.text, &PLAN_NEEDLES));
    let order = bundle
        .notes
        .iter()
        .any(|n| contains_any_plain(&n.text, &ORDER_NEEDLES));
    facts.insert(names::NUTRITION_PLAN_DOCUMENTED.to_string(), plan.into());
    facts.insert(names::PHYSICIAN_ORDER_PRESENT.to_string(), order.into());

    // Caller-supplied facts win over everything computed above.
    for (name, value) in &bundle.facts {
        if facts.insert(name.clone(), value.clone()).is_some() {
            log::debug!("fact {name:?} overridden by caller");
        }
    }

    facts
}

fn any_note_matches(bundle: &PatientBundle, category: &[&str]) -> bool {
    bundle
        .notes
        .iter()
        .any(|n| contains_keyword(&n.text, category))
}
