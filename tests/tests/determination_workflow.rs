// End-to-end workflow: bundle -> fact extraction -> criteria evaluation.
use endet::{determine, extract, FactValue, Outcome, PatientBundle, Status};
use pretty_assertions::assert_eq;
use tests::{note, qualifying_bundle, weight};

#[test]
fn qualifying_bundle_meets_policy() {
    let det = determine(&qualifying_bundle());
    assert_eq!(det.status, Status::Meets);
    assert_eq!(
        det.criteria.iter().map(|c| (c.id.as_str(), c.outcome)).collect::<Vec<_>>(),
        vec![
            ("EN1", Outcome::Pass),
            ("EN2", Outcome::Pass),
            ("EN3", Outcome::Pass),
        ]
    );
}

#[test]
fn extracted_facts_feed_the_weight_loss_criterion() {
    let bundle = qualifying_bundle();
    let facts = extract(&bundle);
    // (82 - 72) / 82 * 100 = 12.2, within the 180-day window.
    assert_eq!(facts["weight_loss_pct"], FactValue::Number(12.2));
}

#[test]
fn documentation_without_clinical_need_does_not_meet() {
    let mut bundle = PatientBundle::for_patient("patient-2");
    bundle.notes.push(note(
        "n-1",
        "PEG tube ordered; nutrition plan documented by dietitian.",
    ));

    let det = determine(&bundle);
    // EN3 passes but EN1 fails; extraction always emits evidence facts, so
    // this is a reasoned NOT_MEETS rather than INSUFFICIENT.
    assert_eq!(det.status, Status::NotMeets);
}

#[test]
fn negated_symptoms_fail_the_clinical_criterion() {
    let mut bundle = qualifying_bundle();
    bundle.notes[0].text = "Denies dysphagia. Oral intake adequate.".to_string();

    let det = determine(&bundle);
    assert_eq!(det.criteria[0].outcome, Outcome::Fail);
    assert_eq!(det.status, Status::NotMeets);
}

#[test]
fn caller_overrides_can_force_a_qualifying_determination() {
    let mut bundle = PatientBundle::for_patient("patient-3");
    bundle.facts.insert(
        "dysphagia_evidence".to_string(),
        FactValue::evidence(true, 1.0),
    );
    bundle
        .facts
        .insert("physician_order_present".to_string(), FactValue::Bool(true));
    bundle.facts.insert(
        "nutrition_plan_documented".to_string(),
        FactValue::Bool(true),
    );

    assert_eq!(determine(&bundle).status, Status::Meets);
}

#[test]
fn bmi_alone_satisfies_only_the_optional_criterion() {
    let mut bundle = PatientBundle::for_patient("patient-4");
    bundle.bmi = Some(17.2);

    let det = determine(&bundle);
    assert_eq!(det.criteria[1].outcome, Outcome::Pass);
    assert_eq!(det.status, Status::NotMeets);
}

#[test]
fn sparse_weight_history_leaves_en2_to_bmi() {
    let mut bundle = PatientBundle::for_patient("patient-5");
    // Two entries, but the older one falls outside the lookback window.
    bundle.weights.push(weight("2024-01-01", 90.0));
    bundle.weights.push(weight("2025-06-01", 75.0));

    let facts = extract(&bundle);
    assert!(!facts.contains_key("weight_loss_pct"));
    assert_eq!(determine(&bundle).criteria[1].outcome, Outcome::Fail);
}

#[test]
fn determinations_for_different_cases_are_independent() {
    let qualifying = qualifying_bundle();
    let empty = PatientBundle::for_patient("patient-6");

    let first = determine(&qualifying);
    let second = determine(&empty);
    let third = determine(&qualifying);

    assert_eq!(first, third);
    assert_eq!(second.status, Status::NotMeets);
}
