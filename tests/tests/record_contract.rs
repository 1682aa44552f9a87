// Serialized record shape consumed by the persistence and rendering layers.
use endet::{determine, DeterminationRecord, DeterminationRequest};
use pretty_assertions::assert_eq;
use tests::qualifying_bundle;

#[test]
fn request_deserializes_from_the_wire_shape() {
    let json = r#"{
      "caseId": "case-42",
      "payerCode": "CMS",
      "bundle": {
        "patient": {"id": "p-1", "birthDate": "1950-03-04", "sex": "female"},
        "notes": [{"id": "n-1", "text": "dysphagia"}],
        "weights": [{"date": "2025-01-01", "kg": 80.0}],
        "bmi": 18.0
      }
    }"#;

    let req: DeterminationRequest = serde_json::from_str(json).expect("wire shape");
    assert_eq!(req.case_id, "case-42");
    // Omitted policyVersion falls back to the current default.
    assert_eq!(req.policy_version, "2025.1");
    assert_eq!(req.bundle.notes.len(), 1);
    assert_eq!(req.bundle.bmi, Some(18.0));
}

#[test]
fn record_flattens_the_determination_into_the_payload() {
    let req = DeterminationRequest {
        case_id: "case-7".to_string(),
        payer_code: "AETNA".to_string(),
        policy_version: "2025.1".to_string(),
        bundle: qualifying_bundle(),
    };
    let det = determine(&req.bundle);
    let record = DeterminationRecord::new("det-1", &req, det);

    let value: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["id"], "det-1");
    assert_eq!(value["caseId"], "case-7");
    assert_eq!(value["policy"], "AETNA:2025.1");
    assert_eq!(value["status"], "MEETS");
    assert_eq!(value["criteria"][0]["id"], "EN1");
    assert_eq!(value["criteria"][0]["outcome"], "PASS");
    assert!(value["summary"].as_str().unwrap().contains("EN1 and EN3"));
}

#[test]
fn record_round_trips_through_json() {
    let req = DeterminationRequest {
        case_id: "case-8".to_string(),
        payer_code: "UHC".to_string(),
        policy_version: "2025.1".to_string(),
        bundle: qualifying_bundle(),
    };
    let record = DeterminationRecord::new("det-2", &req, determine(&req.bundle));

    let json = serde_json::to_string(&record).unwrap();
    let back: DeterminationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
