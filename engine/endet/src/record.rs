use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use endet_model::{Determination, PatientBundle};

/// Inbound case payload as the request layer deserializes it. The engine
/// itself only reads the bundle; case and payer identifiers ride along for
/// the persisted record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeterminationRequest {
    pub case_id: String,
    pub payer_code: String,
    #[serde(default = "default_policy_version")]
    pub policy_version: String,
    pub bundle: PatientBundle,
}

fn default_policy_version() -> String {
    "2025.1".to_string()
}

/// Persisted, externally-identified determination. The caller assigns the
/// id, stores the record and attaches rendered artifact locations; the
/// engine only fills the determination itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeterminationRecord {
    pub id: String,
    pub case_id: String,
    /// Payer and policy version, e.g. `"CMS:2025.1"`.
    pub policy: String,
    #[serde(flatten)]
    pub determination: Determination,
    #[serde(default)]
    pub artifacts: BTreeMap<String, String>,
}

impl DeterminationRecord {
    pub fn new(id: impl Into<String>, req: &DeterminationRequest, det: Determination) -> Self {
        DeterminationRecord {
            id: id.into(),
            case_id: req.case_id.clone(),
            policy: format!("{}:{}", req.payer_code, req.policy_version),
            determination: det,
            artifacts: BTreeMap::new(),
        }
    }
}
