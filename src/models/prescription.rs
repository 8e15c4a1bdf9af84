use serde::{Deserialize, Serialize};

/// A stored prescription. Never updated after insert; removed only when
/// its owning patient is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub disease: String,
    pub namaste_code: String,
    pub icd_code: String,
    pub description: String,
    pub medication: String,
    pub biomedicine: String,
}

/// Insert shape for a prescription. Fields are pre-trimmed by the
/// save handler.
#[derive(Debug, Clone)]
pub struct NewPrescription {
    pub patient_id: i64,
    pub disease: String,
    pub namaste_code: String,
    pub icd_code: String,
    pub description: String,
    pub medication: String,
    pub biomedicine: String,
}
