use std::fmt;

use rusqlite::types::{FromSql, FromSqlResult, ValueRef};
use serde::{Deserialize, Serialize};

/// Age as stored. Registration accepts free text and the age column's
/// affinity only coerces numeric input, so a listing row may carry
/// either shape; both are rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Float(f64),
    Text(String),
}

impl FromSql for AgeValue {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Integer(n) => AgeValue::Number(n),
            ValueRef::Real(f) => AgeValue::Float(f),
            ValueRef::Text(t) => AgeValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(_) | ValueRef::Null => AgeValue::Text(String::new()),
        })
    }
}

impl fmt::Display for AgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeValue::Number(n) => write!(f, "{n}"),
            AgeValue::Float(x) => write!(f, "{x}"),
            AgeValue::Text(s) => f.write_str(s),
        }
    }
}

/// Registration form payload. All fields arrive as text; the store's
/// column affinity handles the age column, matching the registration
/// contract of storing input as given.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub address: String,
    pub contact: String,
    pub admission_date: String,
    pub room: String,
}

/// Minimal projection for selection controls.
#[derive(Debug, Clone, Serialize)]
pub struct PatientOption {
    pub id: i64,
    pub name: String,
}

/// Row of the patient records view: identity columns plus the current
/// disease (latest prescription, empty string when none).
#[derive(Debug, Clone, Serialize)]
pub struct PatientRecord {
    pub id: i64,
    pub name: String,
    pub age: AgeValue,
    pub contact: String,
    pub disease: String,
}

/// Row of the diagnosis listing. Same current-disease rule as
/// [`PatientRecord`], wider projection.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisRecord {
    pub id: i64,
    pub name: String,
    pub age: AgeValue,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub disease: String,
}
