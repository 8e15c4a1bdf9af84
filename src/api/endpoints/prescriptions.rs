//! Prescription entry page and save endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{ActionStatus, ApiContext};
use crate::api::views;
use crate::db::repository;
use crate::models::NewPrescription;

/// `GET /prescription` — entry page listing all patients for selection.
pub async fn form(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.open_db()?;
    let patients = repository::list_patient_options(&conn)?;
    Ok(Html(views::prescription_form(&patients)))
}

/// `POST /save_prescription` — validate, insert, and answer with a
/// structured status. A malformed body, a validation failure, and a
/// store failure all come back as `{status: "error", message}`; this
/// endpoint never faults.
///
/// The body is taken as loose JSON rather than a typed struct: the entry
/// form sends `patientId` as a number, but other clients send a numeric
/// string, and both must save.
pub async fn save(
    State(ctx): State<ApiContext>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Json<ActionStatus> {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => return Json(ActionStatus::error(rejection.body_text())),
    };

    let patient_id = match patient_id_from(&body) {
        Ok(id) => id,
        Err(message) => return Json(ActionStatus::error(message)),
    };

    let text = |key: &str| -> String {
        body.get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let disease = text("disease");
    if patient_id <= 0 || disease.is_empty() {
        return Json(ActionStatus::error("Patient and disease are required"));
    }

    let prescription = NewPrescription {
        patient_id,
        disease,
        namaste_code: text("namaste"),
        icd_code: text("icd11"),
        biomedicine: text("biomedicine"),
        description: text("description"),
        medication: text("medication"),
    };

    let result = ctx
        .open_db()
        .map_err(|e| e.to_string())
        .and_then(|conn| {
            repository::insert_prescription(&conn, &prescription).map_err(|e| e.to_string())
        });

    match result {
        Ok(id) => {
            tracing::info!(
                prescription_id = id,
                patient_id = prescription.patient_id,
                "Prescription saved"
            );
            Json(ActionStatus::success())
        }
        Err(message) => {
            tracing::warn!(message, "Prescription save failed");
            Json(ActionStatus::error(message))
        }
    }
}

/// Coerce `patientId` from a JSON number or numeric string. Missing (or
/// null) means no patient was selected and falls through to the
/// required-fields check; anything else is its own structured error.
fn patient_id_from(body: &Value) -> Result<i64, String> {
    match body.get("patientId") {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| format!("Invalid patientId: {n}")),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid patientId: {s}")),
        Some(other) => Err(format!("Invalid patientId: {other}")),
    }
}
