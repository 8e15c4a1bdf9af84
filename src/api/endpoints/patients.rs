//! Patient registration and deletion.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ActionStatus, ApiContext};
use crate::api::views;
use crate::db::repository;
use crate::models::NewPatient;

/// `GET /add_patient` — registration form with an advisory next-id
/// preview (`max(id) + 1`). The store assigns the real id on insert.
pub async fn form(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.open_db()?;
    let next_id = repository::next_patient_id(&conn)?;
    Ok(Html(views::add_patient_form(next_id)))
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub patient_id: i64,
}

/// `POST /add_patient` — insert one patient row from the form fields.
/// All seven fields are required by the form extractor; values are stored
/// as given, with column affinity handling the age.
pub async fn register(
    State(ctx): State<ApiContext>,
    Form(patient): Form<NewPatient>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let conn = ctx.open_db()?;
    let patient_id = repository::insert_patient(&conn, &patient)?;

    tracing::info!(patient_id, "Patient registered");
    Ok(Json(RegisterResponse {
        status: "success",
        patient_id,
    }))
}

/// `DELETE /delete_patient/:id` — remove a patient and all of its
/// prescriptions in one transaction. Failures come back as a structured
/// `{status: "error", message}` body, never as a fault.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<i64>,
) -> Json<ActionStatus> {
    let result = ctx
        .open_db()
        .map_err(|e| e.to_string())
        .and_then(|mut conn| {
            repository::delete_patient(&mut conn, patient_id).map_err(|e| e.to_string())
        });

    match result {
        Ok(()) => {
            tracing::info!(patient_id, "Patient deleted");
            Json(ActionStatus::success())
        }
        Err(message) => {
            tracing::warn!(patient_id, message, "Patient deletion failed");
            Json(ActionStatus::error(message))
        }
    }
}
