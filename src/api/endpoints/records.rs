//! Read-only patient listings: the records page and the diagnosis view.

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::api::views;
use crate::db::repository;
use crate::models::DiagnosisRecord;

/// `GET /patient_records` — table of patients with their current disease
/// (latest prescription, empty when none).
pub async fn patient_records(State(ctx): State<ApiContext>) -> Result<Html<String>, ApiError> {
    let conn = ctx.open_db()?;
    let records = repository::list_patient_records(&conn)?;
    Ok(Html(views::patient_records(&records)))
}

/// `GET /diagnosis` — page shell; rows come from `/get_diagnosis`.
pub async fn diagnosis_page() -> Html<String> {
    Html(views::diagnosis_page())
}

/// `GET /get_diagnosis` — diagnosis rows as JSON, one per patient,
/// `disease` always a string (never null).
pub async fn get_diagnosis(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<DiagnosisRecord>>, ApiError> {
    let conn = ctx.open_db()?;
    let records = repository::list_diagnosis_records(&conn)?;
    Ok(Json(records))
}
