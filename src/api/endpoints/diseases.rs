//! Disease reference endpoints: autocomplete and the full list.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::types::ApiContext;
use crate::models::{DiseaseEntry, DiseaseSuggestion};

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /disease_suggestions?q=` — at most ten case-insensitive substring
/// matches over the in-memory reference, in load order.
pub async fn suggestions(
    State(ctx): State<ApiContext>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<DiseaseSuggestion>> {
    Json(ctx.reference.suggest(&query.q))
}

/// `GET /api/diseases` — the entire reference list, unfiltered, in load
/// order.
pub async fn all(State(ctx): State<ApiContext>) -> Json<Vec<DiseaseEntry>> {
    Json(ctx.reference.entries().to_vec())
}
