//! Application router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Page routes and action routes live at the root; the reference list is
//! under `/api/`. Handlers use `State<ApiContext>`; each one opens its own
//! scoped database connection.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the application router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn app_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::dashboard::index))
        .route(
            "/add_patient",
            get(endpoints::patients::form).post(endpoints::patients::register),
        )
        .route("/prescription", get(endpoints::prescriptions::form))
        .route("/save_prescription", post(endpoints::prescriptions::save))
        .route("/disease_suggestions", get(endpoints::diseases::suggestions))
        .route("/patient_records", get(endpoints::records::patient_records))
        .route("/diagnosis", get(endpoints::records::diagnosis_page))
        .route("/get_diagnosis", get(endpoints::records::get_diagnosis))
        .route("/delete_patient/:id", delete(endpoints::patients::delete))
        .route("/api/diseases", get(endpoints::diseases::all))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
