//! Dashboard page.

use axum::response::Html;

use crate::api::views;

/// `GET /` — landing page.
pub async fn index() -> Html<String> {
    Html(views::dashboard())
}
