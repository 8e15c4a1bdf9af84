//! Shared types for the HTTP layer.

use std::path::PathBuf;
use std::sync::Arc;

use rusqlite::Connection;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::db;
use crate::reference::DiseaseReference;

/// Shared context for all routes: the database location and the
/// immutable disease reference. Cloning is cheap (two `Arc`s).
#[derive(Clone)]
pub struct ApiContext {
    db_path: Arc<PathBuf>,
    pub reference: Arc<DiseaseReference>,
}

impl ApiContext {
    pub fn new(db_path: PathBuf, reference: Arc<DiseaseReference>) -> Self {
        Self {
            db_path: Arc::new(db_path),
            reference,
        }
    }

    /// Open a fresh connection for the current request. The connection is
    /// scoped to the handler and closed on drop, on every exit path.
    /// Migrations already ran at startup; this only opens and sets pragmas.
    pub fn open_db(&self) -> Result<Connection, ApiError> {
        let conn = db::connect(&self.db_path)?;
        Ok(conn)
    }
}

/// Body of a successful save/delete action. `message` is only present
/// on error responses.
#[derive(Debug, Serialize)]
pub struct ActionStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionStatus {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }
}
