pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod reference;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::server::ServerError;
use crate::api::types::ApiContext;
use crate::db::DatabaseError;
use crate::reference::{DiseaseReference, ReferenceError};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Start the application: load the disease reference, open and migrate
/// the database, then serve until shutdown. Both startup steps are
/// fatal on failure; there is no degraded mode.
pub async fn run() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let reference = DiseaseReference::load(&config::reference_path())?;

    let db_path = config::database_path();
    db::open_database(&db_path)?;
    tracing::info!(path = %db_path.display(), "Database ready");

    let ctx = ApiContext::new(db_path, Arc::new(reference));
    api::server::serve(config::bind_addr(), ctx).await?;
    Ok(())
}
