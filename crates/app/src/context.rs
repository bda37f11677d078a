//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database,
    domain::coupons::{
        CouponsRepository, CouponsService, CouponsUseCases,
        repositories::{InMemoryCouponsRepository, PgCouponsRepository},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub coupons: Arc<dyn CouponsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Pending migrations are applied before the context is returned.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or migrating it fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        info!("database migrations applied");

        let repository = PgCouponsRepository::new(pool);

        Ok(Self::from_repository(Arc::new(repository)))
    }

    /// Build application context over an empty in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(InMemoryCouponsRepository::new()))
    }

    #[must_use]
    pub fn from_repository(repository: Arc<dyn CouponsRepository>) -> Self {
        Self {
            coupons: Arc::new(CouponsUseCases::new(repository)),
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
