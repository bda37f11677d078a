//! Server configuration module

use clap::{CommandFactory, Parser, error::ErrorKind};

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    storage::{StorageBackend, StorageConfig},
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod storage;

/// Coupons JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "coupons-json", about = "Coupons JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Coupon storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed, or if the
    /// `postgres` backend is selected without a database URL.
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()?.validated()
    }

    fn validated(self) -> Result<Self, clap::Error> {
        if self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_none()
        {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "DATABASE_URL is required when STORAGE_BACKEND is postgres",
            ));
        }

        Ok(self)
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
