//! Storage Config

use clap::Args;

/// Where coupons are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// `PostgreSQL`, migrated on startup.
    Postgres,

    /// Process memory; contents are lost on exit.
    Memory,
}

/// Storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (postgres, memory)
    #[arg(
        long = "storage-backend",
        env = "STORAGE_BACKEND",
        value_enum,
        default_value_t = StorageBackend::Postgres
    )]
    pub backend: StorageBackend,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}
