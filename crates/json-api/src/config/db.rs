//! Database Config

use clap::Args;

use bitewise_app::context::DatabaseConfig;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseSettings {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 10)]
    pub database_max_connections: u32,

    /// Apply pending migrations on startup
    #[arg(
        long,
        env = "RUN_MIGRATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub run_migrations: bool,
}

impl From<&DatabaseSettings> for DatabaseConfig {
    fn from(settings: &DatabaseSettings) -> Self {
        Self {
            url: settings.database_url.clone(),
            max_connections: settings.database_max_connections,
            run_migrations: settings.run_migrations,
        }
    }
}
