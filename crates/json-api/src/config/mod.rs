//! Server configuration module

use clap::Parser;

use crate::config::{
    clover::CloverSettings,
    db::DatabaseSettings,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod clover;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Bitewise JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "bitewise-json", about = "Bitewise JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseSettings,

    /// Clover REST API settings.
    #[command(flatten)]
    pub clover: CloverSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_parse_applies_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "bitewise-json",
            "--database-url",
            "postgres://localhost/bitewise",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.database.database_max_connections, 10);
        assert!(config.database.run_migrations, "migrations should run by default");
        assert_eq!(config.clover.clover_base_url, "https://apisandbox.dev.clover.com");
        assert_eq!(config.clover.clover_page_size, 100);

        Ok(())
    }

    #[test]
    fn test_parse_rejects_zero_page_size() {
        let result = ServerConfig::try_parse_from([
            "bitewise-json",
            "--database-url",
            "postgres://localhost/bitewise",
            "--clover-page-size",
            "0",
        ]);

        assert!(result.is_err(), "expected zero page size to be rejected");
    }
}
