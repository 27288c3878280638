//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    clover::{CloverClient, CloverConfig, HttpCloverClient},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        catalog::{CatalogService, RemoteCatalogService},
        merchants::{MerchantsService, PgMerchantsService},
        recommendations::{PgRecommendationsService, RecommendationsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub merchants: Arc<dyn MerchantsService>,
    pub users: Arc<dyn UsersService>,
    pub recommendations: Arc<dyn RecommendationsService>,
}

impl AppContext {
    /// Build application context from database and Clover settings.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_config(
        database: &DatabaseConfig,
        clover: CloverConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(&database.url, database.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if database.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        let db = Db::new(pool);
        let merchants: Arc<dyn MerchantsService> = Arc::new(PgMerchantsService::new(db.clone()));
        let clover: Arc<dyn CloverClient> = Arc::new(HttpCloverClient::new(clover));

        Ok(Self {
            carts: Arc::new(PgCartsService::new(db.clone())),
            catalog: Arc::new(RemoteCatalogService::new(Arc::clone(&merchants), clover)),
            users: Arc::new(PgUsersService::new(db.clone())),
            recommendations: Arc::new(PgRecommendationsService::new(db)),
            merchants,
        })
    }
}
