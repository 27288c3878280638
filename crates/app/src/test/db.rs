//! Throw-away PostgreSQL databases for integration tests
//!
//! One container is started per test binary. Each [`TestDb`] creates its own
//! database inside it, applies the migrations, and drops the database again
//! when it goes out of scope.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers_modules::{
    postgres::Postgres as PostgresImage,
    testcontainers::{ContainerAsync, runners::AsyncRunner},
};
use tokio::sync::{OnceCell, mpsc};

const USER: &str = "bitewise_test";
const PASSWORD: &str = "bitewise_test_password";

static SERVER: Lazy<OnceCell<Server>> = Lazy::new(OnceCell::new);

/// Database names waiting to be dropped. `Drop` can't await, so a
/// background task does it.
static DROPS: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

struct Server {
    _container: ContainerAsync<PostgresImage>,
    host: String,
    port: u16,
}

impl Server {
    async fn start() -> Self {
        let container = PostgresImage::default()
            .with_user(USER)
            .with_password(PASSWORD)
            .with_db_name(USER)
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        Self {
            _container: container,
            host,
            port,
        }
    }

    fn url(&self, database: &str) -> String {
        format!(
            "postgresql://{USER}:{PASSWORD}@{}:{}/{database}",
            self.host, self.port
        )
    }
}

async fn server() -> &'static Server {
    SERVER.get_or_init(Server::start).await
}

async fn drop_queue() -> mpsc::UnboundedSender<String> {
    DROPS
        .get_or_init(|| async {
            let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

            tokio::spawn(async move {
                while let Some(name) = receiver.recv().await {
                    // Best effort; the container is discarded anyway.
                    let _ = drop_database(&name).await;
                }
            });

            sender
        })
        .await
        .clone()
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    if !is_safe_identifier(name) {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&server().await.url("postgres")).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// Names are interpolated into DDL, so only lowercase ASCII letters, digits
/// and underscores are accepted, starting with a letter.
fn is_safe_identifier(name: &str) -> bool {
    name.len() <= 63
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn unique_name() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();

    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);

    format!("bitewise_test_{nanos}_{sequence}_{}", std::process::id())
}

/// An isolated, migrated database. Service methods commit normally; a clean
/// state comes from every test owning its own database.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    pub async fn new() -> Self {
        let name = unique_name();

        assert!(is_safe_identifier(&name), "bad database name {name}");

        let server = server().await;

        let mut conn = PgConnection::connect(&server.url("postgres"))
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server.url(&name))
            .await
            .expect("Failed to create pool for database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on database");

        drop_queue().await;

        Self { pool, name }
    }

    /// Returns the connection pool for this test database.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROPS.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_names_are_safe_and_unique() {
        let first = unique_name();
        let second = unique_name();

        assert!(is_safe_identifier(&first), "{first} should be accepted");
        assert_ne!(first, second);
    }

    #[test]
    fn unsafe_identifiers_are_rejected() {
        let too_long = "a".repeat(64);

        for name in ["", "1starts_with_digit", "has-hyphen", "quote\"d", "Upper", too_long.as_str()] {
            assert!(!is_safe_identifier(name), "{name:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn migrations_create_ledger_tables() {
        let test_db = TestDb::new().await;

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_name LIKE 'cart%' ORDER BY table_name",
        )
        .fetch_all(test_db.pool())
        .await
        .expect("Failed to list tables");

        assert_eq!(tables, ["cart_item_modifiers", "cart_items", "carts"]);
    }
}
