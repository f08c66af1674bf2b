//! Database access for the storefront `PostgreSQL`.
//!
//! The catalog is compiled in and accounts live with the identity
//! provider, so the database only holds the `tower_sessions` table
//! (carts, POS tickets, checkout status, signed-in customer).
//!
//! The table is created by `PostgresStore::migrate`, either at startup
//! or with:
//! ```bash
//! cargo run -p adventure-works-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Create a `PostgreSQL` connection pool.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Create the session table if it does not exist yet.
///
/// # Errors
///
/// Returns `sqlx::Error` if the migration query fails.
pub async fn migrate_sessions(pool: &PgPool) -> Result<(), sqlx::Error> {
    tower_sessions_sqlx_store::PostgresStore::new(pool.clone())
        .migrate()
        .await
}
