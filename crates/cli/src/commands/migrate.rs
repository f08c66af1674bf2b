//! Database migration commands.
//!
//! The storefront keeps only sessions in `PostgreSQL`; this creates the
//! `tower_sessions` table ahead of the first deploy.
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` (fallback `DATABASE_URL`) - `PostgreSQL`
//!   connection string

use secrecy::SecretString;

use adventure_works_storefront::db;

/// Errors from the migrate command.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn database_url() -> Result<SecretString, MigrationError> {
    std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("STOREFRONT_DATABASE_URL"))
}

/// Create the session table if it does not exist.
///
/// # Errors
///
/// Returns an error if the URL is missing or the database is unreachable.
pub async fn sessions() -> Result<(), MigrationError> {
    let _ = dotenvy::dotenv();
    let database_url = database_url()?;

    tracing::info!("Connecting to storefront database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Creating session table...");
    db::migrate_sessions(&pool).await?;

    tracing::info!("Session table ready");
    Ok(())
}
