//! Database migration command.
//!
//! # Environment Variables
//!
//! - `TANNERY_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/server/migrations/`.

use secrecy::SecretString;
use tracing::info;

use tannery_server::db;

/// Errors from the migrate command.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run catalog database migrations.
///
/// # Errors
///
/// Returns [`MigrationError`] if the database URL is missing, the
/// connection fails, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("TANNERY_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("TANNERY_DATABASE_URL"))?;

    info!("Connecting to catalog database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running catalog migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    info!("Catalog migrations complete!");
    Ok(())
}
