/// Database migration runner
///
/// Migrations live in the `migrations/` directory at the workspace root and
/// are embedded into the binary at compile time, so a deployed server can
/// bring its own schema up to date at startup.

use sqlx::postgres::PgPool;
use tracing::info;

/// Runs all pending database migrations.
///
/// Already-applied migrations are skipped; a failed migration is rolled
/// back and returned as an error.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");

    sqlx::migrate!("../migrations").run(pool).await?;

    info!("Database migrations complete");
    Ok(())
}
