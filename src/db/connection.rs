use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;
use crate::utils::error::AppResult;

const CREATE_VOTES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS votes (
    id         BIGSERIAL PRIMARY KEY,
    option     TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

pub async fn init_db(config: &DatabaseConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.url())
        .await?;
    Ok(pool)
}

/// Creates the votes table if absent. Idempotent; both services run this at
/// startup and must not accept traffic when it fails.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::query(CREATE_VOTES_TABLE).execute(pool).await?;
    Ok(())
}

/// Trivial round trip against the store, used by the liveness endpoints.
pub async fn ping(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
