pub mod delete_all;
pub mod get_results;
pub mod health;
pub mod models;
pub mod show_results;

use sqlx::PgPool;

use crate::models::vote_models::{OptionCount, Tally};
use crate::utils::error::AppResult;

/// One grouped statement; the total is derived from the same rows, so the
/// per-option counts and the total can never disagree.
pub(crate) async fn load_tally(pool: &PgPool) -> AppResult<Tally> {
    let counts: Vec<OptionCount> = sqlx::query_as(
        "SELECT option, COUNT(*) AS count FROM votes GROUP BY option ORDER BY count DESC, option ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(Tally::from_counts(counts))
}
