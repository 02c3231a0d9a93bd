use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::{PortfolioCreate, PortfolioItem};

/// Newest first; category filtering happens in-process on the full list,
/// so no predicate here.
pub async fn list_portfolio(pool: &PgPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioItem>(
        r#"
        SELECT * FROM portfolio_items
        ORDER BY created_at DESC
        LIMIT 1000
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Generic over the executor so the seed routine can run all of its
/// inserts inside one transaction.
pub async fn create_portfolio_item<'e, E>(
    executor: E,
    data: &PortfolioCreate,
) -> Result<PortfolioItem, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, PortfolioItem>(
        r#"
        INSERT INTO portfolio_items
            (title, description, category, image_url, technologies, link, client_name, duration)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.category)
    .bind(&data.image_url)
    .bind(&data.technologies)
    .bind(&data.link)
    .bind(&data.client_name)
    .bind(&data.duration)
    .fetch_one(executor)
    .await
}

pub async fn count_portfolio(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM portfolio_items"#)
        .fetch_one(pool)
        .await
}
