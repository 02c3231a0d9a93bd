use sqlx::PgPool;

use crate::models::NewsletterSubscription;

/// Insert a signup. Returns `None` when the email is already subscribed —
/// the unique constraint plus `DO NOTHING` makes the duplicate check and
/// the insert a single atomic statement.
pub async fn subscribe(
    pool: &PgPool,
    email: &str,
) -> Result<Option<NewsletterSubscription>, sqlx::Error> {
    sqlx::query_as::<_, NewsletterSubscription>(
        r#"
        INSERT INTO newsletter_subscriptions (email)
        VALUES ($1)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(email.trim().to_lowercase())
    .fetch_optional(pool)
    .await
}
