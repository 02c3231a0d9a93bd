use sqlx::PgPool;

use crate::models::{ContactCreate, ContactSubmission};

pub async fn create_contact(
    pool: &PgPool,
    data: &ContactCreate,
) -> Result<ContactSubmission, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        r#"
        INSERT INTO contact_submissions (name, email, phone, service, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(data.name.trim())
    .bind(data.email.trim())
    .bind(data.phone.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(data.service.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(data.message.trim())
    .fetch_one(pool)
    .await
}

/// Newest first, for the admin dashboard and the protected API.
pub async fn list_contacts(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        r#"
        SELECT * FROM contact_submissions
        ORDER BY created_at DESC
        LIMIT 1000
        "#,
    )
    .fetch_all(pool)
    .await
}
