use sqlx::PgPool;

use crate::models::AdminUser;

pub async fn get_admin_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<AdminUser>, sqlx::Error> {
    sqlx::query_as::<_, AdminUser>(r#"SELECT * FROM admin_users WHERE username = $1"#)
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Returns `None` when the username is taken.
pub async fn create_admin(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
) -> Result<Option<AdminUser>, sqlx::Error> {
    sqlx::query_as::<_, AdminUser>(
        r#"
        INSERT INTO admin_users (username, password_hash)
        VALUES ($1, $2)
        ON CONFLICT (username) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_optional(pool)
    .await
}
