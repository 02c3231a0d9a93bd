use sqlx::PgPool;
use std::sync::Arc;

use forgeline::services::SessionStore;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub sessions: Arc<SessionStore>,
    pub rate_limiter: Arc<RateLimiter>,
}
