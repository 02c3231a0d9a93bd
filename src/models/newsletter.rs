use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::common::validate::{is_present, is_valid_email};

/// A newsletter signup. The email column is unique; a second signup with the
/// same address is a distinct "already subscribed" outcome, not a failure.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NewsletterSubscription {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterCreate {
    pub email: String,
}

impl NewsletterCreate {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !is_present(&self.email) {
            return Err("Please enter your email");
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address");
        }
        Ok(())
    }
}
