use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::common::validate::{is_present, is_valid_email};

/// An inquiry submitted through the public contact form. Written once by the
/// site, then read-only; only an authenticated admin can list these.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
}

impl ContactCreate {
    /// Precondition for submission: name, email, and message must be
    /// present, and the email must look like one. Runs before any I/O.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !is_present(&self.name) || !is_present(&self.email) || !is_present(&self.message) {
            return Err("Please fill in all required fields");
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address");
        }
        Ok(())
    }
}
