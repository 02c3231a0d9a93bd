use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Server side of the admin session: opaque tokens with an expiry.
///
/// This is the single source of truth for "is this session valid" — every
/// protected call site asks here, never the cookie or header directly.
/// Sessions live in memory only; a restart logs admins out, which matches
/// the re-login-on-expiry contract. There is no refresh: a session ends by
/// logout or by aging out.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_secs),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Mint a fresh session and return its opaque token. Issuing also sweeps
    /// entries that have aged out, so abandoned sessions do not accumulate
    /// across logins.
    pub fn issue(&self) -> String {
        self.issue_at(Utc::now())
    }

    pub fn issue_at(&self, now: DateTime<Utc>) -> String {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.lock();
        sessions.retain(|_, expires_at| *expires_at > now);
        sessions.insert(token.clone(), now + self.ttl);
        token
    }

    /// True when the token refers to a live session. An expired entry is
    /// dropped on the way out.
    pub fn validate(&self, token: &str) -> bool {
        self.validate_at(token, Utc::now())
    }

    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> bool {
        let mut sessions = self.lock();
        match sessions.get(token) {
            Some(expires_at) if *expires_at > now => true,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    /// End a session. Unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) {
        self.lock().remove(token);
    }

    /// Session lifetime, exposed so the cookie max-age can match it.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, DateTime<Utc>>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
