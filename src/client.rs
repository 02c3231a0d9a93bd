//! Typed client for the Forgeline HTTP API.
//!
//! Each operation is single-shot: no retries, no backoff. A failed call is
//! reported once and the caller decides whether to resubmit. Outcomes map
//! onto a small taxonomy so callers can tell "already subscribed" and
//! "session expired" apart from a generic failure.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    ContactCreate, ContactSubmission, LoginRequest, LoginResponse, NewsletterCreate,
    NewsletterSubscription, PortfolioItem,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    /// A required field was missing or malformed. Checked locally; the
    /// request never goes on the wire.
    #[error("{0}")]
    Validation(&'static str),

    /// Newsletter signup for an email that is already subscribed.
    #[error("This email is already subscribed")]
    AlreadySubscribed,

    /// Login rejected. Deliberately does not say which part was wrong.
    #[error("Invalid admin credentials")]
    InvalidCredentials,

    /// A protected call came back 401: the session is gone. The caller
    /// must drop its stored token and send the user back to login.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// Any other non-2xx response.
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// `POST /api/contact`. Fails fast on missing required fields.
    pub async fn submit_contact(
        &self,
        data: &ContactCreate,
    ) -> Result<ContactSubmission, ClientError> {
        data.validate().map_err(ClientError::Validation)?;

        let resp = self
            .http
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(api_error(resp).await)
        }
    }

    /// `POST /api/newsletter`. A 400 means the email is already subscribed.
    pub async fn subscribe_newsletter(
        &self,
        email: &str,
    ) -> Result<NewsletterSubscription, ClientError> {
        let data = NewsletterCreate {
            email: email.to_owned(),
        };
        data.validate().map_err(ClientError::Validation)?;

        let resp = self
            .http
            .post(self.url("/api/newsletter"))
            .json(&data)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else if let Some(err) = classify_newsletter(resp.status()) {
            Err(err)
        } else {
            Err(api_error(resp).await)
        }
    }

    /// `GET /api/portfolio`. No auth. Callers rendering a page should treat
    /// a failure as an empty list, not an error state.
    pub async fn fetch_portfolio(&self) -> Result<Vec<PortfolioItem>, ClientError> {
        let resp = self.http.get(self.url("/api/portfolio")).send().await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(api_error(resp).await)
        }
    }

    /// `POST /api/admin/login`. Returns the opaque session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let data = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        data.validate().map_err(ClientError::Validation)?;

        let resp = self
            .http
            .post(self.url("/api/admin/login"))
            .json(&data)
            .send()
            .await?;
        if resp.status().is_success() {
            let body: LoginResponse = resp.json().await?;
            Ok(body.access_token)
        } else {
            // Uniform message whatever the reason; no user enumeration.
            Err(ClientError::InvalidCredentials)
        }
    }

    /// `GET /api/contact` with a bearer token. A 401 means the session is
    /// no longer valid and the token must be discarded.
    pub async fn fetch_contacts(
        &self,
        token: &str,
    ) -> Result<Vec<ContactSubmission>, ClientError> {
        let resp = self
            .http
            .get(self.url("/api/contact"))
            .bearer_auth(token)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else if let Some(err) = classify_protected(resp.status()) {
            Err(err)
        } else {
            Err(api_error(resp).await)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn classify_newsletter(status: StatusCode) -> Option<ClientError> {
    (status == StatusCode::BAD_REQUEST).then_some(ClientError::AlreadySubscribed)
}

fn classify_protected(status: StatusCode) -> Option<ClientError> {
    (status == StatusCode::UNAUTHORIZED).then_some(ClientError::SessionExpired)
}

async fn api_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status().as_u16();
    let detail = match resp.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => "request failed".to_owned(),
    };
    ClientError::Api { status, detail }
}
