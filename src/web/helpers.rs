use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use forgeline::services::SessionStore;

/// The one well-known place the browser keeps the admin session token.
pub const SESSION_COOKIE: &str = "fl_admin";

pub const LOGIN_ROUTE: &str = "/admin/login";

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub fn session_cookie(token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::seconds(ttl_secs))
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

pub fn session_token(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Whether a protected view may render for this token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No token at all: go straight to login, silently.
    MissingSession,
    /// A token was presented but the store no longer accepts it: tear the
    /// cookie down and say so.
    ExpiredSession,
}

pub fn authorize(token: Option<&str>, sessions: &SessionStore) -> AccessDecision {
    match token {
        None => AccessDecision::MissingSession,
        Some(t) if sessions.validate(t) => AccessDecision::Allow,
        Some(_) => AccessDecision::ExpiredSession,
    }
}

/// Uniform guard for every admin page. On denial the caller gets a
/// ready-made redirect and must not touch protected data — the protected
/// query only runs after this returns `Ok`.
pub fn require_session(req: &HttpRequest, sessions: &SessionStore) -> Result<(), HttpResponse> {
    match authorize(session_token(req).as_deref(), sessions) {
        AccessDecision::Allow => Ok(()),
        AccessDecision::MissingSession => Err(see_other(LOGIN_ROUTE)),
        AccessDecision::ExpiredSession => Err(HttpResponse::SeeOther()
            .cookie(removal_cookie())
            .insert_header(("Location", "/admin/login?error=expired"))
            .finish()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::http::{header, StatusCode};

    #[test]
    fn authorize_without_token_is_missing() {
        let sessions = SessionStore::new(3600);
        assert_eq!(authorize(None, &sessions), AccessDecision::MissingSession);
    }

    #[test]
    fn authorize_with_live_token_allows() {
        let sessions = SessionStore::new(3600);
        let token = sessions.issue();
        assert_eq!(authorize(Some(&token), &sessions), AccessDecision::Allow);
    }

    #[test]
    fn authorize_with_revoked_token_is_expired() {
        let sessions = SessionStore::new(3600);
        let token = sessions.issue();
        sessions.revoke(&token);
        assert_eq!(
            authorize(Some(&token), &sessions),
            AccessDecision::ExpiredSession
        );
    }

    #[test]
    fn authorize_with_unknown_token_is_expired() {
        let sessions = SessionStore::new(3600);
        assert_eq!(
            authorize(Some("stale"), &sessions),
            AccessDecision::ExpiredSession
        );
    }

    #[test]
    fn require_session_allows_live_token() {
        let sessions = SessionStore::new(3600);
        let token = sessions.issue();
        let req = actix_web::test::TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_http_request();

        assert!(require_session(&req, &sessions).is_ok());
    }

    #[test]
    fn require_session_without_cookie_redirects_to_login() {
        let sessions = SessionStore::new(3600);
        let req = actix_web::test::TestRequest::default().to_http_request();

        let resp = require_session(&req, &sessions).unwrap_err();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get("location").unwrap(), LOGIN_ROUTE);
        // Nothing to tear down: no cookie was presented.
        assert!(resp.headers().get(header::SET_COOKIE).is_none());
    }

    #[test]
    fn require_session_with_dead_token_tears_down_and_redirects() {
        let sessions = SessionStore::new(3600);
        let token = sessions.issue();
        sessions.revoke(&token);

        let req = actix_web::test::TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_http_request();

        let resp = require_session(&req, &sessions).unwrap_err();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("location").unwrap(),
            "/admin/login?error=expired"
        );

        // The stale cookie goes with it: emptied and expired.
        let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap();
        let cookie = Cookie::parse_encoded(set_cookie.to_str().unwrap()).unwrap();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
