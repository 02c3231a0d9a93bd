//! JSON API consumed by `forgeline::client` and external integrations.
//! Error bodies use the `{"detail": "..."}` shape throughout.

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::error;
use serde_json::json;
use std::time::Duration;

use forgeline::db::{self, SeedOutcome};
use forgeline::models::{ContactCreate, LoginRequest, LoginResponse, NewsletterCreate};
use forgeline::services::PasswordManager;

use crate::web::state::AppState;

fn detail(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "detail": message }))
}

/// Extract the token from an `Authorization: Bearer <token>` value.
fn parse_bearer(header: &str) -> Option<&str> {
    let rest = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_bearer)
        .map(str::to_owned)
}

#[post("/api/contact")]
pub async fn create_contact(
    state: web::Data<AppState>,
    body: web::Json<ContactCreate>,
) -> impl Responder {
    if let Err(msg) = body.validate() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, msg);
    }

    match db::create_contact(&state.pool, &body).await {
        Ok(submission) => HttpResponse::Ok().json(submission),
        Err(e) => {
            error!("error creating contact submission: {e}");
            detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to submit contact form",
            )
        }
    }
}

/// Protected: requires a bearer token from `POST /api/admin/login`. A 401
/// here is the signal for clients to drop their stored token.
#[get("/api/contact")]
pub async fn list_contacts(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return detail(StatusCode::UNAUTHORIZED, "Not authenticated");
    };
    if !state.sessions.validate(&token) {
        return detail(StatusCode::UNAUTHORIZED, "Session expired");
    }

    match db::list_contacts(&state.pool).await {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(e) => {
            error!("error fetching contacts: {e}");
            detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch contact submissions",
            )
        }
    }
}

#[post("/api/newsletter")]
pub async fn subscribe_newsletter(
    state: web::Data<AppState>,
    body: web::Json<NewsletterCreate>,
) -> impl Responder {
    if let Err(msg) = body.validate() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, msg);
    }

    match db::subscribe(&state.pool, &body.email).await {
        Ok(Some(subscription)) => HttpResponse::Ok().json(subscription),
        Ok(None) => detail(StatusCode::BAD_REQUEST, "Email already subscribed"),
        Err(e) => {
            error!("error subscribing to newsletter: {e}");
            detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to subscribe to newsletter",
            )
        }
    }
}

#[get("/api/portfolio")]
pub async fn list_portfolio(state: web::Data<AppState>) -> impl Responder {
    match db::list_portfolio(&state.pool).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            error!("error fetching portfolio: {e}");
            detail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch portfolio items",
            )
        }
    }
}

#[post("/api/portfolio/seed")]
pub async fn seed_portfolio(state: web::Data<AppState>) -> impl Responder {
    match db::seed_portfolio(&state.pool).await {
        Ok(SeedOutcome::Seeded(count)) => HttpResponse::Ok().json(json!({
            "message": "Portfolio seeded successfully",
            "count": count,
        })),
        Ok(SeedOutcome::AlreadySeeded(count)) => HttpResponse::Ok().json(json!({
            "message": "Portfolio already has data",
            "count": count,
        })),
        Err(e) => {
            error!("error seeding portfolio: {e}");
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Failed to seed portfolio")
        }
    }
}

#[post("/api/admin/login")]
pub async fn admin_login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check(
        &format!("api-login:{client_ip}"),
        5,
        Duration::from_secs(300),
    ) {
        return detail(StatusCode::TOO_MANY_REQUESTS, "Too many login attempts");
    }

    if let Err(msg) = body.validate() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, msg);
    }

    let stored_hash = match db::get_admin_by_username(&state.pool, body.username.trim()).await {
        Ok(admin) => admin.map(|a| a.password_hash),
        Err(e) => {
            error!("database error during login: {e}");
            return detail(StatusCode::INTERNAL_SERVER_ERROR, "Login failed");
        }
    };

    if !PasswordManager::verify_login(stored_hash.as_deref(), &body.password) {
        return detail(StatusCode::UNAUTHORIZED, "Invalid admin credentials");
    }

    let access_token = state.sessions.issue();
    HttpResponse::Ok().json(LoginResponse { access_token })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_contact)
        .service(list_contacts)
        .service(subscribe_newsletter)
        .service(list_portfolio)
        .service(seed_portfolio)
        .service(admin_login);
}
