use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::error;
use std::time::Duration;

use forgeline::db;
use forgeline::models::LoginRequest;
use forgeline::services::PasswordManager;

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{removal_cookie, render, see_other, session_cookie, session_token};
use crate::web::state::AppState;
use crate::web::templates::AdminLoginTemplate;

#[get("/admin/login")]
pub async fn login_form(query: web::Query<AuthQuery>) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Username and password are required".to_string(),
        "invalid" => "Invalid admin credentials".to_string(),
        "expired" => "Session expired. Please login again.".to_string(),
        "rate-limit" => "Too many login attempts. Please try again later.".to_string(),
        "internal" => "An internal error occurred. Please try again.".to_string(),
        other => other.to_string(),
    });

    render(AdminLoginTemplate { error })
}

#[post("/admin/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check(
        &format!("login:{client_ip}"),
        5,
        Duration::from_secs(300),
    ) {
        return see_other("/admin/login?error=rate-limit");
    }

    let creds = LoginRequest {
        username: form.username.trim().to_string(),
        password: form.password.clone(),
    };
    if creds.validate().is_err() {
        return see_other("/admin/login?error=missing");
    }

    let stored_hash = match db::get_admin_by_username(&state.pool, &creds.username).await {
        Ok(admin) => admin.map(|a| a.password_hash),
        Err(e) => {
            error!("database error during login: {e}");
            return see_other("/admin/login?error=internal");
        }
    };

    // Uniform failure whatever was wrong: username, password, or both.
    if !PasswordManager::verify_login(stored_hash.as_deref(), &creds.password) {
        return see_other("/admin/login?error=invalid");
    }

    let token = state.sessions.issue();
    HttpResponse::SeeOther()
        .cookie(session_cookie(&token, state.sessions.ttl_secs()))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[post("/admin/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = session_token(&req) {
        state.sessions.revoke(&token);
    }

    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header(("Location", "/admin/login"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout);
}
