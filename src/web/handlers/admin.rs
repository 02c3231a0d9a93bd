use actix_web::{get, web, HttpRequest, Responder};
use log::error;

use forgeline::db;

use crate::web::helpers::{render, require_session};
use crate::web::state::AppState;
use crate::web::templates::AdminDashboardTemplate;

/// Protected submissions list. The guard runs first: without a live session
/// nothing below it executes, so the contact query is never issued for an
/// unauthenticated request.
#[get("/admin")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(redirect) = require_session(&req, &state.sessions) {
        return redirect;
    }

    match db::list_contacts(&state.pool).await {
        Ok(contacts) => render(AdminDashboardTemplate {
            contacts,
            load_error: None,
        }),
        Err(e) => {
            error!("failed to load contact submissions: {e}");
            render(AdminDashboardTemplate {
                contacts: Vec::new(),
                load_error: Some("Failed to load contact submissions".to_string()),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}
