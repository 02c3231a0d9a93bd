use actix_web::{get, post, web, Responder};
use log::{error, warn};

use forgeline::db;
use forgeline::models::{categories, visible_items};

use crate::web::forms::{ContactForm, IndexQuery, NewsletterForm};
use crate::web::helpers::{render, see_other};
use crate::web::state::AppState;
use crate::web::templates::SiteIndexTemplate;

/// The whole public site is one page. The portfolio list comes from the
/// database on every request; if that fails the page still renders, with an
/// empty showcase instead of an error state.
#[get("/")]
pub async fn index(state: web::Data<AppState>, query: web::Query<IndexQuery>) -> impl Responder {
    let all = match db::list_portfolio(&state.pool).await {
        Ok(items) => items,
        Err(e) => {
            warn!("portfolio fetch failed, rendering empty showcase: {e}");
            Vec::new()
        }
    };

    let selected = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != "All")
        .map(str::to_string);

    let items = visible_items(&all, selected.as_deref());
    let cats = categories(&all);

    render(SiteIndexTemplate {
        items,
        categories: cats,
        selected: selected.unwrap_or_else(|| "All".to_string()),
        sent: query.sent.is_some(),
        subscribed: query.subscribed.is_some(),
        contact_error: query.contact_error.as_deref().map(contact_error_message),
        newsletter_error: query
            .newsletter_error
            .as_deref()
            .map(newsletter_error_message),
    })
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let data = form.into_inner().into_create();

    // Required-field check is local; nothing hits the database on failure.
    if let Err(msg) = data.validate() {
        return see_other(&format!(
            "/?contact_error={}#contact",
            urlencoding::encode(msg)
        ));
    }

    match db::create_contact(&state.pool, &data).await {
        Ok(_) => see_other("/?sent=1#contact"),
        Err(e) => {
            error!("contact submission failed: {e}");
            see_other("/?contact_error=failed#contact")
        }
    }
}

#[post("/newsletter")]
pub async fn newsletter_submit(
    state: web::Data<AppState>,
    form: web::Form<NewsletterForm>,
) -> impl Responder {
    let data = forgeline::models::NewsletterCreate {
        email: form.email.clone(),
    };
    if let Err(msg) = data.validate() {
        return see_other(&format!(
            "/?newsletter_error={}#newsletter",
            urlencoding::encode(msg)
        ));
    }

    match db::subscribe(&state.pool, &data.email).await {
        Ok(Some(_)) => see_other("/?subscribed=1#newsletter"),
        Ok(None) => see_other("/?newsletter_error=duplicate#newsletter"),
        Err(e) => {
            error!("newsletter signup failed: {e}");
            see_other("/?newsletter_error=failed#newsletter")
        }
    }
}

/// Flash codes carried in the redirect query. Unknown values fall through
/// as-is, which is how validation messages travel.
fn contact_error_message(code: &str) -> String {
    match code {
        "failed" => "Failed to send message. Please try again.".to_string(),
        other => other.to_string(),
    }
}

fn newsletter_error_message(code: &str) -> String {
    match code {
        "duplicate" => "This email is already subscribed".to_string(),
        "failed" => "Failed to subscribe. Please try again.".to_string(),
        other => other.to_string(),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(contact_submit)
        .service(newsletter_submit);
}
