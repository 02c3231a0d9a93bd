use askama::Template;

use forgeline::models::{ContactSubmission, PortfolioItem};

#[derive(Template)]
#[template(path = "site/index.html")]
pub struct SiteIndexTemplate {
    pub items: Vec<PortfolioItem>,
    pub categories: Vec<String>,
    /// "All" or a category name; drives the active state of the filter bar.
    pub selected: String,
    pub sent: bool,
    pub subscribed: bool,
    pub contact_error: Option<String>,
    pub newsletter_error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub contacts: Vec<ContactSubmission>,
    pub load_error: Option<String>,
}
