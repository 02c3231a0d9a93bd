use chrono::{DateTime, Utc};
use uuid::Uuid;

use forgeline::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_project(n: u32, title: &str, category: &str) -> PortfolioItem {
    PortfolioItem {
        id: Uuid::parse_str(&format!("00000000-0000-0000-0000-{n:012}")).unwrap(),
        title: title.to_string(),
        description: format!("{title} case study"),
        category: category.to_string(),
        image_url: format!("https://images.example.com/{n}.jpg"),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        link: None,
        client_name: Some("Seed Client".to_string()),
        duration: Some("3 months".to_string()),
        created_at: parse_time("2026-08-04 22:15:06+00"),
    }
}

pub fn get_seed_showcase() -> Vec<PortfolioItem> {
    vec![
        get_seed_project(0, "Enterprise Platform", "Web Development"),
        get_seed_project(1, "Health App", "UI/UX Design"),
        get_seed_project(2, "Storefront Redesign", "Web Development"),
        get_seed_project(3, "Course Launch Page", "Landing Page"),
        get_seed_project(4, "Booking System", "Web Development"),
    ]
}

pub fn get_seed_contact() -> ContactCreate {
    ContactCreate {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: Some("+1 555 0100".to_string()),
        service: Some("web-development".to_string()),
        message: "We need a new marketing site.".to_string(),
    }
}
