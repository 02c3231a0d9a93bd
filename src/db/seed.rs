use log::info;
use sqlx::PgPool;

use crate::common::GeneralError;
use crate::db;
use crate::models::PortfolioCreate;
use crate::services::PasswordManager;

/// Result of a seed run, reported back by `POST /api/portfolio/seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Rows were inserted; carries how many.
    Seeded(usize),
    /// The table already had data; carries the existing count.
    AlreadySeeded(i64),
}

/// Populate the showcase with sample work if the table is empty. Running it
/// twice is safe: a non-empty table short-circuits. The inserts share one
/// transaction, so a failure part-way leaves the table empty and the next
/// run starts from scratch instead of reporting a half-seeded table as done.
pub async fn seed_portfolio(pool: &PgPool) -> Result<SeedOutcome, sqlx::Error> {
    let existing = db::count_portfolio(pool).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded(existing));
    }

    let items = sample_portfolio();
    let mut tx = pool.begin().await?;
    for item in &items {
        db::create_portfolio_item(&mut *tx, item).await?;
    }
    tx.commit().await?;

    info!("seeded portfolio with {} sample items", items.len());
    Ok(SeedOutcome::Seeded(items.len()))
}

/// Create the admin account from configuration if it does not exist yet.
/// The password is hashed here; plaintext never reaches the database.
pub async fn ensure_admin(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<(), GeneralError> {
    if db::get_admin_by_username(pool, username).await?.is_some() {
        return Ok(());
    }

    let hash = PasswordManager::hash_password(password)
        .map_err(|e| GeneralError::PasswordHash(e.to_string()))?;

    if db::create_admin(pool, username, &hash).await?.is_some() {
        info!("created admin account '{username}'");
    }
    Ok(())
}

fn sample_portfolio() -> Vec<PortfolioCreate> {
    let entry = |title: &str,
                 description: &str,
                 category: &str,
                 image_url: &str,
                 technologies: &[&str],
                 client_name: &str,
                 duration: &str| PortfolioCreate {
        title: title.into(),
        description: description.into(),
        category: category.into(),
        image_url: image_url.into(),
        technologies: technologies.iter().map(|s| (*s).into()).collect(),
        link: None,
        client_name: Some(client_name.into()),
        duration: Some(duration.into()),
    };

    vec![
        entry(
            "TechCorp Enterprise Platform",
            "Comprehensive enterprise platform with real-time analytics, user management, and advanced reporting. Improved operational efficiency by 60%.",
            "Web Development",
            "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
            &["React", "Node.js", "PostgreSQL", "AWS"],
            "TechCorp International",
            "4 months",
        ),
        entry(
            "HealthTrack Mobile App",
            "Health tracking application with AI-powered insights, workout plans, and nutrition tracking.",
            "UI/UX Design",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&h=600&fit=crop",
            &["React Native", "Firebase", "TensorFlow", "Figma"],
            "HealthTrack Inc.",
            "3 months",
        ),
        entry(
            "E-Commerce Revolution",
            "Complete e-commerce platform redesign with modern UI, seamless checkout, and personalized recommendations. Conversion rate up 45%.",
            "Web Development",
            "https://images.unsplash.com/photo-1557821552-17105176677c?w=800&h=600&fit=crop",
            &["Next.js", "Shopify", "Stripe", "Tailwind CSS"],
            "StyleHub Retail",
            "5 months",
        ),
        entry(
            "FinTech Dashboard",
            "Financial dashboard with real-time data visualization, transaction tracking, and predictive analytics for investment decisions.",
            "Web Development",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
            &["Vue.js", "D3.js", "Python", "MongoDB"],
            "InvestPro",
            "6 months",
        ),
        entry(
            "EduLearn Platform",
            "Interactive learning management system with video courses, live sessions, quizzes, and progress tracking.",
            "Landing Page",
            "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=800&h=600&fit=crop",
            &["React", "FastAPI", "WebRTC", "PostgreSQL"],
            "EduLearn Academy",
            "4 months",
        ),
        entry(
            "Restaurant Booking System",
            "Restaurant booking and management system with real-time table availability, menu showcase, and customer reviews.",
            "Web Development",
            "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=800&h=600&fit=crop",
            &["React", "Node.js", "MySQL", "Socket.io"],
            "Gourmet Bistro",
            "2 months",
        ),
    ]
}
