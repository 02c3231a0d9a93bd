use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A showcase entry displayed on the public site. Read-only from the site's
/// perspective; rows are created by the seed routine or the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub client_name: Option<String>,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioCreate {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub client_name: Option<String>,
    pub duration: Option<String>,
}

/// The items shown for a category selection. `None` means "All": the full
/// list, untouched. Otherwise the subsequence whose category matches
/// exactly, original order preserved.
pub fn visible_items(items: &[PortfolioItem], category: Option<&str>) -> Vec<PortfolioItem> {
    match category {
        None => items.to_vec(),
        Some(cat) => items
            .iter()
            .filter(|item| item.category == cat)
            .cloned()
            .collect(),
    }
}

/// Distinct categories in first-appearance order, for the filter bar.
pub fn categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|c| c == &item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            image_url: String::new(),
            technologies: vec![],
            link: None,
            client_name: None,
            duration: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn all_selection_returns_full_list() {
        let items = vec![
            item("a", "Web Development"),
            item("b", "UI/UX Design"),
            item("c", "Web Development"),
        ];
        let visible = visible_items(&items, None);
        let titles: Vec<&str> = visible.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn category_selection_keeps_matches_in_order() {
        let items = vec![
            item("a", "Web Development"),
            item("b", "UI/UX Design"),
            item("c", "Web Development"),
            item("d", "Landing Page"),
        ];
        let visible = visible_items(&items, Some("Web Development"));
        let titles: Vec<&str> = visible.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn unknown_category_yields_empty_set() {
        let items = vec![item("a", "Web Development")];
        assert!(visible_items(&items, Some("Branding")).is_empty());
    }

    #[test]
    fn categories_are_distinct_first_appearance() {
        let items = vec![
            item("a", "Web Development"),
            item("b", "UI/UX Design"),
            item("c", "Web Development"),
            item("d", "Landing Page"),
        ];
        assert_eq!(
            categories(&items),
            ["Web Development", "UI/UX Design", "Landing Page"]
        );
    }

    #[test]
    fn categories_of_empty_list_is_empty() {
        assert!(categories(&[]).is_empty());
    }
}
