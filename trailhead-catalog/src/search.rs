use serde::{Deserialize, Serialize};
use crate::experience::{Experience, ALL_CATEGORY};

/// Filters sent by the catalog page. Missing fields mean "no filter".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    #[serde(rename = "q")]
    pub query: Option<String>,
}

impl CatalogQuery {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            query: Some(query.into()),
        }
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORY)
    }

    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Category matches exactly (or "All" is selected) and the query is a
    /// case-insensitive substring of the title or the location.
    pub fn matches(&self, experience: &Experience) -> bool {
        let category = self.category();
        let matches_category = category == ALL_CATEGORY || experience.category == category;

        let query = self.query().to_lowercase();
        let matches_search = query.is_empty()
            || experience.title.to_lowercase().contains(&query)
            || experience.location.to_lowercase().contains(&query);

        matches_category && matches_search
    }
}

/// Keep the experiences that match `query`, preserving catalog order.
pub fn filter_experiences<'a>(experiences: &'a [Experience], query: &CatalogQuery) -> Vec<&'a Experience> {
    let filtered: Vec<&Experience> = experiences.iter().filter(|e| query.matches(e)).collect();

    tracing::debug!(
        category = query.category(),
        query = query.query(),
        matched = filtered.len(),
        "Filtered catalog"
    );

    filtered
}
