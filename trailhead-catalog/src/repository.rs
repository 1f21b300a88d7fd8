use async_trait::async_trait;
use crate::experience::Experience;
use crate::CatalogError;

/// Read access to the experience catalog.
///
/// The storefront only ever reads; seat counts are owned by whatever backs
/// the implementation.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All experiences, in display order
    async fn list_experiences(&self) -> Result<Vec<Experience>, CatalogError>;

    async fn get_experience(&self, id: &str) -> Result<Option<Experience>, CatalogError> {
        let experiences = self.list_experiences().await?;
        Ok(experiences.into_iter().find(|e| e.id == id))
    }

    /// Category labels for the filter bar, "All" first
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(crate::experience::CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}
