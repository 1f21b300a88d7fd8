pub mod app_config;
pub mod catalog_repo;

use std::sync::Arc;
use trailhead_catalog::{CatalogError, CatalogRepository};
use app_config::{CatalogConfig, CatalogSource};

pub use catalog_repo::{JsonCatalogRepository, StaticCatalogRepository};

/// Build the catalog repository named by the configuration.
pub async fn open_catalog(config: &CatalogConfig) -> Result<Arc<dyn CatalogRepository>, CatalogError> {
    match config.source {
        CatalogSource::Static => Ok(Arc::new(StaticCatalogRepository::new())),
        CatalogSource::Json => {
            let path = config
                .path
                .as_ref()
                .ok_or_else(|| CatalogError::Unavailable("catalog.path is required for the json source".to_string()))?;
            Ok(Arc::new(JsonCatalogRepository::load(path).await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_static_catalog() {
        let catalog = open_catalog(&CatalogConfig::default()).await.unwrap();
        assert_eq!(catalog.list_experiences().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_json_source_requires_path() {
        let config = CatalogConfig { source: CatalogSource::Json, path: None };
        assert!(matches!(open_catalog(&config).await, Err(CatalogError::Unavailable(_))));
    }
}
