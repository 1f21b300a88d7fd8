pub mod experience;
pub mod availability;
pub mod pricing;
pub mod repository;
pub mod search;

pub use experience::{Experience, ExperienceSummary, TimeSlot, ALL_CATEGORY, CATEGORIES};
pub use availability::{check_bookable, slot_availability, AvailabilityError, SlotAvailability};
pub use pricing::{PriceBreakdown, PricingConfig, PricingEngine};
pub use repository::CatalogRepository;
pub use search::{filter_experiences, CatalogQuery};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate experience id: {0}")]
    DuplicateId(String),
}
