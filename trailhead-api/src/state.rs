use std::sync::Arc;
use trailhead_catalog::{CatalogRepository, PricingEngine};
use trailhead_order::{BookingDesk, CheckoutService};
use trailhead_store::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub booking: Arc<BookingDesk>,
    pub checkout: Arc<CheckoutService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, config: &Config) -> Self {
        let pricing = PricingEngine::new(config.business_rules.pricing());

        Self {
            catalog,
            booking: Arc::new(BookingDesk::new(pricing, config.business_rules.booking_dates.clone())),
            checkout: Arc::new(CheckoutService::new(config.promo_table())),
        }
    }
}
