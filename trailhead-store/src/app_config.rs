use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use trailhead_catalog::{pricing::DEFAULT_TAX_RATE, PricingConfig};
use trailhead_order::{PromoRule, PromoTable, DEFAULT_BOOKING_DATES};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
    /// Replaces the built-in promo table when non-empty
    #[serde(default)]
    pub promotions: Vec<PromoRule>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// The dataset compiled into the binary
    #[default]
    Static,
    /// A JSON array of experiences read at startup
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogSource,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub booking_dates: Vec<String>,
}

fn default_tax_rate() -> f64 { DEFAULT_TAX_RATE }

fn default_currency() -> String { "INR".to_string() }

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            currency: default_currency(),
            booking_dates: DEFAULT_BOOKING_DATES.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl BusinessRules {
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.tax_rate,
            currency: self.currency.clone(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Checked-in defaults; every key also has a serde default
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, `__` between nested keys
            .add_source(config::Environment::with_prefix("TRAILHEAD").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn promo_table(&self) -> PromoTable {
        if self.promotions.is_empty() {
            PromoTable::default()
        } else {
            PromoTable::new(self.promotions.clone())
        }
    }
}
