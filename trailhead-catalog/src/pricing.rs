use serde::{Deserialize, Serialize};

/// Default tax rate applied on top of the subtotal
pub const DEFAULT_TAX_RATE: f64 = 0.06;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of the subtotal charged as tax
    pub tax_rate: f64,

    /// Display currency, e.g. "INR"
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency: "INR".to_string(),
        }
    }
}

/// Itemised price for a number of guests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub quantity: u32,
    pub subtotal: i64,
    pub taxes: i64,
    pub total: i64,
}

/// Computes booking totals
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// `subtotal = price × quantity`, `taxes = round(subtotal × rate)`,
    /// `total = subtotal + taxes`. Quantity is taken as given; clamp it first.
    pub fn quote(&self, unit_price: i64, quantity: u32) -> PriceBreakdown {
        let subtotal = unit_price * i64::from(quantity);
        let taxes = round_amount(subtotal as f64 * self.config.tax_rate);

        PriceBreakdown {
            quantity,
            subtotal,
            taxes,
            total: subtotal + taxes,
        }
    }
}

/// Round to the nearest whole unit, halves upward.
pub fn round_amount(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_two_guests() {
        let engine = PricingEngine::default();
        let quote = engine.quote(999, 2);

        assert_eq!(quote.subtotal, 1998);
        assert_eq!(quote.taxes, 120); // 119.88
        assert_eq!(quote.total, 2118);
    }

    #[test]
    fn test_quote_holds_for_every_quantity() {
        let engine = PricingEngine::default();
        for quantity in 1..=20u32 {
            let quote = engine.quote(1299, quantity);
            let subtotal = 1299 * i64::from(quantity);
            assert_eq!(quote.subtotal, subtotal);
            assert_eq!(quote.taxes, (subtotal as f64 * 0.06).round() as i64);
            assert_eq!(quote.total, quote.subtotal + quote.taxes);
        }
    }

    #[test]
    fn test_custom_tax_rate() {
        let engine = PricingEngine::new(PricingConfig {
            tax_rate: 0.18,
            currency: "INR".to_string(),
        });
        assert_eq!(engine.quote(899, 1).taxes, 162); // 161.82
    }

    #[test]
    fn test_round_amount_halves_up() {
        assert_eq!(round_amount(1.5), 2);
        assert_eq!(round_amount(2.5), 3);
        assert_eq!(round_amount(119.88), 120);
        assert_eq!(round_amount(199.8), 200);
    }
}
