use serde::{Deserialize, Serialize};
use trailhead_catalog::pricing::round_amount;
use crate::models::BookingDraft;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PromoKind {
    /// Fraction of the subtotal, e.g. 0.1
    Percentage(f64),
    /// Fixed amount off, whole currency units
    Flat(i64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoRule {
    pub code: String,
    pub kind: PromoKind,
}

impl PromoRule {
    pub fn percentage(code: &str, fraction: f64) -> Self {
        Self { code: code.to_uppercase(), kind: PromoKind::Percentage(fraction) }
    }

    pub fn flat(code: &str, amount: i64) -> Self {
        Self { code: code.to_uppercase(), kind: PromoKind::Flat(amount) }
    }

    /// Discount for a draft. Percentages apply to the subtotal, before tax.
    pub fn discount_for(&self, draft: &BookingDraft) -> i64 {
        match self.kind {
            PromoKind::Percentage(fraction) => round_amount(draft.subtotal as f64 * fraction),
            PromoKind::Flat(amount) => amount,
        }
    }
}

/// An accepted promo code and what it takes off
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedPromo {
    pub code: String,
    pub discount: i64,
}

/// Lookup table of promo codes. Codes match case-insensitively.
#[derive(Debug, Clone)]
pub struct PromoTable {
    rules: Vec<PromoRule>,
}

impl Default for PromoTable {
    fn default() -> Self {
        Self::new(vec![
            PromoRule::percentage("SAVE10", 0.1),
            PromoRule::flat("FLAT100", 100),
            PromoRule::percentage("FIRST20", 0.2),
        ])
    }
}

impl PromoTable {
    pub fn new(rules: Vec<PromoRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|r| PromoRule { code: r.code.to_uppercase(), ..r })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[PromoRule] {
        &self.rules
    }

    pub fn find(&self, code: &str) -> Option<&PromoRule> {
        let code = code.to_uppercase();
        self.rules.iter().find(|r| r.code == code)
    }

    /// Evaluate `code` against a draft; `None` when the code is unknown.
    pub fn evaluate(&self, code: &str, draft: &BookingDraft) -> Option<AppliedPromo> {
        self.find(code).map(|rule| AppliedPromo {
            code: rule.code.clone(),
            discount: rule.discount_for(draft),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::draft;

    #[test]
    fn test_percentage_codes_round_on_subtotal() {
        let table = PromoTable::default();
        let applied = table.evaluate("SAVE10", &draft()).unwrap();
        assert_eq!(applied.discount, 200); // 199.8

        let applied = table.evaluate("FIRST20", &draft()).unwrap();
        assert_eq!(applied.discount, 400); // 399.6
    }

    #[test]
    fn test_flat_code_ignores_subtotal() {
        let table = PromoTable::default();
        let mut big = draft();
        big.subtotal = 50_000;
        assert_eq!(table.evaluate("FLAT100", &draft()).unwrap().discount, 100);
        assert_eq!(table.evaluate("FLAT100", &big).unwrap().discount, 100);
    }

    #[test]
    fn test_codes_are_case_insensitive() {
        let table = PromoTable::default();
        let applied = table.evaluate("save10", &draft()).unwrap();
        assert_eq!(applied.code, "SAVE10");
    }

    #[test]
    fn test_unknown_code() {
        let table = PromoTable::default();
        assert!(table.evaluate("FREE", &draft()).is_none());
        assert!(table.evaluate("", &draft()).is_none());
    }

    #[test]
    fn test_rule_deserialization() {
        let json = r#"{"code":"monsoon15","kind":{"kind":"percentage","value":0.15}}"#;
        let rule: PromoRule = serde_json::from_str(json).unwrap();
        let table = PromoTable::new(vec![rule]);
        assert_eq!(table.evaluate("MONSOON15", &draft()).unwrap().discount, 300); // 299.7
    }
}
