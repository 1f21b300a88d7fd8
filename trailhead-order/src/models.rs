use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use trailhead_catalog::PriceBreakdown;
use trailhead_shared::Masked;
use crate::checkout::CheckoutError;

/// The in-flight selection handed from the detail page to checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDraft {
    pub experience_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub quantity: u32,
    pub subtotal: i64,
    pub taxes: i64,
    pub total: i64,
}

impl BookingDraft {
    pub fn new(
        experience_id: String,
        title: String,
        date: String,
        time: String,
        price: PriceBreakdown,
    ) -> Self {
        Self {
            experience_id,
            title,
            date,
            time,
            quantity: price.quantity,
            subtotal: price.subtotal,
            taxes: price.taxes,
            total: price.total,
        }
    }

    /// Total after `discount`, with no floor: a flat discount larger than the
    /// total goes negative.
    /// Fails unless the amounts are non-negative and `subtotal + taxes == total`.
    pub fn discounted_total(&self, discount: i64) -> Result<i64, CheckoutError> {
        let consistent = self.subtotal >= 0
            && self.taxes >= 0
            && self.subtotal.checked_add(self.taxes) == Some(self.total);
        if !consistent {
            return Err(CheckoutError::InvalidAmounts);
        }

        self.total.checked_sub(discount).ok_or(CheckoutError::InvalidAmounts)
    }

    pub fn to_event(&self) -> trailhead_shared::models::BookingConfirmedEvent {
        trailhead_shared::models::BookingConfirmedEvent {
            experience_id: self.experience_id.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            quantity: self.quantity,
            total: self.total,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// A finalized booking with customer details, handed to the confirmation page.
///
/// Lives only in the navigation payload; nothing stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub reference: String,
    #[serde(flatten)]
    pub booking: BookingDraft,
    pub full_name: Masked<String>,
    pub email: Masked<String>,
    pub promo_code: Option<String>,
    pub discount: i64,
    pub final_total: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        reference: String,
        booking: BookingDraft,
        full_name: String,
        email: String,
        promo_code: Option<String>,
        discount: i64,
    ) -> Result<Self, CheckoutError> {
        let final_total = booking.discounted_total(discount)?;

        Ok(Self {
            id: Uuid::new_v4(),
            reference,
            booking,
            full_name: Masked::new(full_name),
            email: Masked::new(email),
            promo_code,
            discount,
            final_total,
            created_at: Utc::now(),
        })
    }

    pub fn to_event(&self) -> trailhead_shared::models::OrderPlacedEvent {
        trailhead_shared::models::OrderPlacedEvent {
            order_id: self.id,
            reference: self.reference.clone(),
            experience_id: self.booking.experience_id.clone(),
            promo_code: self.promo_code.clone(),
            discount: self.discount,
            final_total: self.final_total,
            timestamp: self.created_at.timestamp(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::draft;

    #[test]
    fn test_final_total_subtracts_discount() {
        let order = Order::new("AB12CD34".into(), draft(), "Asha".into(), "asha@example.com".into(), None, 200).unwrap();
        assert_eq!(order.final_total, 1918);
    }

    #[test]
    fn test_final_total_has_no_floor() {
        let mut small = draft();
        small.subtotal = 57;
        small.taxes = 3;
        small.total = 60;
        let order = Order::new("AB12CD34".into(), small, "Asha".into(), "asha@example.com".into(), Some("FLAT100".into()), 100).unwrap();
        assert_eq!(order.final_total, -40);
    }

    #[test]
    fn test_out_of_range_total_is_rejected() {
        let mut extreme = draft();
        extreme.subtotal = i64::MIN;
        extreme.taxes = 0;
        extreme.total = i64::MIN;
        assert_eq!(extreme.discounted_total(100), Err(CheckoutError::InvalidAmounts));

        let mut inconsistent = draft();
        inconsistent.total = 5;
        assert_eq!(inconsistent.discounted_total(0), Err(CheckoutError::InvalidAmounts));

        let mut negative = draft();
        negative.subtotal = -120;
        negative.total = 0;
        assert_eq!(negative.discounted_total(0), Err(CheckoutError::InvalidAmounts));

        assert_eq!(draft().discounted_total(100), Ok(2018));
    }

    #[test]
    fn test_order_flattens_booking_fields() {
        let order = Order::new("AB12CD34".into(), draft(), "Asha".into(), "asha@example.com".into(), None, 0).unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["reference"], "AB12CD34");
        assert_eq!(json["experience_id"], "1");
        assert_eq!(json["total"], 2118);
        assert_eq!(json["email"], "asha@example.com");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back.booking, draft());
    }

    #[test]
    fn test_debug_hides_customer_details() {
        let order = Order::new("AB12CD34".into(), draft(), "Asha".into(), "asha@example.com".into(), None, 0).unwrap();
        let debug = format!("{:?}", order);
        assert!(!debug.contains("asha@example.com"));
        assert!(!debug.contains("Asha"));
    }
}
