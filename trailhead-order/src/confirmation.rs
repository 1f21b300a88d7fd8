use serde::{Deserialize, Serialize};
use crate::models::Order;

/// Actions offered on the confirmation page. Both only acknowledge; no file
/// is generated and nothing touches a clipboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationAction {
    Download,
    Share,
}

impl ConfirmationAction {
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            ConfirmationAction::Download => "Booking details downloaded!",
            ConfirmationAction::Share => "Booking link copied to clipboard!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CostLine {
    pub label: String,
    pub amount: i64,
}

/// What the confirmation page shows for an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationView {
    pub reference: String,
    pub message: String,
    pub experience: String,
    pub date: String,
    pub time: String,
    pub quantity: u32,
    pub full_name: String,
    pub email: String,
    pub costs: Vec<CostLine>,
    pub total: i64,
    pub actions: Vec<ConfirmationAction>,
}

impl From<&Order> for ConfirmationView {
    fn from(order: &Order) -> Self {
        let booking = &order.booking;

        let mut costs = vec![
            CostLine { label: "Subtotal".to_string(), amount: booking.subtotal },
            CostLine { label: "Taxes".to_string(), amount: booking.taxes },
        ];
        if order.discount > 0 {
            costs.push(CostLine { label: "Discount".to_string(), amount: -order.discount });
        }

        Self {
            reference: order.reference.clone(),
            message: format!(
                "Your adventure awaits. We've sent a confirmation email to {}",
                order.email.expose()
            ),
            experience: booking.title.clone(),
            date: booking.date.clone(),
            time: booking.time.clone(),
            quantity: booking.quantity,
            full_name: order.full_name.expose().clone(),
            email: order.email.expose().clone(),
            costs,
            total: order.final_total,
            actions: vec![ConfirmationAction::Download, ConfirmationAction::Share],
        }
    }
}
