use uuid::Uuid;

/// Emitted when a booking draft leaves the detail page.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub experience_id: String,
    pub date: String,
    pub time: String,
    pub quantity: u32,
    pub total: i64,
    pub timestamp: i64,
}

/// Emitted when checkout produces an order. Carries no customer details.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderPlacedEvent {
    pub order_id: Uuid,
    pub reference: String,
    pub experience_id: String,
    pub promo_code: Option<String>,
    pub discount: i64,
    pub final_total: i64,
    pub timestamp: i64,
}
