use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use trailhead_catalog::{check_bookable, AvailabilityError, Experience, PriceBreakdown, PricingEngine};
use crate::models::BookingDraft;

/// Dates offered on the detail page when none are configured.
pub const DEFAULT_BOOKING_DATES: [&str; 5] = ["Oct 22", "Oct 23", "Oct 24", "Oct 25", "Oct 26"];

fn default_quantity() -> u32 {
    1
}

/// What the guest has picked on the detail page so far
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSelection {
    /// `None` means the first offered date
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self {
            date: None,
            time: None,
            quantity: default_quantity(),
        }
    }
}

/// A single edit made on the detail page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionChange {
    Increment,
    Decrement,
    SelectTime { time: String },
}

impl BookingSelection {
    /// Apply `change`. Returns `false` when a slot pick was refused.
    pub fn apply(&mut self, experience: &Experience, change: &SelectionChange) -> bool {
        match change {
            SelectionChange::Increment => {
                self.increment(experience);
                true
            }
            SelectionChange::Decrement => {
                self.decrement(experience);
                true
            }
            SelectionChange::SelectTime { time } => self.select_time(experience, time),
        }
    }

    /// One more guest, up to the experience's limit
    pub fn increment(&mut self, experience: &Experience) {
        self.quantity = experience.clamp_quantity(self.quantity.saturating_add(1));
    }

    /// One fewer guest, never below one
    pub fn decrement(&mut self, experience: &Experience) {
        self.quantity = experience.clamp_quantity(self.quantity.saturating_sub(1));
    }

    /// Pick a slot. Sold-out and unknown slots leave the selection unchanged.
    pub fn select_time(&mut self, experience: &Experience, time: &str) -> bool {
        match experience.slot(time) {
            Some(slot) if !slot.is_sold_out() => {
                self.time = Some(slot.time.clone());
                true
            }
            _ => false,
        }
    }
}

/// Turns detail-page selections into priced booking drafts
#[derive(Debug, Clone)]
pub struct BookingDesk {
    pricing: PricingEngine,
    dates: Vec<String>,
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new(PricingEngine::default(), Vec::new())
    }
}

impl BookingDesk {
    /// An empty date list falls back to [`DEFAULT_BOOKING_DATES`].
    pub fn new(pricing: PricingEngine, dates: Vec<String>) -> Self {
        let dates = if dates.is_empty() {
            DEFAULT_BOOKING_DATES.iter().map(|d| d.to_string()).collect()
        } else {
            dates
        };
        Self { pricing, dates }
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Price for `quantity` guests after clamping to the experience's limits
    pub fn quote(&self, experience: &Experience, quantity: u32) -> PriceBreakdown {
        self.pricing.quote(experience.price, experience.clamp_quantity(quantity))
    }

    /// Validate the selection and produce the draft checkout consumes.
    pub fn confirm(
        &self,
        experience: &Experience,
        selection: &BookingSelection,
    ) -> Result<BookingDraft, BookingError> {
        let date = self.resolve_date(selection.date.as_deref())?;

        let slot = check_bookable(experience, selection.time.as_deref()).map_err(|e| {
            warn!(experience_id = %experience.id, time = ?selection.time, "Booking rejected: {}", e);
            e
        })?;

        let price = self.quote(experience, selection.quantity);

        info!(
            experience_id = %experience.id,
            date = %date,
            time = %slot.time,
            quantity = price.quantity,
            total = price.total,
            "Booking draft created"
        );

        Ok(BookingDraft::new(
            experience.id.clone(),
            experience.title.clone(),
            date,
            slot.time.clone(),
            price,
        ))
    }

    fn resolve_date(&self, date: Option<&str>) -> Result<String, BookingError> {
        match date {
            None | Some("") => self
                .dates
                .first()
                .cloned()
                .ok_or_else(|| BookingError::InvalidDate(String::new())),
            Some(d) if self.dates.iter().any(|offered| offered == d) => Ok(d.to_string()),
            Some(d) => Err(BookingError::InvalidDate(d.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Date not offered: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Availability(#[from] AvailabilityError),
}
