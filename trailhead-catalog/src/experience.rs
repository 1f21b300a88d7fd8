use serde::{Deserialize, Serialize};

/// Category label that disables category filtering.
pub const ALL_CATEGORY: &str = "All";

/// Category labels offered by the catalog filter, in display order.
pub const CATEGORIES: [&str; 6] = ["All", "Adventure", "Nature", "Culture", "Food", "Wellness"];

/// A bookable activity in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,

    /// Price per guest, whole currency units
    pub price: i64,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub duration: String,
    pub max_guests: u32,
    pub highlights: Vec<String>,
    pub inclusions: Vec<String>,
    pub host_name: String,
    pub host_avatar: String,
    pub host_bio: String,
    pub verified: bool,
    pub time_slots: Vec<TimeSlot>,
}

/// A bookable time window with a seat capacity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: String,
    pub available_seats: u32,
    pub booked_seats: u32,
}

impl Experience {
    /// Clamp a requested guest count into `[1, max_guests]`.
    pub fn clamp_quantity(&self, quantity: u32) -> u32 {
        quantity.clamp(1, self.max_guests.max(1))
    }

    /// Find a slot by its time label
    pub fn slot(&self, time: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.time == time)
    }

    /// Card-sized projection used by the catalog grid
    pub fn summary(&self) -> ExperienceSummary {
        ExperienceSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            price: self.price,
            rating: self.rating,
            review_count: self.review_count,
            image: self.image.clone(),
            duration: self.duration.clone(),
            host_name: self.host_name.clone(),
            verified: self.verified,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub price: i64,
    pub rating: f64,
    pub review_count: u32,
    pub image: String,
    pub duration: String,
    pub host_name: String,
    pub verified: bool,
}
