use serde::{Deserialize, Serialize};
use crate::experience::{Experience, TimeSlot};

impl TimeSlot {
    /// Seats still open. Saturates at zero for overbooked slots.
    pub fn seats_left(&self) -> u32 {
        self.available_seats.saturating_sub(self.booked_seats)
    }

    pub fn is_sold_out(&self) -> bool {
        self.booked_seats >= self.available_seats
    }
}

/// A slot as the detail page renders it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotAvailability {
    pub time: String,
    pub seats_left: u32,
    pub sold_out: bool,
}

impl From<&TimeSlot> for SlotAvailability {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            time: slot.time.clone(),
            seats_left: slot.seats_left(),
            sold_out: slot.is_sold_out(),
        }
    }
}

/// Availability of every slot of an experience, in listing order
pub fn slot_availability(experience: &Experience) -> Vec<SlotAvailability> {
    experience.time_slots.iter().map(SlotAvailability::from).collect()
}

/// Resolve a time label to a slot that can still be booked.
///
/// Seat counts are never decremented here; a passing check reserves nothing.
pub fn check_bookable<'a>(
    experience: &'a Experience,
    time: Option<&str>,
) -> Result<&'a TimeSlot, AvailabilityError> {
    let time = match time {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AvailabilityError::NoSlotSelected),
    };

    let slot = experience
        .slot(time)
        .ok_or_else(|| AvailabilityError::UnknownSlot(time.to_string()))?;

    if slot.is_sold_out() {
        return Err(AvailabilityError::SoldOut(slot.time.clone()));
    }

    Ok(slot)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("Please select a time slot")]
    NoSlotSelected,

    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("This slot is sold out")]
    SoldOut(String),
}
