pub mod models;
pub mod selection;
pub mod promo;
pub mod checkout;
pub mod confirmation;

pub use models::{BookingDraft, Order};
pub use selection::{BookingDesk, BookingError, BookingSelection, SelectionChange, DEFAULT_BOOKING_DATES};
pub use promo::{AppliedPromo, PromoKind, PromoRule, PromoTable};
pub use checkout::{generate_reference, CheckoutError, CheckoutForm, CheckoutService};
pub use confirmation::{ConfirmationAction, ConfirmationView, CostLine};
