use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use trailhead_catalog::{slot_availability, Experience, PriceBreakdown, SlotAvailability};
use trailhead_order::{BookingDraft, BookingSelection, SelectionChange};
use crate::error::AppError;
use crate::state::AppState;

const TIMEZONE_NOTE: &str = "All times are in IST (GMT +5:30)";

#[derive(Debug, Serialize)]
pub struct ExperienceDetail {
    pub experience: Experience,
    pub dates: Vec<String>,
    pub selection: BookingSelection,
    pub slots: Vec<SlotAvailability>,
    pub price: PriceBreakdown,
    pub currency: String,
    pub timezone_note: &'static str,
}

fn one_guest() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default = "one_guest")]
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub selection: BookingSelection,
    pub change: SelectionChange,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selection: BookingSelection,
    /// `false` when a sold-out or unknown slot was picked
    pub accepted: bool,
    pub price: PriceBreakdown,
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub booking: BookingDraft,
    pub next: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/experiences/{id}", get(get_experience))
        .route("/v1/experiences/{id}/quote", post(quote))
        .route("/v1/experiences/{id}/selection", post(update_selection))
        .route("/v1/experiences/{id}/confirm", post(confirm))
}

async fn find_experience(state: &AppState, id: &str) -> Result<Experience, AppError> {
    state
        .catalog
        .get_experience(id)
        .await?
        .ok_or_else(|| AppError::NotFoundError("Experience not found".to_string()))
}

/// GET /v1/experiences/{id}
/// Detail page with the default selection: first date, no slot, one guest
async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExperienceDetail>, AppError> {
    let experience = find_experience(&state, &id).await?;
    let selection = BookingSelection {
        date: state.booking.dates().first().cloned(),
        ..BookingSelection::default()
    };
    let price = state.booking.quote(&experience, selection.quantity);

    Ok(Json(ExperienceDetail {
        dates: state.booking.dates().to_vec(),
        slots: slot_availability(&experience),
        selection,
        price,
        currency: state.booking.pricing().config().currency.clone(),
        experience,
        timezone_note: TIMEZONE_NOTE,
    }))
}

/// POST /v1/experiences/{id}/quote
/// Price breakdown for a guest count, clamped to `[1, max_guests]`
async fn quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<PriceBreakdown>, AppError> {
    let experience = find_experience(&state, &id).await?;
    Ok(Json(state.booking.quote(&experience, req.quantity)))
}

/// POST /v1/experiences/{id}/selection
/// Apply one guest-count or slot edit and re-price
async fn update_selection(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let experience = find_experience(&state, &id).await?;
    let mut selection = req.selection;
    let accepted = selection.apply(&experience, &req.change);
    let price = state.booking.quote(&experience, selection.quantity);
    selection.quantity = price.quantity;

    Ok(Json(SelectionResponse {
        selection,
        accepted,
        price,
    }))
}

/// POST /v1/experiences/{id}/confirm
/// Validate the selection and hand back the draft checkout expects
async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(selection): Json<BookingSelection>,
) -> Result<Json<ConfirmResponse>, AppError> {
    let experience = find_experience(&state, &id).await?;
    let booking = state.booking.confirm(&experience, &selection)?;

    if let Ok(event) = serde_json::to_string(&booking.to_event()) {
        info!(event = %event, "booking.confirmed");
    }

    Ok(Json(ConfirmResponse {
        booking,
        next: "/checkout",
    }))
}
