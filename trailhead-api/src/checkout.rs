use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use trailhead_order::{BookingDraft, CheckoutError, CheckoutForm, Order};
use crate::error::{AppError, CATALOG_PATH};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyPromoRequest {
    #[serde(default)]
    pub booking: Option<BookingDraft>,
    #[serde(default)]
    pub promo_code: String,
}

#[derive(Debug, Serialize)]
pub struct PromoResponse {
    pub code: String,
    pub discount: i64,
    pub final_total: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub booking: Option<BookingDraft>,
    #[serde(flatten)]
    pub form: CheckoutForm,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order: Order,
    pub next: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", get(direct_visit))
        .route("/v1/checkout/promo", post(apply_promo))
        .route("/v1/checkout", post(submit))
}

/// GET /checkout
/// A plain visit carries no booking draft
async fn direct_visit() -> Redirect {
    Redirect::to(CATALOG_PATH)
}

/// POST /v1/checkout/promo
async fn apply_promo(
    State(state): State<AppState>,
    Json(req): Json<ApplyPromoRequest>,
) -> Result<Json<PromoResponse>, AppError> {
    let booking = req.booking.ok_or(AppError::MissingNavigationState)?;

    match state.checkout.apply_promo(&booking, &req.promo_code) {
        Ok(applied) => Ok(Json(PromoResponse {
            message: format!("Promo code applied! You saved ₹{}", applied.discount),
            final_total: booking.discounted_total(applied.discount)?,
            code: applied.code,
            discount: applied.discount,
        })),
        Err(CheckoutError::InvalidPromoCode(_)) => Err(AppError::PromoRejected {
            final_total: booking.total,
        }),
        Err(other) => Err(other.into()),
    }
}

/// POST /v1/checkout
/// Validate contact details and hand the order to the confirmation page
async fn submit(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let booking = req.booking.ok_or(AppError::MissingNavigationState)?;
    let order = state.checkout.submit(booking, req.form)?;

    if let Ok(event) = serde_json::to_string(&order.to_event()) {
        info!(event = %event, "order.placed");
    }

    Ok(Json(CheckoutResponse {
        order,
        next: "/confirmation",
    }))
}
