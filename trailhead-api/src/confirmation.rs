use axum::{
    extract::Path,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use trailhead_order::{ConfirmationAction, ConfirmationView, Order};
use crate::error::{AppError, CATALOG_PATH};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConfirmationRequest {
    #[serde(default)]
    pub order: Option<Order>,
}

#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub reference: String,
    pub action: ConfirmationAction,
    pub message: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/confirmation", get(direct_visit))
        .route("/v1/confirmation", post(show))
        .route("/v1/confirmation/{action}", post(acknowledge))
}

/// GET /confirmation
async fn direct_visit() -> Redirect {
    Redirect::to(CATALOG_PATH)
}

/// POST /v1/confirmation
async fn show(
    Json(req): Json<ConfirmationRequest>,
) -> Result<Json<ConfirmationView>, AppError> {
    let order = req.order.ok_or(AppError::MissingNavigationState)?;
    Ok(Json(ConfirmationView::from(&order)))
}

/// POST /v1/confirmation/{download|share}
/// Acknowledges only; no file is produced and nothing is copied
async fn acknowledge(
    Path(action): Path<ConfirmationAction>,
    Json(req): Json<ConfirmationRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let order = req.order.ok_or(AppError::MissingNavigationState)?;
    info!(reference = %order.reference, action = ?action, "Confirmation action");

    Ok(Json(ActionResponse {
        reference: order.reference,
        action,
        message: action.acknowledgement(),
    }))
}
