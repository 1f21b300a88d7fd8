use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use trailhead_catalog::{AvailabilityError, CatalogError};
use trailhead_order::{BookingError, CheckoutError};

/// Where pages without their navigation payload are sent
pub const CATALOG_PATH: &str = "/";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    NotFoundError(String),

    #[error("{0}")]
    ConflictError(String),

    /// Unknown promo code; the page falls back to the undiscounted total
    #[error("Invalid promo code")]
    PromoRejected { final_total: i64 },

    /// A checkout or confirmation request arrived without the payload the
    /// previous page attaches
    #[error("Missing navigation state")]
    MissingNavigationState,

    #[error("{0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::PromoRejected { final_total } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid promo code", "discount": 0, "final_total": final_total }),
            ),
            AppError::MissingNavigationState => {
                tracing::debug!("No navigation state, redirecting to catalog");
                return Redirect::to(CATALOG_PATH).into_response();
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Internal Server Error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Availability(AvailabilityError::SoldOut(_)) => AppError::ConflictError(err.to_string()),
            other => AppError::ValidationError(other.to_string()),
        }
    }
}

impl From<CheckoutError> for AppError {
    fn from(err: CheckoutError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
