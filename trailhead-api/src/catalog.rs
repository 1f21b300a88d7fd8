use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use trailhead_catalog::{filter_experiences, CatalogQuery, ExperienceSummary};
use crate::error::AppError;
use crate::state::AppState;

const NO_RESULTS_MESSAGE: &str = "No experiences found. Try adjusting your filters.";

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub category: String,
    pub query: String,
    pub categories: Vec<String>,
    pub experiences: Vec<ExperienceSummary>,
    pub message: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_experiences))
        .route("/v1/experiences", get(list_experiences))
        .route("/v1/categories", get(list_categories))
}

/// GET /v1/experiences?category=&q=
/// The catalog page. Re-filtered on every call; no pagination.
async fn list_experiences(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<CatalogResponse>, AppError> {
    let experiences = state.catalog.list_experiences().await?;
    let categories = state.catalog.list_categories().await?;

    let experiences: Vec<ExperienceSummary> = filter_experiences(&experiences, &query)
        .into_iter()
        .map(|e| e.summary())
        .collect();

    let message = experiences.is_empty().then(|| NO_RESULTS_MESSAGE.to_string());

    Ok(Json(CatalogResponse {
        category: query.category().to_string(),
        query: query.query().to_string(),
        categories,
        experiences,
        message,
    }))
}

/// GET /v1/categories
async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.catalog.list_categories().await?))
}
