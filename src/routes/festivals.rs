//! Festival query endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use utsav_core::Festival;

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/festivals", get(list_festivals))
        .route("/festivals/public", get(public_holidays))
        .route("/festivals/date/{date}", get(by_date))
        .route("/festivals/month/{month}", get(by_month))
        .route("/festivals/region/{region}", get(by_region))
        .route("/festivals/type/{kind}", get(by_kind))
        .route("/festivals/{name}", get(by_name))
}

fn cloned(festivals: Vec<&Festival>) -> Vec<Festival> {
    festivals.into_iter().cloned().collect()
}

/// GET /festivals - List all festivals in definition order
async fn list_festivals(State(state): State<AppState>) -> Json<Vec<Festival>> {
    Json(state.dataset().festivals().to_vec())
}

/// GET /festivals/:name - First festival whose name contains the fragment
async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Festival>, ApiError> {
    let festival = state.dataset().festival_by_name(&name)?;
    Ok(Json(festival.clone()))
}

/// GET /festivals/date/:date - Festivals on an exact YYYY-MM-DD date
async fn by_date(State(state): State<AppState>, Path(date): Path<String>) -> Json<Vec<Festival>> {
    Json(cloned(state.dataset().festivals_on(&date)))
}

/// GET /festivals/month/:month - Festivals in a month (1-12)
async fn by_month(
    State(state): State<AppState>,
    Path(month): Path<i64>,
) -> Result<Json<Vec<Festival>>, ApiError> {
    let matches = state.dataset().festivals_in_month(month)?;
    Ok(Json(cloned(matches)))
}

/// GET /festivals/region/:region - Festivals celebrated in a region
async fn by_region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Json<Vec<Festival>> {
    Json(cloned(state.dataset().festivals_in_region(&region)))
}

/// GET /festivals/type/:type - Festivals of a category
async fn by_kind(State(state): State<AppState>, Path(kind): Path<String>) -> Json<Vec<Festival>> {
    Json(cloned(state.dataset().festivals_of_kind(&kind)))
}

/// GET /festivals/public - Festivals that are public holidays
async fn public_holidays(State(state): State<AppState>) -> Json<Vec<Festival>> {
    Json(cloned(state.dataset().public_holidays()))
}
