//! Service directory and dataset metadata endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use utsav_core::Metadata;

use crate::state::AppState;

/// Every endpoint the service exposes, with a one-line description.
/// Kept in a fixed order so the directory response is stable.
const ENDPOINTS: &[(&str, &str)] = &[
    ("/", "Service metadata and this endpoint directory"),
    ("/festivals", "List all festivals"),
    (
        "/festivals/{name}",
        "First festival whose name contains the fragment (case-insensitive)",
    ),
    ("/festivals/date/{date}", "Festivals on an exact YYYY-MM-DD date"),
    ("/festivals/month/{month}", "Festivals in a month (1-12)"),
    ("/festivals/region/{region}", "Festivals celebrated in a region"),
    ("/festivals/type/{type}", "Festivals of a category"),
    ("/festivals/public", "Festivals that are public holidays"),
    ("/regional-events", "List all regional events"),
    ("/metadata", "Dataset metadata"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/metadata", get(metadata))
}

/// Directory entry for one endpoint
#[derive(Serialize)]
pub struct Endpoint {
    pub path: String,
    pub description: String,
}

/// Root response: dataset metadata plus the endpoint directory
#[derive(Serialize)]
pub struct ApiIndex {
    pub service: Metadata,
    pub endpoints: Vec<Endpoint>,
}

/// GET / - Service metadata and endpoint directory
async fn index(State(state): State<AppState>) -> Json<ApiIndex> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(path, description)| Endpoint {
            path: path.to_string(),
            description: description.to_string(),
        })
        .collect();

    Json(ApiIndex {
        service: state.dataset().metadata().clone(),
        endpoints,
    })
}

/// GET /metadata - Dataset metadata, verbatim
async fn metadata(State(state): State<AppState>) -> Json<Metadata> {
    Json(state.dataset().metadata().clone())
}
