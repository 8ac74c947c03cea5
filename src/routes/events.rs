//! Regional event endpoints

use axum::{Json, Router, extract::State, routing::get};

use utsav_core::RegionalEvent;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/regional-events", get(list_regional_events))
}

/// GET /regional-events - List all regional events in definition order
async fn list_regional_events(State(state): State<AppState>) -> Json<Vec<RegionalEvent>> {
    Json(state.dataset().regional_events().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use utsav_core::Dataset;

    #[tokio::test]
    async fn test_list_returns_full_collection() {
        let app = router().with_state(AppState::new().unwrap());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/regional-events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let events: Value = serde_json::from_slice(&body).unwrap();
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), Dataset::curated().regional_events().len());

        // Recurring events serialize frequency fields instead of a date
        let kumbh = events
            .iter()
            .find(|e| e["name"] == "Kumbh Mela")
            .expect("Kumbh Mela should be listed");
        assert!(kumbh.get("date").is_none());
        assert!(kumbh.get("frequency").is_some());
    }
}
