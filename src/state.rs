use anyhow::Result;
use std::sync::Arc;
use utsav_core::Dataset;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // Built once at startup; handlers only ever read it
    dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let dataset = Dataset::curated();
        // Reject a malformed payload before the listener binds
        dataset.validate()?;
        Ok(AppState {
            dataset: Arc::new(dataset),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
