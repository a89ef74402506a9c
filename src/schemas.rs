use std::sync::Arc;

use common::ClientSettings;
use serde::{Deserialize, Serialize};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Runtime settings served to the browser, fixed at startup
    pub client_settings: Arc<ClientSettings>,
}

impl AppState {
    pub fn new(client_settings: ClientSettings) -> Self {
        Self {
            client_settings: Arc::new(client_settings),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}
