use axum::{extract::State, response::Json};
use common::ClientSettings;
use tracing::{debug, instrument};
use crate::schemas::AppState;

/// Runtime settings the frontend loads before its first render
#[instrument(skip(state))]
pub async fn get_client_settings(State(state): State<AppState>) -> Json<ClientSettings> {
    debug!("Serving client settings: {:?}", state.client_settings);
    Json(state.client_settings.as_ref().clone())
}
