use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::HostConfig;
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config: HostConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Finance dashboard host starting up");
    debug!("Configuration: {:?}", config);

    let bind_address = match config.check() {
        Ok(address) => address,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    // Create router
    trace!("Creating application router");
    let state = AppState::new(config.client_settings());
    let app = create_router(state, &config.static_dir);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard running on http://{}", bind_address);
    info!("Serving static files from {}", config.static_dir.display());
    info!("Browser will call the finance API at {}", config.api_base_url);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
