pub mod account;
pub mod transaction;

use common::{DashboardError, ErrorResponse, Result};
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use crate::settings;

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let err = DashboardError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    read_json("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            let err = DashboardError::Serialize(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?
        .send()
        .await
        .map_err(|e| {
            let err = DashboardError::Request(e.to_string());
            log::error!("POST {} - {}", endpoint, err);
            err
        })?;

    read_json("POST", endpoint, response).await
}

/// Turn a response into `T`, mapping non-OK statuses to `DashboardError::Http`
async fn read_json<T>(method: &str, endpoint: &str, response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        let status = response.status();
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, status);
        // FastAPI-style `{"detail": "..."}`; anything else falls back to the status text
        let detail = match response.json::<ErrorResponse>().await {
            Ok(body) => body.detail,
            Err(_) => response.status_text(),
        };
        let err = DashboardError::Http { status, detail };
        log::error!("{} {} - {}", method, endpoint, err);
        return Err(err);
    }

    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let err = DashboardError::Parse(e.to_string());
        log::error!("{} {} - {}", method, endpoint, err);
        err
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}
