//! Where the dataset comes from and how a response becomes a [`Dataset`].
//!
//! The browser and the CLI use different HTTP clients, but both funnel the
//! response through [`check_status`] and [`parse_dataset`] so failures look
//! the same everywhere.

use crate::dataset::Dataset;
use crate::error::{HeatMapError, Result};

#[cfg(feature = "api")]
use log::{info, warn};
#[cfg(feature = "api")]
use reqwest::Client;

/// Upstream monthly global land-surface temperature dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Turn a non-2xx status into a [`HeatMapError::Fetch`].
pub fn check_status(status: u16, status_text: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let reason = if status_text.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        status_text.to_string()
    };
    Err(HeatMapError::Fetch(format!("Failed to fetch data: {}", reason)))
}

/// Decode a response body in the upstream JSON shape.
pub fn parse_dataset(body: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch and decode the dataset with a native HTTP client.
#[cfg(feature = "api")]
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Dataset> {
    let body = fetch_body(client, url).await?;
    let dataset = parse_dataset(&body)?;
    info!(
        "Loaded {} monthly records from {}",
        dataset.records.len(),
        url
    );
    Ok(dataset)
}

/// Fetch the raw response body, failing on non-2xx statuses.
#[cfg(feature = "api")]
pub async fn fetch_body(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await.map_err(|e| {
        warn!("Request to {} failed: {}", url, e);
        HeatMapError::Fetch(format!("Failed to fetch data: {}", e))
    })?;

    let status = response.status();
    if let Err(err) = check_status(status.as_u16(), status.canonical_reason().unwrap_or("")) {
        warn!("Bad response status from {}: {}", url, status);
        return Err(err);
    }

    response.text().await.map_err(|e| {
        warn!("Failed to read response body from {}: {}", url, e);
        HeatMapError::Fetch(format!("Failed to read response: {}", e))
    })
}
