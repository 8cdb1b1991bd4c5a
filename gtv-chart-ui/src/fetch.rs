//! Dataset request through the browser `fetch` API.

use gtv_data::source::{check_status, parse_dataset};
use gtv_data::{Dataset, HeatMapError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(context: &str, value: JsValue) -> HeatMapError {
    let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    HeatMapError::Fetch(format!("{}: {}", context, detail))
}

/// GET `url` and decode the body as a [`Dataset`].
pub async fn fetch_dataset(url: &str) -> Result<Dataset, HeatMapError> {
    let window = web_sys::window()
        .ok_or_else(|| HeatMapError::Fetch("No browser window available".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("Failed to fetch data", e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| js_error("Unexpected fetch result", e))?;

    check_status(response.status(), &response.status_text())?;

    let text = response
        .text()
        .map_err(|e| js_error("Failed to read response", e))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| js_error("Failed to read response", e))?
        .as_string()
        .ok_or_else(|| HeatMapError::Parse("response body is not text".to_string()))?;

    let dataset = parse_dataset(&body)?;
    log::info!("Fetched {} monthly records", dataset.records.len());
    Ok(dataset)
}
