//! Getting the dataset onto disk or into memory.

use crate::SourceArgs;
use anyhow::Context;
use gtv_data::source::{fetch_body, fetch_dataset, parse_dataset};
use gtv_data::Dataset;
use log::info;
use std::time::Duration;

fn client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Read a dataset JSON file from disk.
pub fn read_dataset(path: &str) -> anyhow::Result<Dataset> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path))?;
    let dataset = parse_dataset(&body).with_context(|| format!("Invalid dataset file {}", path))?;
    info!("Read {} monthly records from {}", dataset.records.len(), path);
    Ok(dataset)
}

/// Load the dataset from `--input` if given, otherwise from `--url`.
pub async fn load_dataset(source: &SourceArgs) -> anyhow::Result<Dataset> {
    match &source.input {
        Some(path) => read_dataset(path),
        None => Ok(fetch_dataset(&client()?, &source.url).await?),
    }
}

/// Download the dataset and write it unchanged to `output`.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let body = fetch_body(&client()?, url).await?;
    // refuse to save something that would not load later
    let dataset = parse_dataset(&body).context("Downloaded document is not a dataset")?;
    std::fs::write(output, &body).with_context(|| format!("Failed to write {}", output))?;
    info!(
        "Saved {} monthly records ({} bytes) to {}",
        dataset.records.len(),
        body.len(),
        output
    );
    Ok(())
}
