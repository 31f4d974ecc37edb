// Spreadsheet CSV export fetcher
use crate::application::dataset_fetcher::DatasetFetcher;
use crate::domain::dataset::Dataset;
use crate::infrastructure::csv_table::parse_csv;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SheetsRepository {
    client: reqwest::Client,
}

impl SheetsRepository {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DatasetFetcher for SheetsRepository {
    async fn fetch_dataset(&self, url: &str) -> Result<Dataset> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/csv")
            .send()
            .await
            .context("Failed to send request to spreadsheet service")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(
                "HTTP Error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read spreadsheet response")?;

        parse_csv(&body)
    }
}
