// Fetcher trait for sheet data access
use crate::domain::dataset::Dataset;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    /// Download a CSV export and parse it into a dataset.
    /// Network failures, non-success statuses and malformed bodies are all errors.
    async fn fetch_dataset(&self, url: &str) -> anyhow::Result<Dataset>;
}
