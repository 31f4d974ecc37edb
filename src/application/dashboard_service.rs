// Dashboard service - Use case for building the case dashboard
use crate::application::dataset_fetcher::DatasetFetcher;
use crate::domain::dashboard::Dashboard;
use crate::domain::dataset::Dataset;
use crate::infrastructure::config::SheetConfig;
use crate::infrastructure::csv_export::csv_export_url;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("SHEET_ID not set")]
    SheetIdMissing,

    #[error("GID not set")]
    GidMissing,

    #[error("Read sheet failed: {0}")]
    ReadSheetFailed(String),
}

#[derive(Clone)]
pub struct DashboardService {
    fetcher: Arc<dyn DatasetFetcher>,
    sheets: SheetConfig,
}

impl DashboardService {
    pub fn new(fetcher: Arc<dyn DatasetFetcher>, sheets: SheetConfig) -> Self {
        Self { fetcher, sheets }
    }

    pub async fn get_dashboard(&self) -> Result<Dashboard, DashboardError> {
        if self.sheets.sheet_id.is_empty() {
            return Err(DashboardError::SheetIdMissing);
        }
        if self.sheets.cases_gid.is_empty()
            || self.sheets.suspects_gid.is_empty()
            || self.sheets.seizures_gid.is_empty()
        {
            return Err(DashboardError::GidMissing);
        }

        let (cases, suspects, seizures) = futures::try_join!(
            self.fetch_sheet("cases", &self.sheets.cases_gid),
            self.fetch_sheet("suspects", &self.sheets.suspects_gid),
            self.fetch_sheet("seizures", &self.sheets.seizures_gid),
        )?;

        Ok(Dashboard::new(cases, suspects, seizures))
    }

    async fn fetch_sheet(&self, name: &str, gid: &str) -> Result<Dataset, DashboardError> {
        let url = csv_export_url(&self.sheets.sheet_id, gid, chrono::Utc::now().timestamp());

        match self.fetcher.fetch_dataset(&url).await {
            Ok(dataset) => {
                tracing::debug!(sheet = name, rows = dataset.len(), "fetched sheet");
                Ok(dataset)
            }
            Err(e) => {
                let cause = format!("{e:#}");
                tracing::warn!(sheet = name, gid, error = %cause, "failed to read sheet");
                Err(DashboardError::ReadSheetFailed(cause))
            }
        }
    }
}
