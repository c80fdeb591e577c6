use crate::domain::ports::ReportSource;
use crate::utils::error::{Result, SubmitError};
use std::path::PathBuf;

pub const REPORT_FILE_NAME: &str = "test-report.json";

pub struct ReportLoader<R: ReportSource> {
    source: R,
    path: PathBuf,
}

impl<R: ReportSource> ReportLoader<R> {
    pub fn new(source: R, path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            path: path.into(),
        }
    }

    /// The report is forwarded as-is; only JSON validity is checked.
    pub async fn load(&self) -> Result<serde_json::Value> {
        if !self.source.exists(&self.path).await {
            return Err(SubmitError::ReportNotFound {
                path: self.path.display().to_string(),
            });
        }

        let data = self.source.read_report(&self.path).await?;
        let report = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded report from {} ({} bytes)", self.path.display(), data.len());
        Ok(report)
    }
}
