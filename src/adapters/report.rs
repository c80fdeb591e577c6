use crate::domain::ports::ReportSource;
use crate::utils::error::Result;
use std::path::Path;

/// Reports written by the test runner on the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalReportFile;

impl ReportSource for LocalReportFile {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_report(&self, path: &Path) -> Result<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        Ok(data)
    }
}
