use crate::domain::model::{RunContext, SubmissionPayload, SubmissionReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Key/value lookup over environment-like sources.
///
/// Empty values are reported as absent.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

pub trait ReportSource: Send + Sync {
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn read_report(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// The remote results service.
#[async_trait]
pub trait ResultsApi: Send + Sync {
    /// `Ok(None)` when the service answered but had no context for the user.
    async fn fetch_context(&self, url: &Url, timeout: Duration) -> Result<Option<RunContext>>;

    async fn submit(
        &self,
        endpoint: &Url,
        token: &str,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt>;
}
