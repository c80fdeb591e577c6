use crate::core::loader::ReportLoader;
use crate::core::resolver::{github_user, ContextResolver, DEFAULT_CONTEXT_TIMEOUT};
use crate::core::submitter::{Credentials, Submitter};
use crate::domain::model::{RunContext, SubmissionOutcome};
use crate::domain::ports::{EnvSource, ReportSource, ResultsApi};
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Drives context resolution, report loading and submission, in that order.
pub struct SubmissionHarness<E: EnvSource, R: ReportSource, A: ResultsApi> {
    env: E,
    reports: R,
    api: A,
    report_path: PathBuf,
    context_timeout: Duration,
}

impl<E: EnvSource, R: ReportSource, A: ResultsApi> SubmissionHarness<E, R, A> {
    pub fn new(env: E, reports: R, api: A, report_path: impl Into<PathBuf>) -> Self {
        Self {
            env,
            reports,
            api,
            report_path: report_path.into(),
            context_timeout: DEFAULT_CONTEXT_TIMEOUT,
        }
    }

    pub fn with_context_timeout(mut self, timeout: Duration) -> Self {
        self.context_timeout = timeout;
        self
    }

    pub async fn run(self) -> Result<SubmissionOutcome> {
        // 先嘗試從 API 取得最新上下文，失敗則使用環境變數
        let context = ContextResolver::new(&self.env, &self.api)
            .with_timeout(self.context_timeout)
            .resolve()
            .await;
        let user = github_user(&self.env);

        print_context(&user, &context);
        println!("🧪 Test command already completed by the test runner");
        println!();

        // 測試報告由外部 test runner 產生
        let report = ReportLoader::new(self.reports, self.report_path).load().await?;

        let credentials = Credentials::from_env(&self.env)?;
        let receipt = Submitter::new(&self.api, credentials)
            .submit(&user, &context, report)
            .await?;

        Ok(SubmissionOutcome { context, receipt })
    }
}

fn print_context(user: &str, context: &RunContext) {
    println!();
    println!("📋 Exercise Context:");
    println!("   User: {}", user);
    println!("   Course: {}", context.course_type);
    println!("   Week {}, Day {}", context.week_number, context.day_number);
    println!("   Exercise: {} - {}", context.exercise_id, context.exercise_title);
    if !context.required_suites.is_empty() {
        println!("   Required suites: {}", context.required_suites.join(", "));
    }
    println!();
}
