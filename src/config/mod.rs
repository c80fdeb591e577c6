use crate::core::loader::REPORT_FILE_NAME;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_FILE_NAME: &str = ".env.exercise";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "exercise-submit")]
#[command(about = "Submit an exercise test report to the results service")]
pub struct CliConfig {
    /// Directory holding test-report.json and .env.exercise
    #[arg(long, default_value = ".")]
    pub project_dir: String,

    /// Report location, overrides <project-dir>/test-report.json
    #[arg(long)]
    pub report: Option<String>,

    /// Env file location, overrides <project-dir>/.env.exercise
    #[arg(long)]
    pub env_file: Option<String>,

    /// Seconds to wait for the context endpoint
    #[arg(long, default_value = "5")]
    pub context_timeout: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn report_path(&self) -> PathBuf {
        match &self.report {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.project_dir).join(REPORT_FILE_NAME),
        }
    }

    pub fn env_file_path(&self) -> PathBuf {
        match &self.env_file {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(&self.project_dir).join(ENV_FILE_NAME),
        }
    }

    pub fn context_timeout(&self) -> Duration {
        Duration::from_secs(self.context_timeout)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("project_dir", &self.project_dir)?;
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        if let Some(env_file) = &self.env_file {
            validate_path("env_file", env_file)?;
        }
        validate_range("context_timeout", self.context_timeout, 1, 60)?;
        Ok(())
    }
}
