pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{HttpResultsApi, LayeredEnv, LocalReportFile, MapEnv, ProcessEnv};
pub use crate::core::harness::SubmissionHarness;
pub use crate::utils::error::{Result, SubmitError};
