pub mod harness;
pub mod loader;
pub mod resolver;
pub mod submitter;

pub use crate::domain::model::{RunContext, SubmissionOutcome, SubmissionPayload, SubmissionReceipt};
pub use crate::domain::ports::{EnvSource, ReportSource, ResultsApi};
pub use crate::utils::error::Result;
