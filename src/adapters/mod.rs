// Adapters layer: concrete implementations for the environment, the local report and the results service.

pub mod env;
pub mod http;
pub mod report;

pub use env::{LayeredEnv, MapEnv, ProcessEnv};
pub use http::HttpResultsApi;
pub use report::LocalReportFile;
