use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Report file not found at {path}")]
    ReportNotFound { path: String },

    #[error("APP_RESULT_ENDPOINT or APP_RESULT_TOKEN missing")]
    MissingCredentials,

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to submit results: {body}")]
    SubmissionRejected { status: u16, body: String },

    #[error("Unexpected response from {url}: HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl SubmitError {
    /// Every hard failure terminates the process with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SubmitError::ReportNotFound { .. } => {
                "Run the test suite first so that it writes test-report.json"
            }
            SubmitError::MissingCredentials => {
                "Set APP_RESULT_ENDPOINT and APP_RESULT_TOKEN in the environment or .env.exercise"
            }
            SubmitError::InvalidConfigValueError { .. } => {
                "Check the command-line arguments and environment values"
            }
            SubmitError::SerializationError(_) => {
                "The report is not valid JSON; re-run the tests to regenerate it"
            }
            SubmitError::HttpError(_) => "Check network connectivity and the endpoint URL",
            SubmitError::SubmissionRejected { status, .. } if *status == 401 || *status == 403 => {
                "The results service rejected the token; verify APP_RESULT_TOKEN"
            }
            SubmitError::SubmissionRejected { .. }
            | SubmitError::UnexpectedStatus { .. }
            | SubmitError::InvalidResponse { .. } => {
                "The results service could not accept the submission; try again later"
            }
            SubmitError::IoError(_) => "Check file permissions in the project directory",
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_console_wording() {
        let err = SubmitError::ReportNotFound {
            path: "/work/test-report.json".to_string(),
        };
        assert_eq!(err.to_string(), "Report file not found at /work/test-report.json");

        let err = SubmitError::SubmissionRejected {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to submit results: boom");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_rejected_token_has_specific_hint() {
        let err = SubmitError::SubmissionRejected {
            status: 401,
            body: String::new(),
        };
        assert!(err.recovery_suggestion().contains("APP_RESULT_TOKEN"));
    }
}
