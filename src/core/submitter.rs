use crate::core::resolver::{RESULT_ENDPOINT_VAR, RESULT_TOKEN_VAR};
use crate::domain::model::{RunContext, SubmissionPayload, SubmissionReceipt};
use crate::domain::ports::{EnvSource, ResultsApi};
use crate::utils::error::{Result, SubmitError};
use crate::utils::validation::validate_url;
use url::Url;

/// Endpoint and token for the results service.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub endpoint: Url,
    pub token: String,
}

impl Credentials {
    pub fn from_env<E: EnvSource>(env: &E) -> Result<Self> {
        let (Some(endpoint), Some(token)) = (env.get(RESULT_ENDPOINT_VAR), env.get(RESULT_TOKEN_VAR))
        else {
            return Err(SubmitError::MissingCredentials);
        };

        Ok(Self {
            endpoint: validate_url(RESULT_ENDPOINT_VAR, &endpoint)?,
            token,
        })
    }
}

pub struct Submitter<'a, A: ResultsApi> {
    api: &'a A,
    credentials: Credentials,
}

impl<'a, A: ResultsApi> Submitter<'a, A> {
    pub fn new(api: &'a A, credentials: Credentials) -> Self {
        Self { api, credentials }
    }

    pub async fn submit(
        &self,
        github_user: &str,
        context: &RunContext,
        report: serde_json::Value,
    ) -> Result<SubmissionReceipt> {
        let payload = SubmissionPayload {
            github_user: github_user.to_string(),
            context: context.clone(),
            report,
        };

        tracing::info!("📤 Submitting results to {}", self.credentials.endpoint);
        self.api
            .submit(&self.credentials.endpoint, &self.credentials.token, &payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapEnv;

    #[test]
    fn test_credentials_require_both_values() {
        let env = MapEnv::new().with(RESULT_ENDPOINT_VAR, "https://example.com/api/results");
        assert!(matches!(
            Credentials::from_env(&env),
            Err(SubmitError::MissingCredentials)
        ));

        let env = MapEnv::new().with(RESULT_TOKEN_VAR, "secret");
        assert!(matches!(
            Credentials::from_env(&env),
            Err(SubmitError::MissingCredentials)
        ));
    }

    #[test]
    fn test_credentials_reject_non_http_endpoint() {
        let env = MapEnv::new()
            .with(RESULT_ENDPOINT_VAR, "ftp://example.com/api/results")
            .with(RESULT_TOKEN_VAR, "secret");
        assert!(matches!(
            Credentials::from_env(&env),
            Err(SubmitError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_credentials_from_env() {
        let env = MapEnv::new()
            .with(RESULT_ENDPOINT_VAR, "https://example.com/api/results")
            .with(RESULT_TOKEN_VAR, "secret");
        let credentials = Credentials::from_env(&env).unwrap();
        assert_eq!(credentials.endpoint.path(), "/api/results");
        assert_eq!(credentials.token, "secret");
    }
}
