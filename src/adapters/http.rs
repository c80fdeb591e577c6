use crate::domain::model::{ContextEnvelope, RunContext, SubmissionPayload, SubmissionReceipt};
use crate::domain::ports::ResultsApi;
use crate::utils::error::{Result, SubmitError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const TOKEN_HEADER: &str = "x-app-token";

#[derive(Debug, Clone, Default)]
pub struct HttpResultsApi {
    client: Client,
}

impl HttpResultsApi {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ResultsApi for HttpResultsApi {
    async fn fetch_context(&self, url: &Url, timeout: Duration) -> Result<Option<RunContext>> {
        tracing::debug!("GET {} (timeout {:?})", url, timeout);
        let response = self.client.get(url.clone()).timeout(timeout).send().await?;

        tracing::debug!("Context response status: {}", response.status());
        if !response.status().is_success() {
            return Err(SubmitError::UnexpectedStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let envelope: ContextEnvelope = response.json().await?;
        Ok(envelope.context)
    }

    async fn submit(
        &self,
        endpoint: &Url,
        token: &str,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt> {
        tracing::debug!("POST {}", endpoint);
        let response = self
            .client
            .post(endpoint.clone())
            .header(TOKEN_HEADER, token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Submission response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::SubmissionRejected {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SubmitError::InvalidResponse {
            message: format!("submission response is not JSON: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            github_user: "octocat".to_string(),
            context: RunContext {
                course_type: "salesforce-automation".to_string(),
                week_number: 1,
                day_number: 1,
                exercise_id: "playground-generic".to_string(),
                exercise_title: "Exercise".to_string(),
                test_command: "npx playwright test".to_string(),
                required_suites: vec![],
            },
            report: json!({"suites": []}),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_token_and_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/results")
                .header("x-app-token", "secret")
                .header("content-type", "application/json")
                .json_body_partial(r#"{"githubUser": "octocat", "report": {"suites": []}}"#);
            then.status(201).json_body(json!({"status": "passed", "id": "123"}));
        });

        let api = HttpResultsApi::new();
        let endpoint = Url::parse(&server.url("/api/results")).unwrap();
        let receipt = api.submit(&endpoint, "secret", &payload()).await.unwrap();

        api_mock.assert();
        assert!(receipt.passed());
        assert_eq!(receipt.id_label(), "123");
    }

    #[tokio::test]
    async fn test_submit_rejected_keeps_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/results");
            then.status(401).body("invalid token");
        });

        let api = HttpResultsApi::new();
        let endpoint = Url::parse(&server.url("/api/results")).unwrap();
        let err = api.submit(&endpoint, "wrong", &payload()).await.unwrap_err();

        match err {
            SubmitError::SubmissionRejected { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_non_json_success_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/results");
            then.status(200).body("ok");
        });

        let api = HttpResultsApi::new();
        let endpoint = Url::parse(&server.url("/api/results")).unwrap();
        let err = api.submit(&endpoint, "secret", &payload()).await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_context_non_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/codespaces/context");
            then.status(404);
        });

        let api = HttpResultsApi::new();
        let url = Url::parse(&server.url("/api/codespaces/context")).unwrap();
        let err = api
            .fetch_context(&url, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::UnexpectedStatus { status: 404, .. }));
    }
}
