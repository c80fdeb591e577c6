use crate::domain::model::RunContext;
use crate::domain::ports::{EnvSource, ResultsApi};
use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use std::time::Duration;
use url::Url;

pub const RESULT_ENDPOINT_VAR: &str = "APP_RESULT_ENDPOINT";
pub const RESULT_TOKEN_VAR: &str = "APP_RESULT_TOKEN";
pub const GITHUB_USER_VAR: &str = "GITHUB_USER";
pub const DEFAULT_GITHUB_USER: &str = "unknown";

pub const DEFAULT_COURSE_TYPE: &str = "salesforce-automation";
pub const DEFAULT_WEEK: u32 = 1;
pub const DEFAULT_DAY: u32 = 1;
pub const DEFAULT_EXERCISE_ID: &str = "playground-generic";
pub const DEFAULT_EXERCISE_TITLE: &str = "Exercise";
pub const DEFAULT_TEST_COMMAND: &str = "npx playwright test";

pub const DEFAULT_CONTEXT_TIMEOUT: Duration = Duration::from_secs(5);

const RESULTS_PATH_SUFFIX: &str = "/api/results";
const CONTEXT_PATH: &str = "/api/codespaces/context";

pub fn github_user<E: EnvSource>(env: &E) -> String {
    env.get_or(GITHUB_USER_VAR, DEFAULT_GITHUB_USER)
}

/// Accepts a JSON array or a comma separated list.
pub fn parse_required_suites(value: Option<&str>) -> Vec<String> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Vec::new();
    };

    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(value) {
        return items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `https://host/api/results` -> `https://host/api/codespaces/context?githubUsername=<user>`
pub fn context_url(endpoint: &str, github_user: &str) -> Result<Url> {
    let base = endpoint.strip_suffix(RESULTS_PATH_SUFFIX).unwrap_or(endpoint);
    let mut url = validate_url(RESULT_ENDPOINT_VAR, &format!("{}{}", base, CONTEXT_PATH))?;
    url.query_pairs_mut()
        .append_pair("githubUsername", github_user);
    Ok(url)
}

fn number_or_default<E: EnvSource>(env: &E, key: &str, default: u32) -> u32 {
    match env.get(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️  {}={:?} is not a valid number, using {}", key, raw, default);
            default
        }),
    }
}

/// Context built purely from environment lookups.
pub fn context_from_env<E: EnvSource>(env: &E) -> RunContext {
    RunContext {
        course_type: env.get_or("APP_COURSE_TYPE", DEFAULT_COURSE_TYPE),
        week_number: number_or_default(env, "APP_WEEK", DEFAULT_WEEK),
        day_number: number_or_default(env, "APP_DAY", DEFAULT_DAY),
        exercise_id: env.get_or("APP_EXERCISE_ID", DEFAULT_EXERCISE_ID),
        exercise_title: env.get_or("APP_EXERCISE_TITLE", DEFAULT_EXERCISE_TITLE),
        test_command: env.get_or("APP_TEST_COMMAND", DEFAULT_TEST_COMMAND),
        required_suites: parse_required_suites(env.get("APP_REQUIRED_SUITES").as_deref()),
    }
}

/// Prefers the context served by the results service and falls back to the
/// environment on any failure. Never returns an error.
pub struct ContextResolver<'a, E: EnvSource, A: ResultsApi> {
    env: &'a E,
    api: &'a A,
    timeout: Duration,
}

impl<'a, E: EnvSource, A: ResultsApi> ContextResolver<'a, E, A> {
    pub fn new(env: &'a E, api: &'a A) -> Self {
        Self {
            env,
            api,
            timeout: DEFAULT_CONTEXT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn resolve(&self) -> RunContext {
        match self.fetch_remote().await {
            Some(context) => context,
            None => context_from_env(self.env),
        }
    }

    async fn fetch_remote(&self) -> Option<RunContext> {
        let Some(endpoint) = self.env.get(RESULT_ENDPOINT_VAR) else {
            tracing::warn!("⚠️  {} not set, using environment variables", RESULT_ENDPOINT_VAR);
            return None;
        };

        let user = github_user(self.env);
        let url = match context_url(&endpoint, &user) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("⚠️  Error fetching context: {}", e);
                return None;
            }
        };

        tracing::info!("📡 Fetching fresh context from: {}", url);
        match self.api.fetch_context(&url, self.timeout).await {
            Ok(Some(context)) => {
                tracing::info!("✅ Fresh context loaded from API");
                Some(context)
            }
            Ok(None) => {
                tracing::warn!("⚠️  Context response had no context, using environment variables");
                None
            }
            Err(e) => {
                tracing::warn!("⚠️  Could not fetch context ({}), using environment variables", e);
                None
            }
        }
    }
}
