use serde::{Deserialize, Serialize};
use std::fmt;

/// Which exercise is being graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunContext {
    pub course_type: String,
    pub week_number: u32,
    pub day_number: u32,
    pub exercise_id: String,
    pub exercise_title: String,
    pub test_command: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_suites: Vec<String>,
}

/// `null` is treated like a missing list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /api/codespaces/context`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextEnvelope {
    #[serde(default)]
    pub context: Option<RunContext>,
}

/// Outbound body of the results POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub github_user: String,
    #[serde(flatten)]
    pub context: RunContext,
    pub report: serde_json::Value,
}

/// Success response of the results service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl SubmissionReceipt {
    pub fn passed(&self) -> bool {
        self.status.as_deref() == Some("passed")
    }

    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    pub fn id_label(&self) -> String {
        match &self.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => "unknown".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub context: RunContext,
    pub receipt: SubmissionReceipt,
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ Results submitted successfully!")?;
        writeln!(f, "   Status: {}", self.receipt.status_label())?;
        writeln!(f, "   ID: {}", self.receipt.id_label())?;
        writeln!(
            f,
            "   Course: {}, Week {}, Day {}, Exercise: {}",
            self.context.course_type,
            self.context.week_number,
            self.context.day_number,
            self.context.exercise_id
        )?;
        if self.receipt.passed() {
            write!(f, "🎉 All tests passed!")
        } else {
            write!(f, "⚠️  Some tests failed. Check the report for details.")
        }
    }
}
