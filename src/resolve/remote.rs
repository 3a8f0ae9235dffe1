use super::{AnswerResolver, ResolvedAnswer};
use crate::config::CompletionConfig;
use crate::format::EmphasisMarkup;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Returned when the completion service refuses to answer for safety reasons
pub const SAFETY_BLOCKED_MESSAGE: &str =
    "The generated response was blocked for safety reasons. Please try rephrasing the question.";

/// Returned after every retry attempt has failed
pub const EXHAUSTED_FALLBACK: &str = "Sorry man.";

/// Finish reason reported for policy-filtered candidates
const SAFETY_FINISH_REASON: &str = "SAFETY";

/// Bounded retry policy with exponential backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of attempts; the first attempt counts
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds
    pub base_delay_ms: u64,
    /// Backoff multiplier applied after each failed attempt
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1000,
            multiplier: 2,
        }
    }
}

impl RetryPolicy {
    /// Backoff to wait after the given zero-based failed attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.base_delay_ms * u64::from(self.multiplier).pow(attempt))
    }
}

/// Completion request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl CompletionRequest {
    pub fn new(system_instruction: &str, user_text: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: user_text.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Completion response body
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

/// One POST-style completion call
///
/// Separated from the retry loop so the client can be exercised against a
/// failing transport without a network.
#[async_trait::async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn execute(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}

/// Transport backed by the real completion endpoint
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let api_key = config.api_key.as_deref().unwrap_or_default();
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            config.base_url.trim_end_matches('/'),
            config.model,
            api_key
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, url })
    }
}

#[async_trait::async_trait]
impl CompletionTransport for HttpTransport {
    async fn execute(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("Completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Completion request failed with status {}: {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse completion response")
    }
}

enum Outcome {
    Text(String),
    SafetyBlocked,
}

/// Resilient client for the remote completion service
///
/// `complete` never fails: transport and protocol errors are retried with
/// exponential backoff, and exhaustion resolves to a fixed fallback string.
pub struct CompletionClient {
    transport: Box<dyn CompletionTransport>,
    retry: RetryPolicy,
}

impl CompletionClient {
    pub fn new(transport: Box<dyn CompletionTransport>, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    pub fn from_config(config: &CompletionConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(Box::new(transport), config.retry.clone()))
    }

    /// Issue a completion request, retrying with backoff until it resolves
    ///
    /// No backoff before the first attempt and no retry after the last. A
    /// safety-blocked candidate is a terminal outcome, not a failure.
    pub async fn complete(&self, system_instruction: &str, user_text: &str) -> String {
        let request = CompletionRequest::new(system_instruction, user_text);

        for attempt in 0..self.retry.max_attempts {
            if attempt > 0 {
                tokio::time::sleep(self.retry.delay_after(attempt - 1)).await;
            }

            match self.try_once(&request).await {
                Ok(Outcome::Text(text)) => {
                    debug!("Completion resolved on attempt {}", attempt + 1);
                    return text;
                }
                Ok(Outcome::SafetyBlocked) => {
                    warn!("Completion blocked by the safety filter");
                    return SAFETY_BLOCKED_MESSAGE.to_string();
                }
                Err(err) => {
                    warn!("Completion attempt {} failed: {:#}", attempt + 1, err);
                }
            }
        }

        EXHAUSTED_FALLBACK.to_string()
    }

    async fn try_once(&self, request: &CompletionRequest) -> Result<Outcome> {
        let response = self.transport.execute(request).await?;
        unwrap_response(response)
    }
}

/// Extract the first candidate's first part, or classify the refusal
fn unwrap_response(response: CompletionResponse) -> Result<Outcome> {
    let candidate = match response.candidates.and_then(|c| c.into_iter().next()) {
        Some(candidate) => candidate,
        None => anyhow::bail!("Invalid completion response: no candidates"),
    };

    let text = candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.as_ref())
        .and_then(|parts| parts.first())
        .and_then(|part| part.text.clone());

    match text {
        Some(text) => Ok(Outcome::Text(text)),
        None if candidate.finish_reason.as_deref() == Some(SAFETY_FINISH_REASON) => {
            Ok(Outcome::SafetyBlocked)
        }
        None => anyhow::bail!("Invalid completion response: no text in first candidate"),
    }
}

/// System instruction for the completion service
///
/// Personalization happens here: the job role is embedded in the
/// instruction, so remote answers carry no placeholder.
pub fn system_instruction(job_role: &str) -> String {
    format!(
        "You are an expert career coach acting as a real-time interview assistant. \
         The user is in a live interview for a \"{}\" position. They will provide a \
         spoken question transcribed by software, which may contain errors. Interpret \
         the user's likely intent from the transcript and generate a concise, \
         professional, and well-structured answer. Use the STAR method (Situation, \
         Task, Action, Result) where appropriate. The answer should be ready for the \
         user to adapt and say aloud. Do not add any introductory or concluding \
         conversational text. Just provide the answer.",
        job_role
    )
}

#[async_trait::async_trait]
impl AnswerResolver for CompletionClient {
    async fn resolve(&self, question: &str, job_role: &str) -> ResolvedAnswer {
        let text = self
            .complete(&system_instruction(job_role), question)
            .await;
        ResolvedAnswer {
            text,
            markup: EmphasisMarkup::DoubleAsterisk,
        }
    }

    fn name(&self) -> &str {
        "remote-completion"
    }
}
