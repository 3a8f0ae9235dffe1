//! Answer resolution strategies
//!
//! One pipeline, two interchangeable backends: a remote completion client
//! and a local keyword-overlap matcher. The session controller depends only
//! on the `AnswerResolver` trait.

mod bank;
mod remote;

pub use bank::{AnswerBankEntry, BankResolver, ScoredMatch, ANSWER_BANK, NO_MATCH_TEMPLATE};
pub use remote::{
    system_instruction, Candidate, CompletionClient, CompletionRequest, CompletionResponse,
    CompletionTransport, Content, HttpTransport, Part, ResponseContent, ResponsePart, RetryPolicy,
    EXHAUSTED_FALLBACK, SAFETY_BLOCKED_MESSAGE,
};

use crate::config::Config;
use crate::format::EmphasisMarkup;
use anyhow::Result;

/// A raw answer produced by a resolution strategy
#[derive(Debug, Clone)]
pub struct ResolvedAnswer {
    /// Unformatted answer text or template
    pub text: String,
    /// Which emphasis convention the text uses
    pub markup: EmphasisMarkup,
}

/// Answer resolution strategy
///
/// Resolution never fails: every failure path inside a strategy resolves to
/// displayable text.
#[async_trait::async_trait]
pub trait AnswerResolver: Send + Sync {
    /// Resolve a transcribed question into raw answer text
    async fn resolve(&self, question: &str, job_role: &str) -> ResolvedAnswer;

    /// Strategy name for logging
    fn name(&self) -> &str;
}

/// Which resolution strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    /// Remote completion service
    Remote,
    /// Local answer bank
    LocalBank,
}

/// Resolver factory
pub struct ResolverFactory;

impl ResolverFactory {
    /// Create a resolution strategy from configuration
    pub fn create(kind: ResolverKind, config: &Config) -> Result<Box<dyn AnswerResolver>> {
        match kind {
            ResolverKind::Remote => {
                let client = CompletionClient::from_config(&config.completion)?;
                Ok(Box::new(client))
            }
            ResolverKind::LocalBank => Ok(Box::new(BankResolver::new())),
        }
    }
}
