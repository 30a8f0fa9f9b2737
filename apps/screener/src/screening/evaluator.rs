//! Evaluator seam — pluggable, trait-based source of raw model output.
//!
//! Default: `LlmEvaluator` (one Responses API call per applicant).
//! The pipeline only sees `RawCompletion`, so tests swap in a scripted evaluator.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError, RawCompletion};

/// Sends a rendered evaluation prompt somewhere and returns the raw text answer.
#[async_trait]
pub trait CandidateEvaluator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<RawCompletion, LlmError>;
}

/// Evaluator backed by the LLM client.
pub struct LlmEvaluator(pub LlmClient);

#[async_trait]
impl CandidateEvaluator for LlmEvaluator {
    async fn complete(&self, prompt: &str) -> Result<RawCompletion, LlmError> {
        self.0.complete(prompt).await
    }
}
