//! LLM Client — the single point of entry for all model API calls in the screener.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! All LLM interactions MUST go through this module.
//!
//! One request per call, no retry: a transport or API failure ends the run.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

pub mod prompts;

const RESPONSES_PATH: &str = "/responses";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl ResponsesResponse {
    /// Extracts the text of the first `output_text` block of the first message item.
    pub fn text(&self) -> Option<&str> {
        self.output
            .iter()
            .find(|item| item.item_type == "message")
            .and_then(|item| {
                item.content
                    .iter()
                    .find(|b| b.block_type == "output_text")
            })
            .and_then(|b| b.text.as_deref())
    }
}

/// Raw model output handed to the normalizer, independent of the provider's response shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCompletion {
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The single LLM client used by the screener.
/// Wraps the OpenAI Responses API: model + single prompt string in, text out.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one prompt and returns the model's text output, trimmed.
    /// If the response carries no output text block, the raw body is returned instead.
    pub async fn complete(&self, prompt: &str) -> Result<RawCompletion, LlmError> {
        let request_body = ResponsesRequest {
            model: &self.model,
            input: prompt,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, RESPONSES_PATH))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(body),
            });
        }

        Ok(RawCompletion {
            text: extract_text(&body),
        })
    }
}

/// Pulls the provider's error message out of an error body, falling back to the body itself.
fn provider_error_message(body: String) -> String {
    serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

fn extract_text(body: &str) -> String {
    match serde_json::from_str::<ResponsesResponse>(body) {
        Ok(parsed) => {
            if let Some(usage) = &parsed.usage {
                debug!(
                    "LLM call succeeded: input_tokens={}, output_tokens={}",
                    usage.input_tokens, usage.output_tokens
                );
            }
            parsed
                .text()
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| body.trim().to_string())
        }
        Err(_) => body.trim().to_string(),
    }
}
