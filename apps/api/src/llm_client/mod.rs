/// LLM client — the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call a provider API directly.
/// All LLM interactions MUST go through this module.
///
/// Provider failover is an ordered chain, not nested exception handlers:
/// each provider implements `TextProvider` and returns a `Result`; the
/// chain tries them in sequence and logs each failover.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded to prevent accidental model drift between deployments.
pub const ANTHROPIC_MODEL: &str = "claude-sonnet-4-5";

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-4o";

const MAX_TOKENS: u32 = 8192;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("No text-generation provider is configured")]
    NoProvider,
}

/// One text-generation backend. Implementations own their wire format and
/// retry policy; callers only see prompt + system in, text out.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client")
}

/// Sends the request built by `build`, retrying 429 and 5xx responses with
/// exponential backoff (1s, 2s). Other statuses are returned to the caller.
async fn send_with_retry<F>(provider: &str, build: F) -> Result<reqwest::Response, LlmError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let mut last_error: Option<LlmError> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
            warn!(
                "{provider} call attempt {attempt} failed, retrying after {}ms...",
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }

        let response = match build().send().await {
            Ok(r) => r,
            Err(e) => {
                last_error = Some(LlmError::Http(e));
                continue;
            }
        };

        let status = response.status();
        if status.as_u16() == 429 || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            warn!("{provider} API returned {status}: {body}");
            last_error = Some(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
            continue;
        }

        return Ok(response);
    }

    Err(last_error.unwrap_or(LlmError::RateLimited {
        retries: MAX_RETRIES,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Anthropic
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: http_client(),
            api_key,
        }
    }
}

#[async_trait]
impl TextProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: ANTHROPIC_MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = send_with_retry(self.name(), || {
            self.client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnthropicResponse = response.json().await?;
        debug!(
            "anthropic call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );

        parsed
            .content
            .into_iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: http_client(),
            api_key,
        }
    }
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request_body = OpenAiRequest {
            model: OPENAI_MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = send_with_retry(self.name(), || {
            self.client
                .post(OPENAI_API_URL)
                .bearer_auth(&self.api_key)
                .json(&request_body)
        })
        .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OpenAiResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Provider chain
// ────────────────────────────────────────────────────────────────────────────

/// Ordered list of providers tried in sequence. The first success wins;
/// the last failure is returned when every provider is exhausted.
pub struct ProviderChain {
    providers: Vec<Arc<dyn TextProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self { providers }
    }

    /// Builds the chain from configuration. `AI_SERVICE` picks which
    /// configured provider leads; the other (if configured) is the
    /// fallback. Errors when no provider has an API key.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let anthropic = config
            .anthropic_api_key
            .clone()
            .map(|key| Arc::new(AnthropicProvider::new(key)) as Arc<dyn TextProvider>);
        let openai = config
            .openai_api_key
            .clone()
            .map(|key| Arc::new(OpenAiProvider::new(key)) as Arc<dyn TextProvider>);

        let ordered: Vec<Arc<dyn TextProvider>> = if config.ai_service == "openai" {
            [openai, anthropic].into_iter().flatten().collect()
        } else {
            [anthropic, openai].into_iter().flatten().collect()
        };

        if ordered.is_empty() {
            anyhow::bail!(
                "No text-generation provider configured: set ANTHROPIC_API_KEY or OPENAI_API_KEY"
            );
        }

        Ok(Self::new(ordered))
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Tries each provider in order, returning the first successful
    /// completion.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for provider in &self.providers {
            match provider.complete(prompt, system).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(
                        "Provider {} failed: {e} — trying next provider",
                        provider.name()
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(LlmError::NoProvider))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    struct CannedProvider {
        name: &'static str,
        result: Result<&'static str, u16>,
    }

    #[async_trait]
    impl TextProvider for CannedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            match self.result {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "canned failure".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_success() {
        let chain = ProviderChain::new(vec![
            Arc::new(CannedProvider {
                name: "first",
                result: Ok("from first"),
            }),
            Arc::new(CannedProvider {
                name: "second",
                result: Ok("from second"),
            }),
        ]);
        assert_eq!(chain.complete("p", "s").await.unwrap(), "from first");
    }

    #[tokio::test]
    async fn test_chain_falls_through_to_next_provider() {
        let chain = ProviderChain::new(vec![
            Arc::new(CannedProvider {
                name: "first",
                result: Err(500),
            }),
            Arc::new(CannedProvider {
                name: "second",
                result: Ok("from second"),
            }),
        ]);
        assert_eq!(chain.complete("p", "s").await.unwrap(), "from second");
    }

    #[tokio::test]
    async fn test_chain_surfaces_last_error_when_exhausted() {
        let chain = ProviderChain::new(vec![
            Arc::new(CannedProvider {
                name: "first",
                result: Err(500),
            }),
            Arc::new(CannedProvider {
                name: "second",
                result: Err(503),
            }),
        ]);
        let err = chain.complete("p", "s").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_empty_chain_reports_no_provider() {
        let chain = ProviderChain::new(vec![]);
        assert!(matches!(
            chain.complete("p", "s").await.unwrap_err(),
            LlmError::NoProvider
        ));
    }
}
