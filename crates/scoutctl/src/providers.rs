//! LLM provider clients.
//!
//! Two HTTP backends behind one `complete` entry point: OpenAI chat
//! completions and Gemini generateContent. Each call sends one prompt and
//! returns the raw reply text, already unwrapped from the provider's
//! transport envelope - parsing that text is scout_common's job. No retry
//! or backoff; a failed call fails the search.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1500;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Which LLM backend to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            other => Err(ProviderError::UnknownProvider(other.to_string())),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider call failures.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider '{0}' (expected 'openai' or 'gemini')")]
    UnknownProvider(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("{provider} returned error {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("provider returned an empty response")]
    EmptyResponse,
}

/// HTTP client for a single provider/key pair.
///
/// Built per request from explicit parameters - no ambient provider or
/// credential state.
pub struct ProviderClient {
    http_client: reqwest::Client,
    provider: Provider,
    api_key: String,
}

// OpenAI wire format.

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiReplyMessage {
    content: String,
}

// Gemini wire format.

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

impl ProviderClient {
    pub fn new(provider: Provider, api_key: String) -> Self {
        Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            provider,
            api_key,
        }
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Send one prompt, return the raw reply text.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        info!("[>]  LLM CALL [{}] ({} prompt chars)", self.provider, prompt.len());
        let text = match self.provider {
            Provider::OpenAi => self.call_openai(prompt).await?,
            Provider::Gemini => self.call_gemini(prompt).await?,
        };
        info!("[<]  LLM RESPONSE ({} chars)", text.len());
        debug!("response head: {}", text.chars().take(500).collect::<String>());

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }

    async fn call_openai(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = OpenAiRequest {
            model: OPENAI_MODEL.to_string(),
            messages: vec![OpenAiMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .http_client
            .post(OPENAI_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(api_error("openai", response).await);
        }

        let reply: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Http(format!("failed to parse OpenAI response: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(ProviderError::EmptyResponse)
    }

    async fn call_gemini(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_TOKENS,
            },
        };

        let url = format!("{}?key={}", GEMINI_URL, self.api_key);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(api_error("gemini", response).await);
        }

        let reply: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Http(format!("failed to parse Gemini response: {e}")))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(ProviderError::EmptyResponse)
    }
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(REQUEST_TIMEOUT_SECS)
    } else {
        ProviderError::Http(format!("request failed: {e}"))
    }
}

/// Pull the provider's own error message out of a non-success body when
/// present (both providers use `{"error": {"message": ...}}`).
async fn api_error(provider: &'static str, response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("{} API request failed", provider));
    ProviderError::Api {
        provider,
        status,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_case_insensitively() {
        assert_eq!(Provider::from_str("openai").unwrap(), Provider::OpenAi);
        assert_eq!(Provider::from_str("  Gemini ").unwrap(), Provider::Gemini);
        assert!(Provider::from_str("claude").is_err());
    }

    #[test]
    fn provider_round_trips_through_display() {
        for p in [Provider::OpenAi, Provider::Gemini] {
            assert_eq!(Provider::from_str(p.as_str()).unwrap(), p);
        }
    }

    #[test]
    fn openai_request_wire_shape() {
        let request = OpenAiRequest {
            model: OPENAI_MODEL.to_string(),
            messages: vec![OpenAiMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let v: Value = serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(v["model"], "gpt-3.5-turbo");
        assert_eq!(v["messages"][0]["role"], "user");
        assert_eq!(v["max_tokens"], 1500);
    }

    #[test]
    fn gemini_request_uses_camel_case_keys() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "hi".to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_TOKENS,
            },
        };
        let v: Value = serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["maxOutputTokens"], 1500);
    }

    #[test]
    fn gemini_response_envelope_unwraps() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"games\":[]}"}]}}]}"#;
        let reply: GeminiResponse = serde_json::from_str(body).unwrap();
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap();
        assert_eq!(text, "{\"games\":[]}");
    }
}
