use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::prompts::{prize_prompt, response_schema};
use super::{GeneratorError, PrizeGenerator};
use crate::config::GeminiConfig;

#[derive(Deserialize)]
struct PrizePayload {
    #[serde(default)]
    prizes: Vec<String>,
}

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn request_prizes(&self, theme: &str, count: usize) -> Result<Vec<String>, GeneratorError> {
        debug!("Requesting {} prizes for theme '{}'", count, theme);

        let response = self.client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&json!({
                "contents": [{ "parts": [{ "text": prize_prompt(theme, count) }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": response_schema()
                }
            }))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to model API: {}", e);
                GeneratorError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.as_u16() == 429 {
            warn!("Model API rate limit exceeded");
            return Err(GeneratorError::RateLimited);
        } else if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Model API returned error status: {}", status);
            return Err(GeneratorError::Upstream { status: status.as_u16(), body });
        }

        let json = response.json::<Value>().await.map_err(|e| {
            error!("Failed to parse model API response: {}", e);
            GeneratorError::Malformed(e.to_string())
        })?;

        parse_generated_prizes(&json)
    }
}

impl PrizeGenerator for GeminiClient {
    fn generate<'a>(&'a self, theme: &'a str, count: usize) -> BoxFuture<'a, Result<Vec<String>, GeneratorError>> {
        Box::pin(self.request_prizes(theme, count))
    }
}

/// Pulls the prize list out of a `generateContent` reply. The model's text
/// part is itself a JSON document; an empty text yields an empty list.
pub fn parse_generated_prizes(reply: &Value) -> Result<Vec<String>, GeneratorError> {
    let text = reply
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim();

    if text.is_empty() {
        return Ok(Vec::new());
    }

    let payload: PrizePayload = serde_json::from_str(text)
        .map_err(|e| GeneratorError::Malformed(e.to_string()))?;
    Ok(payload.prizes)
}
