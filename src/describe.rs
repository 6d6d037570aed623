//! Short place descriptions from a hosted language model
//!
//! Optional enrichment step backed by the OpenRouter chat completions API.
//! Purely decorative: any failure degrades to a fixed fallback string and
//! never blocks itinerary assembly.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DescriptionConfig;

/// Fallback used when description generation fails
pub const DESCRIPTION_FALLBACK: &str = "Error generating description.";

/// Generates a one-to-two-sentence description for a place
pub trait DescribePlace {
    /// Short description for `place`; falls back to
    /// [`DESCRIPTION_FALLBACK`] on any failure
    fn describe(&self, place: &str) -> String;
}

/// OpenRouter chat completions client
pub struct OpenRouterClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OpenRouterClient {
    /// Create a new client; `None` when no API key is configured
    pub fn from_config(config: &DescriptionConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key.clone() else {
            debug!("No description API key configured, enrichment disabled");
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("TripCraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Some(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }))
    }

    /// Call the completions endpoint, propagating errors
    fn generate(&self, place: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: format!(
                    "Write a very short travel description for {place}. \
                     Keep it within one or two sentences."
                ),
            }],
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()?
            .error_for_status()?;

        let chat_response: ChatResponse = response
            .json()
            .with_context(|| "Failed to parse completions response")?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| anyhow!("Completions response contained no choices"))
    }
}

impl DescribePlace for OpenRouterClient {
    fn describe(&self, place: &str) -> String {
        match self.generate(place) {
            Ok(description) => description,
            Err(e) => {
                warn!("Description generation failed for '{}': {}", place, e);
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }
}
