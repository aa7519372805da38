use std::time::Duration;

use owo_colors::OwoColorize;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RefineConfig;

/// Instruction prepended to the draft report.
const REFINE_PROMPT: &str =
    "Refine this security report to be more formal, concise, and professional:";

/// Errors from the refinement boundary. All recoverable: the caller falls
/// back to the unrefined report.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("refinement request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("refinement service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("refinement response contained no message content")]
    EmptyResponse,
}

/// A text-refinement backend. The pipeline only talks to this trait, so
/// tests can swap in a fake without network access.
pub trait Refiner {
    fn refine(&self, report: &str) -> Result<String, RefineError>;
}

/// Refines reports through an OpenAI-compatible chat-completions endpoint.
pub struct OpenAiRefiner {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiRefiner {
    /// Build a refiner from config plus the `OPENAI_API_KEY` environment
    /// variable. Fails before any network activity when the key is absent.
    pub fn from_env(config: &RefineConfig) -> Result<Self, RefineError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(RefineError::MissingApiKey)?;
        Ok(Self::new(api_key, config))
    }

    pub fn new(api_key: impl Into<String>, config: &RefineConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with custom timeout: {}", e);
                Client::new()
            });

        OpenAiRefiner {
            client,
            api_key: api_key.into(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

impl Refiner for OpenAiRefiner {
    fn refine(&self, report: &str) -> Result<String, RefineError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: format!("{REFINE_PROMPT}\n{report}"),
            }],
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, "Sending refinement request");

        let response = self
            .client
            .post(self.chat_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RefineError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json()?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(RefineError::EmptyResponse)?;

        info!("Report refined successfully");
        Ok(content.trim().to_string())
    }
}

/// Run the refiner and fall back to the original text when it fails.
/// Refinement is best-effort by contract; a failed call must never cost
/// the user their report.
pub fn refine_or_original(refiner: &dyn Refiner, report: &str) -> String {
    match refiner.refine(report) {
        Ok(refined) => refined,
        Err(e) => {
            warn!("Refinement failed: {}", e);
            eprintln!(
                "{} refinement failed ({}); using original report.",
                "Warning:".yellow().bold(),
                e
            );
            report.to_string()
        }
    }
}

// === Chat-completions wire types ===

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
    #[serde(default)]
    content: Option<String>,
}
