//! HTTP client for a locally hosted inference server.
//!
//! [`LocalClient`] translates a [`TextRequest`] into a POST against the
//! configured endpoint, resolving the wire [`Dialect`](crate::Dialect) from
//! the endpoint string at call start. Structured generation layers the
//! recovery ladder from [`crate::extract`] over an unreliable strict-JSON
//! server mode.

use std::env;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::InferenceError;
use crate::extract::extract_json;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const STRICT_JSON_SYSTEM: &str = "Respond with valid JSON only.";
const RAW_JSON_SUFFIX: &str = "\n\nOUTPUT ONLY RAW JSON.";

/// One non-streaming completion request.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRequest {
    pub model: String,
    pub prompt: String,
    pub system: Option<String>,
    pub temperature: f32,
}

impl TextRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

#[derive(Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
    options: GenerateOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a str>,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateReply {
    response: String,
}

/// Client for one local inference server with a single mutable endpoint.
pub struct LocalClient {
    http: reqwest::Client,
    endpoint: RwLock<String>,
}

impl LocalClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: RwLock::new(endpoint.into()),
        }
    }

    /// Create a client from the `LOCAL_LLM_URL` environment variable.
    pub fn from_env() -> Self {
        let url = env::var("LOCAL_LLM_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        Self::new(url)
    }

    pub fn endpoint(&self) -> String {
        self.endpoint.read().unwrap().clone()
    }

    /// Replace the endpoint for subsequent calls. In-flight calls keep the
    /// base URL they captured at call start.
    pub fn set_endpoint(&self, endpoint: impl Into<String>) {
        *self.endpoint.write().unwrap() = endpoint.into();
    }

    async fn send_generate(
        &self,
        request: &TextRequest,
        system: Option<&str>,
        strict_json: bool,
    ) -> Result<String, InferenceError> {
        let base = self.endpoint();
        let url = Dialect::detect(&base).generate_url(&base);
        let body = GenerateBody {
            model: &request.model,
            prompt: &request.prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: request.temperature,
            },
            format: strict_json.then_some("json"),
        };
        debug!(%url, model = %request.model, strict_json, "issuing generation request");
        let res = self.http.post(&url).json(&body).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(InferenceError::Request {
                status: status.as_u16(),
                body,
            });
        }
        let reply: GenerateReply = res.json().await?;
        Ok(reply.response)
    }

    /// Plain text completion. Returns the server's `response` field verbatim.
    pub async fn generate_text(&self, request: &TextRequest) -> Result<String, InferenceError> {
        self.send_generate(request, request.system.as_deref(), false)
            .await
    }

    /// Structured completion with best-effort recovery.
    ///
    /// The strict attempt asks the server for JSON output directly; if the
    /// request fails or the reply does not parse, one plain-text retry with
    /// an explicit raw-JSON instruction runs through the extraction ladder.
    /// Exhaustion fails with [`InferenceError::MalformedResponse`].
    pub async fn generate_json(&self, request: &TextRequest) -> Result<Value, InferenceError> {
        let system = match &request.system {
            Some(s) => format!("{s}\n{STRICT_JSON_SYSTEM}"),
            None => STRICT_JSON_SYSTEM.to_string(),
        };
        match self.send_generate(request, Some(&system), true).await {
            Ok(text) => {
                if let Ok(value) = serde_json::from_str(text.trim()) {
                    return Ok(value);
                }
                debug!("strict JSON reply did not parse, retrying as plain text");
            }
            Err(err) => {
                debug!(%err, "strict JSON attempt failed, retrying as plain text");
            }
        }
        let fallback = TextRequest {
            prompt: format!("{}{RAW_JSON_SUFFIX}", request.prompt),
            ..request.clone()
        };
        let text = self.generate_text(&fallback).await?;
        extract_json(&text).map_err(|stage| InferenceError::MalformedResponse { stage })
    }
}
