//! Provider-agnostic content adapter.
//!
//! Mirrors a common hosted-AI request convention so calling code can be
//! written once and swapped between the local client and a hosted client
//! without modification. The adapter flattens structured input into one
//! prompt blob and delegates to text or JSON generation; it performs no
//! other logic.

use serde::{Deserialize, Serialize};

use crate::client::TextRequest;
use crate::error::InferenceError;
use crate::traits::TextGenerator;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentPart {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentItem {
    pub parts: Vec<ContentPart>,
}

/// Either a bare prompt string or a structured list of parts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    Text(String),
    Items(Vec<ContentItem>),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentRequest {
    pub model: String,
    pub contents: Contents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ContentConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentResponse {
    pub text: String,
}

fn flatten(contents: &Contents) -> String {
    match contents {
        Contents::Text(s) => s.clone(),
        Contents::Items(items) => items
            .iter()
            .flat_map(|item| item.parts.iter().map(|p| p.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn wants_json(request: &ContentRequest) -> bool {
    request
        .config
        .as_ref()
        .and_then(|c| c.response_mime_type.as_deref())
        .map(|m| m == "application/json")
        .unwrap_or(false)
}

/// Run a provider-shaped request through `generator`. JSON-mode results are
/// re-serialized so the response carries text either way.
pub async fn generate_content<G: TextGenerator + ?Sized>(
    generator: &G,
    request: &ContentRequest,
) -> Result<ContentResponse, InferenceError> {
    let text_request = TextRequest::new(&request.model, flatten(&request.contents));
    let text = if wants_json(request) {
        let value = generator.generate_json(&text_request).await?;
        value.to_string()
    } else {
        generator.generate_text(&text_request).await?
    };
    Ok(ContentResponse { text })
}
