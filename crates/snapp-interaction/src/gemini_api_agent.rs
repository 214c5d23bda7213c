//! GeminiApiAgent - direct REST implementation of [`TextGenerator`] for Gemini.
//!
//! Configuration is loaded from secret.json (or `GEMINI_API_KEY`).

use std::time::Duration;

use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use snapp_core::config::SecretService;
use snapp_core::curator::TextGenerator;
use snapp_core::{Result, SnappError};
use snapp_infrastructure::SecretServiceImpl;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Generator that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiAgent {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Builds an agent from the secret service.
    ///
    /// The model defaults to `gemini-2.5-flash` when secret.json names none.
    pub async fn try_from_secrets(service: &dyn SecretService) -> Result<Self> {
        let secret_config = service.load_secrets().await?;
        let gemini = secret_config.gemini.ok_or_else(|| {
            SnappError::config("Gemini configuration not found in secret.json")
        })?;
        if gemini.api_key.trim().is_empty() {
            return Err(SnappError::config(
                "Gemini API key is empty; set it in secret.json or GEMINI_API_KEY",
            ));
        }
        Ok(Self::new(gemini.api_key.clone(), gemini.model()))
    }

    /// Loads configuration from the default secret.json location.
    pub async fn try_from_env() -> Result<Self> {
        let service = SecretServiceImpl::new(None)?;
        Self::try_from_secrets(&service).await
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!("{BASE_URL}/{}:generateContent", self.model);

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|err| {
                // reqwest errors can echo the URL, which carries the key.
                let err = err.without_url();
                SnappError::curator(
                    format!("Gemini API request failed: {err}"),
                    err.is_connect() || err.is_timeout(),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            SnappError::curator(format!("Failed to parse Gemini response: {}", err.without_url()), false)
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiApiAgent {
    async fn generate(&self, prompt: &str) -> Result<String> {
        if prompt.trim().is_empty() {
            return Err(SnappError::invalid_input("Prompt is required."));
        }
        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini");
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        self.send_request(&request).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Concatenated text parts of the first candidate. A candidate without text
/// yields an empty string, which the curator reports as an empty response.
fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    let content = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .ok_or_else(|| {
            SnappError::curator("Gemini API returned no candidates", false)
        })?;
    Ok(content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect::<Vec<_>>()
        .join(""))
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> SnappError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    let message = format!("HTTP {}: {message}", status.as_u16());
    if let Some(delay) = retry_after {
        warn!(status = status.as_u16(), retry_after_secs = delay.as_secs(), "Gemini asked to retry later");
        SnappError::curator_with_retry_after(message, is_retryable, delay)
    } else {
        SnappError::curator(message, is_retryable)
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    value.parse::<u64>().ok().map(Duration::from_secs)
}
