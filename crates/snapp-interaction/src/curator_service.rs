//! CuratorService: prompt → text generator → parsed `CuratorResponse`.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use snapp_core::curator::{CuratorResponse, TextGenerator, UserInputs};
use snapp_core::persona::PersonaCatalog;
use snapp_core::{Result, SnappError};

use crate::prompt::PromptBuilder;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```(?:json|JSON)?\s*\n?(.*?)\s*```\s*$").expect("fence regex must compile")
});

const DEFAULT_MAX_ATTEMPTS: u32 = 2;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Returns the body of a ```json fenced block, or the trimmed text as-is.
pub fn strip_code_fence(text: &str) -> &str {
    match JSON_FENCE.captures(text).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str(),
        None => text.trim(),
    }
}

/// Parses model output into a [`CuratorResponse`].
pub fn parse_curator_response(text: &str) -> Result<CuratorResponse> {
    if text.trim().is_empty() {
        return Err(SnappError::curator("Empty response from Gemini", false));
    }
    Ok(serde_json::from_str(strip_code_fence(text))?)
}

/// Asks the curator model for a trip plan.
///
/// Retryable generator failures are retried with a linear backoff, up to
/// `max_attempts` calls in total.
pub struct CuratorService {
    generator: Arc<dyn TextGenerator>,
    personas: Arc<PersonaCatalog>,
    prompts: PromptBuilder,
    max_attempts: u32,
    retry_delay: Duration,
}

impl CuratorService {
    pub fn new(generator: Arc<dyn TextGenerator>, personas: Arc<PersonaCatalog>) -> Result<Self> {
        Ok(Self {
            generator,
            personas,
            prompts: PromptBuilder::new()?,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        })
    }

    pub fn with_retry(mut self, max_attempts: u32, retry_delay: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.retry_delay = retry_delay;
        self
    }

    /// The exact prompt `curate` would send.
    pub fn build_prompt(&self, inputs: &UserInputs) -> Result<String> {
        self.prompts.build(&self.personas, inputs)
    }

    pub async fn curate(&self, inputs: &UserInputs) -> Result<CuratorResponse> {
        let prompt = self.build_prompt(inputs)?;
        info!(
            generator = self.generator.name(),
            persona = %inputs.assigned_persona_name,
            "Requesting curated trip"
        );

        let text = self.generate_with_retry(&prompt).await?;
        let response = parse_curator_response(&text)?;
        info!(
            packages = response.curated_packages.len(),
            tiers = response.snapp_squad_tiers.len(),
            "Curator response parsed"
        );
        Ok(response)
    }

    async fn generate_with_retry(&self, prompt: &str) -> Result<String> {
        let mut attempt = 1;
        loop {
            match self.generator.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    // A server-supplied Retry-After wins over the linear backoff.
                    let delay = err.retry_after().unwrap_or(self.retry_delay * attempt);
                    warn!(attempt, error = %err, delay_ms = delay.as_millis() as u64, "Curator call failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fenced_json() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  ```\n{}\n```  \n"), "{}");
        assert_eq!(strip_code_fence(" {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let err = parse_curator_response(" \n").unwrap_err();
        assert!(err.to_string().contains("Empty response from Gemini"));
    }

    #[test]
    fn test_invalid_json_is_serialization_error() {
        let err = parse_curator_response("Sure! Here is your trip:").unwrap_err();
        assert!(err.is_serialization());
    }
}
