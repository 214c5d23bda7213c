//! LLM-facing side of FlightSnapp: the Gemini client, the curator prompt and
//! the curator service.
//!
//! # Module Structure
//!
//! - `gemini_api_agent`: `TextGenerator` over the Gemini REST API
//! - `prompt`: minijinja-rendered curator prompt
//! - `curator_service`: prompt → generator → `CuratorResponse`

pub mod curator_service;
pub mod gemini_api_agent;
pub mod prompt;

pub use curator_service::{CuratorService, parse_curator_response, strip_code_fence};
pub use gemini_api_agent::GeminiApiAgent;
pub use prompt::PromptBuilder;
