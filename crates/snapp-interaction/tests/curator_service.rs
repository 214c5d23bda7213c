//! Curator service against a stub text generator.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use snapp_core::curator::{TextGenerator, TripSettings, UserInputs};
use snapp_core::quiz::QuizData;
use snapp_core::{PersonaCatalog, Result, SnappError};
use snapp_interaction::CuratorService;

const RESPONSE: &str = r#"```json
{
  "persona_assignment": {"name": "The Culture Chaser", "reasoning": "Curious and kind", "dot_score": 0.52},
  "curated_packages": [
    {"name": "Kyoto Slow Walk", "total_price": 2100, "price_per_traveler": 1050, "availability": "High",
     "flight": {"airline": "ANA", "flight_number": "NH7", "price": 980},
     "lodging": {"name": "Machiya House", "type": "Vacation Rental", "rating": 4.8, "nights": 5}}
  ],
  "snapp_squad_tiers": [{"tier": 1, "min_members": 2, "rewards": ["Tea ceremony"], "cta": "Invite one friend"}],
  "booking_session_stubs": {"flight_query": "SEA-KIX", "hotel_query": "Kyoto machiya", "activity_query": "tea", "affiliate_hint": "none"}
}
```"#;

/// Replays canned results in order, counting calls and keeping the last prompt.
struct StubGenerator {
    results: Vec<Result<String>>,
    calls: AtomicU32,
    last_prompt: std::sync::Mutex<String>,
}

impl StubGenerator {
    fn new(results: Vec<Result<String>>) -> Self {
        Self {
            results,
            calls: AtomicU32::new(0),
            last_prompt: std::sync::Mutex::new(String::new()),
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) as usize;
        *self.last_prompt.lock().unwrap() = prompt.to_string();
        self.results[call.min(self.results.len() - 1)].clone()
    }

    fn name(&self) -> &str {
        "stub"
    }
}

fn inputs() -> UserInputs {
    let settings = TripSettings {
        departure_city: "Seattle".to_string(),
        budget_min: 1500,
        budget_max: 2500,
        departure_date: "2026-04-01".to_string(),
        travelers: 2,
    };
    let quiz = QuizData {
        quiz_answers: vec![70, 30, 60, 40, 30, 70, 80, 20, 40, 60],
        followup_answers: vec![90, 50, 20],
        selected_modifiers: vec!["Cultural".to_string()],
        assigned_persona_name: "The Culture Chaser".to_string(),
    };
    UserInputs::from_quiz(&settings, &quiz).unwrap()
}

fn service(generator: Arc<StubGenerator>) -> CuratorService {
    CuratorService::new(generator, Arc::new(PersonaCatalog::builtin().clone()))
        .unwrap()
        .with_retry(3, Duration::from_millis(1))
}

#[tokio::test]
async fn curate_parses_fenced_response() {
    let generator = Arc::new(StubGenerator::new(vec![Ok(RESPONSE.to_string())]));
    let response = service(generator.clone()).curate(&inputs()).await.unwrap();

    assert_eq!(response.persona_assignment.name, "The Culture Chaser");
    assert_eq!(response.curated_packages.len(), 1);
    assert_eq!(response.curated_packages[0].lodging.nights, 5);
    assert_eq!(response.booking_session_stubs.flight_query, "SEA-KIX");

    let prompt = generator.last_prompt.lock().unwrap().clone();
    assert!(prompt.contains("\"departure_city\": \"Seattle\""));
    assert!(prompt.contains("\"group_interest\": true"));
    assert!(prompt.contains("16. The Culture Chaser"));
}

#[tokio::test]
async fn empty_text_is_reported() {
    let generator = Arc::new(StubGenerator::new(vec![Ok(String::new())]));
    let err = service(generator).curate(&inputs()).await.unwrap_err();
    assert!(err.to_string().contains("Empty response from Gemini"));
}

#[tokio::test]
async fn retryable_failure_is_retried() {
    let generator = Arc::new(StubGenerator::new(vec![
        Err(SnappError::curator("HTTP 503: overloaded", true)),
        Ok(RESPONSE.to_string()),
    ]));
    let response = service(generator.clone()).curate(&inputs()).await.unwrap();
    assert_eq!(response.curated_packages[0].name, "Kyoto Slow Walk");
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn server_retry_after_replaces_backoff() {
    let generator = Arc::new(StubGenerator::new(vec![
        Err(SnappError::curator_with_retry_after(
            "HTTP 429: slow down",
            true,
            Duration::from_millis(20),
        )),
        Ok(RESPONSE.to_string()),
    ]));
    // The configured backoff alone would sleep a full minute.
    let service = CuratorService::new(generator.clone(), Arc::new(PersonaCatalog::builtin().clone()))
        .unwrap()
        .with_retry(2, Duration::from_secs(60));

    let response = tokio::time::timeout(Duration::from_secs(10), service.curate(&inputs()))
        .await
        .expect("retry should wait for the server delay, not the backoff")
        .unwrap();
    assert_eq!(response.curated_packages[0].name, "Kyoto Slow Walk");
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn permanent_failure_is_not_retried() {
    let generator = Arc::new(StubGenerator::new(vec![Err(SnappError::curator(
        "HTTP 400: bad request",
        false,
    ))]));
    let err = service(generator.clone()).curate(&inputs()).await.unwrap_err();
    assert!(!err.is_retryable());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn retries_stop_at_max_attempts() {
    let generator = Arc::new(StubGenerator::new(vec![Err(SnappError::curator(
        "HTTP 429: slow down",
        true,
    ))]));
    let err = service(generator.clone()).curate(&inputs()).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 3);
}
