//! HTTP client for the generative-content service

use pomaster_core::{KpiItem, KpiPlan};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::schema::{GenerateContentRequest, GenerateContentResponse};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default model used for KPI generation.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Failures of one generation round trip.
///
/// None of these is fatal to the session: the caller logs the error, leaves
/// its state untouched, and the user may retry.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Missing API credential: environment variable {var} is not set")]
    MissingApiKey { var: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Service returned no candidate text")]
    EmptyResponse,

    #[error("Malformed service response: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("Generated payload failed schema decode: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Client for the `generateContent` endpoint.
///
/// One request in flight at a time is the caller's contract (the app guards
/// dispatch on its in-flight flag); the client itself is stateless and
/// cheaply cloneable.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
    kpi_count: u8,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        kpi_count: u8,
    ) -> Self {
        Self {
            // No timeout: a submitted generation runs to completion or failure.
            http: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            kpi_count,
        }
    }

    /// Construct a client with the credential from the process environment.
    ///
    /// An unset or empty `GEMINI_API_KEY` is a startup misconfiguration.
    pub fn from_env(
        model: impl Into<String>,
        base_url: impl Into<String>,
        kpi_count: u8,
    ) -> Result<Self, GenerationError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey {
                var: API_KEY_VAR.to_string(),
            })?;

        Ok(Self::new(api_key, model, base_url, kpi_count))
    }

    /// Generate KPI records for a product description.
    ///
    /// Single best-effort round trip: no retries, no timeout enforcement.
    /// The response body text is itself JSON and is decoded into [`KpiPlan`]
    /// after receipt; any missing field rejects the whole payload.
    pub async fn generate_kpis(&self, context: &str) -> Result<Vec<KpiItem>, GenerationError> {
        let request = GenerateContentRequest::kpi_plan(build_prompt(context, self.kpi_count));
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        debug!(model = %self.model, "Submitting KPI generation request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message: status_message(status.as_u16(), &body),
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&body).map_err(GenerationError::Envelope)?;
        let text = envelope.first_text().ok_or(GenerationError::EmptyResponse)?;

        let plan = parse_payload(text)?;
        info!(count = plan.kpis.len(), "KPI generation succeeded");

        Ok(plan.kpis)
    }
}

/// The fixed instruction template, with the literal product context embedded.
pub fn build_prompt(context: &str, kpi_count: u8) -> String {
    format!(
        "As an expert in Product Management (CPO), analyze the following product: \"{context}\". \
         Generate {kpi_count} fundamental KPIs split across categories (Business, Product, User) \
         and one tactical recommendation for each. \
         Answer exclusively in JSON with the structure: \
         {{ \"kpis\": [{{ \"name\": \"...\", \"formula\": \"...\", \"target\": \"...\", \
         \"category\": \"...\", \"action\": \"...\" }}] }}"
    )
}

/// Decode the candidate text into the declared KPI-plan shape.
fn parse_payload(text: &str) -> Result<KpiPlan, GenerationError> {
    serde_json::from_str(text).map_err(GenerationError::Payload)
}

/// Map a non-success status to a concise log message.
fn status_message(status: u16, body: &str) -> String {
    match status {
        401 => "authentication failed, check the API key".to_string(),
        403 => "access forbidden, insufficient permissions".to_string(),
        429 => "rate limit exceeded".to_string(),
        500..=599 => format!("server error: {}", summarize(body)),
        _ => summarize(body),
    }
}

fn summarize(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_literal_context() {
        let prompt = build_prompt("B2B delivery app for restaurants", 6);
        assert!(prompt.contains("\"B2B delivery app for restaurants\""));
        assert!(prompt.contains("Generate 6 fundamental KPIs"));
        assert!(prompt.contains("\"kpis\""));
    }

    #[test]
    fn test_parse_payload_well_formed() {
        let text = r#"{
            "kpis": [
                {
                    "name": "Order Fill Rate",
                    "formula": "Fulfilled orders / placed orders",
                    "target": "> 98%",
                    "category": "Product",
                    "action": "Add real-time inventory sync for partner restaurants"
                },
                {
                    "name": "Restaurant Retention",
                    "formula": "Active restaurants month over month",
                    "target": "> 90%",
                    "category": "Business",
                    "action": "Launch a quarterly business review program"
                }
            ]
        }"#;

        let plan = parse_payload(text).unwrap();
        assert_eq!(plan.kpis.len(), 2);
        assert_eq!(plan.kpis[0].name, "Order Fill Rate");
        assert_eq!(plan.kpis[1].category, "Business");
    }

    #[test]
    fn test_parse_payload_rejects_non_json() {
        let err = parse_payload("sorry, I cannot do that").unwrap_err();
        assert!(matches!(err, GenerationError::Payload(_)));
    }

    #[test]
    fn test_parse_payload_rejects_schema_mismatch_wholesale() {
        // One of three items lacks "target": the whole payload is rejected
        let text = r#"{
            "kpis": [
                { "name": "a", "formula": "b", "target": "c", "category": "d", "action": "e" },
                { "name": "a", "formula": "b", "category": "d", "action": "e" },
                { "name": "a", "formula": "b", "target": "c", "category": "d", "action": "e" }
            ]
        }"#;

        assert!(matches!(
            parse_payload(text),
            Err(GenerationError::Payload(_))
        ));
    }

    #[test]
    fn test_status_message_known_codes() {
        assert!(status_message(401, "").contains("authentication"));
        assert!(status_message(429, "").contains("rate limit"));
        assert!(status_message(503, "overloaded").contains("overloaded"));
    }

    #[test]
    fn test_summarize_truncates_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(summarize(&long).len(), 200);
        assert_eq!(summarize("  "), "no response body");
    }
}
