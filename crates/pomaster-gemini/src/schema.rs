//! Wire types for the `generateContent` endpoint
//!
//! Request and response bodies are modeled as plain serde structs. The
//! response schema declaration mirrors what the endpoint expects: a
//! restricted OpenAPI subset with SCREAMING_CASE type tags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: ResponseSchema,
}

/// Declarative output schema, the restricted subset the endpoint accepts.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<&'static str, ResponseSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

impl ResponseSchema {
    fn string() -> Self {
        Self {
            kind: SchemaType::String,
            properties: None,
            items: None,
            required: Vec::new(),
        }
    }

    /// The fixed KPI-plan output schema: an object with one required `kpis`
    /// array whose items carry all five KPI fields as required strings.
    pub fn kpi_plan() -> Self {
        const KPI_FIELDS: [&str; 5] = ["name", "formula", "target", "category", "action"];

        let item = Self {
            kind: SchemaType::Object,
            properties: Some(
                KPI_FIELDS
                    .iter()
                    .map(|field| (*field, Self::string()))
                    .collect(),
            ),
            items: None,
            required: KPI_FIELDS.to_vec(),
        };

        let kpis = Self {
            kind: SchemaType::Array,
            properties: None,
            items: Some(Box::new(item)),
            required: Vec::new(),
        };

        Self {
            kind: SchemaType::Object,
            properties: Some(BTreeMap::from([("kpis", kpis)])),
            items: None,
            required: vec!["kpis"],
        }
    }
}

impl GenerateContentRequest {
    /// Build the fixed request for a prompt, asking for JSON output that
    /// matches the KPI-plan schema.
    pub fn kpi_plan(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: ResponseSchema::kpi_plan(),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// The answer text of the first candidate, if the service produced one.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case_config() {
        let request = GenerateContentRequest::kpi_plan("analyze this".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(json["contents"][0]["parts"][0]["text"], "analyze this");
    }

    #[test]
    fn test_kpi_plan_schema_shape() {
        let schema = serde_json::to_value(ResponseSchema::kpi_plan()).unwrap();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"][0], "kpis");
        assert_eq!(schema["properties"]["kpis"]["type"], "ARRAY");

        let item = &schema["properties"]["kpis"]["items"];
        assert_eq!(item["type"], "OBJECT");
        let required: Vec<&str> = item["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for field in ["name", "formula", "target", "category", "action"] {
            assert!(required.contains(&field), "{field} must be required");
        }
    }

    #[test]
    fn test_response_first_text() {
        let json = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "{\"kpis\":[]}" } ] } }
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("{\"kpis\":[]}"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), None);
    }
}
