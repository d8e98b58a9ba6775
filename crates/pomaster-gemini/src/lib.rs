//! pomaster-gemini - Client for the generative-content service
//!
//! Wraps the Gemini `generateContent` REST endpoint behind a single
//! operation: turn a free-text product description into a list of
//! [`pomaster_core::KpiItem`] records.
//!
//! The service contract has a quirk worth naming: even with a declared
//! response schema the answer arrives as a JSON-encoded *string* inside
//! `candidates[0].content.parts[0].text`, so the payload is decoded twice --
//! once as the HTTP envelope, once as the KPI plan itself.

pub mod client;
pub mod schema;

pub use client::{GeminiClient, GenerationError, API_KEY_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL};
