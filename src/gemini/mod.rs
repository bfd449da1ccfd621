//! # Gemini Integration Module
//!
//! This module provides the interface to the Gemini generateContent API, which
//! acts as the recommendation provider for the application. It serves as the
//! single integration layer between shelfcli and the model, handling request
//! construction, structured-output constraints, and response validation.
//!
//! ## Overview
//!
//! The module turns a free-text historical topic plus an audience level into a
//! validated [`RecommendationSet`](crate::types::RecommendationSet). The model
//! is conditioned with a fixed librarian prompt and a response schema that
//! constrains the output to a JSON object with up to five book recommendations
//! and a handful of related topics.
//!
//! ## Request Contract
//!
//! - Exactly one `generateContent` POST per search: no retry, no streaming,
//!   no partial results, no caching.
//! - The audience level maps to one of three fixed natural-language audience
//!   descriptions interpolated into the prompt.
//! - `generationConfig` pins `responseMimeType` to `application/json`, carries
//!   the response schema, and fixes the temperature at 0.7.
//! - A 30 second client timeout bounds the call; expiry surfaces as an
//!   ordinary fetch error.
//!
//! ## Response Validation
//!
//! The candidate text is parsed as JSON. A parse failure fails the whole call;
//! there is no degraded result. Individual recommendation items missing any of
//! their five required fields are silently dropped rather than rejecting the
//! batch, and a missing or malformed `relatedTopics` array degrades to empty.
//!
//! ## Error Types
//!
//! All functions return [`RecommendError`]:
//! - `MissingCredentials` - no API key configured; fatal at startup
//! - `HttpError` - transport failures and non-success HTTP statuses
//! - `ProviderError` - a well-formed envelope with no usable candidate
//! - `SerdeError` - candidate text that is not valid JSON

pub mod recommend;

pub use recommend::GeminiClient;
pub use recommend::RecommendError;
pub use recommend::audience_description;
pub use recommend::parse_recommendation_payload;
