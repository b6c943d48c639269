//! Gemini API integration for the AI stylist.
//!
//! Wraps the Generative Language `generateContent` endpoint: one request,
//! one response, no streaming and no conversation history. The higher
//! level fallback policy (credential absence, empty answers, transport
//! failures) lives in [`crate::services::stylist`].

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
