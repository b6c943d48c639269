//! Types for the Gemini API.
//!
//! These types match the Generative Language `generateContent` REST format.

use serde::{Deserialize, Serialize};

/// A piece of content - for this client always text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text content.
    pub text: String,
}

/// Content of a message: an ordered list of parts with an optional role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content parts.
    pub parts: Vec<Part>,
    /// Role of the author ("user" or "model").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Content {
    /// Build a single-part text content with no role.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
            role: None,
        }
    }

    /// Build a single-part user content.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
            role: Some("user".to_string()),
        }
    }
}

/// Request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Long-lived persona instruction, prepended to every request.
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// The user turn(s). This client always sends exactly one.
    pub contents: Vec<Content>,
}

/// A single candidate answer.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content; may be absent when generation was blocked.
    pub content: Option<Content>,
    /// Why generation stopped (e.g., "STOP", "MAX_TOKENS").
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Response from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate answers; the first one is the reply.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The text of the first candidate, if it holds any non-empty text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_camel_case_system_instruction() {
        let request = GenerateContentRequest {
            system_instruction: Some(Content::text("Tu es un styliste.")),
            contents: vec![Content::user("robe pour mariage")],
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("systemInstruction").is_some());
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "robe pour mariage"
        );
        assert_eq!(json["contents"][0]["role"], "user");
    }

    #[test]
    fn test_response_text_extracts_first_candidate() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "Optez pour une robe Dior."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.text(), Some("Optez pour une robe Dior."));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_whitespace_only_answer_counts_as_empty() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "   \n"}], "role": "model"},
                "finishReason": "STOP"
            }]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.text(), None);
    }
}
