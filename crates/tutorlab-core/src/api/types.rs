//! Wire types for the tutoring backend.
//!
//! Field names mirror the backend's JSON exactly (snake_case); keep them in
//! sync with the server's pydantic models.

use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Tutor,
    Learner,
}

/// Body of `POST /sessions/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStartRequest {
    pub tutor_name: String,
    pub math_problem: String,
    /// Persona wire id. A string rather than `PersonaType` because the server
    /// may offer personas beyond the built-in catalog.
    pub persona_type: String,
}

/// Persona echo in the start response.
///
/// Unlike the catalog's `PersonaInfo`, the server sends the type as a plain
/// string here, so unknown personas don't fail deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response of `POST /sessions/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStartResponse {
    pub session_id: String,
    /// The learner's opening message.
    pub initial_response: String,
    pub persona_info: PersonaSummary,
}

/// Body of `POST /sessions/{id}/message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequest {
    pub message: String,
    pub sender: Sender,
}

/// Response of `POST /sessions/{id}/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The learner's reply.
    pub response: String,
    /// False once the backend considers the session over.
    pub session_active: bool,
}

/// Rubric scores, 1..=5 per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub explanation_clarity: u8,
    pub patience_encouragement: u8,
    pub active_questioning: u8,
    pub adaptability: u8,
    pub mathematical_accuracy: u8,
}

impl Scores {
    /// Maximum score per category.
    pub const MAX: u8 = 5;

    /// Display order and labels for the five rubric categories.
    pub const CATEGORIES: &'static [(&'static str, &'static str)] = &[
        ("explanation_clarity", "Explanation Clarity"),
        ("patience_encouragement", "Patience & Encouragement"),
        ("active_questioning", "Active Questioning"),
        ("adaptability", "Adaptability"),
        ("mathematical_accuracy", "Mathematical Accuracy"),
    ];

    /// Looks up a score by category key.
    pub fn get(&self, key: &str) -> Option<u8> {
        match key {
            "explanation_clarity" => Some(self.explanation_clarity),
            "patience_encouragement" => Some(self.patience_encouragement),
            "active_questioning" => Some(self.active_questioning),
            "adaptability" => Some(self.adaptability),
            "mathematical_accuracy" => Some(self.mathematical_accuracy),
            _ => None,
        }
    }
}

/// Response of `POST /sessions/{id}/end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEndResponse {
    pub scores: Scores,
    pub feedback: String,
    pub session_summary: String,
}

/// One rubric category as served by `GET /scoring-categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringCategory {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_request_serializes_persona_wire_id() {
        let req = SessionStartRequest {
            tutor_name: "Ada".to_string(),
            math_problem: "Solve for x: 2x + 5 = 13".to_string(),
            persona_type: "struggling_sam".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tutor_name"], "Ada");
        assert_eq!(json["persona_type"], "struggling_sam");
    }

    #[test]
    fn test_start_response_deserializes() {
        let json = r#"{
            "session_id": "abc-123",
            "initial_response": "Hi! I'm ready to work on this problem.",
            "persona_info": {"name": "Struggling Sam", "type": "struggling_sam"}
        }"#;
        let resp: SessionStartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.session_id, "abc-123");
        assert_eq!(resp.persona_info.name, "Struggling Sam");
    }

    #[test]
    fn test_end_response_scores_lookup_matches_fields() {
        let json = r#"{
            "scores": {
                "explanation_clarity": 4,
                "patience_encouragement": 5,
                "active_questioning": 3,
                "adaptability": 4,
                "mathematical_accuracy": 5
            },
            "feedback": "Great job!",
            "session_summary": "The tutor helped the student."
        }"#;
        let resp: SessionEndResponse = serde_json::from_str(json).unwrap();
        for (key, _) in Scores::CATEGORIES {
            assert!(resp.scores.get(key).is_some(), "missing category {key}");
        }
        assert_eq!(resp.scores.get("patience_encouragement"), Some(5));
        assert_eq!(resp.scores.get("nonexistent"), None);
    }

    #[test]
    fn test_sender_wire_format() {
        let req = MessageRequest {
            message: "What do you know so far?".to_string(),
            sender: Sender::Tutor,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["sender"], "tutor");
    }

    #[test]
    fn test_scoring_category_missing_description_defaults_empty() {
        let cat: ScoringCategory =
            serde_json::from_str(r#"{"key": "adaptability", "label": "Adaptability"}"#).unwrap();
        assert_eq!(cat.description, "");
    }
}
