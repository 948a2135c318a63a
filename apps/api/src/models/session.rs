use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A proposed replacement of `original_text` by `suggested_text`.
/// Only `status` changes after the suggestion is stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub section: String,
    pub original_text: String,
    pub suggested_text: String,
    pub reason: Option<String>,
    pub status: SuggestionStatus,
}

impl Suggestion {
    pub fn is_approved(&self) -> bool {
        self.status == SuggestionStatus::Approved
    }
}

/// Suggestion fields as submitted by a client. The id is assigned by the store;
/// an `id` field in the request body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSuggestion {
    pub section: String,
    pub original_text: String,
    pub suggested_text: String,
    pub reason: Option<String>,
    #[serde(default)]
    pub status: SuggestionStatus,
}

impl NewSuggestion {
    pub fn into_suggestion(self, id: String) -> Suggestion {
        Suggestion {
            id,
            section: self.section,
            original_text: self.original_text,
            suggested_text: self.suggested_text,
            reason: self.reason,
            status: self.status,
        }
    }
}

pub const INITIAL_SESSION_STATUS: &str = "submitted";

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub session_id: String,
    pub latex_code: String,
    pub job_url: String,
    /// Free-form; clients may set any value.
    pub status: String,
    pub suggestions: Vec<Suggestion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    pub fn new(session_id: String, latex_code: String, job_url: String) -> Self {
        let now = Utc::now();
        Session {
            session_id,
            latex_code,
            job_url,
            status: INITIAL_SESSION_STATUS.to_string(),
            suggestions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn suggestion_mut(&mut self, suggestion_id: &str) -> Option<&mut Suggestion> {
        self.suggestions.iter_mut().find(|s| s.id == suggestion_id)
    }

    pub fn approved_suggestions(&self) -> Vec<Suggestion> {
        self.suggestions
            .iter()
            .filter(|s| s.is_approved())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_suggestion_defaults_to_pending() {
        let new: NewSuggestion = serde_json::from_value(json!({
            "section": "Experience",
            "original_text": "Worked on",
            "suggested_text": "Led",
        }))
        .unwrap();
        assert_eq!(new.status, SuggestionStatus::Pending);
        assert!(new.reason.is_none());
    }

    #[test]
    fn test_new_suggestion_ignores_client_id() {
        let new: NewSuggestion = serde_json::from_value(json!({
            "id": "client-chosen",
            "section": "Skills",
            "original_text": "C",
            "suggested_text": "Rust",
        }))
        .unwrap();
        let stored = new.into_suggestion("server-chosen".to_string());
        assert_eq!(stored.id, "server-chosen");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<NewSuggestion, _> = serde_json::from_value(json!({
            "section": "Skills",
            "original_text": "C",
            "suggested_text": "Rust",
            "status": "maybe",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SuggestionStatus::Approved).unwrap(),
            json!("approved")
        );
    }

    #[test]
    fn test_new_session_is_submitted_and_empty() {
        let session = Session::new(
            "session_1".to_string(),
            "\\section{Experience}".to_string(),
            "https://jobs.example.com/42".to_string(),
        );
        assert_eq!(session.status, "submitted");
        assert!(session.suggestions.is_empty());
        assert_eq!(session.created_at, session.updated_at);
    }

    #[test]
    fn test_session_serializes_wire_fields() {
        let mut session = Session::new(
            "session_3".to_string(),
            "\\item Go".to_string(),
            "https://jobs.example.com/3".to_string(),
        );
        session.suggestions.push(Suggestion {
            id: "s-1".to_string(),
            section: "Skills".to_string(),
            original_text: "Go".to_string(),
            suggested_text: "Rust".to_string(),
            reason: None,
            status: SuggestionStatus::Pending,
        });

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["session_id"], "session_3");
        assert_eq!(value["latex_code"], "\\item Go");
        assert_eq!(value["status"], "submitted");
        assert_eq!(value["suggestions"][0]["status"], "pending");
        assert_eq!(value["suggestions"][0]["reason"], json!(null));
    }
}
