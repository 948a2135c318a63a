use serde::Serialize;

use crate::models::session::{Session, Suggestion};

#[derive(Debug, Clone, Serialize)]
pub struct FinalResume {
    pub original_latex: String,
    pub final_latex: String,
    pub approved_suggestions: Vec<Suggestion>,
}

impl FinalResume {
    pub fn from_session(session: &Session) -> Self {
        FinalResume {
            original_latex: session.latex_code.clone(),
            final_latex: apply_approved_suggestions(&session.latex_code, &session.suggestions),
            approved_suggestions: session.approved_suggestions(),
        }
    }
}

/// Applies approved suggestions to `original` in insertion order.
///
/// Each approved suggestion replaces every literal occurrence of its
/// `original_text` in the running text, so a later suggestion sees the output
/// of earlier ones. Pending and rejected suggestions are skipped.
pub fn apply_approved_suggestions(original: &str, suggestions: &[Suggestion]) -> String {
    suggestions
        .iter()
        .filter(|s| s.is_approved())
        .fold(original.to_string(), |text, s| {
            text.replace(&s.original_text, &s.suggested_text)
        })
}
