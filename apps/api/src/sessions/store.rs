use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SessionIdStrategy;
use crate::models::session::{NewSuggestion, Session, Suggestion, SuggestionStatus};
use crate::sessions::final_resume::FinalResume;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("session '{0}' not found")]
    SessionNotFound(String),

    #[error("suggestion '{suggestion_id}' not found in session '{session_id}'")]
    SuggestionNotFound {
        session_id: String,
        suggestion_id: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Session storage backend. Implement this to swap the in-memory table for a
/// persistent store without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn SessionStore>`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_session(&self, latex_code: String, job_url: String) -> Session;

    async fn get_session(&self, session_id: &str) -> Result<Session, StoreError>;

    /// Overwrites the session status. Any string is accepted.
    async fn update_status(&self, session_id: &str, status: String)
        -> Result<Session, StoreError>;

    async fn add_suggestion(
        &self,
        session_id: &str,
        suggestion: NewSuggestion,
    ) -> Result<Suggestion, StoreError>;

    async fn set_suggestion_status(
        &self,
        session_id: &str,
        suggestion_id: &str,
        status: SuggestionStatus,
    ) -> Result<Suggestion, StoreError>;

    async fn session_count(&self) -> usize;

    async fn approve_suggestion(
        &self,
        session_id: &str,
        suggestion_id: &str,
    ) -> Result<Suggestion, StoreError> {
        self.set_suggestion_status(session_id, suggestion_id, SuggestionStatus::Approved)
            .await
    }

    async fn reject_suggestion(
        &self,
        session_id: &str,
        suggestion_id: &str,
    ) -> Result<Suggestion, StoreError> {
        self.set_suggestion_status(session_id, suggestion_id, SuggestionStatus::Rejected)
            .await
    }

    async fn final_resume(&self, session_id: &str) -> Result<FinalResume, StoreError> {
        let session = self.get_session(session_id).await?;
        Ok(FinalResume::from_session(&session))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// InMemorySessionStore
// ────────────────────────────────────────────────────────────────────────────

/// Process-local session table. State is lost on restart.
///
/// The map lock is only held to look up or insert an entry; each session
/// carries its own mutex so writes to one session never wait on another.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
    id_strategy: SessionIdStrategy,
}

impl InMemorySessionStore {
    pub fn new(id_strategy: SessionIdStrategy) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            id_strategy,
        }
    }

    async fn entry(&self, session_id: &str) -> Result<Arc<Mutex<Session>>, StoreError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))
    }

    fn next_id(&self, current_count: usize) -> String {
        match self.id_strategy {
            SessionIdStrategy::Sequential => format!("session_{}", current_count + 1),
            SessionIdStrategy::Opaque => format!("session_{}", Uuid::new_v4().simple()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionIdStrategy::default())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self, latex_code: String, job_url: String) -> Session {
        let mut sessions = self.sessions.write().await;
        let session_id = self.next_id(sessions.len());
        let session = Session::new(session_id.clone(), latex_code, job_url);
        sessions.insert(session_id.clone(), Arc::new(Mutex::new(session.clone())));

        info!("Created {session_id} ({} sessions stored)", sessions.len());
        session
    }

    async fn get_session(&self, session_id: &str) -> Result<Session, StoreError> {
        let entry = self.entry(session_id).await?;
        let session = entry.lock().await;
        Ok(session.clone())
    }

    async fn update_status(
        &self,
        session_id: &str,
        status: String,
    ) -> Result<Session, StoreError> {
        let entry = self.entry(session_id).await?;
        let mut session = entry.lock().await;
        debug!("{session_id}: status '{}' -> '{status}'", session.status);
        session.status = status;
        session.touch();
        Ok(session.clone())
    }

    async fn add_suggestion(
        &self,
        session_id: &str,
        suggestion: NewSuggestion,
    ) -> Result<Suggestion, StoreError> {
        let entry = self.entry(session_id).await?;
        let stored = suggestion.into_suggestion(Uuid::new_v4().to_string());

        let mut session = entry.lock().await;
        session.suggestions.push(stored.clone());
        session.touch();

        info!(
            "{session_id}: added suggestion {} for section '{}'",
            stored.id, stored.section
        );
        Ok(stored)
    }

    async fn set_suggestion_status(
        &self,
        session_id: &str,
        suggestion_id: &str,
        status: SuggestionStatus,
    ) -> Result<Suggestion, StoreError> {
        let entry = self.entry(session_id).await?;
        let mut session = entry.lock().await;

        let suggestion =
            session
                .suggestion_mut(suggestion_id)
                .ok_or_else(|| StoreError::SuggestionNotFound {
                    session_id: session_id.to_string(),
                    suggestion_id: suggestion_id.to_string(),
                })?;
        suggestion.status = status;
        let updated = suggestion.clone();
        session.touch();

        info!("{session_id}: suggestion {suggestion_id} marked {status:?}");
        Ok(updated)
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn final_resume(&self, session_id: &str) -> Result<FinalResume, StoreError> {
        let entry = self.entry(session_id).await?;
        let session = entry.lock().await;
        Ok(FinalResume::from_session(&session))
    }
}
