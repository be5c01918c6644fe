use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::StudySession};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StudySession>>;
    async fn upsert(&self, session: StudySession) -> AppResult<StudySession>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

/// Session store for the lifetime of the process. Nothing in the study
/// flow relies on durable reads, so there is no database behind this.
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, StudySession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<StudySession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn upsert(&self, session: StudySession) -> AppResult<StudySession> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_then_find_round_trips() {
        let repository = InMemorySessionRepository::new();
        let session = StudySession::new();
        let id = session.id.clone();

        repository.upsert(session.clone()).await.unwrap();
        let found = repository.find_by_id(&id).await.unwrap();

        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn upsert_replaces_existing_session() {
        let repository = InMemorySessionRepository::new();
        let mut session = StudySession::new();
        let id = session.id.clone();
        repository.upsert(session.clone()).await.unwrap();

        session.score = 7;
        repository.upsert(session).await.unwrap();

        let found = repository.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.score, 7);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_session_existed() {
        let repository = InMemorySessionRepository::new();
        let session = StudySession::new();
        let id = session.id.clone();
        repository.upsert(session).await.unwrap();

        assert!(repository.delete(&id).await.unwrap());
        assert!(!repository.delete(&id).await.unwrap());
        assert_eq!(repository.find_by_id(&id).await.unwrap(), None);
    }
}
