use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        FlashcardRecord, QuestionRecord, StudyPlanRecord, StudySession, SubmittedAnswer,
    },
    repositories::SessionRepository,
    services::{
        notes::{self, NoteKind},
        topic_extractor,
    },
};

pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_session(&self) -> AppResult<StudySession> {
        let session = StudySession::new();
        self.repository.upsert(session.clone()).await?;
        Ok(session)
    }

    pub async fn get_session(&self, id: &str) -> AppResult<StudySession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    pub async fn delete_session(&self, id: &str) -> AppResult<()> {
        let removed = self.repository.delete(id).await?;
        if !removed {
            return Err(AppError::NotFound(format!(
                "Session with id '{}' not found",
                id
            )));
        }
        Ok(())
    }

    /// Stores uploaded notes and re-extracts the topic list. Extraction
    /// failures arrive here as empty text and simply mean "no notes".
    pub async fn process_notes(
        &self,
        id: &str,
        content: &[u8],
        kind: NoteKind,
    ) -> AppResult<StudySession> {
        let mut session = self.get_session(id).await?;

        let raw = notes::extract_text(content, kind);
        let cleaned = topic_extractor::clean_text(&raw);
        session.topics = topic_extractor::extract_topics(&cleaned);
        session.notes = cleaned;
        session.modified_at = Utc::now();

        self.repository.upsert(session.clone()).await?;
        Ok(session)
    }

    pub async fn start_practice(
        &self,
        id: &str,
        questions: Vec<QuestionRecord>,
    ) -> AppResult<StudySession> {
        let mut session = self.get_session(id).await?;
        session.reset_practice(questions);
        self.repository.upsert(session.clone()).await?;
        Ok(session)
    }

    pub async fn record_answer(
        &self,
        id: &str,
        answer: SubmittedAnswer,
    ) -> AppResult<StudySession> {
        let mut session = self.get_session(id).await?;
        if session.practice_complete() {
            return Err(AppError::BadRequest(
                "Practice round is already complete".to_string(),
            ));
        }

        session.record_answer(answer);
        self.repository.upsert(session.clone()).await?;
        Ok(session)
    }

    pub async fn store_flashcards(
        &self,
        id: &str,
        flashcards: Vec<FlashcardRecord>,
    ) -> AppResult<StudySession> {
        let mut session = self.get_session(id).await?;
        session.flashcards = flashcards;
        session.modified_at = Utc::now();
        self.repository.upsert(session.clone()).await?;
        Ok(session)
    }

    pub async fn store_study_plan(
        &self,
        id: &str,
        study_plan: Vec<StudyPlanRecord>,
    ) -> AppResult<StudySession> {
        let mut session = self.get_session(id).await?;
        session.study_plan = study_plan;
        session.modified_at = Utc::now();
        self.repository.upsert(session.clone()).await?;
        Ok(session)
    }
}
