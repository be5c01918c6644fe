use serde::Serialize;

use crate::models::domain::{FlashcardRecord, QuestionRecord, StudyPlanRecord, Topic};
use crate::services::generation_service::{GenerationSource, GradingSource};

/// Neutral notice shown instead of raw diagnostics when fallback content
/// is served.
const FALLBACK_NOTICE: &str = "AI generation was unavailable, showing offline study content.";

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct NotesProcessedResponse {
    pub notes_chars: usize,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct PracticeResponse {
    pub questions: Vec<QuestionRecord>,
    pub source: GenerationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl PracticeResponse {
    pub fn new(questions: Vec<QuestionRecord>, source: GenerationSource) -> Self {
        Self {
            questions,
            source,
            notice: fallback_notice(source),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<FlashcardRecord>,
    pub source: GenerationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl FlashcardsResponse {
    pub fn new(flashcards: Vec<FlashcardRecord>, source: GenerationSource) -> Self {
        Self {
            flashcards,
            source,
            notice: fallback_notice(source),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    pub study_plan: Vec<StudyPlanRecord>,
    pub source: GenerationSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl StudyPlanResponse {
    pub fn new(study_plan: Vec<StudyPlanRecord>, source: GenerationSource) -> Self {
        Self {
            study_plan,
            source,
            notice: fallback_notice(source),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub is_correct: bool,
    pub feedback: String,
    pub graded_by: GradingSource,
    pub score: u32,
    pub current_index: usize,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct GradingResponse {
    pub is_correct: bool,
    pub feedback: String,
    pub graded_by: GradingSource,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub topics: usize,
    pub questions: usize,
    pub answered: usize,
    pub score: u32,
    pub completed: bool,
}

fn fallback_notice(source: GenerationSource) -> Option<String> {
    match source {
        GenerationSource::Ai => None,
        GenerationSource::Fallback => Some(FALLBACK_NOTICE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_responses_carry_a_notice_and_ai_responses_do_not() {
        let response = PracticeResponse::new(Vec::new(), GenerationSource::Fallback);
        assert!(response.notice.is_some());

        let response = PracticeResponse::new(Vec::new(), GenerationSource::Ai);
        assert!(response.notice.is_none());
    }

    #[test]
    fn source_serializes_lowercase() {
        let response = FlashcardsResponse::new(Vec::new(), GenerationSource::Fallback);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["source"], "fallback");
    }
}
