use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{FlashcardRecord, QuestionRecord, StudyPlanRecord, Topic};

/// Per-user session state for one study activity. All generated records
/// live here for the duration of the activity and are overwritten
/// wholesale by the next generation call.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StudySession {
    pub id: String,
    pub notes: String,
    pub topics: Vec<Topic>,
    pub questions: Vec<QuestionRecord>,
    pub answers: Vec<SubmittedAnswer>,
    pub current_index: usize,
    pub score: u32,
    pub flashcards: Vec<FlashcardRecord>,
    pub study_plan: Vec<StudyPlanRecord>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedAnswer {
    pub answer: String,
    pub is_correct: bool,
}

impl StudySession {
    pub fn new() -> Self {
        let now = Utc::now();
        StudySession {
            id: Uuid::new_v4().to_string(),
            notes: String::new(),
            topics: Vec::new(),
            questions: Vec::new(),
            answers: Vec::new(),
            current_index: 0,
            score: 0,
            flashcards: Vec::new(),
            study_plan: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Replaces the question set and resets answers, position and score.
    /// The latest completed generation always wins.
    pub fn reset_practice(&mut self, questions: Vec<QuestionRecord>) {
        self.questions = questions;
        self.answers.clear();
        self.current_index = 0;
        self.score = 0;
        self.modified_at = Utc::now();
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    pub fn practice_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn record_answer(&mut self, answer: SubmittedAnswer) {
        if answer.is_correct {
            self.score += 1;
        }
        self.answers.push(answer);
        self.current_index += 1;
        self.modified_at = Utc::now();
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}
