//! Orchestrates prompt building, the model call, normalization and the
//! fallback substitution.
//!
//! Every operation here is total: any model or normalization failure is
//! logged and replaced with deterministic fallback content, and the
//! provenance tag tells the caller which path produced the records.

use std::sync::Arc;

use serde::Serialize;

use crate::models::domain::{
    FlashcardRecord, GenerationRequest, GradingResult, QuestionRecord, QuestionType,
    StudyPlanRecord, TaskKind, Topic,
};
use crate::services::{
    fallback::FallbackGenerator,
    model_client::ModelClient,
    normalizer::{self, NormalizeError},
    prompt_builder,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationSource {
    Ai,
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingSource {
    Ai,
    Exact,
    Heuristic,
}

pub struct GenerationService {
    /// None when no credential is configured; everything then runs on the
    /// fallback generators.
    client: Option<Arc<dyn ModelClient>>,
    temperature: f32,
}

impl GenerationService {
    pub fn new(client: Option<Arc<dyn ModelClient>>, temperature: f32) -> Self {
        Self {
            client,
            temperature,
        }
    }

    pub async fn questions(
        &self,
        topics: &[Topic],
        notes: &str,
        count: usize,
        mixed: bool,
    ) -> (Vec<QuestionRecord>, GenerationSource) {
        let task = if mixed {
            TaskKind::MixedQuiz { count }
        } else {
            TaskKind::Quiz { count }
        };
        let request = GenerationRequest::new(task, topics.to_vec(), notes);

        match self
            .model_records(&request, |raw| normalizer::normalize_questions(raw, count))
            .await
        {
            Some(questions) => (questions, GenerationSource::Ai),
            None => (
                FallbackGenerator::questions(topics, count),
                GenerationSource::Fallback,
            ),
        }
    }

    pub async fn flashcards(
        &self,
        topics: &[Topic],
        notes: &str,
        count: usize,
    ) -> (Vec<FlashcardRecord>, GenerationSource) {
        let request =
            GenerationRequest::new(TaskKind::Flashcards { count }, topics.to_vec(), notes);

        match self
            .model_records(&request, |raw| normalizer::normalize_flashcards(raw, count))
            .await
        {
            Some(cards) => (cards, GenerationSource::Ai),
            None => (
                FallbackGenerator::flashcards(topics, count),
                GenerationSource::Fallback,
            ),
        }
    }

    pub async fn study_plan(
        &self,
        topics: &[Topic],
        notes: &str,
        days: usize,
        hours_per_day: usize,
    ) -> (Vec<StudyPlanRecord>, GenerationSource) {
        let request = GenerationRequest::new(
            TaskKind::StudyPlan {
                days,
                hours_per_day,
            },
            topics.to_vec(),
            notes,
        );

        match self
            .model_records(&request, |raw| normalizer::normalize_study_plan(raw, days))
            .await
        {
            Some(plan) => (plan, GenerationSource::Ai),
            None => (
                FallbackGenerator::study_plan(topics, days, hours_per_day),
                GenerationSource::Fallback,
            ),
        }
    }

    /// Grades a free-text answer through the model, degrading to the
    /// substring heuristic when the model path fails.
    pub async fn grade_short_answer(
        &self,
        question: &str,
        correct_answer: &str,
        student_answer: &str,
        notes: &str,
    ) -> (GradingResult, GradingSource) {
        let request = GenerationRequest::new(
            TaskKind::Grading {
                question: question.to_string(),
                correct_answer: correct_answer.to_string(),
                student_answer: student_answer.to_string(),
            },
            Vec::new(),
            notes,
        );

        match self
            .model_records(&request, normalizer::normalize_grading)
            .await
        {
            Some(result) => (result, GradingSource::Ai),
            None => (
                FallbackGenerator::grading(correct_answer, student_answer),
                GradingSource::Heuristic,
            ),
        }
    }

    /// Grades one submitted practice answer. Only short answers need the
    /// model; the other types compare against the stored correct answer.
    pub async fn grade_submission(
        &self,
        question: &QuestionRecord,
        answer: &str,
        notes: &str,
    ) -> (GradingResult, GradingSource) {
        match question.question_type {
            QuestionType::Short => {
                self.grade_short_answer(&question.question, &question.correct, answer, notes)
                    .await
            }
            _ => {
                let is_correct = answer.trim().eq_ignore_ascii_case(question.correct.trim());
                let feedback = if is_correct {
                    "Correct!".to_string()
                } else {
                    format!("The correct answer is: {}", question.correct)
                };
                (
                    GradingResult {
                        is_correct,
                        feedback,
                    },
                    GradingSource::Exact,
                )
            }
        }
    }

    async fn model_records<T>(
        &self,
        request: &GenerationRequest,
        normalize: impl Fn(&str) -> Result<T, NormalizeError>,
    ) -> Option<T> {
        let client = self.client.as_ref()?;
        let prompt = prompt_builder::build(request);

        let raw = match client.complete(&prompt, self.temperature).await {
            Ok(raw) => raw,
            Err(error) => {
                log::warn!("model call failed, using fallback: {}", error);
                return None;
            }
        };

        match normalize(&raw) {
            Ok(records) => Some(records),
            Err(error) => {
                // A parse failure is not retried against the model; it
                // goes straight to the fallback path.
                log::warn!("model response rejected, using fallback: {}", error);
                None
            }
        }
    }
}
