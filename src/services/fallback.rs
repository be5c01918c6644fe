//! Deterministic offline generators.
//!
//! Used whenever the model call fails or the normalizer rejects its
//! output. Total functions with no network access; they always return
//! the requested number of records.

use crate::models::domain::{
    FlashcardRecord, GradingResult, QuestionRecord, QuestionType, ScheduleSlot, StudyPlanRecord,
    Topic,
};

const DEFAULT_TOPIC: &str = "General Topic";

pub struct FallbackGenerator;

impl FallbackGenerator {
    /// Exactly `count` questions, cycling topics round-robin and rotating
    /// question types mcq, true_false, short.
    pub fn questions(topics: &[Topic], count: usize) -> Vec<QuestionRecord> {
        let names = topic_names(topics);

        (0..count)
            .map(|i| {
                let topic = &names[i % names.len()];
                match i % 3 {
                    0 => Self::mcq(topic),
                    1 => Self::true_false(topic),
                    _ => Self::short(topic),
                }
            })
            .collect()
    }

    pub fn flashcards(topics: &[Topic], count: usize) -> Vec<FlashcardRecord> {
        let names = topic_names(topics);

        (0..count)
            .map(|i| {
                let topic = &names[i % names.len()];
                FlashcardRecord {
                    front: topic.clone(),
                    back: format!(
                        "{} is a key concept in your notes; restate its definition and one example.",
                        topic
                    ),
                }
            })
            .collect()
    }

    pub fn study_plan(topics: &[Topic], days: usize, hours_per_day: usize) -> Vec<StudyPlanRecord> {
        let names = topic_names(topics);
        let hours = hours_per_day.max(1);

        (0..days)
            .map(|d| {
                let schedule = (0..hours)
                    .map(|h| {
                        let topic = &names[(d * hours + h) % names.len()];
                        let task = if h % 2 == 0 {
                            format!("Review {}", topic)
                        } else {
                            format!("Practice questions on {}", topic)
                        };
                        ScheduleSlot {
                            time: format!("{:02}:00", 9 + h),
                            task,
                            topic: topic.clone(),
                        }
                    })
                    .collect();

                StudyPlanRecord {
                    day: format!("Day {}", d + 1),
                    schedule,
                }
            })
            .collect()
    }

    /// Weaker-signal grading heuristic: the model answer appearing inside
    /// the student answer counts as correct. Callers must label the
    /// result as heuristic, never as AI-graded.
    pub fn grading(correct_answer: &str, student_answer: &str) -> GradingResult {
        let expected = correct_answer.trim().to_lowercase();
        let given = student_answer.trim().to_lowercase();
        let is_correct = !expected.is_empty() && given.contains(&expected);

        let feedback = if is_correct {
            "Your answer mentions the expected key points.".to_string()
        } else {
            "Compare your answer with the model answer and note what is missing.".to_string()
        };

        GradingResult {
            is_correct,
            feedback,
        }
    }

    fn mcq(topic: &str) -> QuestionRecord {
        QuestionRecord {
            question_type: QuestionType::Mcq,
            topic: topic.to_string(),
            question: format!("What is the main concept of {}?", topic),
            options: vec![
                "The fundamental principle behind it".to_string(),
                "A related but different concept".to_string(),
                "An application in the real world".to_string(),
                "A historical development".to_string(),
            ],
            correct: "The fundamental principle behind it".to_string(),
        }
    }

    fn true_false(topic: &str) -> QuestionRecord {
        QuestionRecord {
            question_type: QuestionType::TrueFalse,
            topic: topic.to_string(),
            question: format!("{} is always applicable in every situation.", topic),
            options: Vec::new(),
            correct: "False".to_string(),
        }
    }

    fn short(topic: &str) -> QuestionRecord {
        QuestionRecord {
            question_type: QuestionType::Short,
            topic: topic.to_string(),
            question: format!("Explain {} in your own words.", topic),
            options: Vec::new(),
            correct: format!(
                "{} is an important concept that involves key principles and applications.",
                topic
            ),
        }
    }
}

fn topic_names(topics: &[Topic]) -> Vec<String> {
    if topics.is_empty() {
        vec![DEFAULT_TOPIC.to_string()]
    } else {
        topics.iter().map(|t| t.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizer;

    fn topics() -> Vec<Topic> {
        vec![
            Topic::new("Machine Learning", 90),
            Topic::new("Neural Networks", 80),
            Topic::new("Data Science", 75),
        ]
    }

    #[test]
    fn questions_returns_exactly_the_requested_count() {
        assert_eq!(FallbackGenerator::questions(&topics(), 10).len(), 10);
        assert_eq!(FallbackGenerator::questions(&topics(), 1).len(), 1);
        assert_eq!(FallbackGenerator::questions(&[], 4).len(), 4);
    }

    #[test]
    fn questions_rotate_types_and_topics() {
        let questions = FallbackGenerator::questions(&topics(), 6);

        assert_eq!(questions[0].question_type, QuestionType::Mcq);
        assert_eq!(questions[1].question_type, QuestionType::TrueFalse);
        assert_eq!(questions[2].question_type, QuestionType::Short);
        assert_eq!(questions[0].topic, "Machine Learning");
        assert_eq!(questions[1].topic, "Neural Networks");
        assert_eq!(questions[3].topic, "Machine Learning");
    }

    #[test]
    fn questions_are_deterministic() {
        assert_eq!(
            FallbackGenerator::questions(&topics(), 9),
            FallbackGenerator::questions(&topics(), 9)
        );
    }

    #[test]
    fn fallback_questions_pass_normalizer_validation() {
        let questions = FallbackGenerator::questions(&topics(), 10);
        let json = serde_json::to_string(&questions).expect("records should serialize");

        let normalized =
            normalizer::normalize_questions(&json, 10).expect("fallback output must validate");

        assert_eq!(normalized, questions);
    }

    #[test]
    fn fallback_flashcards_pass_normalizer_validation() {
        let cards = FallbackGenerator::flashcards(&topics(), 8);
        let json = serde_json::to_string(&cards).expect("records should serialize");

        let normalized =
            normalizer::normalize_flashcards(&json, 8).expect("fallback output must validate");

        assert_eq!(normalized, cards);
    }

    #[test]
    fn fallback_study_plan_passes_normalizer_validation() {
        let plan = FallbackGenerator::study_plan(&topics(), 7, 3);
        assert_eq!(plan.len(), 7);
        assert!(plan.iter().all(|day| day.schedule.len() == 3));

        let json = serde_json::to_string(&plan).expect("records should serialize");
        let normalized =
            normalizer::normalize_study_plan(&json, 7).expect("fallback output must validate");

        assert_eq!(normalized, plan);
    }

    #[test]
    fn grading_heuristic_is_substring_based_and_case_insensitive() {
        let graded = FallbackGenerator::grading("Mitochondria", "the MITOCHONDRIA does this");
        assert!(graded.is_correct);

        let graded = FallbackGenerator::grading("Mitochondria", "the nucleus");
        assert!(!graded.is_correct);

        let graded = FallbackGenerator::grading("  ", "anything");
        assert!(!graded.is_correct);
    }
}
