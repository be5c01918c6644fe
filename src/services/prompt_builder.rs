//! Renders the instruction text sent to the chat model.
//!
//! Pure functions of the generation request: no side effects, and no
//! failure path. Missing topics or notes render as empty blocks so the
//! caller always gets a sendable prompt.

use crate::models::domain::{GenerationRequest, TaskKind, Topic};

/// Hard cap on embedded note text. Notes beyond this add cost without
/// steering the model further.
pub const NOTES_EXCERPT_MAX_CHARS: usize = 3500;

const QUIZ_FORMAT: &str = r#"[
  {
    "type": "mcq",
    "topic": "Topic name",
    "question": "...",
    "options": ["A", "B", "C", "D"],
    "correct": "A"
  }
]"#;

const FLASHCARD_FORMAT: &str = r#"[
  {
    "front": "Term or question",
    "back": "Definition or answer"
  }
]"#;

const STUDY_PLAN_FORMAT: &str = r#"[
  {
    "day": "Day 1",
    "schedule": [
      { "time": "09:00", "task": "...", "topic": "Topic name" }
    ]
  }
]"#;

const GRADING_FORMAT: &str = r#"{
  "is_correct": true,
  "feedback": "..."
}"#;

pub fn build(request: &GenerationRequest) -> String {
    match request.task() {
        TaskKind::Quiz { count } => quiz_prompt(request.topics(), request.notes(), *count, false),
        TaskKind::MixedQuiz { count } => {
            quiz_prompt(request.topics(), request.notes(), *count, true)
        }
        TaskKind::Flashcards { count } => {
            flashcard_prompt(request.topics(), request.notes(), *count)
        }
        TaskKind::StudyPlan {
            days,
            hours_per_day,
        } => study_plan_prompt(request.topics(), request.notes(), *days, *hours_per_day),
        TaskKind::Grading {
            question,
            correct_answer,
            student_answer,
        } => grading_prompt(question, correct_answer, student_answer, request.notes()),
    }
}

fn quiz_prompt(topics: &[Topic], notes: &str, count: usize, mixed: bool) -> String {
    let type_rule = if mixed {
        "- Mix the question types across \"mcq\", \"true_false\", \"fill\" and \"short\""
    } else {
        "- Every question is type \"mcq\" with 4 options and 1 correct answer"
    };

    format!(
        "You are an AI study assistant.\n\n\
         Using the notes AND topic importance below, generate {count} exam-style\n\
         questions.\n\n\
         RULES:\n\
         - Each question MUST relate to one topic\n\
         {type_rule}\n\
         - Answers MUST be accurate\n\
         - Return ONLY valid JSON\n\n\
         FORMAT:\n{format}\n\n\
         TOPICS:\n{topics}\n\n\
         NOTES:\n{notes}",
        count = count,
        type_rule = type_rule,
        format = QUIZ_FORMAT,
        topics = topics_block(topics),
        notes = notes_excerpt(notes),
    )
}

fn flashcard_prompt(topics: &[Topic], notes: &str, count: usize) -> String {
    format!(
        "You are an AI study assistant.\n\n\
         Using the notes AND topic importance below, generate {count} flashcards\n\
         covering the most important terms and ideas.\n\n\
         RULES:\n\
         - Fronts are short prompts, backs are concise answers\n\
         - Return ONLY valid JSON\n\n\
         FORMAT:\n{format}\n\n\
         TOPICS:\n{topics}\n\n\
         NOTES:\n{notes}",
        count = count,
        format = FLASHCARD_FORMAT,
        topics = topics_block(topics),
        notes = notes_excerpt(notes),
    )
}

fn study_plan_prompt(topics: &[Topic], notes: &str, days: usize, hours_per_day: usize) -> String {
    format!(
        "You are an AI study assistant.\n\n\
         Using the notes AND topic importance below, build a {days}-day study plan\n\
         with about {hours} hours of work per day, spending more time on more\n\
         important topics.\n\n\
         RULES:\n\
         - One entry per day, each with a timed schedule\n\
         - Return ONLY valid JSON\n\n\
         FORMAT:\n{format}\n\n\
         TOPICS:\n{topics}\n\n\
         NOTES:\n{notes}",
        days = days,
        hours = hours_per_day,
        format = STUDY_PLAN_FORMAT,
        topics = topics_block(topics),
        notes = notes_excerpt(notes),
    )
}

fn grading_prompt(question: &str, correct_answer: &str, student_answer: &str, notes: &str) -> String {
    format!(
        "You are an AI study assistant grading a short free-text answer.\n\n\
         Decide whether the student's answer matches the model answer in meaning.\n\
         Minor wording differences do not matter.\n\n\
         RULES:\n\
         - Return ONLY valid JSON\n\n\
         FORMAT:\n{format}\n\n\
         QUESTION:\n{question}\n\n\
         MODEL ANSWER:\n{correct}\n\n\
         STUDENT ANSWER:\n{student}\n\n\
         NOTES:\n{notes}",
        format = GRADING_FORMAT,
        question = question,
        correct = correct_answer,
        student = student_answer,
        notes = notes_excerpt(notes),
    )
}

fn topics_block(topics: &[Topic]) -> String {
    topics
        .iter()
        .map(|t| format!("- {} ({}%)", t.name, t.importance_score))
        .collect::<Vec<_>>()
        .join("\n")
}

fn notes_excerpt(notes: &str) -> &str {
    match notes.char_indices().nth(NOTES_EXCERPT_MAX_CHARS) {
        Some((idx, _)) => &notes[..idx],
        None => notes,
    }
}
