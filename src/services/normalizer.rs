//! Turns raw chat-model text into validated study records.
//!
//! The model is an untrusted text generator: its output may be wrapped
//! in markdown fences or surrounded by prose, and sometimes contains no
//! JSON at all. Each entry point fails closed so the caller can
//! substitute deterministic fallback content instead of surfacing a
//! partial or empty result.

use serde_json::Value;
use thiserror::Error;

use crate::models::domain::{
    FlashcardRecord, GradingResult, QuestionRecord, QuestionType, ScheduleSlot, StudyPlanRecord,
};

/// Cap on raw text captured for diagnostics, so one bad response cannot
/// flood the logs.
const DIAGNOSTIC_SNIPPET_MAX_CHARS: usize = 1500;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("no parseable JSON in model response: {0}")]
    MalformedJson(String),

    #[error("model response had an unexpected JSON shape")]
    UnexpectedShape,

    #[error("only {kept} of {requested} requested records survived validation")]
    InsufficientYield { kept: usize, requested: usize },
}

pub fn normalize_questions(
    raw: &str,
    requested: usize,
) -> Result<Vec<QuestionRecord>, NormalizeError> {
    let items = parse_record_list(raw)?;
    let kept: Vec<QuestionRecord> = items.iter().filter_map(question_from_value).collect();
    check_yield(kept, requested)
}

pub fn normalize_flashcards(
    raw: &str,
    requested: usize,
) -> Result<Vec<FlashcardRecord>, NormalizeError> {
    let items = parse_record_list(raw)?;
    let kept: Vec<FlashcardRecord> = items.iter().filter_map(flashcard_from_value).collect();
    check_yield(kept, requested)
}

pub fn normalize_study_plan(
    raw: &str,
    requested_days: usize,
) -> Result<Vec<StudyPlanRecord>, NormalizeError> {
    let items = parse_record_list(raw)?;
    let kept: Vec<StudyPlanRecord> = items.iter().filter_map(plan_day_from_value).collect();
    check_yield(kept, requested_days)
}

pub fn normalize_grading(raw: &str) -> Result<GradingResult, NormalizeError> {
    let value = extract_json(raw)?;

    let obj = match &value {
        Value::Object(obj) => obj,
        // Mirror of the object-to-list wrap on list tasks: a grading
        // object inside a one-element array is unwrapped.
        Value::Array(items) if items.len() == 1 => {
            items[0].as_object().ok_or(NormalizeError::UnexpectedShape)?
        }
        _ => return Err(NormalizeError::UnexpectedShape),
    };

    let is_correct = match field(obj, &["is_correct"]) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.trim().eq_ignore_ascii_case("true"),
        _ => return Err(NormalizeError::UnexpectedShape),
    };

    let feedback = field(obj, &["feedback"])
        .and_then(coerce_string)
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| "Answer reviewed.".to_string());

    Ok(GradingResult {
        is_correct,
        feedback,
    })
}

/// A quiz with too few questions is not a usable quiz: below
/// `max(1, requested / 2)` survivors the whole response is rejected.
fn check_yield<T>(kept: Vec<T>, requested: usize) -> Result<Vec<T>, NormalizeError> {
    let threshold = (requested / 2).max(1);
    if kept.len() < threshold {
        return Err(NormalizeError::InsufficientYield {
            kept: kept.len(),
            requested,
        });
    }
    Ok(kept)
}

fn parse_record_list(raw: &str) -> Result<Vec<Value>, NormalizeError> {
    match extract_json(raw)? {
        Value::Array(items) => Ok(items),
        // A single object where a list was expected is wrapped rather
        // than rejected.
        value @ Value::Object(_) => Ok(vec![value]),
        _ => Err(NormalizeError::UnexpectedShape),
    }
}

fn extract_json(raw: &str) -> Result<Value, NormalizeError> {
    if raw.trim().is_empty() {
        return Err(NormalizeError::EmptyResponse);
    }

    let text = strip_fences(raw);
    if text.is_empty() {
        return Err(NormalizeError::EmptyResponse);
    }

    // Common case: the model returned exactly one JSON value.
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    // Otherwise look for an embedded array, then an embedded object.
    if let Some(value) = parse_delimited(text, '[', ']') {
        return Ok(value);
    }
    if let Some(value) = parse_delimited(text, '{', '}') {
        return Ok(value);
    }

    Err(NormalizeError::MalformedJson(snippet(text)))
}

/// Removes leading/trailing code-fence markers and a language tag after
/// the opening fence. Interior content is never altered.
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // The language tag is the alphabetic run right after the fence,
        // e.g. "json" or "JSON".
        let without_tag = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        text = without_tag.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text
}

fn parse_delimited(text: &str, open: char, close: char) -> Option<Value> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

fn snippet(text: &str) -> String {
    match text.char_indices().nth(DIAGNOSTIC_SNIPPET_MAX_CHARS) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Trims scalar JSON values into strings; non-scalar values are rejected.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The prompt steers the model toward the first name; historical output
/// shapes also used the aliases.
fn field<'a>(obj: &'a serde_json::Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| obj.get(*name))
}

fn question_from_value(value: &Value) -> Option<QuestionRecord> {
    let obj = value.as_object()?;

    let question = field(obj, &["question"])
        .and_then(coerce_string)
        .filter(|q| !q.is_empty())?;
    let question_type = field(obj, &["type", "question_type"])
        .and_then(coerce_string)
        .and_then(|t| QuestionType::parse(&t))?;
    let correct = field(obj, &["correct", "correct_answer"])
        .and_then(coerce_string)
        .filter(|c| !c.is_empty())?;

    let options = if question_type == QuestionType::Mcq {
        let raw_options = field(obj, &["options"])?.as_array()?;
        let mut options: Vec<String> = Vec::new();
        for option in raw_options {
            let text = coerce_string(option)?;
            if !text.is_empty() && !options.contains(&text) {
                options.push(text);
            }
        }
        if options.len() < 2 {
            return None;
        }
        options
    } else {
        Vec::new()
    };

    let topic = field(obj, &["topic"])
        .and_then(coerce_string)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "General".to_string());

    Some(QuestionRecord {
        question_type,
        topic,
        question,
        options,
        correct,
    })
}

fn flashcard_from_value(value: &Value) -> Option<FlashcardRecord> {
    let obj = value.as_object()?;

    let front = field(obj, &["front"])
        .and_then(coerce_string)
        .filter(|f| !f.is_empty())?;
    let back = field(obj, &["back"])
        .and_then(coerce_string)
        .filter(|b| !b.is_empty())?;

    Some(FlashcardRecord { front, back })
}

fn plan_day_from_value(value: &Value) -> Option<StudyPlanRecord> {
    let obj = value.as_object()?;

    let day = field(obj, &["day"])
        .and_then(coerce_string)
        .filter(|d| !d.is_empty())?;
    let raw_schedule = field(obj, &["schedule"])?.as_array()?;

    let schedule: Vec<ScheduleSlot> = raw_schedule
        .iter()
        .filter_map(schedule_slot_from_value)
        .collect();
    if schedule.is_empty() {
        return None;
    }

    Some(StudyPlanRecord { day, schedule })
}

fn schedule_slot_from_value(value: &Value) -> Option<ScheduleSlot> {
    let obj = value.as_object()?;

    let time = field(obj, &["time"])
        .and_then(coerce_string)
        .filter(|t| !t.is_empty())?;
    let task = field(obj, &["task"])
        .and_then(coerce_string)
        .filter(|t| !t.is_empty())?;
    let topic = field(obj, &["topic"])
        .and_then(coerce_string)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "General".to_string());

    Some(ScheduleSlot { time, task, topic })
}
