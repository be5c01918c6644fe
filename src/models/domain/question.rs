use serde::{Deserialize, Serialize};

/// One validated practice question. Records only exist in this form after
/// passing normalization; a record that fails any required-field or
/// type-specific constraint is rejected whole, never partially kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub topic: String,
    pub question: String,
    /// Present with at least two distinct entries for mcq, empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub correct: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    Fill,
    Short,
    TrueFalse,
}

impl QuestionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mcq" => Some(QuestionType::Mcq),
            "fill" => Some(QuestionType::Fill),
            "short" | "short_answer" => Some(QuestionType::Short),
            "true_false" | "truefalse" => Some(QuestionType::TrueFalse),
            _ => None,
        }
    }
}
