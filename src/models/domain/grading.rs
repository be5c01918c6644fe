use serde::{Deserialize, Serialize};

/// Verdict for a free-text answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradingResult {
    pub is_correct: bool,
    pub feedback: String,
}
