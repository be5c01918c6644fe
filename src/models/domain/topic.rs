use serde::{Deserialize, Serialize};

/// A topic extracted from uploaded notes, scored 0-100 by how prominently
/// it appears.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub name: String,
    pub importance_score: u8,
}

impl Topic {
    pub fn new(name: impl Into<String>, importance_score: u8) -> Self {
        Topic {
            name: name.into(),
            importance_score: importance_score.min(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_caps_importance_score_at_100() {
        let topic = Topic::new("Algorithms", 250);
        assert_eq!(topic.importance_score, 100);
    }

    #[test]
    fn topic_round_trip_serialization() {
        let topic = Topic::new("Neural Networks", 80);
        let json = serde_json::to_string(&topic).expect("topic should serialize");
        let parsed: Topic = serde_json::from_str(&json).expect("topic should deserialize");
        assert_eq!(topic, parsed);
    }
}
