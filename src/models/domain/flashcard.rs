use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashcardRecord {
    pub front: String,
    pub back: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flashcard_round_trip_serialization() {
        let card = FlashcardRecord {
            front: "Mitosis".to_string(),
            back: "Cell division producing two identical daughter cells".to_string(),
        };

        let json = serde_json::to_string(&card).expect("card should serialize");
        let parsed: FlashcardRecord = serde_json::from_str(&json).expect("card should deserialize");
        assert_eq!(card, parsed);
    }
}
