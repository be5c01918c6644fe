use serde::{Deserialize, Serialize};

/// One day of a generated study plan.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyPlanRecord {
    pub day: String,
    pub schedule: Vec<ScheduleSlot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleSlot {
    pub time: String,
    pub task: String,
    pub topic: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn study_plan_round_trip_serialization() {
        let record = StudyPlanRecord {
            day: "Day 1".to_string(),
            schedule: vec![ScheduleSlot {
                time: "09:00".to_string(),
                task: "Review core definitions".to_string(),
                topic: "Algorithms".to_string(),
            }],
        };

        let json = serde_json::to_string(&record).expect("record should serialize");
        let parsed: StudyPlanRecord =
            serde_json::from_str(&json).expect("record should deserialize");
        assert_eq!(record, parsed);
    }
}
