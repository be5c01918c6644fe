use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProcessNotesRequest {
    #[validate(length(min = 1, max = 1000000))]
    pub content: String,

    /// Declared file type: txt, pdf or docx.
    #[validate(length(min = 1, max = 10))]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartPracticeRequest {
    #[validate(range(min = 1, max = 50))]
    pub count: Option<u32>,

    pub mixed: Option<bool>,
}

impl StartPracticeRequest {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(10) as usize
    }

    pub fn mixed(&self) -> bool {
        self.mixed.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1, max = 2000))]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FlashcardsRequest {
    #[validate(range(min = 1, max = 50))]
    pub count: Option<u32>,
}

impl FlashcardsRequest {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(10) as usize
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudyPlanRequest {
    #[validate(range(min = 1, max = 30))]
    pub days: Option<u32>,

    #[validate(range(min = 1, max = 12))]
    pub hours_per_day: Option<u32>,
}

impl StudyPlanRequest {
    pub fn days(&self) -> usize {
        self.days.unwrap_or(7) as usize
    }

    pub fn hours_per_day(&self) -> usize {
        self.hours_per_day.unwrap_or(3) as usize
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GradeAnswerRequest {
    #[validate(length(min = 1, max = 2000))]
    pub question: String,

    #[validate(length(min = 1, max = 2000))]
    pub correct_answer: String,

    #[validate(length(min = 1, max = 2000))]
    pub student_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_process_notes_request() {
        let request = ProcessNotesRequest {
            content: "machine learning notes".to_string(),
            kind: "txt".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let request = ProcessNotesRequest {
            content: String::new(),
            kind: "txt".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_practice_request_defaults() {
        let request = StartPracticeRequest {
            count: None,
            mixed: None,
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.count(), 10);
        assert!(!request.mixed());
    }

    #[test]
    fn test_practice_count_out_of_range_is_rejected() {
        let request = StartPracticeRequest {
            count: Some(200),
            mixed: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_study_plan_defaults_and_bounds() {
        let request = StudyPlanRequest {
            days: None,
            hours_per_day: None,
        };
        assert_eq!(request.days(), 7);
        assert_eq!(request.hours_per_day(), 3);

        let request = StudyPlanRequest {
            days: Some(0),
            hours_per_day: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_grade_request_requires_all_fields_non_empty() {
        let request = GradeAnswerRequest {
            question: "Explain osmosis.".to_string(),
            correct_answer: "Water diffusion".to_string(),
            student_answer: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
