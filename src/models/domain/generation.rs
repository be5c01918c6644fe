use crate::models::domain::Topic;

/// What the model is being asked to produce, with the task's numeric
/// parameters attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Quiz {
        count: usize,
    },
    MixedQuiz {
        count: usize,
    },
    Flashcards {
        count: usize,
    },
    StudyPlan {
        days: usize,
        hours_per_day: usize,
    },
    Grading {
        question: String,
        correct_answer: String,
        student_answer: String,
    },
}

/// One generation request, built per user action. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    task: TaskKind,
    topics: Vec<Topic>,
    notes: String,
}

impl GenerationRequest {
    pub fn new(task: TaskKind, topics: Vec<Topic>, notes: impl Into<String>) -> Self {
        GenerationRequest {
            task,
            topics,
            notes: notes.into(),
        }
    }

    pub fn task(&self) -> &TaskKind {
        &self.task
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_exposes_task_and_inputs() {
        let request = GenerationRequest::new(
            TaskKind::Quiz { count: 10 },
            vec![Topic::new("Algorithms", 80)],
            "sorting and searching",
        );

        assert_eq!(request.task(), &TaskKind::Quiz { count: 10 });
        assert_eq!(request.topics().len(), 1);
        assert_eq!(request.notes(), "sorting and searching");
    }
}
