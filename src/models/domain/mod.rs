pub mod flashcard;
pub mod generation;
pub mod grading;
pub mod question;
pub mod session;
pub mod study_plan;
pub mod topic;

pub use flashcard::FlashcardRecord;
pub use generation::{GenerationRequest, TaskKind};
pub use grading::GradingResult;
pub use question::{QuestionRecord, QuestionType};
pub use session::{StudySession, SubmittedAnswer};
pub use study_plan::{ScheduleSlot, StudyPlanRecord};
pub use topic::Topic;
