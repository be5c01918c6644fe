pub mod notes_handler;
pub mod practice_handler;
pub mod session_handler;
pub mod study_handler;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(session_handler::create_session)
        .service(session_handler::delete_session)
        .service(session_handler::get_progress)
        .service(notes_handler::process_notes)
        .service(notes_handler::get_topics)
        .service(practice_handler::start_practice)
        .service(practice_handler::submit_answer)
        .service(study_handler::generate_flashcards)
        .service(study_handler::generate_study_plan)
        .service(study_handler::grade_answer);
}
