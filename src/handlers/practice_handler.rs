use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::{
        domain::SubmittedAnswer,
        dto::{
            request::{StartPracticeRequest, SubmitAnswerRequest},
            response::{AnswerResponse, PracticeResponse},
        },
    },
};

/// Generates a fresh practice round for the session. The newest completed
/// generation replaces whatever round was in progress.
#[post("/sessions/{id}/practice")]
pub async fn start_practice(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<StartPracticeRequest>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let id = id.into_inner();

    let session = state.session_service.get_session(&id).await?;
    let (questions, source) = state
        .generation_service
        .questions(&session.topics, &session.notes, body.count(), body.mixed())
        .await;

    state
        .session_service
        .start_practice(&id, questions.clone())
        .await?;

    Ok(HttpResponse::Ok().json(PracticeResponse::new(questions, source)))
}

/// Grades the answer to the session's current question and advances.
#[post("/sessions/{id}/answers")]
pub async fn submit_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<SubmitAnswerRequest>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let id = id.into_inner();

    let session = state.session_service.get_session(&id).await?;
    let question = session
        .current_question()
        .cloned()
        .ok_or_else(|| AppError::BadRequest("Practice round is already complete".to_string()))?;

    let (graded, graded_by) = state
        .generation_service
        .grade_submission(&question, &body.answer, &session.notes)
        .await;

    let updated = state
        .session_service
        .record_answer(
            &id,
            SubmittedAnswer {
                answer: body.answer.clone(),
                is_correct: graded.is_correct,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(AnswerResponse {
        is_correct: graded.is_correct,
        feedback: graded.feedback,
        graded_by,
        score: updated.score,
        current_index: updated.current_index,
        completed: updated.practice_complete(),
    }))
}
