use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::dto::{
        request::{FlashcardsRequest, GradeAnswerRequest, StudyPlanRequest},
        response::{FlashcardsResponse, GradingResponse, StudyPlanResponse},
    },
};

#[post("/sessions/{id}/flashcards")]
pub async fn generate_flashcards(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<FlashcardsRequest>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let id = id.into_inner();

    let session = state.session_service.get_session(&id).await?;
    let (flashcards, source) = state
        .generation_service
        .flashcards(&session.topics, &session.notes, body.count())
        .await;

    state
        .session_service
        .store_flashcards(&id, flashcards.clone())
        .await?;

    Ok(HttpResponse::Ok().json(FlashcardsResponse::new(flashcards, source)))
}

#[post("/sessions/{id}/plan")]
pub async fn generate_study_plan(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<StudyPlanRequest>,
) -> AppResult<HttpResponse> {
    body.validate()?;
    let id = id.into_inner();

    let session = state.session_service.get_session(&id).await?;
    let (study_plan, source) = state
        .generation_service
        .study_plan(
            &session.topics,
            &session.notes,
            body.days(),
            body.hours_per_day(),
        )
        .await;

    state
        .session_service
        .store_study_plan(&id, study_plan.clone())
        .await?;

    Ok(HttpResponse::Ok().json(StudyPlanResponse::new(study_plan, source)))
}

/// Ad-hoc grading of a free-text answer against a model answer.
#[post("/sessions/{id}/grade")]
pub async fn grade_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<GradeAnswerRequest>,
) -> AppResult<HttpResponse> {
    body.validate()?;

    let session = state.session_service.get_session(&id.into_inner()).await?;
    let (graded, graded_by) = state
        .generation_service
        .grade_short_answer(
            &body.question,
            &body.correct_answer,
            &body.student_answer,
            &session.notes,
        )
        .await;

    Ok(HttpResponse::Ok().json(GradingResponse {
        is_correct: graded.is_correct,
        feedback: graded.feedback,
        graded_by,
    }))
}
