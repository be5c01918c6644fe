use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppResult,
    models::dto::response::{ProgressResponse, SessionResponse},
};

/// Opens a new study session and returns its id.
#[post("/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let session = state.session_service.create_session().await?;
    Ok(HttpResponse::Created().json(SessionResponse {
        session_id: session.id,
    }))
}

#[delete("/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.session_service.delete_session(&id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/sessions/{id}/progress")]
pub async fn get_progress(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let session = state.session_service.get_session(&id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ProgressResponse {
        topics: session.topics.len(),
        questions: session.questions.len(),
        answered: session.answers.len(),
        score: session.score,
        completed: session.practice_complete(),
    }))
}
