use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::dto::{
        request::ProcessNotesRequest,
        response::{NotesProcessedResponse, TopicsResponse},
    },
    services::notes::NoteKind,
};

/// Stores uploaded notes on the session and extracts its topic list.
#[post("/sessions/{id}/notes")]
pub async fn process_notes(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<ProcessNotesRequest>,
) -> AppResult<HttpResponse> {
    body.validate()?;

    let kind = NoteKind::parse(&body.kind)
        .ok_or_else(|| AppError::ValidationError(format!("Unsupported file type '{}'", body.kind)))?;

    let session = state
        .session_service
        .process_notes(&id.into_inner(), body.content.as_bytes(), kind)
        .await?;

    Ok(HttpResponse::Ok().json(NotesProcessedResponse {
        notes_chars: session.notes.chars().count(),
        topics: session.topics,
    }))
}

#[get("/sessions/{id}/topics")]
pub async fn get_topics(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let session = state.session_service.get_session(&id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TopicsResponse {
        topics: session.topics,
    }))
}
