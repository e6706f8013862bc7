use actix_web::{delete, get, http::header, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::EncodedImage,
        dto::{
            request::{EditWordsRequest, RecordAnswerRequest},
            response::{
                DeleteSessionResponse, GenerateQuizResponse, QuizPlanDto, SessionDto,
                SubmissionResponse,
            },
        },
    },
};

#[post("/api/sessions")]
async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.session_service.create_session().await?;
    Ok(HttpResponse::Created().json(SessionDto::from(session)))
}

#[get("/api/sessions/{id}")]
async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(session)))
}

#[delete("/api/sessions/{id}")]
async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.session_service.delete_session(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteSessionResponse {
        message: format!("Session '{}' ended", id),
    }))
}

/// The body is the raw image; its Content-Type decides the data URL sent to the model.
#[post("/api/sessions/{id}/extract")]
async fn extract_words(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let image = EncodedImage::from_upload(content_type, &body)?;

    log::info!(
        "[{}] extracting words for session {} ({} bytes)",
        get_request_id(&req).unwrap_or_default(),
        id,
        body.len()
    );

    let session = state.session_service.extract_words(&id, image).await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(session)))
}

#[put("/api/sessions/{id}/words")]
async fn edit_words(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<EditWordsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state.session_service.edit_words(&id, request).await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(session)))
}

#[get("/api/sessions/{id}/plan")]
async fn preview_plan(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let plan = state.session_service.preview_plan(&id).await?;
    Ok(HttpResponse::Ok().json(QuizPlanDto::from(&plan)))
}

#[post("/api/sessions/{id}/quiz")]
async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    log::info!(
        "[{}] generating quiz for session {}",
        get_request_id(&req).unwrap_or_default(),
        id
    );

    let generated = state.session_service.generate_quiz(&id).await?;
    let session = SessionDto::from(generated.session);

    Ok(HttpResponse::Created().json(GenerateQuizResponse {
        plan: QuizPlanDto::from(&generated.plan),
        question_count: session.questions.len(),
        warnings: generated.warnings,
        session,
    }))
}

#[put("/api/sessions/{id}/answers/{index}")]
async fn record_answer(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, index) = path.into_inner();
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .session_service
        .record_answer(&id, index, request.answer)
        .await?;
    Ok(HttpResponse::Ok().json(SessionDto::from(session)))
}

#[post("/api/sessions/{id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let (session, score) = state.session_service.submit(&id).await?;
    Ok(HttpResponse::Ok().json(SubmissionResponse::new(score, SessionDto::from(session))))
}
