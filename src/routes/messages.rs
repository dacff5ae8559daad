use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::models::{CreateMessageRequest, MessageCreatedResponse, MessageListResponse, MessagesQuery, SuccessResponse};
use crate::routes::{error::ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/messages", web::get().to(list_messages))
        .route("/messages", web::post().to(create_message))
        .route("/messages", web::patch().to(mark_messages_read));
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// GET /api/messages?matchId={matchId}
async fn list_messages(
    state: web::Data<AppState>,
    query: web::Query<MessagesQuery>,
) -> Result<HttpResponse, ApiError> {
    let match_id = non_empty(&query.match_id)
        .ok_or_else(|| ApiError::BadRequest("Match ID is required".to_string()))?;

    let messages = state.repository.messages_for(match_id).await;
    Ok(HttpResponse::Ok().json(MessageListResponse { messages }))
}

/// POST /api/messages
async fn create_message(
    state: web::Data<AppState>,
    req: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let message = state.repository.create_message(req.into_inner()).await;
    tracing::debug!("Message {} posted to match {}", message.id, message.match_id);

    Ok(HttpResponse::Ok().json(MessageCreatedResponse {
        success: true,
        message,
    }))
}

/// Mark a match's messages to `userId` as read
///
/// PATCH /api/messages?matchId={matchId}&userId={userId}
async fn mark_messages_read(
    state: web::Data<AppState>,
    query: web::Query<MessagesQuery>,
) -> Result<HttpResponse, ApiError> {
    let (match_id, user_id) = non_empty(&query.match_id)
        .zip(non_empty(&query.user_id))
        .ok_or_else(|| ApiError::BadRequest("Match ID and User ID are required".to_string()))?;

    let updated = state.repository.mark_read(match_id, user_id).await;
    tracing::debug!("Marked {} messages read in match {} for {}", updated, match_id, user_id);

    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}
