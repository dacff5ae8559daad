use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::models::{CreateMatchRequest, HealthResponse, MatchCreatedResponse, MatchListResponse, UserQuery};
use crate::routes::{error::ApiError, AppState};

/// Configure health and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(list_matches))
        .route("/matches", web::post().to(create_match));
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List matches for a user
///
/// GET /api/matches?userId={userId}
///
/// Returns every match where the user is on either side, newest first.
async fn list_matches(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = query
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("User ID is required".to_string()))?;

    let matches = state.repository.matches_for(user_id).await;
    tracing::debug!("Returning {} matches for {}", matches.len(), user_id);

    Ok(HttpResponse::Ok().json(MatchListResponse { matches }))
}

/// Create a match
///
/// POST /api/matches
///
/// Request body:
/// ```json
/// {
///   "user1Id": "string",
///   "user2Id": "string",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "hasChat": true
/// }
/// ```
async fn create_match(
    state: web::Data<AppState>,
    req: web::Json<CreateMatchRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let match_record = state.repository.create_match(req.into_inner()).await;
    tracing::info!(
        "Created match {} between {} and {}",
        match_record.id,
        match_record.user1_id,
        match_record.user2_id
    );

    Ok(HttpResponse::Ok().json(MatchCreatedResponse {
        success: true,
        match_record,
    }))
}
