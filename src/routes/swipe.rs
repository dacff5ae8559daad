use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{SwipeFilters, SwipeMachine};
use crate::models::{Profile, SuccessResponse, SwipeDecision, SwipeDecisionResponse, SwipeQuery, SwipeStateResponse, UserQuery};
use crate::routes::{error::ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/swipe", web::get().to(get_session))
        .route("/swipe", web::post().to(decide))
        .route("/swipe", web::delete().to(discard_session))
        .route("/swipe/reset", web::post().to(reset_session));
}

fn require_user(user_id: Option<&str>) -> Result<&str, ApiError> {
    user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("User ID is required".to_string()))
}

fn filters_from(query: &SwipeQuery) -> Result<SwipeFilters, ApiError> {
    let sports = query
        .sports
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    let age_range = match (query.min_age, query.max_age) {
        (None, None) => None,
        (min, max) => Some((min.unwrap_or(0), max.unwrap_or(u8::MAX))),
    };
    if let Some((min, max)) = age_range {
        if min > max {
            return Err(ApiError::BadRequest("minAge must not exceed maxAge".to_string()));
        }
    }

    Ok(SwipeFilters {
        sports,
        max_distance: query.max_distance,
        age_range,
    })
}

/// Candidates for `user_id`, narrowed by any filters in the query
async fn filtered_candidates(
    state: &AppState,
    user_id: &str,
    query: &SwipeQuery,
) -> Result<Vec<Profile>, ApiError> {
    let filters = filters_from(query)?;
    let candidates = state.repository.candidates_for(user_id).await;
    Ok(filters.apply(candidates))
}

fn state_response(machine: &SwipeMachine) -> SwipeStateResponse {
    SwipeStateResponse {
        current: machine.current().cloned(),
        available: machine.available().into_iter().cloned().collect(),
        liked: machine.liked().to_vec(),
        disliked: machine.disliked().to_vec(),
        matches: machine.matches().to_vec(),
    }
}

/// Current swipe session for a user
///
/// GET /api/swipe?userId={userId}[&sports=a,b][&maxDistance=km][&minAge=n][&maxAge=n]
async fn get_session(
    state: web::Data<AppState>,
    query: web::Query<SwipeQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user(query.user_id.as_deref())?;
    let candidates = filtered_candidates(&state, user_id, &query).await?;
    let machine = state.sessions.view(user_id, candidates).await?;

    Ok(HttpResponse::Ok().json(state_response(&machine)))
}

/// Record a like or dislike
///
/// POST /api/swipe?userId={userId}, accepting the same filters as GET.
/// A profile hidden by the filters cannot be decided on.
///
/// Request body:
/// ```json
/// {
///   "profileId": "string",
///   "direction": "like|dislike"
/// }
/// ```
async fn decide(
    state: web::Data<AppState>,
    query: web::Query<SwipeQuery>,
    req: web::Json<SwipeDecision>,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user(query.user_id.as_deref())?;
    req.validate()?;

    let candidates = filtered_candidates(&state, user_id, &query).await?;
    let (decision, machine) = state
        .sessions
        .update(user_id, candidates, |machine| {
            machine.decide(&req.profile_id, req.direction, &mut rand::thread_rng())
        })
        .await?;

    tracing::info!(
        "User {} swiped {:?} on {} -> {:?}",
        user_id,
        req.direction,
        req.profile_id,
        decision.outcome
    );

    if let Some(found) = &decision.new_match {
        state.repository.record_match(user_id, found).await;
    }

    Ok(HttpResponse::Ok().json(SwipeDecisionResponse {
        outcome: decision.outcome,
        new_match: decision.new_match,
        next: machine.current().cloned(),
    }))
}

/// Forget all likes and dislikes, keeping matches
///
/// POST /api/swipe/reset?userId={userId}
async fn reset_session(
    state: web::Data<AppState>,
    query: web::Query<SwipeQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user(query.user_id.as_deref())?;
    let candidates = filtered_candidates(&state, user_id, &query).await?;
    let ((), machine) = state
        .sessions
        .update(user_id, candidates, |machine| {
            machine.reset();
            Ok(())
        })
        .await?;

    tracing::info!("Reset swipe decisions for {}", user_id);
    Ok(HttpResponse::Ok().json(state_response(&machine)))
}

/// Wipe a user's stored session, as on logout
///
/// DELETE /api/swipe?userId={userId}
async fn discard_session(
    state: web::Data<AppState>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, ApiError> {
    let user_id = require_user(query.user_id.as_deref())?;
    state.sessions.discard(user_id).await?;

    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}
