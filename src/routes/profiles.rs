use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::models::{CreateProfileRequest, ProfileListResponse, ProfileResponse, ProfileSavedResponse, UpdateProfileRequest};
use crate::routes::{error::ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::get().to(list_profiles))
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::put().to(update_profile));
}

/// GET /api/profiles
async fn list_profiles(state: web::Data<AppState>) -> HttpResponse {
    let profiles = state.repository.list_profiles().await;
    HttpResponse::Ok().json(ProfileListResponse { profiles })
}

/// Create a profile
///
/// POST /api/profiles
///
/// `sports` may be a list of names, a list of `{sport, level}` objects or a
/// comma-separated string.
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let profile = state.repository.create_profile(req.into_inner()).await;
    tracing::info!("Created profile {} ({})", profile.id, profile.name);

    Ok(HttpResponse::Ok().json(ProfileSavedResponse {
        success: true,
        profile,
    }))
}

/// GET /api/profiles/{id}
async fn get_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let profile = state
        .repository
        .get_profile(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ProfileResponse { profile }))
}

/// PUT /api/profiles/{id}
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if matches!(&req.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::BadRequest("Name must not be empty".to_string()));
    }

    let profile = state
        .repository
        .update_profile(&id, req.into_inner())
        .await
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?;

    tracing::info!("Updated profile {}", id);
    Ok(HttpResponse::Ok().json(ProfileSavedResponse {
        success: true,
        profile,
    }))
}
