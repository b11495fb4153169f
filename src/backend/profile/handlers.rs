//! Profile HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::service;
use crate::backend::profile::types::{EducationRequest, ExperienceRequest, MessageResponse, ProfileRequest};
use crate::backend::server::state::AppState;
use crate::shared::{Profile, ProfileView};

/// GET /api/profile/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileView>, BackendError> {
    Ok(Json(service::my_profile(state.pool()?, user.user_id).await?))
}

/// POST /api/profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<ProfileRequest>,
) -> Result<Json<Profile>, BackendError> {
    Ok(Json(service::upsert_profile(state.pool()?, user.user_id, request).await?))
}

/// GET /api/profile (public)
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<ProfileView>>, BackendError> {
    Ok(Json(service::list_profiles(state.pool()?).await?))
}

/// GET /api/profile/user/{user_id} (public)
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, BackendError> {
    Ok(Json(service::profile_by_user(state.pool()?, &user_id).await?))
}

/// DELETE /api/profile
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<MessageResponse>, BackendError> {
    Ok(Json(service::delete_account(state.pool()?, user.user_id).await?))
}

/// PUT /api/profile/experience
pub async fn add_experience(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<ExperienceRequest>,
) -> Result<Json<Profile>, BackendError> {
    Ok(Json(service::add_experience(state.pool()?, user.user_id, request).await?))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    Ok(Json(service::remove_experience(state.pool()?, user.user_id, &exp_id).await?))
}

/// PUT /api/profile/education
pub async fn add_education(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<EducationRequest>,
) -> Result<Json<Profile>, BackendError> {
    Ok(Json(service::add_education(state.pool()?, user.user_id, request).await?))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, BackendError> {
    Ok(Json(service::remove_education(state.pool()?, user.user_id, &edu_id).await?))
}
