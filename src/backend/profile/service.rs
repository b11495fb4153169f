//! Profile Service
//!
//! Profile reads, upsert, experience/education entries and account removal.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::backend::auth::users::delete_user;
use crate::backend::error::BackendError;
use crate::backend::posts::db::delete_posts_by_user;
use crate::backend::profile::db;
use crate::backend::server::config::begin_immediate;
use crate::backend::profile::types::{EducationRequest, ExperienceRequest, MessageResponse, ProfileRequest};
use crate::shared::profile::parse_skills;
use crate::shared::{Profile, ProfileView, SharedError};

const NO_PROFILE: &str = "There is no profile for this user";

/// The requester's own profile
pub async fn my_profile(pool: &SqlitePool, user_id: Uuid) -> Result<ProfileView, BackendError> {
    db::get_profile_view(pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_PROFILE))
}

/// Create the requester's profile or replace its scalar fields
///
/// Experience and education entries survive an update.
pub async fn upsert_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    request: ProfileRequest,
) -> Result<Profile, BackendError> {
    let request = request.normalized();
    request.validate()?;

    let mut tx = begin_immediate(pool).await?;

    let mut profile = db::get_profile(&mut *tx, user_id)
        .await?
        .unwrap_or_else(|| Profile::new(user_id, String::new(), Vec::new()));

    profile.social = request.social();
    profile.status = request.status;
    profile.skills = parse_skills(&request.skills);
    profile.handle = request.handle;
    profile.company = request.company;
    profile.website = request.website;
    profile.location = request.location;
    profile.bio = request.bio;
    profile.github_username = request.github_username;
    profile.date = Utc::now();

    db::save_profile(&mut *tx, &profile).await?;
    tx.commit().await?;

    tracing::info!("Profile saved for {}", user_id);

    Ok(profile)
}

/// Every profile with owner name and avatar
pub async fn list_profiles(pool: &SqlitePool) -> Result<Vec<ProfileView>, BackendError> {
    Ok(db::list_profiles(pool).await?)
}

/// Profile of the user with the given ID
pub async fn profile_by_user(pool: &SqlitePool, user_id: &str) -> Result<ProfileView, BackendError> {
    let user_id = Uuid::parse_str(user_id).map_err(|_| BackendError::not_found("Profile not found"))?;
    db::get_profile_view(pool, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Profile not found"))
}

/// Remove the user's posts, profile and user record
pub async fn delete_account(pool: &SqlitePool, user_id: Uuid) -> Result<MessageResponse, BackendError> {
    let mut tx = begin_immediate(pool).await?;

    let posts = delete_posts_by_user(&mut *tx, user_id).await?;
    db::delete_profile(&mut *tx, user_id).await?;
    delete_user(&mut *tx, user_id).await?;

    tx.commit().await?;

    tracing::info!("Account {} deleted along with {} posts", user_id, posts);

    Ok(MessageResponse {
        msg: "User deleted".to_string(),
    })
}

/// Load the requester's profile, apply `change`, and store it
async fn update_profile<F>(pool: &SqlitePool, user_id: Uuid, change: F) -> Result<Profile, BackendError>
where
    F: FnOnce(&mut Profile) -> Result<(), BackendError>,
{
    let mut tx = begin_immediate(pool).await?;

    let mut profile = db::get_profile(&mut *tx, user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(NO_PROFILE))?;

    change(&mut profile)?;
    db::save_profile(&mut *tx, &profile).await?;
    tx.commit().await?;

    Ok(profile)
}

/// Prepend an experience entry
pub async fn add_experience(
    pool: &SqlitePool,
    user_id: Uuid,
    request: ExperienceRequest,
) -> Result<Profile, BackendError> {
    let experience = request.into_experience()?;
    update_profile(pool, user_id, |profile| {
        profile.add_experience(experience);
        Ok(())
    })
    .await
}

/// Remove an experience entry by ID
pub async fn remove_experience(pool: &SqlitePool, user_id: Uuid, exp_id: &str) -> Result<Profile, BackendError> {
    let exp_id = Uuid::parse_str(exp_id).map_err(|_| SharedError::not_found("Experience"))?;
    update_profile(pool, user_id, |profile| {
        profile.remove_experience(exp_id)?;
        Ok(())
    })
    .await
}

/// Prepend an education entry
pub async fn add_education(
    pool: &SqlitePool,
    user_id: Uuid,
    request: EducationRequest,
) -> Result<Profile, BackendError> {
    let education = request.into_education()?;
    update_profile(pool, user_id, |profile| {
        profile.add_education(education);
        Ok(())
    })
    .await
}

/// Remove an education entry by ID
pub async fn remove_education(pool: &SqlitePool, user_id: Uuid, edu_id: &str) -> Result<Profile, BackendError> {
    let edu_id = Uuid::parse_str(edu_id).map_err(|_| SharedError::not_found("Education"))?;
    update_profile(pool, user_id, |profile| {
        profile.remove_education(edu_id)?;
        Ok(())
    })
    .await
}
