//! Database operations for profiles

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::shared::{Education, Experience, Profile, ProfileView, Social};

/// Row shape of the `profiles` table
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    handle: Option<String>,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: Json<Vec<String>>,
    bio: Option<String>,
    github_username: Option<String>,
    social: Json<Social>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            user: row.user_id,
            handle: row.handle,
            company: row.company,
            website: row.website,
            location: row.location,
            status: row.status,
            skills: row.skills.0,
            bio: row.bio,
            github_username: row.github_username,
            social: row.social.0,
            experience: row.experience.0,
            education: row.education.0,
            date: row.updated_at,
        }
    }
}

/// Profile joined with its owner's name and avatar
#[derive(Debug, sqlx::FromRow)]
struct ProfileViewRow {
    #[sqlx(flatten)]
    profile: ProfileRow,
    name: String,
    avatar: String,
}

impl From<ProfileViewRow> for ProfileView {
    fn from(row: ProfileViewRow) -> Self {
        ProfileView {
            profile: row.profile.into(),
            name: row.name,
            avatar: row.avatar,
        }
    }
}

const SELECT_VIEW: &str = r#"
    SELECT p.user_id, p.handle, p.company, p.website, p.location, p.status, p.skills,
           p.bio, p.github_username, p.social, p.experience, p.education, p.updated_at,
           u.name, u.avatar
    FROM profiles p
    JOIN users u ON u.id = p.user_id
"#;

/// Get the profile owned by `user_id`
pub async fn get_profile<'e>(executor: impl SqliteExecutor<'e>, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT user_id, handle, company, website, location, status, skills,
               bio, github_username, social, experience, education, updated_at
        FROM profiles
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(Profile::from))
}

/// Get the profile owned by `user_id` with the owner's name and avatar
pub async fn get_profile_view<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: Uuid,
) -> Result<Option<ProfileView>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProfileViewRow>(&format!("{SELECT_VIEW} WHERE p.user_id = ?"))
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(ProfileView::from))
}

/// All profiles with owner name and avatar, most recently updated first
pub async fn list_profiles<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<ProfileView>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProfileViewRow>(&format!("{SELECT_VIEW} ORDER BY p.updated_at DESC"))
        .fetch_all(executor)
        .await?;

    Ok(rows.into_iter().map(ProfileView::from).collect())
}

/// Insert the profile, or overwrite every column of the existing one
pub async fn save_profile<'e>(executor: impl SqliteExecutor<'e>, profile: &Profile) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO profiles (user_id, handle, company, website, location, status, skills,
                              bio, github_username, social, experience, education, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            handle = excluded.handle,
            company = excluded.company,
            website = excluded.website,
            location = excluded.location,
            status = excluded.status,
            skills = excluded.skills,
            bio = excluded.bio,
            github_username = excluded.github_username,
            social = excluded.social,
            experience = excluded.experience,
            education = excluded.education,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(profile.user)
    .bind(&profile.handle)
    .bind(&profile.company)
    .bind(&profile.website)
    .bind(&profile.location)
    .bind(&profile.status)
    .bind(Json(&profile.skills))
    .bind(&profile.bio)
    .bind(&profile.github_username)
    .bind(Json(&profile.social))
    .bind(Json(&profile.experience))
    .bind(Json(&profile.education))
    .bind(profile.date)
    .execute(executor)
    .await?;

    Ok(())
}

/// Delete the profile owned by `user_id`, returning whether a row was removed
pub async fn delete_profile<'e>(executor: impl SqliteExecutor<'e>, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM profiles WHERE user_id = ?")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
