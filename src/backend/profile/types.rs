/**
 * Profile Request Types
 *
 * Bodies for profile upsert and for adding experience and education
 * entries. Dates arrive as `YYYY-MM-DD` strings and are parsed after the
 * required-field checks so a bad date is reported like any other field.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::backend::error::BackendError;
use crate::shared::profile::parse_skills;
use crate::shared::{Education, Experience, Social};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Profile create/update body
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct ProfileRequest {
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    /// Comma-separated list
    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Blank optional strings are treated as absent
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProfileRequest {
    pub fn normalized(self) -> Self {
        Self {
            handle: present(self.handle),
            company: present(self.company),
            website: present(self.website),
            location: present(self.location),
            status: self.status.trim().to_string(),
            skills: parse_skills(&self.skills).join(","),
            bio: present(self.bio),
            github_username: present(self.github_username),
            youtube: present(self.youtube),
            twitter: present(self.twitter),
            facebook: present(self.facebook),
            linkedin: present(self.linkedin),
            instagram: present(self.instagram),
        }
    }

    /// Social links gathered from the flat request fields
    pub fn social(&self) -> Social {
        Social {
            youtube: self.youtube.clone(),
            twitter: self.twitter.clone(),
            facebook: self.facebook.clone(),
            linkedin: self.linkedin.clone(),
            instagram: self.instagram.clone(),
        }
    }
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, BackendError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| BackendError::validation(field, format!("{} must be a date (YYYY-MM-DD)", field)))
}

fn parse_optional_date(field: &str, raw: Option<String>) -> Result<Option<NaiveDate>, BackendError> {
    match present(raw) {
        Some(raw) => parse_date(field, &raw).map(Some),
        None => Ok(None),
    }
}

/// New experience entry
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct ExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    #[validate(length(min = 1, message = "From date is required"))]
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceRequest {
    /// Validate and build the entry with a fresh ID
    pub fn into_experience(self) -> Result<Experience, BackendError> {
        let request = Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            from: self.from.trim().to_string(),
            ..self
        };
        request.validate()?;

        Ok(Experience {
            id: Uuid::new_v4(),
            from: parse_date("from", &request.from)?,
            to: parse_optional_date("to", request.to)?,
            title: request.title,
            company: request.company,
            location: present(request.location),
            current: request.current,
            description: present(request.description),
        })
    }
}

/// New education entry
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
#[serde(default)]
pub struct EducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub field_of_study: String,
    #[validate(length(min = 1, message = "From date is required"))]
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl EducationRequest {
    /// Validate and build the entry with a fresh ID
    pub fn into_education(self) -> Result<Education, BackendError> {
        let request = Self {
            school: self.school.trim().to_string(),
            degree: self.degree.trim().to_string(),
            field_of_study: self.field_of_study.trim().to_string(),
            from: self.from.trim().to_string(),
            ..self
        };
        request.validate()?;

        Ok(Education {
            id: Uuid::new_v4(),
            from: parse_date("from", &request.from)?,
            to: parse_optional_date("to", request.to)?,
            school: request.school,
            degree: request.degree,
            field_of_study: request.field_of_study,
            current: request.current,
            description: present(request.description),
        })
    }
}

/// Plain acknowledgement body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}
