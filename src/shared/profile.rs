//! Profile Data Structure
//!
//! Profiles are keyed one-to-one with users. Experience and education
//! entries are embedded, most recent first.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Social network links
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A job entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// A school entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// A developer profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Owning user, also the profile's key
    pub user: Uuid,
    pub handle: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    /// Professional status, e.g. "Senior Developer"
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    /// Last time the profile was written
    pub date: DateTime<Utc>,
}

/// A profile together with its owner's public identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    /// Owner's display name
    pub name: String,
    /// Owner's avatar URI
    pub avatar: String,
}

impl Profile {
    /// Create an empty profile with the two required fields
    pub fn new(user: Uuid, status: String, skills: Vec<String>) -> Self {
        Self {
            user,
            handle: None,
            company: None,
            website: None,
            location: None,
            status,
            skills,
            bio: None,
            github_username: None,
            social: Social::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Prepend an experience entry
    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    /// Remove the experience entry with `id`
    pub fn remove_experience(&mut self, id: Uuid) -> Result<Experience, SharedError> {
        let index = self
            .experience
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| SharedError::not_found("Experience"))?;
        Ok(self.experience.remove(index))
    }

    /// Prepend an education entry
    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    /// Remove the education entry with `id`
    pub fn remove_education(&mut self, id: Uuid) -> Result<Education, SharedError> {
        let index = self
            .education
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| SharedError::not_found("Education"))?;
        Ok(self.education.remove(index))
    }
}

/// Split a comma-separated skills string into trimmed, non-empty entries
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}
