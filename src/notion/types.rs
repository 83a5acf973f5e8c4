use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::projects::ProjectStatus;
use crate::models::users::UserRole;

/// A select/status label parsed against a known enumeration.
///
/// Labels that are not members are kept verbatim as `Unknown`; an empty
/// select becomes `Unknown("")`. Both forms serialise as the plain label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Choice<T> {
    Known(T),
    Unknown(String),
}

impl<T> Choice<T> {
    pub fn parse(label: Option<&str>, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        let label = label.unwrap_or_default();
        match parse(label) {
            Some(value) => Self::Known(value),
            None => Self::Unknown(label.to_string()),
        }
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown(_) => None,
        }
    }
}

/// `{ total, items }` result of a full collection sync.
#[derive(Debug, Clone, Serialize)]
pub struct Synced<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for Synced<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// A row of the Users database.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionUser {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Choice<UserRole>,
    pub phone_number: String,
    pub profile_url: String,
    /// `None` when Notion sent no parsable timestamp.
    pub created_at: Option<DateTime<Utc>>,
    pub freelancer_profile: Option<String>,
}

/// A row of the Freelancers database.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionFreelancer {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub skills: Vec<String>,
    pub rating: f64,
    pub total_projects: i64,
    pub linkedin_url: String,
    pub projects: Vec<String>,
}

/// A row of the Projects database.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionProject {
    pub id: i64,
    pub title: String,
    pub budget: f64,
    pub review_score: f64,
    pub timeline: Timeline,
    pub status: Choice<ProjectStatus>,
    pub client_email: String,
    pub freelancer_id: String,
}

/// Start and end of a project. Either side is `None` when missing or
/// unparsable; `start <= end` is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

// ── Create payloads (partial records; absent fields are left to Notion to reject) ──

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotionUser {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub phone_number: Option<String>,
    pub profile_url: Option<String>,
    pub freelancer_profile: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotionFreelancer {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub skills: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub total_projects: Option<i64>,
    pub linkedin_url: Option<String>,
    pub projects: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotionProject {
    pub title: Option<String>,
    pub budget: Option<f64>,
    pub review_score: Option<f64>,
    pub timeline: Option<Timeline>,
    pub status: Option<ProjectStatus>,
    pub client_email: Option<String>,
    pub freelancer_id: Option<String>,
}
