//! Read path: Notion pages → typed records.
//!
//! Every function here is total. A missing or mistyped property yields the
//! field's default: `""` for text, `0` for numbers, an empty list for
//! multi-values, `None` for optional references and timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::fields::{self, freelancer, project, user};
use super::records::Page;
use super::types::{Choice, NotionFreelancer, NotionProject, NotionUser, Timeline};
use crate::models::projects::ProjectStatus;
use crate::models::users::UserRole;

pub fn format_users(pages: &[Page]) -> Vec<NotionUser> {
    pages.iter().map(format_user).collect()
}

pub fn format_freelancers(pages: &[Page]) -> Vec<NotionFreelancer> {
    pages.iter().map(format_freelancer).collect()
}

pub fn format_projects(pages: &[Page]) -> Vec<NotionProject> {
    pages.iter().map(format_project).collect()
}

pub fn format_user(page: &Page) -> NotionUser {
    let props = &page.properties;
    NotionUser {
        id: props.unique_id(fields::ID).unwrap_or_default(),
        email: owned(props.title(user::EMAIL)),
        full_name: owned(
            props
                .people(user::FULL_NAME)
                .first()
                .and_then(|p| p.name.as_deref()),
        ),
        password: owned(props.rich_text(user::PASSWORD)),
        role: Choice::parse(props.select(user::ROLE), UserRole::from_label),
        phone_number: owned(props.phone_number(user::PHONE_NUMBER)),
        profile_url: owned(
            props
                .files(user::PROFILE)
                .first()
                .and_then(|f| f.external.as_ref())
                .map(|e| e.url.as_str()),
        ),
        created_at: props
            .created_time(user::CREATED_AT)
            .and_then(parse_timestamp),
        freelancer_profile: props
            .relation(user::FREELANCER_PROFILE)
            .first()
            .map(|r| r.id.clone())
            .filter(|id| !id.is_empty()),
    }
}

pub fn format_freelancer(page: &Page) -> NotionFreelancer {
    let props = &page.properties;
    NotionFreelancer {
        id: props.unique_id(fields::ID).unwrap_or_default(),
        user_id: owned(props.rich_text(freelancer::USER_ID)),
        title: owned(props.title(freelancer::TITLE)),
        skills: props
            .multi_select(freelancer::SKILLS)
            .iter()
            .map(|skill| skill.name.clone())
            .collect(),
        rating: props.number(freelancer::RATING).unwrap_or_default(),
        total_projects: props
            .number(freelancer::TOTAL_PROJECTS)
            .map(|n| n.round() as i64)
            .unwrap_or_default(),
        linkedin_url: owned(props.url(freelancer::LINKEDIN)),
        projects: props
            .relation(freelancer::PROJECTS)
            .iter()
            .map(|r| r.id.clone())
            .collect(),
    }
}

pub fn format_project(page: &Page) -> NotionProject {
    let props = &page.properties;
    let timeline = props.date(project::TIMELINE);
    NotionProject {
        id: props.unique_id(fields::ID).unwrap_or_default(),
        title: owned(props.title(project::TITLE)),
        budget: props.number(project::BUDGET).unwrap_or_default(),
        review_score: props.number(project::REVIEW_SCORE).unwrap_or_default(),
        timeline: Timeline {
            start: timeline
                .and_then(|d| d.start.as_deref())
                .and_then(parse_timestamp),
            end: timeline
                .and_then(|d| d.end.as_deref())
                .and_then(parse_timestamp),
        },
        status: Choice::parse(props.status(project::STATUS), ProjectStatus::from_label),
        client_email: owned(
            props
                .people(project::CLIENT)
                .first()
                .and_then(|p| p.person.as_ref())
                .and_then(|p| p.email.as_deref()),
        ),
        freelancer_id: owned(
            props
                .relation(project::FREELANCERS)
                .first()
                .map(|r| r.id.as_str()),
        ),
    }
}

/// Parse a Notion timestamp: RFC 3339, a bare date (UTC midnight), or a
/// date-time without offset (taken as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

fn owned(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
