//! Write path: partial records → the `properties` object of `POST /pages`.
//!
//! Optional blocks (profile file, relation links) are left out of the map
//! entirely when their source value is absent or empty. Pass-through values
//! that are `None` are omitted inside their block, so Notion reports the
//! missing field.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::fields::{freelancer, project, user};
use super::types::{CreateNotionFreelancer, CreateNotionProject, CreateNotionUser};

pub const UNTITLED: &str = "Untitled";
pub const PROFILE_FILE_NAME: &str = "Profile Picture";
/// People entry id sent for the project client; Notion matches the client by email.
pub const CLIENT_PERSON_ID: &str = "user_id";

pub type PropertyMap = BTreeMap<&'static str, PropertyInput>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyInput {
    Title {
        title: Vec<TextInput>,
    },
    RichText {
        rich_text: Vec<TextInput>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<f64>,
    },
    Select {
        select: NameInput,
    },
    Status {
        status: NameInput,
    },
    MultiSelect {
        multi_select: Vec<NameInput>,
    },
    People {
        people: Vec<PersonInput>,
    },
    PhoneNumber {
        #[serde(skip_serializing_if = "Option::is_none")]
        phone_number: Option<String>,
    },
    Url {
        url: String,
    },
    Files {
        files: Vec<FileInput>,
    },
    Date {
        date: DateInput,
    },
    Relation {
        relation: Vec<ReferenceInput>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextInput {
    pub text: ContentInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub person: EmailInput,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInput {
    pub name: String,
    pub external: UrlInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlInput {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateInput {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl PropertyInput {
    fn title(content: Option<String>) -> Self {
        Self::Title {
            title: vec![TextInput::new(content)],
        }
    }

    fn rich_text(content: Option<String>) -> Self {
        Self::RichText {
            rich_text: vec![TextInput::new(content)],
        }
    }

    fn relation<I: IntoIterator<Item = Option<String>>>(ids: I) -> Self {
        Self::Relation {
            relation: ids.into_iter().map(|id| ReferenceInput { id }).collect(),
        }
    }
}

impl TextInput {
    fn new(content: Option<String>) -> Self {
        Self {
            text: ContentInput { content },
        }
    }
}

pub fn user_properties(input: &CreateNotionUser) -> PropertyMap {
    let mut props = PropertyMap::new();
    props.insert(user::EMAIL, PropertyInput::title(input.email.clone()));
    props.insert(
        user::FULL_NAME,
        PropertyInput::People {
            people: vec![PersonInput {
                id: input.full_name.clone(),
                person: EmailInput {
                    email: input.email.clone(),
                },
                kind: None,
            }],
        },
    );
    props.insert(user::PASSWORD, PropertyInput::rich_text(input.password.clone()));
    props.insert(
        user::ROLE,
        PropertyInput::Select {
            select: NameInput {
                name: input.role.map(|r| r.label().to_string()),
            },
        },
    );
    props.insert(
        user::PHONE_NUMBER,
        PropertyInput::PhoneNumber {
            phone_number: input.phone_number.clone(),
        },
    );
    if let Some(url) = present(&input.profile_url) {
        props.insert(
            user::PROFILE,
            PropertyInput::Files {
                files: vec![FileInput {
                    name: PROFILE_FILE_NAME.to_string(),
                    external: UrlInput {
                        url: url.to_string(),
                    },
                }],
            },
        );
    }
    if let Some(profile) = present(&input.freelancer_profile) {
        props.insert(
            user::FREELANCER_PROFILE,
            PropertyInput::relation([Some(profile.to_string())]),
        );
    }
    props
}

pub fn freelancer_properties(input: &CreateNotionFreelancer) -> PropertyMap {
    let title = present(&input.title).unwrap_or(UNTITLED).to_string();

    let mut props = PropertyMap::new();
    props.insert(freelancer::TITLE, PropertyInput::title(Some(title)));
    props.insert(freelancer::USER, PropertyInput::relation([input.user_id.clone()]));
    props.insert(
        freelancer::SKILLS,
        PropertyInput::MultiSelect {
            multi_select: input
                .skills
                .iter()
                .flatten()
                .map(|skill| NameInput {
                    name: Some(skill.clone()),
                })
                .collect(),
        },
    );
    props.insert(
        freelancer::RATING,
        PropertyInput::Number {
            number: Some(input.rating.unwrap_or(0.0)),
        },
    );
    props.insert(
        freelancer::TOTAL_PROJECTS,
        PropertyInput::Number {
            number: Some(input.total_projects.unwrap_or(0) as f64),
        },
    );
    props.insert(
        freelancer::LINKEDIN,
        PropertyInput::Url {
            url: input.linkedin_url.clone().unwrap_or_default(),
        },
    );
    props.insert(
        freelancer::PROJECTS,
        PropertyInput::relation(input.projects.iter().flatten().cloned().map(Some)),
    );
    props
}

pub fn project_properties(input: &CreateNotionProject) -> PropertyMap {
    let mut props = PropertyMap::new();
    props.insert(project::TITLE, PropertyInput::title(input.title.clone()));
    props.insert(
        project::BUDGET,
        PropertyInput::Number {
            number: input.budget,
        },
    );
    props.insert(
        project::REVIEW_SCORE,
        PropertyInput::Number {
            number: input.review_score,
        },
    );
    if let Some(timeline) = &input.timeline {
        props.insert(
            project::TIMELINE,
            PropertyInput::Date {
                date: DateInput {
                    start: timeline.start.as_ref().map(iso_timestamp),
                    end: timeline.end.as_ref().map(iso_timestamp),
                },
            },
        );
    }
    props.insert(
        project::STATUS,
        PropertyInput::Status {
            status: NameInput {
                name: input.status.map(|s| s.label().to_string()),
            },
        },
    );
    props.insert(
        project::CLIENT,
        PropertyInput::People {
            people: vec![PersonInput {
                id: Some(CLIENT_PERSON_ID.to_string()),
                person: EmailInput {
                    email: input.client_email.clone(),
                },
                kind: Some("person"),
            }],
        },
    );
    if let Some(freelancer_id) = present(&input.freelancer_id) {
        props.insert(
            project::FREELANCERS,
            PropertyInput::relation([Some(freelancer_id.to_string())]),
        );
    }
    props
}

/// `2024-01-15T09:30:00.000Z`
pub fn iso_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
