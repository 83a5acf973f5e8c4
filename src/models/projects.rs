use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project status. Stored and exchanged with Notion using the status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProjectStatus {
    #[sea_orm(string_value = "Not started")]
    #[serde(rename = "Not started")]
    NotStarted,
    #[sea_orm(string_value = "In progress")]
    #[serde(rename = "In progress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    #[serde(rename = "Completed")]
    Completed,
    #[sea_orm(string_value = "Cancelled")]
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Not started" => Some(Self::NotStarted),
            "In progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// SeaORM entity for the `projects` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Double")]
    pub budget: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub review_score: Option<f64>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub status: ProjectStatus,
    pub client_id: i32,
    pub freelancer_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ClientId",
        to = "super::users::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::freelancers::Entity",
        from = "Column::FreelancerId",
        to = "super::freelancers::Column::UserId"
    )]
    Freelancer,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::freelancers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Freelancer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub budget: f64,
    pub review_score: Option<f64>,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub status: Option<ProjectStatus>,
    pub client_id: i32,
    pub freelancer_id: Option<i32>,
}
