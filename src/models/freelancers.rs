use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered skill list, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Skills(pub Vec<String>);

/// SeaORM entity for the `freelancers` table. Keyed by the owning user's id (1:1).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "freelancers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Double")]
    pub hourly_rate: f64,
    pub exp_years: i32,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub total_projects: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Skills,
    pub linkedin_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Used by `POST /users/freelancer`. Saving overwrites any existing profile
/// for the same user.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveFreelancer {
    pub user_id: i32,
    pub title: String,
    pub hourly_rate: f64,
    pub exp_years: i32,
    pub rating: Option<f64>,
    pub total_projects: Option<i32>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub linkedin_url: Option<String>,
}
