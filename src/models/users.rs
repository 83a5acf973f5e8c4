use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `UserRole` enum maps to a Postgres TEXT column stored as upper-case labels.
/// The same labels are used by the Notion `Role` select property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "BASE_ADMIN")]
    BaseAdmin,
    #[sea_orm(string_value = "CLIENT")]
    Client,
    #[sea_orm(string_value = "FREELANCER")]
    Freelancer,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BaseAdmin => "BASE_ADMIN",
            Self::Client => "CLIENT",
            Self::Freelancer => "FREELANCER",
        }
    }

    /// Parse a select label. `HYBRBASE` is the legacy name of the admin role.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "BASE_ADMIN" | "HYBRBASE" => Some(Self::BaseAdmin),
            "CLIENT" => Some(Self::Client),
            "FREELANCER" => Some(Self::Freelancer),
            _ => None,
        }
    }
}

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub profile_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::freelancers::Entity")]
    FreelancerProfile,
    #[sea_orm(has_many = "super::projects::Entity")]
    Projects,
}

impl Related<super::freelancers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FreelancerProfile.def()
    }
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs (not stored in DB, used for request bodies) ──

/// Used by the `POST /users` endpoint. The password is stored as given;
/// hashing is the caller's job.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Option<UserRole>,
    pub phone_number: Option<String>,
    pub profile_url: Option<String>,
}

/// A safe user representation for API responses (never leaks the password).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub profile_url: Option<String>,
    pub created_at: DateTimeUtc,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freelancer_profile: Option<super::freelancers::Model>,
}

impl From<Model> for UserResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            full_name: m.full_name,
            role: m.role,
            phone_number: m.phone_number,
            profile_url: m.profile_url,
            created_at: m.created_at,
            freelancer_profile: None,
        }
    }
}

impl UserResponse {
    pub fn with_profile(user: Model, profile: Option<super::freelancers::Model>) -> Self {
        Self {
            freelancer_profile: profile,
            ..Self::from(user)
        }
    }
}
