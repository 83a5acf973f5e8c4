use sea_orm::*;

use crate::models::freelancers;
use crate::models::users::{self, CreateUser, UserRole};

/// Insert a new user. Role defaults to `CLIENT`.
pub async fn insert_user(db: &DatabaseConnection, input: CreateUser) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: NotSet,
        email: Set(input.email),
        password: Set(input.password),
        role: Set(input.role.unwrap_or(UserRole::Client)),
        full_name: Set(input.full_name),
        phone_number: Set(input.phone_number),
        profile_url: Set(input.profile_url),
        created_at: Set(chrono::Utc::now()),
    };

    new_user.insert(db).await
}

/// Fetch all users.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find().all(db).await
}

/// Fetch a single user by ID together with its freelancer profile, if any.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(users::Model, Option<freelancers::Model>)>, DbErr> {
    users::Entity::find_by_id(id)
        .find_also_related(freelancers::Entity)
        .one(db)
        .await
}

/// Fetch a single user by email together with its freelancer profile, if any.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<(users::Model, Option<freelancers::Model>)>, DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .find_also_related(freelancers::Entity)
        .one(db)
        .await
}
