use sea_orm::*;

use crate::models::projects::{self, CreateProject, ProjectStatus};

/// Insert a new project. Status defaults to `Not started`.
pub async fn insert_project(
    db: &DatabaseConnection,
    input: CreateProject,
) -> Result<projects::Model, DbErr> {
    let new_project = projects::ActiveModel {
        id: NotSet,
        title: Set(input.title),
        budget: Set(input.budget),
        review_score: Set(input.review_score),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        status: Set(input.status.unwrap_or(ProjectStatus::NotStarted)),
        client_id: Set(input.client_id),
        freelancer_id: Set(input.freelancer_id),
    };

    new_project.insert(db).await
}

/// Fetch all projects.
pub async fn get_all_projects(db: &DatabaseConnection) -> Result<Vec<projects::Model>, DbErr> {
    projects::Entity::find().all(db).await
}

/// Fetch a single project by ID.
pub async fn get_project_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<projects::Model>, DbErr> {
    projects::Entity::find_by_id(id).one(db).await
}
