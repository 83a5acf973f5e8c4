use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::projects as project_db;
use crate::models::projects::CreateProject;

/// GET /projects: list all projects.
pub async fn get_projects(db: web::Data<DatabaseConnection>) -> impl Responder {
    match project_db::get_all_projects(db.get_ref()).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch projects: {e}"),
        })),
    }
}

/// GET /projects/{id}: get a single project.
pub async fn get_project(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id = path.into_inner();
    match project_db::get_project_by_id(db.get_ref(), id).await {
        Ok(Some(project)) => HttpResponse::Ok().json(project),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Project {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /projects: create a new project.
pub async fn create_project(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateProject>,
) -> impl Responder {
    match project_db::insert_project(db.get_ref(), body.into_inner()).await {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create project: {e}"),
        })),
    }
}
