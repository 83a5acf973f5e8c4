use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

use crate::notion::NotionService;
use crate::notion::SyncError;
use crate::notion::types::{CreateNotionFreelancer, CreateNotionProject, CreateNotionUser};

fn sync_failed(e: SyncError) -> HttpResponse {
    tracing::error!("{e}");
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": e.to_string(),
    }))
}

fn found_or_404<T: Serialize>(
    result: Result<Option<T>, SyncError>,
    kind: &str,
    id: &str,
) -> HttpResponse {
    match result {
        Ok(Some(record)) => HttpResponse::Ok().json(record),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("{kind} with ID {id} not found"),
        })),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/test: list workspace members to check the API key.
pub async fn test_connection(notion: web::Data<NotionService>) -> impl Responder {
    match notion.test_connection().await {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/users: every row of the Users database.
pub async fn get_users(notion: web::Data<NotionService>) -> impl Responder {
    match notion.sync_users().await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/users/{id}
pub async fn get_user(notion: web::Data<NotionService>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    found_or_404(notion.get_user_by_id(&id).await, "User", &id)
}

/// POST /notion/users
pub async fn create_user(
    notion: web::Data<NotionService>,
    body: web::Json<CreateNotionUser>,
) -> impl Responder {
    match notion.create_user(body.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/freelancers
pub async fn get_freelancers(notion: web::Data<NotionService>) -> impl Responder {
    match notion.sync_freelancers().await {
        Ok(freelancers) => HttpResponse::Ok().json(freelancers),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/freelancers/{id}
pub async fn get_freelancer(
    notion: web::Data<NotionService>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    found_or_404(notion.get_freelancer_by_id(&id).await, "Freelancer", &id)
}

/// POST /notion/freelancers
pub async fn create_freelancer(
    notion: web::Data<NotionService>,
    body: web::Json<CreateNotionFreelancer>,
) -> impl Responder {
    match notion.create_freelancer(body.into_inner()).await {
        Ok(freelancer) => HttpResponse::Created().json(freelancer),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/projects
pub async fn get_projects(notion: web::Data<NotionService>) -> impl Responder {
    match notion.sync_projects().await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => sync_failed(e),
    }
}

/// GET /notion/projects/{id}
pub async fn get_project(
    notion: web::Data<NotionService>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();
    found_or_404(notion.get_project_by_id(&id).await, "Project", &id)
}

/// POST /notion/projects
pub async fn create_project(
    notion: web::Data<NotionService>,
    body: web::Json<CreateNotionProject>,
) -> impl Responder {
    match notion.create_project(body.into_inner()).await {
        Ok(project) => HttpResponse::Created().json(project),
        Err(e) => sync_failed(e),
    }
}
