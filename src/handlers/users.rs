use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::freelancers as freelancer_db;
use crate::db::users as user_db;
use crate::models::freelancers::SaveFreelancer;
use crate::models::users::{CreateUser, UserResponse};

/// GET /users: list all users.
pub async fn get_users(db: web::Data<DatabaseConnection>) -> impl Responder {
    match user_db::get_all_users(db.get_ref()).await {
        Ok(users) => {
            let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch users: {e}"),
        })),
    }
}

/// GET /users/{id}: a single user with its freelancer profile.
pub async fn get_user(db: web::Data<DatabaseConnection>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();
    match user_db::get_user_by_id(db.get_ref(), id).await {
        Ok(Some((user, profile))) => HttpResponse::Ok().json(UserResponse::with_profile(user, profile)),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("User {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /users: create a user. A duplicate email fails on the unique index.
pub async fn create_user(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateUser>,
) -> impl Responder {
    match user_db::insert_user(db.get_ref(), body.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create user: {e}"),
        })),
    }
}

/// POST /users/freelancer: create or overwrite a user's freelancer profile.
pub async fn save_freelancer(
    db: web::Data<DatabaseConnection>,
    body: web::Json<SaveFreelancer>,
) -> impl Responder {
    let input = body.into_inner();
    let user_id = input.user_id;

    match user_db::get_user_by_id(db.get_ref(), user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("User {user_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match freelancer_db::save_freelancer(db.get_ref(), input).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to save freelancer profile: {e}"),
        })),
    }
}
