pub mod notion;
pub mod projects;
pub mod users;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── User routes (relational store) ──
    cfg.service(
        web::resource("/users")
            .route(web::get().to(users::get_users))
            .route(web::post().to(users::create_user)),
    );
    // Registered before `/users/{id}` so the literal segment wins.
    cfg.service(
        web::resource("/users/freelancer").route(web::post().to(users::save_freelancer)),
    );
    cfg.service(web::resource("/users/{id}").route(web::get().to(users::get_user)));

    // ── Project routes (relational store) ──
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::get_projects))
            .route("", web::post().to(projects::create_project))
            .route("/{id}", web::get().to(projects::get_project)),
    );

    // ── Notion mirror routes ──
    cfg.service(
        web::scope("/notion")
            .route("/test", web::get().to(notion::test_connection))
            .route("/users", web::get().to(notion::get_users))
            .route("/users", web::post().to(notion::create_user))
            .route("/users/{id}", web::get().to(notion::get_user))
            .route("/freelancers", web::get().to(notion::get_freelancers))
            .route("/freelancers", web::post().to(notion::create_freelancer))
            .route("/freelancers/{id}", web::get().to(notion::get_freelancer))
            .route("/projects", web::get().to(notion::get_projects))
            .route("/projects", web::post().to(notion::create_project))
            .route("/projects/{id}", web::get().to(notion::get_project)),
    );
}
