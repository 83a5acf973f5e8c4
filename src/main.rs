use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use hybrmatch_backend::config::Config;
use hybrmatch_backend::create_pool;
use hybrmatch_backend::handlers;
use hybrmatch_backend::notion::{NotionClient, NotionService};
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let db = create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");
    let db_data = web::Data::new(db);

    let notion_client =
        NotionClient::new(config.notion.clone()).expect("Failed to build Notion client");
    let notion_data = web::Data::new(NotionService::new(Arc::new(notion_client)));
    tracing::info!("Notion client configured for {}", config.notion.api_url);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(notion_data.clone())
            .configure(handlers::init_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
