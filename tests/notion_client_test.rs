//! `NotionClient` against a local mock of the Notion REST API.
//!
//! The mock listens on an ephemeral port and checks the auth and version
//! headers the way Notion does, so these tests exercise real HTTP.
//!
//! Run with: `cargo test --test notion_client_test`
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

use hybrmatch_backend::config::{DatabaseIds, NotionConfig};
use hybrmatch_backend::notion::properties::freelancer_properties;
use hybrmatch_backend::notion::types::CreateNotionFreelancer;
use hybrmatch_backend::notion::{Collection, NotionApi, NotionClient, NotionError, NotionService};

const TEST_KEY: &str = "secret_test_key";

#[derive(Default)]
struct Recorded {
    bodies: Mutex<Vec<(String, Value)>>,
}

fn authorized(req: &HttpRequest) -> Option<HttpResponse> {
    let expected = format!("Bearer {TEST_KEY}");
    let auth = req.headers().get("Authorization").and_then(|v| v.to_str().ok());
    if auth != Some(expected.as_str()) {
        return Some(HttpResponse::Unauthorized().json(json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })));
    }
    if req.headers().get("Notion-Version").is_none() {
        return Some(HttpResponse::BadRequest().json(json!({
            "object": "error",
            "status": 400,
            "code": "missing_version",
            "message": "Notion-Version header failed validation."
        })));
    }
    None
}

fn user_row(number: i64, email: &str) -> Value {
    json!({
        "object": "page",
        "id": format!("page-{number}"),
        "properties": {
            "ID": { "id": "a", "type": "unique_id", "unique_id": { "prefix": null, "number": number } },
            "Email": { "id": "title", "type": "title",
                       "title": [{ "type": "text", "text": { "content": email }, "plain_text": email }] }
        }
    })
}

async fn query(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<Value>,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    if let Some(rejection) = authorized(&req) {
        return rejection;
    }
    let database_id = path.into_inner();
    recorded
        .bodies
        .lock()
        .unwrap()
        .push((format!("query:{database_id}"), body.0.clone()));

    if database_id != "users-db" {
        return HttpResponse::NotFound().json(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": format!("Could not find database with ID: {database_id}.")
        }));
    }

    let rows = vec![user_row(1, "a@example.com"), user_row(2, "b@example.com")];
    let results: Vec<Value> = match body.0["filter"]["unique_id"]["equals"].as_i64() {
        Some(wanted) => rows
            .into_iter()
            .filter(|r| r["properties"]["ID"]["unique_id"]["number"].as_i64() == Some(wanted))
            .collect(),
        None => rows,
    };

    HttpResponse::Ok().json(json!({
        "object": "list",
        "results": results,
        "has_more": false,
        "next_cursor": null
    }))
}

async fn create_page(
    req: HttpRequest,
    body: web::Json<Value>,
    recorded: web::Data<Recorded>,
) -> HttpResponse {
    if let Some(rejection) = authorized(&req) {
        return rejection;
    }
    recorded
        .bodies
        .lock()
        .unwrap()
        .push(("create".to_string(), body.0.clone()));

    HttpResponse::Ok().json(json!({
        "object": "page",
        "id": "new-page",
        "properties": {
            "ID": { "id": "a", "type": "unique_id", "unique_id": { "prefix": null, "number": 9 } },
            "Title": { "id": "title", "type": "title",
                       "title": [{ "type": "text", "text": { "content": "Untitled" }, "plain_text": "Untitled" }] }
        }
    }))
}

async fn retrieve_page(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if let Some(rejection) = authorized(&req) {
        return rejection;
    }
    HttpResponse::Ok().json(json!({ "object": "page", "id": path.into_inner(), "properties": {} }))
}

async fn list_users(req: HttpRequest) -> HttpResponse {
    if let Some(rejection) = authorized(&req) {
        return rejection;
    }
    HttpResponse::Ok().json(json!({ "object": "list", "results": [], "has_more": false }))
}

async fn broken() -> HttpResponse {
    HttpResponse::BadGateway().body("upstream exploded")
}

fn start_mock() -> (SocketAddr, Arc<Recorded>) {
    let recorded = web::Data::new(Recorded::default());
    let shared = recorded.clone().into_inner();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(recorded.clone())
            .route("/v1/users", web::get().to(list_users))
            .route("/v1/databases/{id}/query", web::post().to(query))
            .route("/v1/pages", web::post().to(create_page))
            .route("/v1/pages/{id}", web::get().to(retrieve_page))
            .route("/broken/users", web::get().to(broken))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock server");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (addr, shared)
}

fn config(base: String, api_key: &str) -> NotionConfig {
    NotionConfig {
        api_key: api_key.to_string(),
        api_url: base,
        version: "2022-06-28".to_string(),
        timeout: None,
        databases: DatabaseIds {
            users: "users-db".to_string(),
            freelancers: "freelancers-db".to_string(),
            projects: "projects-db".to_string(),
        },
    }
}

#[actix_web::test]
async fn test_query_all_returns_raw_pages() {
    let (addr, recorded) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1"), TEST_KEY)).unwrap();

    let response = client.query_all(Collection::Users).await.unwrap();

    assert_eq!(response.results.len(), 2);
    assert!(!response.has_more);
    assert_eq!(response.results[0].properties.unique_id("ID"), Some(1));

    let bodies = recorded.bodies.lock().unwrap();
    assert_eq!(bodies[0], ("query:users-db".to_string(), json!({})));
}

#[actix_web::test]
async fn test_query_by_id_sends_unique_id_filter() {
    let (addr, recorded) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1/"), TEST_KEY)).unwrap();

    let response = client.query_by_id(Collection::Users, 2).await.unwrap();

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].id, "page-2");
    let bodies = recorded.bodies.lock().unwrap();
    assert_eq!(
        bodies[0].1,
        json!({ "filter": { "property": "ID", "unique_id": { "equals": 2 } } })
    );
}

#[actix_web::test]
async fn test_api_error_carries_notion_message() {
    let (addr, _) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1"), TEST_KEY)).unwrap();

    let err = client.query_all(Collection::Projects).await.unwrap_err();

    match &err {
        NotionError::Api { status, code, message } => {
            assert_eq!(*status, 404);
            assert_eq!(code, "object_not_found");
            assert_eq!(message, "Could not find database with ID: projects-db.");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Could not find database with ID: projects-db.");
}

#[actix_web::test]
async fn test_wrong_key_surfaces_through_service() {
    let (addr, _) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1"), "wrong")).unwrap();
    let notion = NotionService::new(Arc::new(client));

    let err = notion.sync_users().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to sync users from Notion: API token is invalid."
    );
}

#[actix_web::test]
async fn test_non_json_error_body_reports_status() {
    let (addr, _) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/broken"), TEST_KEY)).unwrap();

    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, NotionError::Api { status: 502, .. }));
    assert_eq!(err.to_string(), "HTTP 502 Bad Gateway");
}

#[actix_web::test]
async fn test_create_page_posts_parent_and_properties() {
    let (addr, recorded) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1"), TEST_KEY)).unwrap();
    let properties = freelancer_properties(&CreateNotionFreelancer::default());

    let page = client
        .create_page(Collection::Freelancers, properties)
        .await
        .unwrap();
    assert_eq!(page.id, "new-page");

    let bodies = recorded.bodies.lock().unwrap();
    let (kind, body) = &bodies[0];
    assert_eq!(kind, "create");
    assert_eq!(body["parent"], json!({ "database_id": "freelancers-db" }));
    assert_eq!(
        body["properties"]["Title"],
        json!({ "title": [{ "text": { "content": "Untitled" } }] })
    );
}

#[actix_web::test]
async fn test_service_create_runs_verification_read() {
    let (addr, _) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1"), TEST_KEY)).unwrap();
    let notion = NotionService::new(Arc::new(client));

    let freelancer = notion
        .create_freelancer(CreateNotionFreelancer::default())
        .await
        .unwrap();

    assert_eq!(freelancer.id, 9);
    assert_eq!(freelancer.title, "Untitled");
}

#[actix_web::test]
async fn test_list_users_returns_raw_json() {
    let (addr, _) = start_mock();
    let client = NotionClient::new(config(format!("http://{addr}/v1"), TEST_KEY)).unwrap();

    let members = client.list_users().await.unwrap();
    assert_eq!(members["object"], json!("list"));
}
