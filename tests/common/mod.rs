#![allow(dead_code)]
//! Shared fixtures: Notion-shaped page JSON and an in-memory `NotionApi`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use hybrmatch_backend::models::freelancers::{self, Skills};
use hybrmatch_backend::models::users::{self, UserRole};
use hybrmatch_backend::notion::properties::PropertyMap;
use hybrmatch_backend::notion::{Collection, Filter, NotionApi, NotionError, Page, QueryResponse};

pub fn page(id: &str, properties: Value) -> Page {
    serde_json::from_value(json!({
        "object": "page",
        "id": id,
        "created_time": "2024-03-01T10:00:00.000Z",
        "properties": properties,
    }))
    .expect("fixture page should parse")
}

pub fn unique_id(number: i64) -> Value {
    json!({ "id": "id", "type": "unique_id", "unique_id": { "prefix": null, "number": number } })
}

pub fn title(text: &str) -> Value {
    json!({
        "id": "title",
        "type": "title",
        "title": [{
            "type": "text",
            "text": { "content": text, "link": null },
            "plain_text": text,
            "href": null
        }]
    })
}

pub fn rich_text(text: &str) -> Value {
    json!({
        "id": "rt",
        "type": "rich_text",
        "rich_text": [{
            "type": "text",
            "text": { "content": text, "link": null },
            "plain_text": text,
            "href": null
        }]
    })
}

pub fn number(value: f64) -> Value {
    json!({ "id": "num", "type": "number", "number": value })
}

pub fn relation(ids: &[&str]) -> Value {
    let relation: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({ "id": "rel", "type": "relation", "relation": relation, "has_more": false })
}

pub fn user_page(id: i64, email: &str) -> Page {
    page(
        &format!("user-page-{id}"),
        json!({
            "ID": unique_id(id),
            "Email": title(email),
            "Full Name": {
                "id": "fn",
                "type": "people",
                "people": [{ "object": "user", "id": "u-1", "name": "Lan Nguyen", "type": "person",
                             "person": { "email": email } }]
            },
            "Password": rich_text("s3cret"),
            "Role": { "id": "r", "type": "select", "select": { "id": "s", "name": "FREELANCER", "color": "blue" } },
            "Phone Number": { "id": "p", "type": "phone_number", "phone_number": "+84 912 345 678" },
            "Profile": {
                "id": "f",
                "type": "files",
                "files": [{ "name": "Profile Picture", "type": "external",
                            "external": { "url": "https://cdn.example.com/lan.png" } }]
            },
            "Created At": { "id": "c", "type": "created_time", "created_time": "2024-03-01T10:00:00.000Z" },
            "Freelancer Profile": relation(&["freelancer-page-1"]),
        }),
    )
}

pub fn freelancer_page(id: i64, title_text: &str, skills: &[&str]) -> Page {
    let options: Vec<Value> = skills
        .iter()
        .map(|s| json!({ "id": s, "name": s, "color": "default" }))
        .collect();
    page(
        &format!("freelancer-page-{id}"),
        json!({
            "ID": unique_id(id),
            "User ID": rich_text("user-page-1"),
            "Title": title(title_text),
            "Skills": { "id": "sk", "type": "multi_select", "multi_select": options },
            "Rating": number(4.5),
            "Linkedin": { "id": "l", "type": "url", "url": "https://linkedin.com/in/lan" },
            "Projects": relation(&["project-page-1", "project-page-2"]),
        }),
    )
}

pub fn project_page(id: i64, title_text: &str, status: &str) -> Page {
    page(
        &format!("project-page-{id}"),
        json!({
            "ID": unique_id(id),
            "Title": title(title_text),
            "Budget": number(1500.0),
            "Review Score": number(4.0),
            "Timeline": { "id": "t", "type": "date",
                          "date": { "start": "2024-04-01", "end": "2024-05-15T17:00:00.000+07:00", "time_zone": null } },
            "Status": { "id": "st", "type": "status", "status": { "id": "x", "name": status, "color": "blue" } },
            "Client": {
                "id": "cl",
                "type": "people",
                "people": [{ "object": "user", "id": "u-2", "name": "Client", "type": "person",
                             "person": { "email": "client@example.com" } }]
            },
            "Freelancers": relation(&["freelancer-page-1"]),
        }),
    )
}

/// What Notion would send back for a page created with `properties`: every
/// property gets its `type` tag, text runs carry only `text.content`.
pub fn echo_properties(properties: &PropertyMap) -> Value {
    let mut echoed = serde_json::Map::new();
    let written = serde_json::to_value(properties).expect("properties serialise");
    for (name, value) in written.as_object().expect("object").iter() {
        let mut value = value.as_object().expect("property object").clone();
        // A block whose only value was omitted (e.g. `{"number": None}`) has no key.
        let Some(kind) = value.keys().next().cloned() else {
            continue;
        };
        value.insert("type".to_string(), Value::String(kind));
        echoed.insert(name.clone(), Value::Object(value));
    }
    Value::Object(echoed)
}

// ── Relational rows ──

pub fn user_model(id: i32, email: &str) -> users::Model {
    users::Model {
        id,
        email: email.to_string(),
        password: "hashed".to_string(),
        role: UserRole::Freelancer,
        full_name: "Lan Nguyen".to_string(),
        phone_number: None,
        profile_url: None,
        created_at: chrono::DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .expect("fixture timestamp")
            .to_utc(),
    }
}

pub fn freelancer_model(user_id: i32, title: &str) -> freelancers::Model {
    freelancers::Model {
        user_id,
        title: title.to_string(),
        hourly_rate: 45.0,
        exp_years: 5,
        rating: 0.0,
        total_projects: 0,
        skills: Skills(vec!["Rust".to_string(), "SQL".to_string()]),
        linkedin_url: None,
    }
}

/// In-memory stand-in for the Notion API.
#[derive(Default)]
pub struct FakeNotion {
    pub pages: HashMap<Collection, Vec<Page>>,
    pub has_more: bool,
    pub fail_with: Option<String>,
    pub fail_retrieve: bool,
    pub queries: Mutex<Vec<(Collection, Option<Filter>)>>,
    pub created: Mutex<Vec<(Collection, Value)>>,
    pub retrieved: Mutex<Vec<String>>,
}

impl FakeNotion {
    pub fn with_pages(collection: Collection, pages: Vec<Page>) -> Self {
        let mut fake = Self::default();
        fake.pages.insert(collection, pages);
        fake
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), NotionError> {
        match &self.fail_with {
            Some(message) => Err(NotionError::Api {
                status: 502,
                code: "internal_server_error".to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NotionApi for FakeNotion {
    async fn list_users(&self) -> Result<Value, NotionError> {
        self.check()?;
        Ok(json!({ "object": "list", "results": [{ "object": "user", "id": "u-1" }] }))
    }

    async fn query_database(
        &self,
        collection: Collection,
        filter: Option<Filter>,
    ) -> Result<QueryResponse, NotionError> {
        self.queries.lock().unwrap().push((collection, filter.clone()));
        self.check()?;

        let pages = self.pages.get(&collection).cloned().unwrap_or_default();
        let results = match filter {
            Some(filter) => pages
                .into_iter()
                .filter(|p| p.properties.unique_id(&filter.property) == Some(filter.unique_id.equals))
                .collect(),
            None => pages,
        };

        Ok(QueryResponse {
            results,
            has_more: self.has_more,
        })
    }

    async fn create_page(
        &self,
        collection: Collection,
        properties: PropertyMap,
    ) -> Result<Page, NotionError> {
        self.check()?;
        let echoed = echo_properties(&properties);
        let mut created = self.created.lock().unwrap();
        created.push((collection, echoed.clone()));
        Ok(page(&format!("created-{}", created.len()), echoed))
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.retrieved.lock().unwrap().push(page_id.to_string());
        if self.fail_retrieve {
            return Err(NotionError::Api {
                status: 404,
                code: "object_not_found".to_string(),
                message: format!("Could not find page with ID: {page_id}."),
            });
        }
        Ok(page(page_id, json!({})))
    }
}
