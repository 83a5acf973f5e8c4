use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::NotionError;
use super::fields;
use super::properties::PropertyMap;
use super::records::{Page, QueryResponse};
use super::Collection;
use crate::config::NotionConfig;

const NOTION_VERSION_HEADER: &str = "Notion-Version";

/// Equality filter on a `unique_id` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub property: String,
    pub unique_id: Equals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equals {
    pub equals: i64,
}

impl Filter {
    pub fn unique_id(property: &str, equals: i64) -> Self {
        Self {
            property: property.to_string(),
            unique_id: Equals { equals },
        }
    }
}

/// The Notion operations this service consumes.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// List workspace members. Used only to check connectivity.
    async fn list_users(&self) -> Result<serde_json::Value, NotionError>;

    async fn query_database(
        &self,
        collection: Collection,
        filter: Option<Filter>,
    ) -> Result<QueryResponse, NotionError>;

    async fn create_page(
        &self,
        collection: Collection,
        properties: PropertyMap,
    ) -> Result<Page, NotionError>;

    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError>;

    /// Every record of a collection (first result page only).
    async fn query_all(&self, collection: Collection) -> Result<QueryResponse, NotionError> {
        self.query_database(collection, None).await
    }

    /// Records whose `ID` equals `id`: zero or one.
    async fn query_by_id(
        &self,
        collection: Collection,
        id: i64,
    ) -> Result<QueryResponse, NotionError> {
        self.query_database(collection, Some(Filter::unique_id(fields::ID, id)))
            .await
    }
}

/// HTTP client for the Notion REST API.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    config: NotionConfig,
}

#[derive(Serialize)]
struct QueryBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Filter>,
}

#[derive(Serialize)]
struct CreatePageBody<'a> {
    parent: Parent<'a>,
    properties: &'a PropertyMap,
}

#[derive(Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl NotionClient {
    pub fn new(config: NotionConfig) -> Result<Self, NotionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{path}", self.config.api_url.trim_end_matches('/'));
        debug!("Notion request: {method} {url}");

        self.http
            .request(method, url)
            .bearer_auth(&self.config.api_key)
            .header(NOTION_VERSION_HEADER, &self.config.version)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NotionError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) if !body.message.is_empty() => (body.code, body.message),
                _ => (String::new(), format!("HTTP {status}")),
            };
            return Err(NotionError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl NotionApi for NotionClient {
    async fn list_users(&self) -> Result<serde_json::Value, NotionError> {
        self.send(self.request(Method::GET, "users")).await
    }

    async fn query_database(
        &self,
        collection: Collection,
        filter: Option<Filter>,
    ) -> Result<QueryResponse, NotionError> {
        let database_id = self.config.databases.get(collection);
        let request = self
            .request(Method::POST, &format!("databases/{database_id}/query"))
            .json(&QueryBody { filter });
        self.send(request).await
    }

    async fn create_page(
        &self,
        collection: Collection,
        properties: PropertyMap,
    ) -> Result<Page, NotionError> {
        let body = CreatePageBody {
            parent: Parent {
                database_id: self.config.databases.get(collection),
            },
            properties: &properties,
        };
        let request = self.request(Method::POST, "pages").json(&body);
        self.send(request).await
    }

    async fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.send(self.request(Method::GET, &format!("pages/{page_id}")))
            .await
    }
}
