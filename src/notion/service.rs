use std::sync::Arc;

use tracing::{debug, warn};

use super::client::NotionApi;
use super::error::{NotionError, SyncError};
use super::format::{format_freelancer, format_project, format_user};
use super::properties::{PropertyMap, freelancer_properties, project_properties, user_properties};
use super::records::Page;
use super::types::{
    CreateNotionFreelancer, CreateNotionProject, CreateNotionUser, NotionFreelancer,
    NotionProject, NotionUser, Synced,
};
use super::Collection;

/// Sync and create operations over the three Notion databases.
///
/// Stateless apart from the API handle: every call is one or two round
/// trips and nothing is cached between calls.
#[derive(Clone)]
pub struct NotionService {
    api: Arc<dyn NotionApi>,
}

impl NotionService {
    pub fn new(api: Arc<dyn NotionApi>) -> Self {
        Self { api }
    }

    pub async fn test_connection(&self) -> Result<serde_json::Value, SyncError> {
        self.api
            .list_users()
            .await
            .map_err(SyncError::wrap("Notion API connection failed"))
    }

    pub async fn sync_users(&self) -> Result<Synced<NotionUser>, SyncError> {
        self.sync(Collection::Users, format_user)
            .await
            .map_err(SyncError::wrap("Failed to sync users from Notion"))
    }

    pub async fn sync_freelancers(&self) -> Result<Synced<NotionFreelancer>, SyncError> {
        self.sync(Collection::Freelancers, format_freelancer)
            .await
            .map_err(SyncError::wrap("Failed to sync freelancers from Notion"))
    }

    pub async fn sync_projects(&self) -> Result<Synced<NotionProject>, SyncError> {
        self.sync(Collection::Projects, format_project)
            .await
            .map_err(SyncError::wrap("Failed to sync projects from Notion"))
    }

    /// `Ok(None)` when no user has this id, including ids that are not numbers.
    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<NotionUser>, SyncError> {
        self.find(Collection::Users, id, format_user)
            .await
            .map_err(SyncError::wrap("Failed to get user from Notion"))
    }

    pub async fn get_freelancer_by_id(
        &self,
        id: &str,
    ) -> Result<Option<NotionFreelancer>, SyncError> {
        self.find(Collection::Freelancers, id, format_freelancer)
            .await
            .map_err(SyncError::wrap("Failed to get freelancer from Notion"))
    }

    pub async fn get_project_by_id(&self, id: &str) -> Result<Option<NotionProject>, SyncError> {
        self.find(Collection::Projects, id, format_project)
            .await
            .map_err(SyncError::wrap("Failed to get project from Notion"))
    }

    pub async fn create_user(&self, input: CreateNotionUser) -> Result<NotionUser, SyncError> {
        self.create(Collection::Users, user_properties(&input), format_user)
            .await
            .map_err(SyncError::wrap("Failed to create user in Notion"))
    }

    pub async fn create_freelancer(
        &self,
        input: CreateNotionFreelancer,
    ) -> Result<NotionFreelancer, SyncError> {
        debug!(title = ?input.title, user_id = ?input.user_id, "Creating freelancer in Notion");
        self.create(
            Collection::Freelancers,
            freelancer_properties(&input),
            format_freelancer,
        )
        .await
        .map_err(SyncError::wrap("Failed to create freelancer in Notion"))
    }

    pub async fn create_project(
        &self,
        input: CreateNotionProject,
    ) -> Result<NotionProject, SyncError> {
        self.create(Collection::Projects, project_properties(&input), format_project)
            .await
            .map_err(SyncError::wrap("Failed to create project in Notion"))
    }

    async fn sync<T>(
        &self,
        collection: Collection,
        format: fn(&Page) -> T,
    ) -> Result<Synced<T>, NotionError> {
        let response = self.api.query_all(collection).await?;
        if response.has_more {
            warn!(
                %collection,
                returned = response.results.len(),
                "Notion has more records than one query returns; the rest are not synced"
            );
        }
        Ok(Synced::from(
            response.results.iter().map(format).collect::<Vec<_>>(),
        ))
    }

    async fn find<T>(
        &self,
        collection: Collection,
        id: &str,
        format: fn(&Page) -> T,
    ) -> Result<Option<T>, NotionError> {
        let Some(numeric_id) = parse_numeric_id(id) else {
            // Notion matches nothing against a non-numeric id.
            debug!(%collection, id, "Non-numeric id, treating as not found");
            return Ok(None);
        };

        let response = self.api.query_by_id(collection, numeric_id).await?;
        Ok(response.results.first().map(format))
    }

    async fn create<T>(
        &self,
        collection: Collection,
        properties: PropertyMap,
        format: fn(&Page) -> T,
    ) -> Result<T, NotionError> {
        let page = self.api.create_page(collection, properties).await?;

        // Read back for the logs only; the create response is what gets returned.
        let check = self.api.retrieve_page(&page.id).await?;
        debug!(
            %collection,
            page_id = %check.id,
            properties = check.properties.len(),
            "Verified created Notion page"
        );

        Ok(format(&page))
    }
}

/// Leading-integer parse of a path id: optional whitespace and sign, then
/// decimal digits, or hex digits after a `0x` prefix. Anything after the
/// digits is ignored. `None` when there are no digits.
pub fn parse_numeric_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (radix, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let value = i64::from_str_radix(&rest[..end], radix).ok()?;
    Some(if negative { -value } else { value })
}
