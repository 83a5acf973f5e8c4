use std::env;
use std::time::Duration;

use crate::notion::Collection;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub notion: NotionConfig,
}

/// Everything the Notion client needs. Moved into the client at construction
/// and never changed afterwards.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub api_key: String,
    pub api_url: String,
    pub version: String,
    pub timeout: Option<Duration>,
    pub databases: DatabaseIds,
}

/// Ids of the three Notion databases mirrored by this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseIds {
    pub users: String,
    pub freelancers: String,
    pub projects: String,
}

impl DatabaseIds {
    pub fn get(&self, collection: Collection) -> &str {
        match collection {
            Collection::Users => &self.users,
            Collection::Freelancers => &self.freelancers,
            Collection::Projects => &self.projects,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port: parse_or("PORT", 8080)?,
            notion: NotionConfig::from_env()?,
        })
    }
}

impl NotionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout = match env::var("NOTION_TIMEOUT_SECS") {
            Ok(value) => Some(Duration::from_secs(value.parse().map_err(|_| {
                ConfigError::Invalid {
                    var: "NOTION_TIMEOUT_SECS",
                    value,
                }
            })?)),
            Err(_) => None,
        };

        Ok(Self {
            api_key: required("NOTION_API_KEY")?,
            api_url: env::var("NOTION_API_URL")
                .unwrap_or_else(|_| DEFAULT_NOTION_API_URL.to_string()),
            version: env::var("NOTION_VERSION")
                .unwrap_or_else(|_| DEFAULT_NOTION_VERSION.to_string()),
            timeout,
            databases: DatabaseIds {
                users: required("NOTION_USER_DATABASE_ID")?,
                freelancers: required("NOTION_FREELANCER_DATABASE_ID")?,
                projects: required("NOTION_PROJECT_DATABASE_ID")?,
            },
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_or<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
