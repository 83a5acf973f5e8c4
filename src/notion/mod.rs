//! Mirror of the Users, Freelancers and Projects Notion databases.
//!
//! Data flows `NotionService` → `NotionApi` (network) → [`Page`] → `format_*`
//! → typed records. Creates run the other way through the property builders in
//! [`properties`].

pub mod client;
pub mod error;
pub mod fields;
pub mod format;
pub mod properties;
pub mod records;
pub mod service;
pub mod types;

use std::fmt;

pub use client::{Filter, NotionApi, NotionClient};
pub use error::{NotionError, SyncError};
pub use records::{Page, QueryResponse};
pub use service::NotionService;

/// One of the three mirrored Notion databases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Freelancers,
    Projects,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Users => "users",
            Self::Freelancers => "freelancers",
            Self::Projects => "projects",
        })
    }
}
