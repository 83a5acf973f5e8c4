/// Failure talking to the Notion API.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. Displays only Notion's own message.
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("unexpected response from Notion: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A [`NotionError`] wrapped with the operation that failed, e.g.
/// `Failed to sync users from Notion: <downstream message>`.
#[derive(Debug, thiserror::Error)]
#[error("{context}: {source}")]
pub struct SyncError {
    pub context: &'static str,
    #[source]
    pub source: NotionError,
}

impl SyncError {
    pub fn wrap(context: &'static str) -> impl FnOnce(NotionError) -> SyncError {
        move |source| SyncError { context, source }
    }
}
