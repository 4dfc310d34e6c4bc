use thiserror::Error;

/// Failure categories surfaced by the core.
///
/// Fetch and parse failures are per-source and non-fatal: a bulk menu
/// refresh skips the offending source and carries on. Storage failures
/// abort the single operation that hit them; the transaction has already
/// rolled back by the time the error reaches the caller. Validation
/// failures are rejected before any storage access.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected page structure for {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("storage operation failed")]
    Storage(#[from] rusqlite::Error),

    #[error("{0}")]
    Validation(String),

    #[error("database worker unavailable")]
    WorkerGone,
}

pub type Result<T> = std::result::Result<T, Error>;
