use reqwest::StatusCode;
use thiserror::Error;

/// Failure classification for a weather lookup.
///
/// Only two kinds exist: the upstream explicitly rejected the request
/// (usually an unknown city), or something else went wrong on the way.
/// Both are handled inside [`crate::lookup`] and never reach the chat loop
/// as faults.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The weather API answered with a non-success HTTP status.
    #[error("weather API rejected the city (status {status})")]
    UnknownCity { status: StatusCode },

    /// Network fault, unreadable body, JSON parse failure, anything else.
    #[error("weather API request failed")]
    Upstream(#[source] anyhow::Error),
}
