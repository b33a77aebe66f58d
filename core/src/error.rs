//! Error type shared by the loaders, request builders, and command dispatch.
//!
//! The layout engine itself cannot fail; everything here comes from reading
//! documents, parsing settings, or validating request text.

use std::path::PathBuf;


#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("timeline '{0}' not found in question tree")]
    TimelineNotFound(String),
}


pub type Result<T> = std::result::Result<T, Error>;
