use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CredentialsError>;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Client secret is not valid JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error(
        "Missing required '{0}' field in the provided client secret file. Download an OAuth client of type \"Desktop app\" and try again."
    )]
    MissingField(&'static str),

    #[error("Unable to encode credentials: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Unable to access \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid OAuth endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Token request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token endpoint rejected the authorization code: {0}")]
    TokenRejected(String),

    #[error("Token response did not include a refresh token")]
    MissingRefreshToken,
}

impl CredentialsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
