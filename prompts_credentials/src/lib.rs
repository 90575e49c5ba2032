#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Test credentials for driving an Action through the testing API.
//!
//! Reads a downloaded OAuth client secret, walks the operator through the
//! authorization code flow, and writes an `authorized_user` credentials file.

mod error;
mod oauth;
mod secret;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use error::{CredentialsError, Result};
pub use oauth::{OAuthClient, OAuthSettings};
pub use secret::InstalledApp;

/// Contents of the generated credentials file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Credentials {
    #[must_use]
    pub fn authorized_user(app: &InstalledApp, refresh_token: String) -> Self {
        Self {
            client_id: app.client_id.clone(),
            client_secret: app.client_secret.clone(),
            refresh_token,
            kind: "authorized_user".to_string(),
        }
    }

    pub async fn write(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string(self).map_err(CredentialsError::Encode)?;
        tokio::fs::write(path, data)
            .await
            .map_err(|e| CredentialsError::io(path, e))?;
        info!("Saved user credentials in {}", path.display());
        Ok(())
    }
}
