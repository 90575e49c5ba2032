use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{CredentialsError, Result};

/// The `installed` section of a downloaded OAuth client secret.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InstalledApp {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub auth_uri: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClientSecretFile {
    installed: Option<serde_json::Value>,
}

impl InstalledApp {
    pub fn from_json(content: &str) -> Result<Self> {
        let file: ClientSecretFile = serde_json::from_str(content)?;
        let installed = file
            .installed
            .ok_or(CredentialsError::MissingField("installed"))?;
        Ok(serde_json::from_value(installed)?)
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading client secret from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CredentialsError::io(path, e))?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_installed() {
        let app = InstalledApp::from_json(
            r#"{"installed": {
                "client_id": "id.apps.googleusercontent.com",
                "project_id": "demo-123",
                "auth_uri": "https://accounts.google.com/o/oauth2/auth",
                "token_uri": "https://oauth2.googleapis.com/token",
                "client_secret": "shh",
                "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob", "http://localhost"]
            }}"#,
        )
        .unwrap();
        assert_eq!(app.client_id, "id.apps.googleusercontent.com");
        assert_eq!(app.client_secret, "shh");
        assert_eq!(app.project_id, "demo-123");
        assert_eq!(
            app.token_uri.as_deref(),
            Some("https://oauth2.googleapis.com/token")
        );
    }

    #[test]
    fn test_missing_installed() {
        let err = InstalledApp::from_json(r#"{"web": {"client_id": "x"}}"#).unwrap_err();
        assert!(matches!(err, CredentialsError::MissingField("installed")));
    }

    #[test]
    fn test_malformed_json() {
        let err = InstalledApp::from_json("{installed").unwrap_err();
        assert!(matches!(err, CredentialsError::MalformedInput(_)));
    }

    #[test]
    fn test_installed_without_client_id() {
        let err = InstalledApp::from_json(r#"{"installed": {"client_secret": "x"}}"#).unwrap_err();
        assert!(matches!(err, CredentialsError::MalformedInput(_)));
    }

    #[tokio::test]
    async fn test_from_missing_file() {
        let err = InstalledApp::from_file(Path::new("/nonexistent/client_secret.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CredentialsError::Io { .. }));
    }
}
