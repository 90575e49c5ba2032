//! Installed-app authorization code flow.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::info;
use url::Url;
use url::form_urlencoded::Serializer;

use crate::secret::InstalledApp;
use crate::{CredentialsError, Result};

/// Endpoints and scopes for the authorization request.
#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub scopes: Vec<String>,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    refresh_token: Option<String>,
}

pub struct OAuthClient {
    client: Client,
    app: InstalledApp,
    settings: OAuthSettings,
}

impl OAuthClient {
    /// Endpoints from the client secret take precedence over `settings`.
    #[must_use]
    pub fn new(app: InstalledApp, mut settings: OAuthSettings) -> Self {
        if let Some(auth_uri) = app.auth_uri.clone() {
            settings.auth_uri = auth_uri;
        }
        if let Some(token_uri) = app.token_uri.clone() {
            settings.token_uri = token_uri;
        }
        Self {
            client: Client::new(),
            app,
            settings,
        }
    }

    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    #[must_use]
    pub const fn app(&self) -> &InstalledApp {
        &self.app
    }

    /// URL the operator opens to grant offline access.
    pub fn authorization_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.settings.auth_uri)?;
        url.query_pairs_mut()
            .append_pair("access_type", "offline")
            .append_pair("scope", &self.settings.scopes.join(" "))
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.app.client_id)
            .append_pair("redirect_uri", &self.settings.redirect_uri);
        Ok(url)
    }

    /// Exchange an authorization code for a refresh token.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let body = Serializer::new(String::new())
            .append_pair("code", code.trim())
            .append_pair("client_id", &self.app.client_id)
            .append_pair("client_secret", &self.app.client_secret)
            .append_pair("redirect_uri", &self.settings.redirect_uri)
            .append_pair("grant_type", "authorization_code")
            .finish();

        info!("Exchanging authorization code at {}", self.settings.token_uri);
        let response = self
            .client
            .post(&self.settings.token_uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(CredentialsError::TokenRejected(format!("{status}: {detail}")));
        }

        response
            .json::<TokenResponse>()
            .await?
            .refresh_token
            .ok_or(CredentialsError::MissingRefreshToken)
    }
}
