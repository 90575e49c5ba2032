use std::io::Write;
use std::path::PathBuf;

use prompts_config::Config;
use prompts_credentials::{Credentials, InstalledApp, OAuthClient, OAuthSettings};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Input for generating test credentials.
#[derive(Debug, Clone)]
pub struct CredentialsInput {
    /// Downloaded OAuth client secret (`installed` app type)
    pub client_secret: PathBuf,
    /// Where the `authorized_user` credentials are written
    pub output: PathBuf,
}

/// Strategy that runs the interactive authorization code flow.
#[derive(Debug, Clone, Copy)]
pub struct CredentialsStrategy;

fn oauth_settings(config: &Config) -> OAuthSettings {
    OAuthSettings {
        scopes: config.credentials.scopes.clone(),
        redirect_uri: config.credentials.redirect_uri.clone(),
        auth_uri: config.credentials.auth_uri.clone(),
        token_uri: config.credentials.token_uri.clone(),
    }
}

async fn read_authorization_code() -> anyhow::Result<String> {
    print!("Authorization code: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    let code = line.trim().to_string();
    if code.is_empty() {
        anyhow::bail!("No authorization code entered");
    }
    Ok(code)
}

impl super::CommandStrategy for CredentialsStrategy {
    type Input = CredentialsInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let app = InstalledApp::from_file(&input.client_secret).await?;
        info!("Loaded OAuth client {}", app.client_id);

        let client = OAuthClient::new(app, oauth_settings(&config));
        println!("Reading data for project \"{}\"", client.app().project_id);
        println!("Please go to the following link to authorize, then copy the code below");
        println!("{}", client.authorization_url()?);

        let code = read_authorization_code().await?;
        let refresh_token = client.exchange_code(&code).await?;

        Credentials::authorized_user(client.app(), refresh_token)
            .write(&input.output)
            .await?;

        println!("Saved user credentials in \"{}\"", input.output.display());
        println!("You are now ready to run tests");
        println!("Make sure you DO NOT commit this file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_settings_from_config() {
        let settings = oauth_settings(&Config::default());
        assert_eq!(settings.redirect_uri, "urn:ietf:wg:oauth:2.0:oob");
        assert_eq!(
            settings.scopes,
            vec!["https://www.googleapis.com/auth/actions.builder"]
        );
    }
}
