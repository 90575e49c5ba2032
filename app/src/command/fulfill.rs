use std::path::PathBuf;

use tokio::io::AsyncReadExt;
use tracing::info;

/// Input for answering one webhook request.
#[derive(Debug, Clone)]
pub struct FulfillInput {
    /// Request body file; stdin when `None`
    pub input: Option<PathBuf>,
}

/// Strategy that reads a platform webhook request and prints the reply.
///
/// This is the same request/response cycle a hosting layer would run per
/// turn, without the HTTP server around it.
#[derive(Debug, Clone, Copy)]
pub struct FulfillStrategy;

impl super::CommandStrategy for FulfillStrategy {
    type Input = FulfillInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let body = if let Some(path) = input.input {
            info!("Reading webhook request from {}", path.display());
            tokio::fs::read_to_string(&path).await?
        } else {
            let mut body = String::new();
            tokio::io::stdin().read_to_string(&mut body).await?;
            body
        };

        println!("{}", prompts_core::fulfill_json(&body)?);
        Ok(())
    }
}
