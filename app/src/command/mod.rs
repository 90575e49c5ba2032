//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use prompts_config::Config;
use prompts_conversation::{Fulfillment, HttpFulfillment, LocalFulfillment};
use tracing::info;

mod chat;
mod credentials;
mod fulfill;
mod info;
mod init;
mod render;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use credentials::{CredentialsInput, CredentialsStrategy};
pub use fulfill::{FulfillInput, FulfillStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use render::{RenderInput, RenderStrategy};
pub use version::VersionStrategy;

/// Pick the in-process handlers or a deployed webhook.
///
/// An explicit URL wins over `simulator.webhook_url` from the config.
fn select_fulfillment(config: &Config, webhook_url: Option<String>) -> Box<dyn Fulfillment> {
    if let Some(url) = webhook_url.or_else(|| config.simulator.webhook_url.clone()) {
        return Box::new(HttpFulfillment::new(url));
    }
    info!("Using in-process fulfillment");
    Box::new(LocalFulfillment)
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, so
/// parameters are passed without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
