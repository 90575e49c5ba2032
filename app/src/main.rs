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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    ChatInput, ChatStrategy, CommandStrategy, CredentialsInput, CredentialsStrategy, FulfillInput,
    FulfillStrategy, InfoStrategy, InitStrategy, RenderInput, RenderStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "prompts")]
#[command(about = "Sample conversational prompts webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the Action through the conversation simulator
    Chat {
        /// Queries to send after the invocation phrase (interactive if omitted)
        #[arg(short = 'm', long = "message")]
        messages: Vec<String>,

        /// Surface to simulate (`PHONE`, `SMART_DISPLAY`, `SPEAKER`)
        #[arg(short = 's', long)]
        surface: Option<String>,

        /// Drive a deployed webhook instead of the local handlers
        #[arg(long)]
        webhook_url: Option<String>,
    },
    /// Print the reply for a single handler as webhook JSON
    Render {
        /// Handler name (`simple`, `image`, `card`, `table`, `list`, `collection`, `option`, `media`, `media_status`)
        handler: String,

        /// Selected option key for the `option` handler
        #[arg(long)]
        selection: Option<String>,

        /// Playback status for the `media_status` handler
        #[arg(long)]
        media_status: Option<String>,
    },
    /// Answer a webhook request read from a file or stdin
    Fulfill {
        /// Request body file (reads stdin if omitted)
        input: Option<PathBuf>,
    },
    /// Generate OAuth credentials for running tests
    GenerateCredentials {
        /// Downloaded OAuth client secret
        client_secret: PathBuf,

        /// Where to write the credentials file
        output: PathBuf,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

/// Usage errors exit with status 1; help output exits 0.
fn exit_code(e: &clap::Error) -> i32 {
    i32::from(e.use_stderr())
}

fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        e.print().ok();
        std::process::exit(exit_code(&e));
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = parse_cli();

    match cli.command {
        Commands::Chat {
            messages,
            surface,
            webhook_url,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    messages,
                    surface,
                    webhook_url,
                })
                .await?;
        }
        Commands::Render {
            handler,
            selection,
            media_status,
        } => {
            RenderStrategy
                .execute(RenderInput {
                    handler,
                    selection,
                    media_status,
                })
                .await?;
        }
        Commands::Fulfill { input } => {
            FulfillStrategy.execute(FulfillInput { input }).await?;
        }
        Commands::GenerateCredentials {
            client_secret,
            output,
        } => {
            CredentialsStrategy
                .execute(CredentialsInput {
                    client_secret,
                    output,
                })
                .await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
