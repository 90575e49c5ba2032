//! Conversation command backed by the simulator.
//!
//! Sends the invocation phrase, then either replays the given queries or
//! reads them interactively from stdin.

use prompts_config::Config;
use prompts_conversation::{ConversationConfig, ConversationSimulator};
use tracing::info;

use super::select_fulfillment;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Queries to send in order (interactive mode when empty)
    pub messages: Vec<String>,
    /// Optional surface override
    pub surface: Option<String>,
    /// Optional remote webhook
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let mut conversation_config = ConversationConfig::from_config(&config);
        if let Some(surface) = input.surface {
            conversation_config = conversation_config.with_surface(surface);
        }

        let fulfillment = select_fulfillment(&config, input.webhook_url);
        let mut simulator = ConversationSimulator::new(fulfillment, conversation_config);

        if input.messages.is_empty() {
            simulator.run_interactive().await?;
            return Ok(());
        }

        let invocation = simulator.config().trigger_phrase.clone();
        let turn = simulator.send_query(&invocation).await?;
        println!("{}", turn.text);

        for message in &input.messages {
            let turn = simulator.send_query(message).await?;
            info!("Turn {} matched intent {}", turn.turn_number, turn.intent);
            println!("{}", turn.text);
            if let Some(content) = turn.content() {
                println!("{}", serde_json::to_string_pretty(content)?);
            }
            if turn.ended {
                break;
            }
        }

        Ok(())
    }
}
