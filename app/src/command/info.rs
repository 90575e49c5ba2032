use prompts_config::Config;
use prompts_core::Trigger;

/// Strategy for displaying configuration and the registered handlers.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

const fn or_unset(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;

        println!("=== prompts Configuration ===\n");

        println!("Config file: {}", Config::config_path()?.display());
        println!();

        println!("Project:");
        println!("  Project ID: {}", or_unset(&config.project.project_id));
        println!("  Display Name: {}", config.project.display_name);
        println!("  Invocation: {}", config.project.trigger_phrase());
        println!();

        println!("Simulator:");
        println!("  Locale: {}", config.simulator.locale);
        println!("  Surface: {}", config.simulator.surface);
        println!(
            "  Continue Prompt: {}",
            truncate(&config.simulator.continue_prompt, 60)
        );
        println!(
            "  Webhook: {}",
            config
                .simulator
                .webhook_url
                .as_deref()
                .unwrap_or("(in-process)")
        );
        println!();

        println!("Credentials:");
        println!("  Scopes: {}", config.credentials.scopes.join(", "));
        println!("  Token URI: {}", config.credentials.token_uri);
        println!();

        println!("Handlers:");
        for trigger in Trigger::ALL {
            println!("  {trigger}");
        }

        Ok(())
    }
}
