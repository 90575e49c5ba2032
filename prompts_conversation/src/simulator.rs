//! Conversation simulator.
//!
//! Plays the platform's part in a conversation: recognizes the invocation
//! phrase, matches queries to handlers, resolves list and collection
//! selections through the session's type override, appends the scene's
//! continue prompt, and keeps session state between turns.

use std::io::Write;

use prompts_config::Config;
use prompts_core::session::normalize_utterance;
use prompts_core::webhook::{MEDIA_STATUS_PARAM, Prompt, PromptContent};
use prompts_core::{PROMPT_OPTION, Trigger, WebhookRequest};
use tracing::{debug, info};

use crate::ConversationError;
use crate::fulfillment::Fulfillment;
use crate::session::{PROMPTS_SCENE, SimulatorSession};

pub const MAIN_INTENT: &str = "actions.intent.MAIN";
pub const CANCEL_INTENT: &str = "actions.intent.CANCEL";
pub const NO_MATCH_INTENT: &str = "actions.intent.NO_MATCH";

const STOP_PHRASES: [&str; 6] = ["stop", "cancel", "exit", "quit", "bye", "goodbye"];

/// Settings for one simulated conversation.
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    pub trigger_phrase: String,
    pub continue_prompt: String,
    pub no_match_prompt: String,
    pub locale: String,
    pub surface: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ConversationConfig {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            trigger_phrase: config.project.trigger_phrase(),
            continue_prompt: config.simulator.continue_prompt.clone(),
            no_match_prompt: config.simulator.no_match_prompt.clone(),
            locale: config.simulator.locale.clone(),
            surface: config.simulator.surface.clone(),
        }
    }

    #[must_use]
    pub fn with_surface(mut self, surface: impl Into<String>) -> Self {
        self.surface = surface.into();
        self
    }

    #[must_use]
    pub fn with_trigger_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.trigger_phrase = phrase.into();
        self
    }
}

/// What the user saw and heard after one turn.
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub turn_number: usize,
    pub intent: String,
    pub scene: String,
    pub speech: String,
    pub text: String,
    pub prompt: Prompt,
    pub ended: bool,
}

impl TurnResult {
    #[must_use]
    pub const fn content(&self) -> Option<&PromptContent> {
        self.prompt.content.as_ref()
    }
}

pub struct ConversationSimulator<F> {
    fulfillment: F,
    config: ConversationConfig,
    session: SimulatorSession,
}

impl<F: Fulfillment> ConversationSimulator<F> {
    #[must_use]
    pub fn new(fulfillment: F, config: ConversationConfig) -> Self {
        let session = SimulatorSession::new();
        info!(
            "Starting simulated conversation {} (locale={}, surface={})",
            session.id, config.locale, config.surface
        );
        Self {
            fulfillment,
            config,
            session,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SimulatorSession {
        &self.session
    }

    #[must_use]
    pub const fn config(&self) -> &ConversationConfig {
        &self.config
    }

    /// Send one user query and return the Action's reply.
    pub async fn send_query(&mut self, query: &str) -> Result<TurnResult, ConversationError> {
        if self.session.ended {
            return Err(ConversationError::Ended);
        }

        let normalized = normalize_utterance(query);
        debug!("Query: {query:?} (normalized {normalized:?})");

        if !self.session.started() {
            return self.start(&normalized);
        }

        if STOP_PHRASES.contains(&normalized.as_str()) {
            return Ok(self.stop());
        }

        // Resolves only while the session carries a `prompt_option` override.
        let key = self
            .session
            .state
            .resolve(PROMPT_OPTION, query)
            .map(ToString::to_string);
        if let Some(key) = key {
            info!("Resolved {query:?} to {PROMPT_OPTION}={key}");
            self.session.state.set_param(PROMPT_OPTION, key);
            let request = self.webhook_request(Trigger::Option, query);
            return self.fulfill(Trigger::Option, request).await;
        }

        match Self::match_trigger(&normalized) {
            Some(trigger) => {
                let request = self.webhook_request(trigger, query);
                self.fulfill(trigger, request).await
            }
            None => Ok(self.no_match()),
        }
    }

    /// Report a media playback status, as the device does after a media
    /// response.
    pub async fn send_media_status(
        &mut self,
        status: &str,
    ) -> Result<TurnResult, ConversationError> {
        if self.session.ended {
            return Err(ConversationError::Ended);
        }
        if !self.session.started() {
            return Err(ConversationError::NotStarted);
        }

        let mut request = self.webhook_request(Trigger::MediaStatus, "");
        request.intent.name = format!("actions.intent.MEDIA_STATUS_{status}");
        request.set_intent_param(MEDIA_STATUS_PARAM, status);
        self.fulfill(Trigger::MediaStatus, request).await
    }

    pub fn send_stop(&mut self) -> Result<TurnResult, ConversationError> {
        if self.session.ended {
            return Err(ConversationError::Ended);
        }
        Ok(self.stop())
    }

    /// Read queries from stdin until the conversation ends or the user
    /// types `exit`.
    pub async fn run_interactive(&mut self) -> Result<(), ConversationError> {
        println!("=== Conversation Session: {} ===", self.session.id);
        println!(
            "Say \"{}\" to begin. Type 'exit' or Ctrl+C to end the session.\n",
            self.config.trigger_phrase
        );

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();
            if input.is_empty() {
                continue;
            }

            let result = if let Some(status) = input.strip_prefix("/media ") {
                self.send_media_status(&status.trim().to_uppercase()).await
            } else {
                self.send_query(input).await
            };

            match result {
                Ok(turn) => {
                    print_turn(&turn);
                    if turn.ended {
                        break;
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        println!("\nSession ended. Total turns: {}", self.session.turn_count);
        Ok(())
    }

    fn start(&mut self, normalized: &str) -> Result<TurnResult, ConversationError> {
        let invocation = normalize_utterance(&self.config.trigger_phrase);
        if normalized != invocation && normalized != "main" {
            return Err(ConversationError::NotStarted);
        }

        self.session.enter_scene(PROMPTS_SCENE);
        let prompt = Prompt {
            first_simple: Some(self.config.continue_prompt.as_str().into()),
            ..Prompt::default()
        };
        Ok(self.finish_turn(MAIN_INTENT, prompt))
    }

    fn stop(&mut self) -> TurnResult {
        self.session.end();
        self.finish_turn(CANCEL_INTENT, Prompt::default())
    }

    fn no_match(&mut self) -> TurnResult {
        let prompt = Prompt {
            first_simple: Some(self.config.no_match_prompt.as_str().into()),
            ..Prompt::default()
        };
        self.finish_turn(NO_MATCH_INTENT, prompt)
    }

    fn match_trigger(normalized: &str) -> Option<Trigger> {
        let name = normalized.replace(' ', "_");
        name.parse::<Trigger>()
            .ok()
            .filter(|t| !matches!(t, Trigger::Option | Trigger::MediaStatus))
    }

    fn webhook_request(&self, trigger: Trigger, query: &str) -> WebhookRequest {
        let mut request = WebhookRequest::new(trigger.as_str(), self.session.state.clone());
        request.intent.name = trigger.as_str().to_string();
        request.intent.query = query.to_string();
        request.scene.name.clone_from(&self.session.scene);
        request.session.language_code.clone_from(&self.config.locale);
        request.device.capabilities = device_capabilities(&self.config.surface);
        request
    }

    async fn fulfill(
        &mut self,
        trigger: Trigger,
        request: WebhookRequest,
    ) -> Result<TurnResult, ConversationError> {
        let intent = request.intent.name.clone();
        let response = self.fulfillment.fulfill(request).await?;
        self.session.state = response.session;

        let mut prompt = response.prompt;
        if !trigger.awaits_selection() && prompt.first_simple.is_some() {
            self.append_continue_prompt(&mut prompt);
        }

        Ok(self.finish_turn(&intent, prompt))
    }

    /// The scene prompt follows the handler's output: joined with a space
    /// after a last simple response, directly otherwise.
    fn append_continue_prompt(&self, prompt: &mut Prompt) {
        let cont = self.config.continue_prompt.as_str();
        match prompt.last_simple.as_mut() {
            Some(last) => {
                last.speech = format!("{} {cont}", last.speech);
                last.text = format!("{} {cont}", last.text);
            }
            None => prompt.last_simple = Some(cont.into()),
        }
    }

    fn finish_turn(&mut self, intent: &str, prompt: Prompt) -> TurnResult {
        let turn_number = self.session.next_turn();
        debug!("Turn {turn_number} handled by intent {intent}");
        TurnResult {
            turn_number,
            intent: intent.to_string(),
            scene: self.session.scene.clone(),
            speech: prompt.speech(),
            text: prompt.text(),
            prompt,
            ended: self.session.ended,
        }
    }
}

fn device_capabilities(surface: &str) -> Vec<String> {
    let capabilities: &[&str] = match surface {
        "SPEAKER" => &["SPEECH", "LONG_FORM_AUDIO"],
        "SMART_DISPLAY" => &["SPEECH", "RICH_RESPONSE", "LONG_FORM_AUDIO", "INTERACTIVE_CANVAS"],
        _ => &["SPEECH", "RICH_RESPONSE", "LONG_FORM_AUDIO", "WEB_LINK"],
    };
    capabilities.iter().map(ToString::to_string).collect()
}

fn print_turn(turn: &TurnResult) {
    if !turn.text.is_empty() {
        println!("\n{}", turn.text);
    }
    if let Some(content) = turn.content() {
        match serde_json::to_string_pretty(content) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error rendering content: {e}"),
        }
    }
    println!();
}
