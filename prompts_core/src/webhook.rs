//! Webhook JSON envelope.
//!
//! Parses the platform's fulfillment request into a [`Request`] and session,
//! and shapes a [`Response`] back into the reply the platform expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::content::{Card, ContentBlock, Image, Media, Selection, Simple, Table};
use crate::dispatch::Dispatcher;
use crate::handlers::PROMPT_OPTION;
use crate::response::Response;
use crate::session::SessionState;
use crate::trigger::{MediaStatus, Request, Trigger};
use crate::Result;

/// Intent parameter carrying the device's playback status.
pub const MEDIA_STATUS_PARAM: &str = "MEDIA_STATUS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerRef {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentParameterValue {
    #[serde(default)]
    pub original: String,
    #[serde(default)]
    pub resolved: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub params: BTreeMap<String, IntentParameterValue>,
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSession {
    #[serde(flatten)]
    pub state: SessionState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Fulfillment request sent by the platform for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub handler: HandlerRef,
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub scene: Scene,
    #[serde(default)]
    pub session: RequestSession,
    #[serde(default)]
    pub device: Device,
}

impl WebhookRequest {
    #[must_use]
    pub fn new(handler: impl Into<String>, session: SessionState) -> Self {
        Self {
            handler: HandlerRef {
                name: handler.into(),
            },
            session: RequestSession {
                state: session,
                language_code: String::new(),
            },
            ..Self::default()
        }
    }

    /// Resolved value of an intent parameter, if it is a string.
    #[must_use]
    pub fn intent_param(&self, name: &str) -> Option<&str> {
        self.intent
            .params
            .get(name)
            .and_then(|p| p.resolved.as_str())
    }

    pub fn set_intent_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        self.intent.params.insert(
            name.into(),
            IntentParameterValue {
                original: value.clone(),
                resolved: serde_json::Value::String(value),
            },
        );
    }

    /// Split the envelope into the dispatcher's request and the session.
    pub fn into_parts(self) -> Result<(Request, SessionState)> {
        let trigger = self.handler.name.parse::<Trigger>()?;
        let media_status = self.intent_param(MEDIA_STATUS_PARAM).map(MediaStatus::parse);
        let session = self.session.state;
        let selection = session.param_str(PROMPT_OPTION).map(ToString::to_string);

        Ok((
            Request {
                trigger,
                selection,
                media_status,
            },
            session,
        ))
    }
}

/// Rich content of a prompt, keyed by kind on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptContent {
    Image(Image),
    Card(Card),
    Table(Table),
    List(Selection),
    Collection(Selection),
    Media(Media),
}

impl PromptContent {
    #[must_use]
    pub fn from_block(block: &ContentBlock) -> Option<Self> {
        match block {
            ContentBlock::Simple(_) => None,
            ContentBlock::Image(i) => Some(Self::Image(i.clone())),
            ContentBlock::Card(c) => Some(Self::Card(c.clone())),
            ContentBlock::Table(t) => Some(Self::Table(t.clone())),
            ContentBlock::List(l) => Some(Self::List(l.clone())),
            ContentBlock::Collection(c) => Some(Self::Collection(c.clone())),
            ContentBlock::Media(m) => Some(Self::Media(m.clone())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    #[serde(rename = "override", default)]
    pub override_previous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_simple: Option<Simple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PromptContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_simple: Option<Simple>,
}

impl Prompt {
    /// Lay out blocks the way the platform renders them: the first simple
    /// response goes first, later ones are joined into the last simple
    /// response, and the rich block goes into `content`.
    #[must_use]
    pub fn from_blocks(blocks: &[ContentBlock]) -> Self {
        let mut prompt = Self::default();
        for block in blocks {
            match block {
                ContentBlock::Simple(simple) => {
                    if prompt.first_simple.is_none() {
                        prompt.first_simple = Some(simple.clone());
                    } else if let Some(last) = prompt.last_simple.as_mut() {
                        last.speech.push_str(&simple.speech);
                        last.text.push_str(&simple.text);
                    } else {
                        prompt.last_simple = Some(simple.clone());
                    }
                }
                other => prompt.content = PromptContent::from_block(other),
            }
        }
        prompt
    }

    #[must_use]
    pub fn speech(&self) -> String {
        self.simples().map(|s| s.speech.as_str()).collect()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.simples().map(|s| s.text.as_str()).collect()
    }

    fn simples(&self) -> impl Iterator<Item = &Simple> {
        self.first_simple.iter().chain(self.last_simple.iter())
    }
}

/// Reply sent back to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub session: SessionState,
    pub prompt: Prompt,
}

impl From<Response> for WebhookResponse {
    fn from(response: Response) -> Self {
        Self {
            prompt: Prompt::from_blocks(&response.blocks),
            session: response.session,
        }
    }
}

/// Handle one fulfillment request end to end.
pub fn fulfill(request: WebhookRequest) -> Result<WebhookResponse> {
    info!("Fulfilling handler: {}", request.handler.name);
    let (request, session) = request.into_parts()?;
    let response = Dispatcher::new().dispatch(&request, session)?;
    Ok(WebhookResponse::from(response))
}

/// Decode a JSON request body, fulfill it, and encode the reply.
pub fn fulfill_json(body: &str) -> Result<String> {
    let request: WebhookRequest = serde_json::from_str(body)?;
    let response = fulfill(request)?;
    let encoded = serde_json::to_string(&response)?;
    debug!("Webhook reply: {encoded}");
    Ok(encoded)
}
