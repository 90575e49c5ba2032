//! Where a turn's webhook request is sent.

use async_trait::async_trait;
use prompts_core::{WebhookRequest, WebhookResponse};
use reqwest::Client;
use tracing::{debug, info};

use crate::ConversationError;

#[async_trait]
pub trait Fulfillment: Send + Sync {
    async fn fulfill(&self, request: WebhookRequest) -> Result<WebhookResponse, ConversationError>;
}

/// Runs the handlers in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFulfillment;

#[async_trait]
impl Fulfillment for LocalFulfillment {
    async fn fulfill(&self, request: WebhookRequest) -> Result<WebhookResponse, ConversationError> {
        Ok(prompts_core::fulfill(request)?)
    }
}

/// Posts the webhook envelope to a deployed fulfillment endpoint.
pub struct HttpFulfillment {
    client: Client,
    url: String,
}

impl HttpFulfillment {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        info!("Using remote fulfillment at {url}");
        Self {
            client: Client::new(),
            url,
        }
    }

    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Fulfillment for HttpFulfillment {
    async fn fulfill(&self, request: WebhookRequest) -> Result<WebhookResponse, ConversationError> {
        debug!("POST {} handler={}", self.url, request.handler.name);
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<WebhookResponse>()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl<T: Fulfillment + ?Sized> Fulfillment for Box<T> {
    async fn fulfill(&self, request: WebhookRequest) -> Result<WebhookResponse, ConversationError> {
        (**self).fulfill(request).await
    }
}
