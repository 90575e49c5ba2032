use prompts_core::{MediaStatus, PROMPT_OPTION, SessionState, WebhookRequest, webhook};

/// Input for rendering a single handler.
#[derive(Debug, Clone)]
pub struct RenderInput {
    pub handler: String,
    pub selection: Option<String>,
    pub media_status: Option<String>,
}

/// Strategy that prints one handler's webhook reply.
#[derive(Debug, Clone, Copy)]
pub struct RenderStrategy;

impl RenderStrategy {
    fn build_request(input: RenderInput) -> WebhookRequest {
        let mut session = SessionState::new("render");
        if let Some(selection) = input.selection {
            session.set_param(PROMPT_OPTION, selection);
        }

        let mut request = WebhookRequest::new(input.handler, session);
        if let Some(status) = input.media_status {
            let status = MediaStatus::parse(&status.to_uppercase());
            request.set_intent_param(webhook::MEDIA_STATUS_PARAM, status.as_str());
        }
        request
    }
}

impl super::CommandStrategy for RenderStrategy {
    type Input = RenderInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let response = prompts_core::fulfill(Self::build_request(input))?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prompts_core::{Request, Trigger};

    #[test]
    fn test_build_request() {
        let request = RenderStrategy::build_request(RenderInput {
            handler: "option".to_string(),
            selection: Some("ITEM_2".to_string()),
            media_status: Some("paused".to_string()),
        });
        let (request, _) = request.into_parts().unwrap();
        assert_eq!(
            request,
            Request::new(Trigger::Option)
                .with_selection("ITEM_2")
                .with_media_status(MediaStatus::Paused)
        );
    }
}
