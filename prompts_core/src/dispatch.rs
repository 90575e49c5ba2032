//! Static trigger → handler table.

use tracing::debug;

use crate::handlers::{self, Handler};
use crate::response::Response;
use crate::session::SessionState;
use crate::trigger::{Request, Trigger};
use crate::{Error, Result};

const HANDLERS: [(Trigger, Handler); 9] = [
    (Trigger::Simple, handlers::simple),
    (Trigger::Image, handlers::image),
    (Trigger::Card, handlers::card),
    (Trigger::Table, handlers::table),
    (Trigger::Collection, handlers::collection),
    (Trigger::List, handlers::list),
    (Trigger::Option, handlers::option),
    (Trigger::Media, handlers::media),
    (Trigger::MediaStatus, handlers::media_status),
];

/// Routes each request to the handler registered for its trigger.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn handler(trigger: Trigger) -> Option<Handler> {
        HANDLERS
            .iter()
            .find(|(t, _)| *t == trigger)
            .map(|(_, h)| *h)
    }

    /// Run the handler for `request.trigger` against `session`.
    ///
    /// The session is returned inside the response, carrying any type
    /// override the handler wrote.
    pub fn dispatch(&self, request: &Request, mut session: SessionState) -> Result<Response> {
        let handler = Self::handler(request.trigger)
            .ok_or_else(|| Error::UnknownTrigger(request.trigger.to_string()))?;

        debug!("Dispatching trigger: {}", request.trigger);
        let blocks = handler(request, &mut session)?;
        debug!(
            "Trigger {} produced {} block(s)",
            request.trigger,
            blocks.len()
        );

        Ok(Response::new(blocks, session))
    }

    /// Parse a handler name and dispatch it. Unknown names are rejected.
    pub fn dispatch_named(
        &self,
        name: &str,
        request: Request,
        session: SessionState,
    ) -> Result<Response> {
        let trigger = name.parse::<Trigger>()?;
        self.dispatch(&Request { trigger, ..request }, session)
    }
}
