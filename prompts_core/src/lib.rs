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

//! Response dispatch for the prompts webhook.
//!
//! A [`Dispatcher`] maps each [`Trigger`] to a pure response builder. The
//! builders produce ordered [`ContentBlock`]s and, for lists and
//! collections, write a `prompt_option` type override into the
//! [`SessionState`] so the next utterance can resolve to an item key.

pub mod content;
pub mod dispatch;
mod error;
pub mod handlers;
mod response;
pub mod session;
mod trigger;
pub mod webhook;

pub use content::{ContentBlock, Image, Media, MediaType, Simple};
pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use handlers::PROMPT_OPTION;
pub use response::Response;
pub use session::{SelectableItem, SessionState, TypeOverride};
pub use trigger::{MediaStatus, Request, Trigger};
pub use webhook::{WebhookRequest, WebhookResponse, fulfill, fulfill_json};
