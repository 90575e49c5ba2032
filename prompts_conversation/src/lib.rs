#![warn(
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

//! Simulated conversations against the prompts webhook.
//!
//! The simulator stands in for the conversational platform so the webhook
//! can be exercised turn by turn, either in-process or over HTTP.

mod fulfillment;
mod session;
mod simulator;

use thiserror::Error;

pub use fulfillment::{Fulfillment, HttpFulfillment, LocalFulfillment};
pub use session::{END_SCENE, PROMPTS_SCENE, START_SCENE, SimulatorSession};
pub use simulator::{
    CANCEL_INTENT, ConversationConfig, ConversationSimulator, MAIN_INTENT, NO_MATCH_INTENT,
    TurnResult,
};

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Fulfillment error: {0}")]
    Fulfillment(#[from] prompts_core::Error),

    #[error("Webhook transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Conversation has not been started; send the invocation phrase first")]
    NotStarted,

    #[error("Conversation has already ended")]
    Ended,
}
