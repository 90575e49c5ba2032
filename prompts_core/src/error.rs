use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No handler registered for trigger: {0}")]
    UnknownTrigger(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Selection is not a valid option key: {0:?}")]
    InvalidSelection(String),

    #[error("Duplicate entry {key} in type override {type_name}")]
    DuplicateEntry { type_name: String, key: String },

    #[error("Invalid webhook envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}
