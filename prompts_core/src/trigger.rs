//! Handler names and the entity values resolved alongside them.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A resolved handler name selecting exactly one response builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Simple,
    Image,
    Card,
    Table,
    Collection,
    List,
    Option,
    Media,
    MediaStatus,
}

impl Trigger {
    pub const ALL: [Self; 9] = [
        Self::Simple,
        Self::Image,
        Self::Card,
        Self::Table,
        Self::Collection,
        Self::List,
        Self::Option,
        Self::Media,
        Self::MediaStatus,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Image => "image",
            Self::Card => "card",
            Self::Table => "table",
            Self::Collection => "collection",
            Self::List => "list",
            Self::Option => "option",
            Self::Media => "media",
            Self::MediaStatus => "media_status",
        }
    }

    /// Whether the conversation waits for a selection after this trigger.
    #[must_use]
    pub const fn awaits_selection(self) -> bool {
        matches!(self, Self::List | Self::Collection)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Trigger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownTrigger(s.to_string()))
    }
}

/// Playback status reported by the device after a media response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaStatus {
    Finished,
    Failed,
    Paused,
    Stopped,
    /// Any value the platform sends that is not one of the above.
    Unspecified(String),
}

impl MediaStatus {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "FINISHED" => Self::Finished,
            "FAILED" => Self::Failed,
            "PAUSED" => Self::Paused,
            "STOPPED" => Self::Stopped,
            other => Self::Unspecified(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Finished => "FINISHED",
            Self::Failed => "FAILED",
            Self::Paused => "PAUSED",
            Self::Stopped => "STOPPED",
            Self::Unspecified(other) => other,
        }
    }
}

impl fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inbound turn: the trigger plus any entity values resolved upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub trigger: Trigger,
    /// Key the user picked from a list or collection (`prompt_option`).
    pub selection: Option<String>,
    pub media_status: Option<MediaStatus>,
}

impl Request {
    #[must_use]
    pub const fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            selection: None,
            media_status: None,
        }
    }

    #[must_use]
    pub fn with_selection(mut self, key: impl Into<String>) -> Self {
        self.selection = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_media_status(mut self, status: MediaStatus) -> Self {
        self.media_status = Some(status);
        self
    }
}
