//! Response content blocks.
//!
//! Field names and enum spellings follow the conversational platform's
//! webhook JSON, so these types serialize straight into a reply prompt.

use serde::{Deserialize, Serialize};

/// Speech and display text for one simple response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simple {
    pub speech: String,
    pub text: String,
}

impl Simple {
    #[must_use]
    pub fn new(speech: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            text: text.into(),
        }
    }
}

impl From<&str> for Simple {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub alt: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub width: u32,
}

impl Image {
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            height: 0,
            width: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalAlignment {
    #[default]
    Unspecified,
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub header: String,
    #[serde(default)]
    pub align: HorizontalAlignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    #[serde(default)]
    pub divider: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Cell text at a zero-based `(row, column)` position.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(|c| c.text.as_str())
    }
}

/// Reference to a type-override entry shown in a list or collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryKey {
    pub key: String,
}

/// Shared shape of list and collection prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<EntryKey>,
}

impl Selection {
    #[must_use]
    pub fn new<I, K>(title: impl Into<String>, subtitle: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            items: keys.into_iter().map(|k| EntryKey { key: k.into() }).collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.key.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Audio,
    MediaStatusAck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaControl {
    Paused,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaImage {
    Large(Image),
    Icon(Image),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaObject {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub media_type: MediaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optional_media_controls: Vec<MediaControl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_objects: Vec<MediaObject>,
}

impl Media {
    /// Acknowledgement sent back when playback is paused or stopped.
    #[must_use]
    pub const fn status_ack() -> Self {
        Self {
            media_type: MediaType::MediaStatusAck,
            start_offset: None,
            optional_media_controls: Vec::new(),
            media_objects: Vec::new(),
        }
    }
}

/// One unit of a conversational response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    Simple(Simple),
    Image(Image),
    Card(Card),
    Table(Table),
    List(Selection),
    Collection(Selection),
    Media(Media),
}

impl ContentBlock {
    #[must_use]
    pub const fn is_simple(&self) -> bool {
        matches!(self, Self::Simple(_))
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
            Self::Image(_) => "image",
            Self::Card(_) => "card",
            Self::Table(_) => "table",
            Self::List(_) => "list",
            Self::Collection(_) => "collection",
            Self::Media(_) => "media",
        }
    }
}

impl From<&str> for ContentBlock {
    fn from(value: &str) -> Self {
        Self::Simple(Simple::from(value))
    }
}

impl From<String> for ContentBlock {
    fn from(value: String) -> Self {
        Self::Simple(Simple::new(value.clone(), value))
    }
}
