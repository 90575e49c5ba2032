//! Per-conversation session state and type overrides.
//!
//! A type override replaces (or extends) how the platform resolves a named
//! entity type, which is how list and collection items become selectable by
//! their display names on the next turn.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::Image;
use crate::{Error, Result};

static NON_WORD: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| {
        Regex::new(r"[^\p{L}\p{N}]+").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Lower-case an utterance and collapse punctuation and whitespace runs, so
/// "Item #1" and "item 1" compare equal.
#[must_use]
pub fn normalize_utterance(text: &str) -> String {
    non_word()
        .replace_all(&text.to_lowercase(), " ")
        .trim()
        .to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeOverrideMode {
    #[default]
    TypeReplace,
    TypeMerge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDisplay {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// A selectable item: the key the platform resolves to, plus how it is
/// displayed and which phrases select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableItem {
    #[serde(rename = "name")]
    pub key: String,
    pub synonyms: Vec<String>,
    pub display: EntryDisplay,
}

impl SelectableItem {
    fn matches(&self, normalized: &str) -> bool {
        normalize_utterance(&self.key) == normalized
            || normalize_utterance(&self.display.title) == normalized
            || self
                .synonyms
                .iter()
                .any(|s| normalize_utterance(s) == normalized)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymType {
    pub entries: Vec<SelectableItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOverride {
    pub name: String,
    #[serde(default)]
    pub mode: TypeOverrideMode,
    pub synonym: SynonymType,
}

impl TypeOverride {
    /// Build a replacing override, rejecting duplicate keys.
    pub fn replace(name: impl Into<String>, entries: Vec<SelectableItem>) -> Result<Self> {
        let name = name.into();
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(Error::DuplicateEntry {
                    type_name: name,
                    key: entry.key.clone(),
                });
            }
        }

        Ok(Self {
            name,
            mode: TypeOverrideMode::TypeReplace,
            synonym: SynonymType { entries },
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[SelectableItem] {
        &self.synonym.entries
    }

    /// Resolve an utterance to an entry key.
    #[must_use]
    pub fn resolve(&self, utterance: &str) -> Option<&str> {
        let normalized = normalize_utterance(utterance);
        if normalized.is_empty() {
            return None;
        }
        self.synonym
            .entries
            .iter()
            .find(|e| e.matches(&normalized))
            .map(|e| e.key.as_str())
    }
}

/// State the platform keeps for one conversation between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub params: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub type_overrides: Vec<TypeOverride>,
}

impl SessionState {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn type_override(&self, name: &str) -> Option<&TypeOverride> {
        self.type_overrides.iter().find(|o| o.name == name)
    }

    /// Replace the override table with a single override.
    pub fn set_type_override(&mut self, type_override: TypeOverride) {
        self.type_overrides = vec![type_override];
    }

    /// Resolve free text against the override registered for `type_name`.
    #[must_use]
    pub fn resolve(&self, type_name: &str, utterance: &str) -> Option<&str> {
        self.type_override(type_name)?.resolve(utterance)
    }

    #[must_use]
    pub fn param_str(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(serde_json::Value::as_str)
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.params.insert(name.into(), value.into());
    }
}
