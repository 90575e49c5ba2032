use crate::content::{ContentBlock, Simple};
use crate::session::SessionState;

/// Ordered content produced for one turn, plus the session to hand back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub blocks: Vec<ContentBlock>,
    pub session: SessionState,
}

impl Response {
    #[must_use]
    pub const fn new(blocks: Vec<ContentBlock>, session: SessionState) -> Self {
        Self { blocks, session }
    }

    pub fn simples(&self) -> impl Iterator<Item = &Simple> {
        self.blocks.iter().filter_map(|b| match b {
            ContentBlock::Simple(s) => Some(s),
            _ => None,
        })
    }

    /// All spoken output, concatenated without separators.
    #[must_use]
    pub fn speech(&self) -> String {
        self.simples().map(|s| s.speech.as_str()).collect()
    }

    /// All display text, concatenated without separators.
    #[must_use]
    pub fn text(&self) -> String {
        self.simples().map(|s| s.text.as_str()).collect()
    }

    /// The rich (non-simple) block, if the turn produced one.
    #[must_use]
    pub fn content(&self) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| !b.is_simple())
    }
}
