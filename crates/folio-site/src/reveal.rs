//! One-shot reveal state for page sections.

use std::collections::HashSet;

/// Class for a section that has been revealed.
pub const VISIBLE_CLASS: &str = "section-visible";

/// Class for a section not yet revealed.
pub const HIDDEN_CLASS: &str = "section-hidden";

/// Tracks which named sections have been entered.
///
/// Entering is permanent: there is no way to un-reveal a section.
#[derive(Clone, Debug, Default)]
pub struct RevealLatch {
    entered: HashSet<String>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch with every named section already entered.
    pub fn all_entered<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut latch = Self::new();
        for name in names {
            latch.enter(name);
        }
        latch
    }

    /// Mark a section entered. Returns true the first time only.
    pub fn enter(&mut self, name: &str) -> bool {
        self.entered.insert(name.to_string())
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.entered.contains(name)
    }

    /// Section class for the current state.
    pub fn class_for(&self, name: &str) -> &'static str {
        if self.is_active(name) {
            VISIBLE_CLASS
        } else {
            HIDDEN_CLASS
        }
    }
}
