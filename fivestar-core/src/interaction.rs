//! Mapping pointer and keyboard input to a star.

use crate::view::STAR_COUNT;

/// One entry of an event's composed propagation path, innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEntry {
    /// A star icon at the given position.
    Star(usize),
    Other,
}

/// What the caller should do with the originating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A star was activated; prevent the default action and stop propagation.
    Handled,
    Ignored,
}

impl KeyOutcome {
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// First star found walking the propagation path.
#[must_use]
pub fn resolve_star(path: &[PathEntry]) -> Option<usize> {
    path.iter().find_map(|entry| match entry {
        PathEntry::Star(index) if *index < STAR_COUNT => Some(*index),
        _ => None,
    })
}

/// Space and Enter select; every other key is left alone.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "Enter")
}
