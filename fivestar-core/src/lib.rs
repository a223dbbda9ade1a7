#![forbid(unsafe_code)]
//! Fivestar Core
//!
//! Platform-agnostic logic for the Fivestar rating widget: a five-star
//! control with an integer value, a read-only mode, and a change
//! notification fired on user selection. This crate has no browser
//! dependencies; hosts plug in a display tree and a scheduler.

pub mod attr;
pub mod events;
pub mod host;
pub mod input;
pub mod interaction;
pub mod memory;
pub mod schedule;
pub mod theme;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use attr::{
    AttrChange, OBSERVED_ATTRIBUTES, READONLY_ATTR, VALUE_ATTR, format_readonly_attr,
    format_value_attr, parse_readonly_attr, parse_value_attr,
};
pub use events::{ChangeCallback, ChangeListeners, ListenerId};
pub use host::{HostError, Node, RatingHost, sync_attribute, sync_class};
pub use input::{PropInput, coerce_readonly, coerce_value};
pub use interaction::{KeyOutcome, PathEntry, is_activation_key, resolve_star};
pub use memory::{MemoryHost, MemoryNode};
pub use schedule::{ManualScheduler, RenderQueue, Scheduler, Task};
pub use theme::{RatingTheme, ThemeError};
pub use view::{STAR_COUNT, StarState, aria_label, selected_count, star_states, star_value};
pub use widget::RatingElement;
