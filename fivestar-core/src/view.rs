//! Derived per-star state.
//!
//! Nothing per star is stored; everything is computed from the current
//! value and read-only flag. Both the imperative render pass and the
//! declarative component render from here.

/// Number of stars. Fixed.
pub const STAR_COUNT: usize = 5;

/// Class applied to a highlighted star.
pub const SELECTED_CLASS: &str = "selected";
pub const ARIA_CHECKED: &str = "aria-checked";
pub const TAB_INDEX: &str = "tabindex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarState {
    pub index: usize,
    pub selected: bool,
    pub checked: bool,
    pub tab_index: i32,
}

impl StarState {
    #[must_use]
    pub const fn aria_checked(&self) -> &'static str {
        if self.checked { "true" } else { "false" }
    }

    /// Value the widget takes when this star is activated.
    #[must_use]
    pub const fn activation_value(&self) -> i32 {
        star_value(self.index)
    }
}

/// Compute every star's state for a value.
///
/// Values above five select every star without checking any; values at or
/// below zero select none. No clamping is applied to the value itself.
#[must_use]
pub fn star_states(value: i32, readonly: bool) -> [StarState; STAR_COUNT] {
    let selected = selected_count(value);
    let tab_index = if readonly { -1 } else { 0 };
    std::array::from_fn(|index| StarState {
        index,
        selected: index < selected,
        checked: star_value(index) == value,
        tab_index,
    })
}

/// Number of stars a value highlights.
#[must_use]
pub fn selected_count(value: i32) -> usize {
    usize::try_from(value.clamp(0, 5)).unwrap_or(0)
}

/// Rating represented by the star at `index`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn star_value(index: usize) -> i32 {
    index as i32 + 1
}

#[must_use]
pub fn aria_label(index: usize) -> String {
    match star_value(index) {
        1 => "1 star".to_owned(),
        n => format!("{n} stars"),
    }
}
