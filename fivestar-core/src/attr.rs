//! Conversions between typed properties and the textual attribute surface.
//!
//! The typed property is the single source of truth. Attributes are parsed
//! into it when the host changes them and formatted from it when the
//! property is assigned programmatically.

use crate::input::parse_number;

pub const VALUE_ATTR: &str = "value";
pub const READONLY_ATTR: &str = "readonly";

/// Attributes the widget observes on its host element.
pub const OBSERVED_ATTRIBUTES: [&str; 2] = [VALUE_ATTR, READONLY_ATTR];

/// An observed attribute that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrChange {
    Value,
    Readonly,
}

impl AttrChange {
    /// Map an attribute name to the property it mirrors. Unobserved names
    /// yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            VALUE_ATTR => Some(Self::Value),
            READONLY_ATTR => Some(Self::Readonly),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => VALUE_ATTR,
            Self::Readonly => READONLY_ATTR,
        }
    }
}

/// Parse the `value` attribute. Absence reads as `0`.
#[must_use]
pub fn parse_value_attr(text: Option<&str>) -> i32 {
    text.map_or(0, parse_number)
}

/// Format a rating for the `value` attribute. The default `0` is
/// represented by removing the attribute.
#[must_use]
pub fn format_value_attr(value: i32) -> Option<String> {
    (value != 0).then(|| value.to_string())
}

/// `readonly` is a presence flag: any value, including the empty string,
/// turns it on.
#[must_use]
pub const fn parse_readonly_attr(text: Option<&str>) -> bool {
    text.is_some()
}

#[must_use]
pub fn format_readonly_attr(readonly: bool) -> Option<String> {
    readonly.then(String::new)
}
