//! Loosely-typed values assigned by a host application.
//!
//! Hosts hand the widget whatever they have: numbers, text read from markup,
//! booleans, or nothing at all. Nothing here is rejected; every input is
//! normalized to the typed property it feeds.

/// A value assigned to one of the widget's public properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropInput {
    /// `null` / `undefined` / absent.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for PropInput {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for PropInput {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

macro_rules! number_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropInput {
                fn from(value: $ty) -> Self {
                    Self::Number(f64::from(value))
                }
            }
        )*
    };
}

number_input!(i8, i16, i32, u8, u16, u32);

impl From<i64> for PropInput {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for PropInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PropInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for PropInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Coerce an input into a rating value.
///
/// `None` means the input was `Null` and the property should be reset (and
/// its attribute removed). Everything else yields a number; inputs that do
/// not read as a number become `0`.
#[must_use]
pub fn coerce_value(input: &PropInput) -> Option<i32> {
    match input {
        PropInput::Null => None,
        PropInput::Bool(flag) => Some(i32::from(*flag)),
        PropInput::Number(n) => Some(truncate(*n)),
        PropInput::Text(text) => Some(parse_number(text)),
    }
}

/// Coerce an input into the read-only flag.
///
/// Only boolean `true`, the text `"true"`, and the empty text (a bare
/// attribute) switch read-only mode on.
#[must_use]
pub fn coerce_readonly(input: &PropInput) -> bool {
    match input {
        PropInput::Bool(flag) => *flag,
        PropInput::Text(text) => text == "true" || text.is_empty(),
        PropInput::Null | PropInput::Number(_) => false,
    }
}

/// Read text as a number the way markup attributes are read: surrounding
/// whitespace is ignored, empty text is zero, fractions are truncated.
#[must_use]
pub fn parse_number(text: &str) -> i32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return saturate(int);
    }
    trimmed.parse::<f64>().map_or(0, truncate)
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(n: f64) -> i32 {
    if n.is_finite() {
        // `as` saturates at the i32 bounds.
        n.trunc() as i32
    } else {
        0
    }
}

fn saturate(n: i64) -> i32 {
    i32::try_from(n).unwrap_or(if n < 0 { i32::MIN } else { i32::MAX })
}
