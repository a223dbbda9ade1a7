//! Style contract.
//!
//! Five CSS custom properties control the widget's look. Hosts override
//! them through the cascade; a [`RatingTheme`] can also pin them inline.

use serde::{Deserialize, Serialize};

pub const ICON_WIDTH_VAR: &str = "--fivestar-icon-width";
pub const ICON_HEIGHT_VAR: &str = "--fivestar-icon-height";
pub const COLOR_VAR: &str = "--fivestar-color";
pub const SELECTED_COLOR_VAR: &str = "--fivestar-selected-color";
pub const ACTIVE_COLOR_VAR: &str = "--fivestar-active-color";

const DEFAULT_ICON_WIDTH: &str = "24px";
const DEFAULT_ICON_HEIGHT: &str = "24px";
const DEFAULT_COLOR: &str = "#c4c4c4";
const DEFAULT_SELECTED_COLOR: &str = "#f5b301";
const DEFAULT_ACTIVE_COLOR: &str = "#ffd24d";

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Theme parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingTheme {
    pub icon_width: String,
    pub icon_height: String,
    /// Fill of an unselected star.
    pub color: String,
    pub selected_color: String,
    /// Fill on hover, focus, and press.
    pub active_color: String,
}

impl Default for RatingTheme {
    fn default() -> Self {
        Self {
            icon_width: DEFAULT_ICON_WIDTH.to_owned(),
            icon_height: DEFAULT_ICON_HEIGHT.to_owned(),
            color: DEFAULT_COLOR.to_owned(),
            selected_color: DEFAULT_SELECTED_COLOR.to_owned(),
            active_color: DEFAULT_ACTIVE_COLOR.to_owned(),
        }
    }
}

impl RatingTheme {
    /// Parse a theme from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns [`ThemeError::Json`] when the text is not a JSON object of strings.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    fn properties(&self) -> [(&'static str, &str, &'static str); 5] {
        [
            (ICON_WIDTH_VAR, &self.icon_width, DEFAULT_ICON_WIDTH),
            (ICON_HEIGHT_VAR, &self.icon_height, DEFAULT_ICON_HEIGHT),
            (COLOR_VAR, &self.color, DEFAULT_COLOR),
            (SELECTED_COLOR_VAR, &self.selected_color, DEFAULT_SELECTED_COLOR),
            (ACTIVE_COLOR_VAR, &self.active_color, DEFAULT_ACTIVE_COLOR),
        ]
    }

    /// Inline declarations for the properties that differ from the
    /// defaults. Empty when the theme is the default.
    #[must_use]
    pub fn style_overrides(&self) -> String {
        self.properties()
            .iter()
            .filter(|(_, value, default)| value != default)
            .map(|(name, value, _)| format!("{name}:{value};"))
            .collect()
    }

    /// Stylesheet for a shadow root. Read-only mode is keyed off the host
    /// element's `readonly` attribute.
    #[must_use]
    pub fn stylesheet() -> String {
        css(":host", ":host([readonly]) .fivestar")
    }

    /// Stylesheet for markup rendered into the page itself, where read-only
    /// mode is marked by a `readonly` class on the container.
    #[must_use]
    pub fn inline_stylesheet() -> String {
        css(".fivestar", ".fivestar.readonly")
    }
}

fn css(host: &str, readonly: &str) -> String {
    format!(
        "{host}{{display:inline-block}}\
         .fivestar{{display:flex;flex-direction:row;align-items:center}}\
         .fivestar .star{{width:var({ICON_WIDTH_VAR},{DEFAULT_ICON_WIDTH});\
         height:var({ICON_HEIGHT_VAR},{DEFAULT_ICON_HEIGHT});\
         fill:var({COLOR_VAR},{DEFAULT_COLOR});cursor:pointer;outline:none;\
         transition:fill 0.15s ease-in-out}}\
         .fivestar .star.selected{{fill:var({SELECTED_COLOR_VAR},{DEFAULT_SELECTED_COLOR})}}\
         .fivestar .star:hover,.fivestar .star:focus,.fivestar .star:active\
         {{fill:var({ACTIVE_COLOR_VAR},{DEFAULT_ACTIVE_COLOR})}}\
         {readonly} .star{{cursor:default}}\
         {readonly} .star:hover,{readonly} .star:focus\
         {{fill:var({COLOR_VAR},{DEFAULT_COLOR})}}\
         {readonly} .star.selected:hover,{readonly} .star.selected:focus\
         {{fill:var({SELECTED_COLOR_VAR},{DEFAULT_SELECTED_COLOR})}}"
    )
}
