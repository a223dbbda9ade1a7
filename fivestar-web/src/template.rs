//! Static star template.

use fivestar_core::{STAR_COUNT, aria_label};

/// Outline of one star in a 24×24 view box.
pub const STAR_PATH: &str = "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z";
pub const STAR_VIEW_BOX: &str = "0 0 24 24";

/// Tag name of a star icon, as reported by `Element::tag_name` for SVG.
pub const STAR_TAG: &str = "svg";

pub const CONTAINER_CLASS: &str = "fivestar";

/// Markup of the container and its five stars.
#[must_use]
pub fn stars_markup() -> String {
    let stars: String = (0..STAR_COUNT)
        .map(|index| {
            format!(
                "<svg class=\"star\" role=\"radio\" aria-label=\"{label}\" data-index=\"{index}\" \
                 viewBox=\"{STAR_VIEW_BOX}\" focusable=\"true\"><path d=\"{STAR_PATH}\"/></svg>",
                label = aria_label(index),
            )
        })
        .collect();
    format!(
        "<div class=\"{CONTAINER_CLASS}\" role=\"radiogroup\" aria-label=\"Rating\">{stars}</div>"
    )
}
