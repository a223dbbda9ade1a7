//! JavaScript-facing API.
//!
//! ```js
//! const rating = new FivestarRating(document.querySelector("#review"));
//! rating.onchange = (value) => console.log(value);
//! rating.value = 3;
//! ```

use std::rc::Rc;

use fivestar_core::{PropInput, RatingTheme};
use js_sys::{Array, Function};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;
use crate::element::MountedRating;

/// Read a loosely-typed JavaScript value the way the widget's properties
/// expect it.
#[must_use]
pub fn prop_input(value: &JsValue) -> PropInput {
    if value.is_null() || value.is_undefined() {
        PropInput::Null
    } else if let Some(flag) = value.as_bool() {
        PropInput::Bool(flag)
    } else if let Some(n) = value.as_f64() {
        PropInput::Number(n)
    } else if let Some(text) = value.as_string() {
        PropInput::Text(text)
    } else {
        PropInput::Number(f64::NAN)
    }
}

fn theme_from(json: Option<String>) -> RatingTheme {
    json.map_or_else(RatingTheme::default, |json| {
        RatingTheme::from_json(&json).unwrap_or_else(|err| {
            dom::console_error(&format!("Ignoring rating theme: {err}"));
            RatingTheme::default()
        })
    })
}

#[wasm_bindgen]
pub struct FivestarRating {
    mounted: MountedRating,
    onchange: Option<Function>,
}

#[wasm_bindgen]
impl FivestarRating {
    /// Mount a rating widget on `element`. `theme` is an optional JSON
    /// object overriding the style defaults.
    ///
    /// # Errors
    /// Throws when the element cannot host the widget's shadow root, for
    /// instance because it is already a rating.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Element, theme: Option<String>) -> Result<Self, JsValue> {
        let mounted = MountedRating::mount(element, theme_from(theme))?;
        Ok(Self {
            mounted,
            onchange: None,
        })
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn value(&self) -> i32 {
        self.mounted.rating().value()
    }

    #[wasm_bindgen(setter)]
    pub fn set_value(&self, value: &JsValue) {
        self.mounted.rating().set_value(prop_input(value));
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn readonly(&self) -> bool {
        self.mounted.rating().readonly()
    }

    #[wasm_bindgen(setter)]
    pub fn set_readonly(&self, value: &JsValue) {
        self.mounted.rating().set_readonly(prop_input(value));
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn onchange(&self) -> JsValue {
        self.onchange
            .as_ref()
            .map_or(JsValue::NULL, |f| f.clone().into())
    }

    /// Assign the single change callback. Anything that is not a function
    /// clears it.
    #[wasm_bindgen(setter)]
    pub fn set_onchange(&mut self, callback: &JsValue) {
        self.onchange = callback.dyn_ref::<Function>().cloned();
        let slot = self.onchange.clone().map(|function| {
            Rc::new(move |value: i32| {
                if let Err(err) = function.call1(&JsValue::NULL, &JsValue::from(value)) {
                    dom::console_error(&format!(
                        "Rating onchange callback failed: {}",
                        dom::js_error_message(&err)
                    ));
                }
            }) as fivestar_core::ChangeCallback
        });
        self.mounted.rating().set_on_change(slot);
    }

    /// Detach the widget from the page's events. The stars remain rendered.
    pub fn unmount(&mut self) {
        self.mounted.unmount();
    }
}

/// Mount a widget on every element matching `selector`. Elements that
/// already carry a shadow root, including ones upgraded earlier, are
/// skipped.
///
/// # Errors
/// Throws when the selector is invalid, no document is available, or an
/// element cannot host the widget.
#[wasm_bindgen(js_name = upgradeAll)]
pub fn upgrade_all(selector: &str) -> Result<Array, JsValue> {
    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let matches = doc.query_selector_all(selector)?;
    let upgraded = Array::new();
    for i in 0..matches.length() {
        let Some(element) = matches
            .get(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
            .filter(|el| el.shadow_root().is_none())
        else {
            continue;
        };
        upgraded.push(&JsValue::from(FivestarRating::new(element, None)?));
    }
    Ok(upgraded)
}
