#![cfg(target_arch = "wasm32")]

mod bindings_tests;
mod component_tests;
mod element_tests;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, EventTarget, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

use fivestar_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Fresh `<fivestar-rating>` host under `<body>`, with optional attributes.
pub fn host_element(attrs: &[(&str, &str)]) -> Element {
    let doc = dom::document().expect("document");
    let el = doc.create_element("fivestar-rating").expect("create host");
    for (name, value) in attrs {
        el.set_attribute(name, value).expect("set attribute");
    }
    doc.body()
        .expect("document body")
        .append_child(&el)
        .expect("append host");
    el
}

pub fn star(host: &Element, index: usize) -> Element {
    host.shadow_root()
        .expect("shadow root")
        .query_selector(&format!("svg[data-index='{index}']"))
        .expect("query star")
        .expect("star exists")
}

pub fn click(el: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

/// Returns whether the event's default action was left intact.
pub fn press(el: &Element, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_composed(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("key event");
    let target: EventTarget = el.clone().into();
    target.dispatch_event(&event).expect("dispatch key")
}

/// Let the deferred render run.
pub async fn next_turn() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let win = dom::window().expect("window");
        win.set_timeout_with_callback_and_timeout_and_arguments_0(resolve.unchecked_ref(), 10)
            .expect("schedule timeout");
    });
    JsFuture::from(promise).await.expect("timeout resolves");
}

pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}

pub fn as_i32(value: &JsValue) -> i32 {
    value.as_f64().map_or(-1, |v| v as i32)
}
