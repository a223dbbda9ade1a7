use fivestar_core::PropInput;
use fivestar_web::bindings::{FivestarRating, prop_input, upgrade_all};
use js_sys::{Function, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

use crate::{attr, click, host_element, next_turn, star};

#[wasm_bindgen_test]
fn prop_input_reads_loose_values() {
    assert_eq!(prop_input(&JsValue::NULL), PropInput::Null);
    assert_eq!(prop_input(&JsValue::UNDEFINED), PropInput::Null);
    assert_eq!(prop_input(&JsValue::TRUE), PropInput::Bool(true));
    assert_eq!(prop_input(&JsValue::from(2.0)), PropInput::Number(2.0));
    assert_eq!(
        prop_input(&JsValue::from_str("4")),
        PropInput::Text("4".to_string())
    );
}

#[wasm_bindgen_test]
async fn properties_accept_loose_values() {
    let host = host_element(&[]);
    let rating = FivestarRating::new(host.clone(), None).expect("construct");

    rating.set_value(&JsValue::from_str("3"));
    assert_eq!(rating.value(), 3);
    rating.set_value(&JsValue::from_str("soon"));
    assert_eq!(rating.value(), 0);
    rating.set_value(&JsValue::from(4.0));

    rating.set_readonly(&JsValue::from_str("true"));
    assert!(rating.readonly());
    rating.set_readonly(&JsValue::NULL);
    assert!(!rating.readonly());

    next_turn().await;
    assert_eq!(attr(&host, "value").as_deref(), Some("4"));
    assert_eq!(attr(&host, "readonly"), None);
}

fn global_number(name: &str) -> Option<f64> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_f64())
}

#[wasm_bindgen_test]
async fn onchange_receives_clicked_value() {
    let host = host_element(&[]);
    let mut rating = FivestarRating::new(host.clone(), None).expect("construct");
    let first = Function::new_with_args("value", "globalThis.fivestarFirst = value;");
    rating.set_onchange(&first.into());
    assert!(rating.onchange().is_function());
    next_turn().await;

    click(&star(&host, 1));
    assert_eq!(rating.value(), 2);
    assert_eq!(global_number("fivestarFirst"), Some(2.0));

    let second = Function::new_with_args("value", "globalThis.fivestarSecond = value;");
    rating.set_onchange(&second.into());
    click(&star(&host, 4));
    assert_eq!(global_number("fivestarSecond"), Some(5.0));
    assert_eq!(global_number("fivestarFirst"), Some(2.0));

    rating.set_onchange(&JsValue::from_str("not a function"));
    assert!(rating.onchange().is_null());
    click(&star(&host, 0));
    assert_eq!(rating.value(), 1);
    assert_eq!(global_number("fivestarSecond"), Some(5.0));
}

#[wasm_bindgen_test]
async fn invalid_theme_falls_back_to_defaults() {
    let host = host_element(&[]);
    let _rating = FivestarRating::new(host.clone(), Some("{not json".into())).expect("construct");
    next_turn().await;
    assert!(host.shadow_root().expect("shadow root").inner_html().contains("<svg"));
}

#[wasm_bindgen_test]
fn upgrade_all_mounts_every_match_once() {
    host_element(&[("class", "bulk-rating")]);
    host_element(&[("class", "bulk-rating")]);
    let upgraded = upgrade_all("fivestar-rating.bulk-rating").expect("upgrade");
    assert_eq!(upgraded.length(), 2);

    host_element(&[("class", "bulk-rating")]);
    let again = upgrade_all("fivestar-rating.bulk-rating").expect("upgrade again");
    assert_eq!(again.length(), 1);
    let settled = upgrade_all("fivestar-rating.bulk-rating").expect("upgrade settled");
    assert_eq!(settled.length(), 0);
}

#[wasm_bindgen_test]
async fn an_element_hosts_only_one_rating() {
    let host = host_element(&[]);
    let rating = FivestarRating::new(host.clone(), None).expect("construct");
    assert!(FivestarRating::new(host.clone(), None).is_err());
    next_turn().await;

    click(&star(&host, 2));
    assert_eq!(rating.value(), 3);
    assert_eq!(attr(&star(&host, 2), "aria-checked").as_deref(), Some("false"));
    next_turn().await;
    assert_eq!(attr(&star(&host, 2), "aria-checked").as_deref(), Some("true"));
}
