use std::cell::RefCell;
use std::rc::Rc;

use fivestar_core::RatingTheme;
use fivestar_web::element::MountedRating;
use fivestar_web::host::CHANGE_EVENT;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{CustomEvent, Element, Event};

use crate::{as_i32, attr, click, host_element, next_turn, press, star};

/// Collects the detail of every change event the host dispatches.
fn record_changes(host: &Element) -> Rc<RefCell<Vec<i32>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(custom) = event.dyn_ref::<CustomEvent>() {
            sink.borrow_mut().push(as_i32(&custom.detail()));
        }
    });
    host.add_event_listener_with_callback(CHANGE_EVENT, listener.as_ref().unchecked_ref())
        .expect("listen for changes");
    listener.forget();
    seen
}

fn selected(host: &Element) -> usize {
    (0..5)
        .filter(|&i| star(host, i).class_list().contains("selected"))
        .count()
}

#[wasm_bindgen_test]
async fn mount_renders_five_stars_in_shadow_root() {
    let host = host_element(&[]);
    let mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    next_turn().await;

    let root = host.shadow_root().expect("shadow root");
    assert_eq!(root.query_selector_all("svg.star").expect("stars").length(), 5);
    assert_eq!(selected(&host), 0);
    assert_eq!(attr(&star(&host, 0), "tabindex").as_deref(), Some("0"));
    assert!(mounted.is_attached());
}

#[wasm_bindgen_test]
async fn value_attribute_at_creation_is_rendered() {
    let host = host_element(&[("value", "3")]);
    let mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    next_turn().await;

    assert_eq!(mounted.rating().value(), 3);
    assert_eq!(selected(&host), 3);
    assert_eq!(attr(&star(&host, 2), "aria-checked").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
async fn click_sets_value_and_dispatches_change() {
    let host = host_element(&[]);
    let mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    let changes = record_changes(&host);
    next_turn().await;

    click(&star(&host, 3));
    assert_eq!(mounted.rating().value(), 4);
    assert_eq!(*changes.borrow(), vec![4]);

    next_turn().await;
    assert_eq!(attr(&host, "value").as_deref(), Some("4"));
    assert_eq!(selected(&host), 4);
}

#[wasm_bindgen_test]
async fn activation_keys_select_and_consume_the_event() {
    let host = host_element(&[]);
    let mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    let changes = record_changes(&host);
    next_turn().await;

    assert!(!press(&star(&host, 1), "Enter"));
    assert!(!press(&star(&host, 4), " "));
    assert!(press(&star(&host, 0), "ArrowLeft"));

    assert_eq!(mounted.rating().value(), 5);
    assert_eq!(*changes.borrow(), vec![2, 5]);
}

#[wasm_bindgen_test]
async fn readonly_attribute_blocks_interaction() {
    let host = host_element(&[("value", "2"), ("readonly", "")]);
    let mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    let changes = record_changes(&host);
    next_turn().await;

    assert!(mounted.rating().readonly());
    assert_eq!(attr(&star(&host, 0), "tabindex").as_deref(), Some("-1"));

    click(&star(&host, 4));
    assert_eq!(mounted.rating().value(), 2);
    assert!(changes.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn page_attribute_edits_are_observed() {
    let host = host_element(&[]);
    let mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    let changes = record_changes(&host);
    next_turn().await;

    host.set_attribute("value", "5").expect("set value");
    host.set_attribute("readonly", "").expect("set readonly");
    next_turn().await;

    assert_eq!(mounted.rating().value(), 5);
    assert!(mounted.rating().readonly());
    assert_eq!(selected(&host), 5);
    assert!(changes.borrow().is_empty());

    host.remove_attribute("readonly").expect("remove readonly");
    next_turn().await;
    assert!(!mounted.rating().readonly());
}

#[wasm_bindgen_test]
async fn unmount_stops_listening() {
    let host = host_element(&[]);
    let mut mounted = MountedRating::mount(host.clone(), RatingTheme::default()).expect("mount");
    next_turn().await;

    mounted.unmount();
    mounted.unmount();
    assert!(!mounted.is_attached());

    click(&star(&host, 2));
    assert_eq!(mounted.rating().value(), 0);
}
