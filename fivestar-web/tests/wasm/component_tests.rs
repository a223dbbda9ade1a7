use std::cell::RefCell;
use std::rc::Rc;

use fivestar_core::RatingTheme;
use fivestar_web::components::{Rating, RatingProps};
use fivestar_web::dom;
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::Element;
use yew::prelude::*;

use crate::{attr, click, next_turn, press};

fn app_root() -> Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn props(value: i32, read_only: bool, picked: &Rc<RefCell<Vec<i32>>>) -> RatingProps {
    let sink = picked.clone();
    RatingProps {
        value,
        read_only,
        theme: RatingTheme::default(),
        class: Classes::new(),
        on_change: Callback::from(move |v: i32| sink.borrow_mut().push(v)),
    }
}

fn star_in(root: &Element, index: usize) -> Element {
    root.query_selector(&format!("svg[data-index='{index}']"))
        .expect("query star")
        .expect("star exists")
}

fn selected_in(root: &Element) -> u32 {
    root.query_selector_all("svg.selected")
        .expect("query selected")
        .length()
}

#[wasm_bindgen_test]
async fn clicking_a_star_emits_its_value() {
    let root = app_root();
    let picked = Rc::new(RefCell::new(Vec::new()));
    yew::Renderer::<Rating>::with_root_and_props(root.clone(), props(0, false, &picked)).render();
    next_turn().await;

    click(&star_in(&root, 2));
    next_turn().await;

    assert_eq!(*picked.borrow(), vec![3]);
    assert_eq!(selected_in(&root), 3);
    assert_eq!(attr(&star_in(&root, 2), "aria-checked").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
async fn space_and_enter_select_and_are_consumed() {
    let root = app_root();
    let picked = Rc::new(RefCell::new(Vec::new()));
    yew::Renderer::<Rating>::with_root_and_props(root.clone(), props(0, false, &picked)).render();
    next_turn().await;

    assert!(!press(&star_in(&root, 0), " "));
    assert!(!press(&star_in(&root, 3), "Enter"));
    assert!(press(&star_in(&root, 4), "ArrowRight"));
    assert!(press(&star_in(&root, 4), "a"));
    next_turn().await;

    assert_eq!(*picked.borrow(), vec![1, 4]);
    assert_eq!(selected_in(&root), 4);
}

#[wasm_bindgen_test]
async fn read_only_rating_ignores_pointer_and_keys() {
    let root = app_root();
    let picked = Rc::new(RefCell::new(Vec::new()));
    yew::Renderer::<Rating>::with_root_and_props(root.clone(), props(2, true, &picked)).render();
    next_turn().await;

    click(&star_in(&root, 4));
    assert!(press(&star_in(&root, 4), "Enter"));
    assert!(press(&star_in(&root, 0), " "));
    next_turn().await;

    assert!(picked.borrow().is_empty());
    assert_eq!(selected_in(&root), 2);
    assert_eq!(attr(&star_in(&root, 0), "tabindex").as_deref(), Some("-1"));
}

#[wasm_bindgen_test]
async fn parent_driven_value_never_emits() {
    let root = app_root();
    let picked = Rc::new(RefCell::new(Vec::new()));
    let mut app =
        yew::Renderer::<Rating>::with_root_and_props(root.clone(), props(1, false, &picked))
            .render();
    next_turn().await;
    assert_eq!(selected_in(&root), 1);

    app.update(props(4, false, &picked));
    next_turn().await;

    assert_eq!(selected_in(&root), 4);
    assert!(picked.borrow().is_empty());
}
