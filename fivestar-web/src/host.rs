//! Browser display tree.
//!
//! The stars live in an open shadow root attached to the host element, so
//! page styles only reach them through the theme's custom properties.

use std::cell::RefCell;

use fivestar_core::{HostError, Node, PathEntry, RatingHost, RatingTheme, STAR_COUNT};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{
    CustomEvent, CustomEventInit, Element, Event, ShadowRoot, ShadowRootInit, ShadowRootMode,
};

use crate::dom;
use crate::template::{CONTAINER_CLASS, STAR_TAG, stars_markup};

/// Name of the change notification dispatched on the host element.
pub const CHANGE_EVENT: &str = "fivestar-change";

pub struct DomHost {
    element: Element,
    root: ShadowRoot,
    theme: RatingTheme,
    stars: RefCell<Vec<Element>>,
}

impl DomHost {
    /// Wrap `element`, attaching an open shadow root to it.
    ///
    /// # Errors
    /// Returns the browser's error when the element cannot host a shadow
    /// root, including when it already carries one. An element hosts at
    /// most one widget.
    pub fn attach(element: Element, theme: RatingTheme) -> Result<Self, JsValue> {
        let root = element.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;
        Ok(Self {
            element,
            root,
            theme,
            stars: RefCell::new(Vec::new()),
        })
    }

    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.element
    }

    #[must_use]
    pub const fn root(&self) -> &ShadowRoot {
        &self.root
    }

    /// Translate an event's composed path into star positions. Only SVG
    /// elements built by this host's template count as stars.
    #[must_use]
    pub fn path_entries(&self, event: &Event) -> Vec<PathEntry> {
        let stars = self.stars.borrow();
        event
            .composed_path()
            .iter()
            .map(|target| {
                target
                    .dyn_ref::<Element>()
                    .filter(|el| el.tag_name().eq_ignore_ascii_case(STAR_TAG))
                    .and_then(|el| stars.iter().position(|star| star == el))
                    .map_or(PathEntry::Other, PathEntry::Star)
            })
            .collect()
    }

    fn node(&self, node: Node) -> Option<Element> {
        match node {
            Node::Host => Some(self.element.clone()),
            Node::Star(index) => self.stars.borrow().get(index).cloned(),
        }
    }

    fn node_or_err(&self, node: Node) -> Result<Element, HostError> {
        self.node(node).ok_or(HostError::MissingNode(node))
    }
}

fn dom_error(err: &JsValue) -> HostError {
    HostError::Dom(dom::js_error_message(err))
}

impl RatingHost for DomHost {
    fn build_template(&self) -> Result<(), HostError> {
        self.root.set_inner_html(&format!(
            "<style>{}</style>{}",
            RatingTheme::stylesheet(),
            stars_markup()
        ));

        let overrides = self.theme.style_overrides();
        if !overrides.is_empty() {
            let container = self
                .root
                .query_selector(&format!(".{CONTAINER_CLASS}"))
                .map_err(|e| dom_error(&e))?
                .ok_or_else(|| HostError::Template("container missing".into()))?;
            container
                .set_attribute("style", &overrides)
                .map_err(|e| dom_error(&e))?;
        }

        let list = self
            .root
            .query_selector_all(STAR_TAG)
            .map_err(|e| dom_error(&e))?;
        let stars: Vec<Element> = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();
        if stars.len() != STAR_COUNT {
            return Err(HostError::Template(format!(
                "expected {STAR_COUNT} stars, found {}",
                stars.len()
            )));
        }
        *self.stars.borrow_mut() = stars;
        Ok(())
    }

    fn attribute(&self, node: Node, name: &str) -> Option<String> {
        self.node(node)?.get_attribute(name)
    }

    fn set_attribute(&self, node: Node, name: &str, value: &str) -> Result<(), HostError> {
        self.node_or_err(node)?
            .set_attribute(name, value)
            .map_err(|e| dom_error(&e))
    }

    fn remove_attribute(&self, node: Node, name: &str) -> Result<(), HostError> {
        self.node_or_err(node)?
            .remove_attribute(name)
            .map_err(|e| dom_error(&e))
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.node(node)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn set_class(&self, node: Node, class: &str, on: bool) -> Result<(), HostError> {
        self.node_or_err(node)?
            .class_list()
            .toggle_with_force(class, on)
            .map(|_| ())
            .map_err(|e| dom_error(&e))
    }

    fn dispatch_change(&self, value: i32) {
        let init = CustomEventInit::new();
        init.set_bubbles(false);
        init.set_detail(&JsValue::from(value));
        let dispatched = CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init)
            .and_then(|event| self.element.dispatch_event(&event));
        if let Err(err) = dispatched {
            dom::console_error(&format!(
                "Failed to dispatch {CHANGE_EVENT}: {}",
                dom::js_error_message(&err)
            ));
        }
    }
}
