//! Binding a rating widget to a live DOM element.
//!
//! [`MountedRating`] wires the browser's side of the lifecycle to the core
//! widget: pointer and keyboard listeners on the shadow root, a
//! `MutationObserver` for attribute edits made by the page, and the mount
//! and unmount hooks.

use std::rc::Rc;

use fivestar_core::{OBSERVED_ATTRIBUTES, RatingElement, RatingTheme};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, KeyboardEvent, MutationObserver, MutationObserverInit, MutationRecord,
};

use crate::dom;
use crate::host::DomHost;
use crate::schedule::TimeoutScheduler;

type EventClosure = Closure<dyn FnMut(Event)>;
type ObserverClosure = Closure<dyn FnMut(Array, MutationObserver)>;

pub struct MountedRating {
    rating: RatingElement<DomHost>,
    listeners: Vec<(&'static str, EventClosure)>,
    observer: MutationObserver,
    _observer_callback: ObserverClosure,
    attached: bool,
}

impl MountedRating {
    /// Turn `element` into a rating widget and mount it.
    ///
    /// # Errors
    /// Returns the browser's error when the shadow root, listeners, or
    /// attribute observer cannot be installed.
    pub fn mount(element: Element, theme: RatingTheme) -> Result<Self, JsValue> {
        let host = DomHost::attach(element, theme)?;
        let rating = RatingElement::new(host, Rc::new(TimeoutScheduler));

        let listeners = vec![
            ("click", click_listener(&rating)),
            ("keydown", keydown_listener(&rating)),
        ];
        for (kind, listener) in &listeners {
            rating
                .host()
                .root()
                .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        }

        let observer_callback = attribute_observer(&rating);
        let observer = MutationObserver::new(observer_callback.as_ref().unchecked_ref())?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        let filter: Array = OBSERVED_ATTRIBUTES
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect();
        options.set_attribute_filter(&filter);
        observer.observe_with_options(rating.host().element(), &options)?;

        rating.on_mount();
        log::debug!("fivestar attached to <{}>", rating.host().element().tag_name());

        Ok(Self {
            rating,
            listeners,
            observer,
            _observer_callback: observer_callback,
            attached: true,
        })
    }

    #[must_use]
    pub const fn rating(&self) -> &RatingElement<DomHost> {
        &self.rating
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach listeners and the observer, then run the unmount hook. The
    /// rendered stars stay in place. Calling this twice is harmless.
    pub fn unmount(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.observer.disconnect();
        let root = self.rating.host().root();
        for (kind, listener) in &self.listeners {
            if let Err(err) =
                root.remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                dom::console_error(&format!(
                    "Failed to remove rating {kind} listener: {}",
                    dom::js_error_message(&err)
                ));
            }
        }
        self.rating.on_unmount();
    }
}

impl Drop for MountedRating {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn click_listener(rating: &RatingElement<DomHost>) -> EventClosure {
    let rating = rating.clone();
    Closure::new(move |event: Event| {
        let path = rating.host().path_entries(&event);
        rating.handle_click(&path);
    })
}

fn keydown_listener(rating: &RatingElement<DomHost>) -> EventClosure {
    let rating = rating.clone();
    Closure::new(move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let path = rating.host().path_entries(&event);
        if rating.handle_keydown(&key_event.key(), &path).is_handled() {
            event.prevent_default();
            event.stop_propagation();
        }
    })
}

fn attribute_observer(rating: &RatingElement<DomHost>) -> ObserverClosure {
    let rating = rating.clone();
    Closure::new(move |records: Array, _observer: MutationObserver| {
        for record in records.iter() {
            let Some(name) = record
                .dyn_ref::<MutationRecord>()
                .and_then(MutationRecord::attribute_name)
            else {
                continue;
            };
            // Records may be stale by now; the attribute's current text wins.
            let current = rating.host().element().get_attribute(&name);
            rating.on_external_attribute_change(&name, current.as_deref());
        }
    })
}
