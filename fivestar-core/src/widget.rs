//! The rating widget.
//!
//! [`RatingElement`] owns the typed state (`value`, `readonly`), mirrors it
//! onto the host element's attributes, keeps the five stars in sync through
//! a coalesced render pass, and turns user activation into the change
//! notification. It is a cheap, cloneable handle; clones share one widget.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::attr::{
    AttrChange, READONLY_ATTR, VALUE_ATTR, format_readonly_attr, format_value_attr,
    parse_readonly_attr, parse_value_attr,
};
use crate::events::{ChangeCallback, ChangeListeners, ListenerId};
use crate::host::{HostError, Node, RatingHost, sync_attribute, sync_class};
use crate::input::{PropInput, coerce_readonly, coerce_value};
use crate::interaction::{KeyOutcome, PathEntry, is_activation_key, resolve_star};
use crate::schedule::{RenderQueue, Scheduler};
use crate::view::{
    ARIA_CHECKED, SELECTED_CLASS, STAR_COUNT, StarState, TAB_INDEX, star_states, star_value,
};

#[derive(Default)]
struct WidgetState {
    value: i32,
    readonly: bool,
    connected: bool,
    built: bool,
    render_passes: usize,
    listeners: ChangeListeners,
}

pub struct RatingElement<H: RatingHost> {
    host: Rc<H>,
    state: Rc<RefCell<WidgetState>>,
    queue: Rc<RenderQueue>,
    scheduler: Rc<dyn Scheduler>,
}

impl<H: RatingHost> Clone for RatingElement<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            state: self.state.clone(),
            queue: self.queue.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<H: RatingHost + 'static> RatingElement<H> {
    #[must_use]
    pub fn new(host: H, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            host: Rc::new(host),
            state: Rc::new(RefCell::new(WidgetState::default())),
            queue: Rc::new(RenderQueue::new()),
            scheduler,
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The widget became part of the visible tree. Attributes already on
    /// the host are adopted and the first render is requested.
    pub fn on_mount(&self) {
        let value = parse_value_attr(self.host.attribute(Node::Host, VALUE_ATTR).as_deref());
        let readonly =
            parse_readonly_attr(self.host.attribute(Node::Host, READONLY_ATTR).as_deref());
        {
            let mut state = self.state.borrow_mut();
            state.value = value;
            state.readonly = readonly;
            state.connected = true;
        }
        log::debug!("fivestar mounted with value={value} readonly={readonly}");
        self.request_render();
    }

    /// The widget left the visible tree. A pending render is skipped; the
    /// stars persist and are refreshed on the next mount.
    pub fn on_unmount(&self) {
        self.state.borrow_mut().connected = false;
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }

    /// An observed attribute was changed by something other than the
    /// widget. The property follows; the attribute is left as written.
    /// Returns whether the widget's state changed.
    pub fn on_external_attribute_change(&self, name: &str, new_value: Option<&str>) -> bool {
        let Some(change) = AttrChange::from_name(name) else {
            return false;
        };
        log::debug!("fivestar observed external `{}` edit", change.name());
        let changed = {
            let mut state = self.state.borrow_mut();
            match change {
                AttrChange::Value => {
                    let value = parse_value_attr(new_value);
                    std::mem::replace(&mut state.value, value) != value
                }
                AttrChange::Readonly => {
                    let readonly = parse_readonly_attr(new_value);
                    std::mem::replace(&mut state.readonly, readonly) != readonly
                }
            }
        };
        if changed {
            self.request_render();
        }
        changed
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.state.borrow().value
    }

    /// Assign the rating. `Null` resets to `0`; input that does not read as
    /// a number becomes `0`. Never emits the change notification.
    pub fn set_value(&self, input: impl Into<PropInput>) {
        let value = coerce_value(&input.into());
        self.store_value(value.unwrap_or(0));
    }

    #[must_use]
    pub fn readonly(&self) -> bool {
        self.state.borrow().readonly
    }

    pub fn set_readonly(&self, input: impl Into<PropInput>) {
        let readonly = coerce_readonly(&input.into());
        self.state.borrow_mut().readonly = readonly;
        self.reflect(READONLY_ATTR, format_readonly_attr(readonly).as_deref());
        self.request_render();
    }

    fn store_value(&self, value: i32) {
        self.state.borrow_mut().value = value;
        self.reflect(VALUE_ATTR, format_value_attr(value).as_deref());
        self.request_render();
    }

    fn reflect(&self, name: &str, text: Option<&str>) {
        if let Err(err) = sync_attribute(self.host.as_ref(), Node::Host, name, text) {
            log::warn!("fivestar could not reflect `{name}`: {err}");
        }
    }

    /// Occupy the `on_change` slot, replacing any previous occupant, or
    /// clear it with `None`. Subscribers are unaffected.
    pub fn set_on_change(&self, callback: Option<ChangeCallback>) {
        self.state.borrow_mut().listeners.set_slot(callback);
    }

    #[must_use]
    pub fn has_on_change(&self) -> bool {
        self.state.borrow().listeners.has_slot()
    }

    pub fn subscribe(&self, callback: impl Fn(i32) + 'static) -> ListenerId {
        self.state.borrow_mut().listeners.subscribe(Rc::new(callback))
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.state.borrow_mut().listeners.unsubscribe(id)
    }

    fn emit_change(&self, value: i32) {
        let callbacks = {
            let state = self.state.borrow();
            if !state.listeners.is_empty() {
                let count = state.listeners.len();
                log::debug!("fivestar notifying {count} listener(s) of {value}");
            }
            state.listeners.snapshot()
        };
        self.host.dispatch_change(value);
        for callback in callbacks {
            callback(value);
        }
    }

    /// Pointer activation. Returns whether a star was selected.
    pub fn handle_click(&self, path: &[PathEntry]) -> bool {
        resolve_star(path).is_some_and(|index| self.activate(index))
    }

    /// Keyboard activation. Space and Enter are claimed whenever the widget
    /// is interactive; they select a star only when one is in the path.
    pub fn handle_keydown(&self, key: &str, path: &[PathEntry]) -> KeyOutcome {
        if !is_activation_key(key) || self.readonly() {
            return KeyOutcome::Ignored;
        }
        self.handle_click(path);
        KeyOutcome::Handled
    }

    /// Select the star at `index` as if the user had picked it.
    pub fn activate(&self, index: usize) -> bool {
        if index >= STAR_COUNT || self.readonly() {
            return false;
        }
        let value = star_value(index);
        self.store_value(value);
        self.emit_change(value);
        true
    }

    /// Ask for a render pass on the next turn. Requests made while one is
    /// pending are absorbed; the pass reads the state current when it runs.
    pub fn request_render(&self) {
        if !self.queue.request() {
            return;
        }
        let host = Rc::downgrade(&self.host);
        let state = Rc::downgrade(&self.state);
        let queue = self.queue.clone();
        self.scheduler.schedule(Box::new(move || {
            if !queue.take() {
                return;
            }
            flush(&host, &state);
        }));
    }

    #[must_use]
    pub fn render_pending(&self) -> bool {
        self.queue.is_pending()
    }

    /// Run a render pass immediately, absorbing any pending request.
    pub fn render_now(&self) {
        self.queue.take();
        render(self.host.as_ref(), &self.state);
    }

    #[must_use]
    pub fn render_passes(&self) -> usize {
        self.state.borrow().render_passes
    }
}

fn flush<H: RatingHost>(host: &Weak<H>, state: &Weak<RefCell<WidgetState>>) {
    let (Some(host), Some(state)) = (host.upgrade(), state.upgrade()) else {
        return;
    };
    if !state.borrow().connected {
        log::debug!("fivestar render skipped while unmounted");
        return;
    }
    render(host.as_ref(), &state);
}

fn render<H: RatingHost + ?Sized>(host: &H, state: &RefCell<WidgetState>) {
    let (value, readonly, built) = {
        let state = state.borrow();
        (state.value, state.readonly, state.built)
    };
    if !built {
        if let Err(err) = host.build_template() {
            log::warn!("fivestar template failed: {err}");
            return;
        }
        state.borrow_mut().built = true;
        log::debug!("fivestar template built");
    }

    for star in star_states(value, readonly) {
        if let Err(err) = render_star(host, &star) {
            log::warn!("fivestar could not render star {}: {err}", star.index);
        }
    }
    state.borrow_mut().render_passes += 1;
    log::debug!("fivestar rendered value={value} readonly={readonly}");
}

fn render_star<H: RatingHost + ?Sized>(host: &H, star: &StarState) -> Result<(), HostError> {
    let node = Node::Star(star.index);
    sync_class(host, node, SELECTED_CLASS, star.selected)?;
    sync_attribute(host, node, ARIA_CHECKED, Some(star.aria_checked()))?;
    sync_attribute(host, node, TAB_INDEX, Some(&star.tab_index.to_string()))?;
    Ok(())
}
