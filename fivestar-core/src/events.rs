//! Change notification listeners.

use std::rc::Rc;

use smallvec::SmallVec;

pub type ChangeCallback = Rc<dyn Fn(i32)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listeners for the change notification: any number of subscribers plus
/// one `on_change` slot that replaces its previous occupant.
#[derive(Default)]
pub struct ChangeListeners {
    next_id: u64,
    subscribers: SmallVec<[(ListenerId, ChangeCallback); 2]>,
    slot: Option<ChangeCallback>,
}

impl ChangeListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: ChangeCallback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Returns whether the listener was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Occupy or clear the `on_change` slot.
    pub fn set_slot(&mut self, callback: Option<ChangeCallback>) {
        self.slot = callback;
    }

    #[must_use]
    pub const fn has_slot(&self) -> bool {
        self.slot.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len() + usize::from(self.slot.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Callbacks to invoke for one emission. Taken as a snapshot so callers
    /// can release their borrow of the widget before running them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ChangeCallback> {
        self.subscribers
            .iter()
            .map(|(_, cb)| cb.clone())
            .chain(self.slot.clone())
            .collect()
    }
}
