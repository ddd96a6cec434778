use crate::domain::model::CartState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type ObserverFn = dyn Fn(&CartState);

struct Entry {
    id: u64,
    callback: Rc<ObserverFn>,
}

type SubscriberList = Rc<RefCell<Vec<Entry>>>;

/// Synchronous observer list for cart snapshots.
///
/// Subscribers are invoked in registration order, once per state change,
/// before the mutating call returns. There is no buffering and no deferral.
pub struct ChangeNotifier {
    subscribers: SubscriberList,
    next_id: Cell<u64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&CartState) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push(Entry {
            id,
            callback: Rc::new(callback),
        });
        tracing::debug!(subscription = id, "Observer subscribed");
        Subscription {
            id,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Push `state` to every subscriber. The list is snapshotted up front so
    /// a subscription cancelled from inside a callback cannot shift entries
    /// out from under the iteration; anyone already cancelled this cycle is
    /// skipped, everyone else is still delivered to.
    pub fn notify(&self, state: &CartState) {
        let snapshot: Vec<(u64, Rc<ObserverFn>)> = self
            .subscribers
            .borrow()
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();

        for (id, callback) in snapshot {
            let still_subscribed = self.subscribers.borrow().iter().any(|entry| entry.id == id);
            if still_subscribed {
                callback(state);
            }
        }
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for one observer registration.
///
/// Cancelling (or dropping) removes the callback before the next delivery
/// cycle; doing so from inside a callback is safe.
pub struct Subscription {
    id: u64,
    subscribers: SubscriberList,
}

impl Subscription {
    pub fn cancel(self) {
        // Removal happens in Drop.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.subscribers
            .borrow_mut()
            .retain(|entry| entry.id != self.id);
        tracing::debug!(subscription = self.id, "Observer unsubscribed");
    }
}
