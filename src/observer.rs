//! Change notification module.
//!
//! Observers subscribe to a store and are told which attribute's inputs
//! changed. Callbacks receive the attribute id only, never the value: a
//! consumer that wants the new value calls
//! [`get_value`](crate::AttributeStore::get_value), which keeps the
//! lazy-recompute contract intact.
//!
//! Dispatch is synchronous and FIFO - one fan-out per mutation, in mutation
//! order, with callbacks invoked in subscription order. Re-entrant mutation
//! from inside a callback is unrepresentable through the store's API
//! (mutations take `&mut self`, which dispatch already holds; a store shared
//! through `RefCell` fails at the `RefCell` layer). The registry still keeps
//! an in-dispatch flag: if an observer panics mid-fan-out and the store is
//! used again, the next operation fails fast instead of delivering
//! notifications out of order.

use crate::attribute_id::AttributeId;
use log::trace;

/// Handle identifying one subscription.
///
/// Returned by [`subscribe`](crate::AttributeStore::subscribe); pass it to
/// [`unsubscribe`](crate::AttributeStore::unsubscribe) to stop receiving
/// notifications. Handles are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Boxed observer callback, invoked with the id of the changed attribute.
pub type ChangeCallback<A> = Box<dyn FnMut(A)>;

/// Registry of observer callbacks for one store.
pub(crate) struct Observers<A: AttributeId> {
    entries: Vec<(SubscriptionId, ChangeCallback<A>)>,
    next_id: u64,
    dispatching: bool,
}

impl<A: AttributeId> Observers<A> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            dispatching: false,
        }
    }

    pub(crate) fn subscribe(&mut self, callback: ChangeCallback<A>) -> SubscriptionId {
        self.guard();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Returns whether the handle was still registered.
    pub(crate) fn unsubscribe(&mut self, handle: SubscriptionId) -> bool {
        self.guard();
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != handle);
        self.entries.len() != before
    }

    /// Fan one change event out to every registered callback.
    pub(crate) fn notify(&mut self, id: A) {
        self.guard();
        trace!("notifying {} observer(s) for {:?}", self.entries.len(), id);
        self.dispatching = true;
        for (_, callback) in self.entries.iter_mut() {
            callback(id);
        }
        self.dispatching = false;
    }

    /// Fail fast if a previous dispatch never completed.
    fn guard(&self) {
        assert!(
            !self.dispatching,
            "change notification dispatch was interrupted (an observer panicked); \
             the store's notification order can no longer be trusted"
        );
    }
}
