//! Attribute store module.
//!
//! [`AttributeStore`] is the aggregate root: it owns base values, modifier
//! lists, cached results, and dirty state for every tracked attribute, plus
//! the observer registry. One store per logical entity, owned and accessed
//! by that entity's host alone - the store does no internal synchronization.
//!
//! The performance contract is lazy recompute: mutations only mark an
//! attribute dirty and notify observers; the first read after a mutation
//! runs the pipeline once, caches the result, and every following read is
//! O(1) until the next mutation. An attribute mutated once and read many
//! times per interval pays the pipeline cost once.

use crate::attribute_id::AttributeId;
use crate::breakdown::ValueBreakdown;
use crate::modifier::Modifier;
use crate::numeric::StatValue;
use crate::observer::{Observers, SubscriptionId};
use crate::pipeline;
use crate::source::SourceId;
use indexmap::IndexMap;
use log::{debug, trace};

/// Per-attribute bookkeeping.
///
/// Invariants: `modifiers` stays sorted by priority ascending (stable, so
/// ties keep insertion order), and `dirty == false` implies `cached` equals
/// the pipeline output for the current `base` and `modifiers`.
#[derive(Debug, Clone, Default)]
struct AttributeEntry {
    /// `None` until the first `set_base_value`; a read without a base
    /// returns 0 even when modifiers are present.
    base: Option<StatValue>,
    modifiers: Vec<Modifier>,
    cached: StatValue,
    dirty: bool,
}

/// Derives final attribute values from base values plus modifiers, with
/// dirty-flag caching and change notification.
///
/// Entries are created lazily the first time an attribute is touched by
/// [`set_base_value`](Self::set_base_value) or
/// [`add_modifier`](Self::add_modifier) and live as long as the store. The
/// entry map keeps first-touch order, so whole-store scans
/// ([`remove_modifiers_by_source`](Self::remove_modifiers_by_source)) and
/// the notifications they emit are deterministic.
///
/// Every mutation notifies observers - including setting an identical base
/// value twice. Notification means "this attribute's inputs changed", not
/// "its computed value changed"; observers that care about the value call
/// [`get_value`](Self::get_value) themselves.
///
/// Observer callbacks must not mutate the store they observe. Mutations
/// take `&mut self`, so the borrow checker rejects it for directly owned
/// stores; a store shared through `RefCell` fails at the `RefCell` layer.
/// See the [`observer`](crate::observer) module docs for the full policy.
///
/// # Examples
///
/// ```rust
/// use attrmod::{AttributeStore, Modifier, ModifierKind, SourceId};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Attr {
///     MoveSpeed,
/// }
///
/// let mut store = AttributeStore::new();
/// store.set_base_value(Attr::MoveSpeed, 5.0);
///
/// // An active skill grants +50% speed.
/// let focus = SourceId::new(1);
/// store.add_modifier(Attr::MoveSpeed, Modifier::new(0.5, ModifierKind::PercentAdd, focus));
/// assert_eq!(store.get_value(Attr::MoveSpeed), 7.5);
///
/// // The skill ends; its whole contribution is retracted.
/// store.remove_modifiers_by_source(focus);
/// assert_eq!(store.get_value(Attr::MoveSpeed), 5.0);
/// ```
pub struct AttributeStore<A: AttributeId> {
    entries: IndexMap<A, AttributeEntry>,
    observers: Observers<A>,
    recomputes: u64,
}

impl<A: AttributeId> AttributeStore<A> {
    /// Create an empty store with no attributes tracked.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            observers: Observers::new(),
            recomputes: 0,
        }
    }

    /// Set (or create) the base value for an attribute.
    ///
    /// Always marks the attribute dirty and notifies observers, even when
    /// the new base equals the old one: a mutation happened, whether or not
    /// the computed value moves.
    pub fn set_base_value(&mut self, id: A, value: StatValue) {
        let entry = self.entries.entry(id).or_default();
        entry.base = Some(value);
        entry.dirty = true;
        trace!("base value for {:?} set to {}", id, value);
        self.observers.notify(id);
    }

    /// Append a modifier to an attribute.
    ///
    /// The modifier list is re-sorted by priority ascending. The sort is
    /// stable, so modifiers with equal priority evaluate in insertion order
    /// - a correctness requirement, not an accident. Duplicate modifiers
    /// from the same source are legal and stack.
    pub fn add_modifier(&mut self, id: A, modifier: Modifier) {
        let entry = self.entries.entry(id).or_default();
        entry.modifiers.push(modifier);
        entry.modifiers.sort_by_key(|m| m.priority());
        entry.dirty = true;
        trace!("added {:?} to {:?}", modifier, id);
        self.observers.notify(id);
    }

    /// Remove every modifier granted by `source`, across all attributes.
    ///
    /// Each affected attribute is marked dirty and notified, in first-touch
    /// order, after all removals have landed. Returns whether anything was
    /// removed; `false` for an unknown source is a defined outcome, not an
    /// error.
    pub fn remove_modifiers_by_source(&mut self, source: SourceId) -> bool {
        let mut affected = Vec::new();
        for (id, entry) in self.entries.iter_mut() {
            let before = entry.modifiers.len();
            entry.modifiers.retain(|modifier| modifier.source() != source);
            if entry.modifiers.len() != before {
                entry.dirty = true;
                affected.push(*id);
            }
        }

        if !affected.is_empty() {
            debug!(
                "removed modifiers granted by {} from {} attribute(s)",
                source,
                affected.len()
            );
        }
        for id in &affected {
            self.observers.notify(*id);
        }
        !affected.is_empty()
    }

    /// Final computed value for an attribute.
    ///
    /// Returns 0 when no base value was ever set for `id`, even if
    /// modifiers are present - an untouched attribute is a defined default,
    /// not an error. Otherwise returns the cached value, recomputing it
    /// first when a mutation has landed since the last read.
    pub fn get_value(&mut self, id: A) -> StatValue {
        let entry = match self.entries.get_mut(&id) {
            Some(entry) => entry,
            None => return 0.0,
        };
        let base = match entry.base {
            Some(base) => base,
            None => return 0.0,
        };
        if !entry.dirty {
            return entry.cached;
        }

        let value = pipeline::compute(base, &entry.modifiers);
        entry.cached = value;
        entry.dirty = false;
        self.recomputes += 1;
        debug!("recomputed {:?}: {}", id, value);
        value
    }

    /// Fresh evaluation breakdown for an attribute.
    ///
    /// Recomputes from the current inputs without touching the cache or the
    /// dirty flag. `None` when no base value was ever set, so
    /// `breakdown(id).map_or(0.0, |b| b.value)` always agrees with
    /// [`get_value`](Self::get_value).
    pub fn breakdown(&self, id: A) -> Option<ValueBreakdown> {
        let entry = self.entries.get(&id)?;
        let base = entry.base?;
        Some(pipeline::compute_breakdown(base, &entry.modifiers))
    }

    /// Whether `id` has ever been touched by a mutation.
    pub fn is_tracked(&self, id: A) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of modifiers currently attached to `id`.
    pub fn modifier_count(&self, id: A) -> usize {
        self.entries.get(&id).map_or(0, |entry| entry.modifiers.len())
    }

    /// Number of pipeline evaluations this store has performed.
    ///
    /// Reads served from cache do not count. Exposes the caching contract
    /// for tests and profiling: mutate once, read twice, and this goes up
    /// by one.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Discard the cached value for one attribute.
    ///
    /// The next read recomputes. Does not notify: invalidation changes no
    /// inputs.
    pub fn invalidate(&mut self, id: A) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.dirty = true;
        }
    }

    /// Discard every cached value.
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.dirty = true;
        }
    }

    /// Register an observer.
    ///
    /// The callback receives the id of every attribute whose inputs change,
    /// once per mutation, in mutation order - the id only, never the value,
    /// so reads still go through the cache.
    pub fn subscribe(&mut self, callback: impl FnMut(A) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(callback))
    }

    /// Remove a previously registered observer.
    ///
    /// Returns whether the handle was still registered.
    pub fn unsubscribe(&mut self, handle: SubscriptionId) -> bool {
        self.observers.unsubscribe(handle)
    }
}

impl<A: AttributeId> Default for AttributeStore<A> {
    fn default() -> Self {
        Self::new()
    }
}
