//! Change Notification Example
//!
//! This example demonstrates wiring a host system to attribute changes:
//! - Observers receive the id of the attribute whose inputs changed
//! - Values are pulled back through the store, keeping the cache contract
//! - Every mutation notifies, including a same-value base set
//!
//! Run with: `cargo run --example observers`

use attrmod::{AttributeStore, Modifier, ModifierKind, SourceId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Attr {
    MoveSpeed,
    MaxHealth,
}

fn main() {
    let mut stats = AttributeStore::new();

    // A movement system only cares about MoveSpeed; it records which
    // attributes it must re-read on its next tick.
    let pending = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&pending);
    stats.subscribe(move |id| {
        if id == Attr::MoveSpeed {
            sink.borrow_mut().push(id);
        }
    });

    // A debug overlay logs every change.
    stats.subscribe(|id| println!("overlay: {:?} changed", id));

    stats.set_base_value(Attr::MoveSpeed, 5.0);
    stats.set_base_value(Attr::MaxHealth, 100.0);

    // Re-applying the same base still counts as a mutation: observers are
    // told "inputs changed", not "value changed".
    stats.set_base_value(Attr::MaxHealth, 100.0);

    let boots = SourceId::new(1);
    stats.add_modifier(Attr::MoveSpeed, Modifier::new(0.2, ModifierKind::PercentAdd, boots));

    // The movement system drains its queue and reads current values.
    for id in pending.borrow_mut().drain(..) {
        println!("movement: re-reading {:?} -> {}", id, stats.get_value(id));
    }
}
