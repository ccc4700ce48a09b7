//! RPG Buff Lifecycle Example
//!
//! This example demonstrates a character sheet backed by attrmod:
//! - Base stats set by the character definition
//! - Equipment granting flat and percentage modifiers
//! - A temporary ability buff stacking on top
//! - Source-scoped retraction when the buff ends and the item is unequipped
//! - Evaluation breakdowns for a damage tooltip
//!
//! Run with: `cargo run --example rpg`

use attrmod::{AttributeStore, Modifier, ModifierKind, SourceId};

/// The attributes this game tracks. attrmod never interprets these;
/// any `Copy + Eq + Hash + Debug` enum works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Attr {
    MaxHealth,
    MoveSpeed,
    AttackDamage,
}

fn print_sheet(store: &mut AttributeStore<Attr>) {
    println!("  max health:    {}", store.get_value(Attr::MaxHealth));
    println!("  move speed:    {}", store.get_value(Attr::MoveSpeed));
    println!("  attack damage: {}", store.get_value(Attr::AttackDamage));
}

fn main() {
    let mut stats = AttributeStore::new();

    // Naked character, no items.
    stats.set_base_value(Attr::MaxHealth, 100.0);
    stats.set_base_value(Attr::MoveSpeed, 5.0);
    stats.set_base_value(Attr::AttackDamage, 10.0);

    println!("naked:");
    print_sheet(&mut stats);

    // Equip a sword: +2 damage, +50% damage. One SourceId covers the item.
    let sword = SourceId::new(1);
    stats.add_modifier(Attr::AttackDamage, Modifier::new(2.0, ModifierKind::Flat, sword));
    stats.add_modifier(
        Attr::AttackDamage,
        Modifier::new(0.5, ModifierKind::PercentAdd, sword),
    );

    // Cast "Battle Fury": +25% damage (pools with the sword's +50%),
    // then a ×2.0 final-damage multiplier on top.
    let fury = SourceId::new(2);
    stats.add_modifier(
        Attr::AttackDamage,
        Modifier::new(0.25, ModifierKind::PercentAdd, fury),
    );
    stats.add_modifier(
        Attr::AttackDamage,
        Modifier::new(1.0, ModifierKind::PercentMult, fury),
    );

    println!("\nsword + battle fury:");
    print_sheet(&mut stats);

    // Tooltip: show how the damage value was reached.
    if let Some(breakdown) = stats.breakdown(Attr::AttackDamage) {
        println!("\ndamage breakdown:");
        println!("  base:            {}", breakdown.base);
        println!("  flat bonuses:    +{}", breakdown.flat_total);
        println!("  pooled percent:  +{}%", breakdown.percent_add_sum * 100.0);
        println!("  multipliers:     {:?}", breakdown.multipliers);
        println!("  final:           {}", breakdown.value);
    }

    // The buff expires. The host tracks duration; retraction is one call.
    stats.remove_modifiers_by_source(fury);
    println!("\nfury expired:");
    print_sheet(&mut stats);

    // Unequip the sword.
    stats.remove_modifiers_by_source(sword);
    println!("\nsword unequipped:");
    print_sheet(&mut stats);

    // Reads served from cache never touched the pipeline.
    println!("\npipeline evaluations: {}", stats.recompute_count());
}
