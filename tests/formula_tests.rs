use attrmod::{pipeline, AttributeStore, Modifier, ModifierKind, SourceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Attr {
    AttackDamage,
    MoveSpeed,
}

/// The layered RPG formula, end to end: flat, then pooled additive
/// percentages, then independent multipliers.
#[test]
fn test_formula_concrete_case() {
    let mut store = AttributeStore::new();
    let rune = SourceId::new(1);

    store.set_base_value(Attr::AttackDamage, 10.0);
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(2.0, ModifierKind::Flat, rune),
    );
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(0.5, ModifierKind::PercentAdd, rune),
    );
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(0.25, ModifierKind::PercentAdd, rune),
    );

    // (10 + 2) * (1 + 0.75) = 21
    assert_eq!(store.get_value(Attr::AttackDamage), 21.0);

    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(1.0, ModifierKind::PercentMult, rune),
    );

    // 21 * (1 + 1.0) = 42
    assert_eq!(store.get_value(Attr::AttackDamage), 42.0);
}

/// Default per-kind priorities keep the formula order no matter what order
/// the host adds modifiers in.
#[test]
fn test_default_priorities_override_insertion_order() {
    let mut store = AttributeStore::new();
    let rune = SourceId::new(1);

    store.set_base_value(Attr::AttackDamage, 10.0);

    // Deliberately inserted backwards: multiplier first, flat last.
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(1.0, ModifierKind::PercentMult, rune),
    );
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(0.75, ModifierKind::PercentAdd, rune),
    );
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(2.0, ModifierKind::Flat, rune),
    );

    assert_eq!(store.get_value(Attr::AttackDamage), 42.0);

    let breakdown = store.breakdown(Attr::AttackDamage).unwrap();
    assert_eq!(breakdown.flat_total, 2.0);
    assert_eq!(breakdown.percent_add_sum, 0.75);
    assert_eq!(breakdown.multipliers, vec![2.0]);
}

/// Additive percentages pool; multiplicative percentages compound.
#[test]
fn test_pooling_versus_compounding() {
    let mut store = AttributeStore::new();
    let s1 = SourceId::new(1);
    let s2 = SourceId::new(2);

    store.set_base_value(Attr::MoveSpeed, 100.0);
    store.add_modifier(
        Attr::MoveSpeed,
        Modifier::new(0.1, ModifierKind::PercentAdd, s1),
    );
    store.add_modifier(
        Attr::MoveSpeed,
        Modifier::new(0.2, ModifierKind::PercentAdd, s2),
    );
    // +10% and +20% pool to +30%, not ×1.1×1.2.
    assert_eq!(store.get_value(Attr::MoveSpeed), 130.0);

    store.remove_modifiers_by_source(s1);
    store.remove_modifiers_by_source(s2);
    store.add_modifier(
        Attr::MoveSpeed,
        Modifier::new(0.1, ModifierKind::PercentMult, s1),
    );
    store.add_modifier(
        Attr::MoveSpeed,
        Modifier::new(0.2, ModifierKind::PercentMult, s2),
    );
    assert_eq!(store.get_value(Attr::MoveSpeed), 132.0);
}

/// Quantization keeps floating-point noise out of computed values.
#[test]
fn test_values_are_quantized() {
    let mut store = AttributeStore::new();
    let buff = SourceId::new(1);

    store.set_base_value(Attr::MoveSpeed, 0.1);
    store.add_modifier(
        Attr::MoveSpeed,
        Modifier::new(0.2, ModifierKind::Flat, buff),
    );
    assert_eq!(store.get_value(Attr::MoveSpeed), 0.3);

    store.set_base_value(Attr::MoveSpeed, 10.0);
    store.remove_modifiers_by_source(buff);
    store.add_modifier(
        Attr::MoveSpeed,
        Modifier::new(1.0 / 3.0, ModifierKind::PercentAdd, buff),
    );
    assert_eq!(store.get_value(Attr::MoveSpeed), 13.3333);
}

/// Non-finite inputs are not rejected; they propagate per IEEE 754.
#[test]
fn test_non_finite_inputs_propagate() {
    let mut store = AttributeStore::new();
    let buff = SourceId::new(1);

    store.set_base_value(Attr::MoveSpeed, f64::NAN);
    assert!(store.get_value(Attr::MoveSpeed).is_nan());

    store.set_base_value(Attr::AttackDamage, 10.0);
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(f64::INFINITY, ModifierKind::Flat, buff),
    );
    assert_eq!(store.get_value(Attr::AttackDamage), f64::INFINITY);
}

/// A store-produced breakdown matches a direct pipeline evaluation over the
/// same inputs.
#[test]
fn test_breakdown_matches_direct_pipeline_call() {
    let mut store = AttributeStore::new();
    let rune = SourceId::new(1);

    let modifiers = [
        Modifier::new(3.0, ModifierKind::Flat, rune),
        Modifier::new(0.5, ModifierKind::PercentAdd, rune),
        Modifier::new(0.25, ModifierKind::PercentMult, rune),
    ];

    store.set_base_value(Attr::AttackDamage, 7.5);
    for modifier in modifiers {
        store.add_modifier(Attr::AttackDamage, modifier);
    }

    let breakdown = store.breakdown(Attr::AttackDamage).unwrap();
    assert_eq!(breakdown, pipeline::compute_breakdown(7.5, &modifiers));
    assert_eq!(breakdown.value, store.get_value(Attr::AttackDamage));
}

/// Breakdowns are plain data: serializable for debug overlays and logs.
#[test]
fn test_breakdown_is_serializable() {
    let mut store = AttributeStore::new();
    let rune = SourceId::new(1);

    store.set_base_value(Attr::AttackDamage, 10.0);
    store.add_modifier(
        Attr::AttackDamage,
        Modifier::new(0.5, ModifierKind::PercentAdd, rune),
    );

    let breakdown = store.breakdown(Attr::AttackDamage).unwrap();
    let json = serde_json::to_value(&breakdown).unwrap();

    assert_eq!(json["base"], 10.0);
    assert_eq!(json["percent_add_sum"], 0.5);
    assert_eq!(json["value"], 15.0);
}
