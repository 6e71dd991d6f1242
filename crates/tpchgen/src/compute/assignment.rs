/// Supplier assignment for a part and a round-robin slot over `S` suppliers:
/// `((key − 1 + (key − 1)/S + slot·(S/4)) mod S) + 1`.
///
/// The four slots are `S/4` apart, so for any `S ≥ 4` a part's slots land on
/// four distinct suppliers; the `(key − 1)/S` term rotates the whole group as
/// the key range wraps, keeping supplier usage near-uniform without touching
/// the slot spacing.
pub fn partsupp_supplier(part_keys: &[i64], slots: &[i64], supplier_count: i64) -> Vec<i64> {
    debug_assert_eq!(part_keys.len(), slots.len());
    debug_assert!(supplier_count >= 4);
    let step = supplier_count / 4;
    part_keys
        .iter()
        .zip(slots)
        .map(|(&key, &slot)| {
            let rotation = (key - 1) / supplier_count;
            (key - 1 + rotation + slot * step) % supplier_count + 1
        })
        .collect()
}
