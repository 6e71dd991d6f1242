/// Entity names padded to nine digits, e.g. `Supplier#000000001`.
pub fn numbered_name(prefix: &str, keys: &[i64]) -> Vec<String> {
    keys.iter()
        .map(|key| format!("{prefix}{key:09}"))
        .collect()
}

/// Phone numbers composed from a nation-dependent country code plus three
/// pre-drawn digit groups: `CC-GGG-GGG-GGGG`.
pub fn phone_number(
    nation_keys: &[i64],
    first_groups: &[i32],
    second_groups: &[i32],
    third_groups: &[i32],
) -> Vec<String> {
    debug_assert_eq!(nation_keys.len(), first_groups.len());
    debug_assert_eq!(nation_keys.len(), second_groups.len());
    debug_assert_eq!(nation_keys.len(), third_groups.len());
    nation_keys
        .iter()
        .zip(first_groups)
        .zip(second_groups)
        .zip(third_groups)
        .map(|(((nation, first), second), third)| {
            format!("{:02}-{first:03}-{second:03}-{third:04}", nation + 10)
        })
        .collect()
}

/// Manufacturer names from the pre-drawn family digit, e.g. `Manufacturer#3`.
pub fn manufacturer(mfgr_numbers: &[i32]) -> Vec<String> {
    mfgr_numbers
        .iter()
        .map(|number| format!("Manufacturer#{number}"))
        .collect()
}

/// Brand names consistent with the manufacturer digit, e.g. `Brand#34` for
/// manufacturer 3 and brand 4.
pub fn brand(mfgr_numbers: &[i32], brand_numbers: &[i32]) -> Vec<String> {
    debug_assert_eq!(mfgr_numbers.len(), brand_numbers.len());
    mfgr_numbers
        .iter()
        .zip(brand_numbers)
        .map(|(mfgr, brand)| format!("Brand#{mfgr}{brand}"))
        .collect()
}

/// Space-joined composition of equally-long word columns.
pub fn join_words(parts: &[&[String]]) -> Vec<String> {
    let Some(first) = parts.first() else {
        return Vec::new();
    };
    debug_assert!(parts.iter().all(|part| part.len() == first.len()));
    (0..first.len())
        .map(|row| {
            parts
                .iter()
                .map(|part| part[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
