//! Fixed TPC-H constants: row-count multipliers, value-distribution
//! parameters, the reference dates and the candidate word lists.

use tpchgen_api::Date;

/// Rows per scale-factor unit for each scaled table.
pub const SUPPLIER_BASE: f64 = 10_000.0;
pub const CUSTOMER_BASE: f64 = 150_000.0;
pub const PART_BASE: f64 = 200_000.0;
pub const ORDERS_BASE: f64 = 1_500_000.0;

/// Fixed-size table row counts.
pub const REGION_COUNT: usize = 5;
pub const NATION_COUNT: usize = 25;

/// Suppliers assigned to every part.
pub const SUPPLIERS_PER_PART: usize = 4;

/// Clerks per 1.0 of scale factor; orders reference `orders / 1_500` clerks.
pub const ORDERS_PER_CLERK: u64 = 1_500;

/// First possible order date.
pub const ORDER_DATE_MIN: Date = Date::new(1992, 1, 1);
/// Last possible order date: leaves room for the longest ship + receipt lag
/// before the end of the modelled period (1998-12-31).
pub const ORDER_DATE_MAX: Date = Date::new(1998, 8, 2);
/// The fixed "today" used by every status derivation.
pub const CURRENT_DATE: Date = Date::new(1995, 6, 17);

/// Day-offset bounds for the line item date columns, relative to the order
/// date (ship, commit) and the ship date (receipt).
pub const SHIP_LAG_DAYS: (i32, i32) = (1, 121);
pub const COMMIT_LAG_DAYS: (i32, i32) = (30, 90);
pub const RECEIPT_LAG_DAYS: (i32, i32) = (1, 30);

/// The five TPC-H regions, indexed by region key.
pub const REGIONS: [&str; REGION_COUNT] = ["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"];

/// The 25 TPC-H nations with their region keys, indexed by nation key.
pub const NATIONS: [(&str, i64); NATION_COUNT] = [
    ("ALGERIA", 0),
    ("ARGENTINA", 1),
    ("BRAZIL", 1),
    ("CANADA", 1),
    ("EGYPT", 4),
    ("ETHIOPIA", 0),
    ("FRANCE", 3),
    ("GERMANY", 3),
    ("INDIA", 2),
    ("INDONESIA", 2),
    ("IRAN", 4),
    ("IRAQ", 4),
    ("JAPAN", 2),
    ("JORDAN", 4),
    ("KENYA", 0),
    ("MOROCCO", 0),
    ("MOZAMBIQUE", 0),
    ("PERU", 1),
    ("CHINA", 2),
    ("ROMANIA", 3),
    ("SAUDI ARABIA", 4),
    ("VIETNAM", 2),
    ("RUSSIA", 3),
    ("UNITED KINGDOM", 3),
    ("UNITED STATES", 1),
];

pub const MARKET_SEGMENTS: [&str; 5] = [
    "AUTOMOBILE",
    "BUILDING",
    "FURNITURE",
    "MACHINERY",
    "HOUSEHOLD",
];

pub const ORDER_PRIORITIES: [&str; 5] = [
    "1-URGENT",
    "2-HIGH",
    "3-MEDIUM",
    "4-NOT SPECIFIED",
    "5-LOW",
];

pub const SHIP_INSTRUCTIONS: [&str; 4] = [
    "DELIVER IN PERSON",
    "COLLECT COD",
    "NONE",
    "TAKE BACK RETURN",
];

pub const SHIP_MODES: [&str; 7] = ["REG AIR", "AIR", "RAIL", "SHIP", "TRUCK", "MAIL", "FOB"];

pub const RETURN_FLAGS: [&str; 2] = ["R", "A"];

/// Words composing part names.
pub const PART_NAME_WORDS: [&str; 92] = [
    "almond", "antique", "aquamarine", "azure", "beige", "bisque", "black", "blanched", "blue",
    "blush", "brown", "burlywood", "burnished", "chartreuse", "chiffon", "chocolate", "coral",
    "cornflower", "cornsilk", "cream", "cyan", "dark", "deep", "dim", "dodger", "drab",
    "firebrick", "floral", "forest", "frosted", "gainsboro", "ghost", "goldenrod", "green",
    "grey", "honeydew", "hot", "indian", "ivory", "khaki", "lace", "lavender", "lawn", "lemon",
    "light", "lime", "linen", "magenta", "maroon", "medium", "metallic", "midnight", "mint",
    "misty", "moccasin", "navajo", "navy", "olive", "orange", "orchid", "pale", "papaya",
    "peach", "peru", "pink", "plum", "powder", "puff", "purple", "red", "rose", "rosy", "royal",
    "saddle", "salmon", "sandy", "seashell", "sienna", "sky", "slate", "smoke", "snow",
    "spring", "steel", "tan", "thistle", "tomato", "turquoise", "violet", "wheat", "white",
    "yellow",
];

/// Syllables composing part types, joined in order.
pub const TYPE_SYLLABLES_1: [&str; 6] =
    ["STANDARD", "SMALL", "MEDIUM", "LARGE", "ECONOMY", "PROMO"];
pub const TYPE_SYLLABLES_2: [&str; 5] = ["ANODIZED", "BURNISHED", "PLATED", "POLISHED", "BRUSHED"];
pub const TYPE_SYLLABLES_3: [&str; 5] = ["TIN", "NICKEL", "BRASS", "STEEL", "COPPER"];

/// Syllables composing part containers, joined in order.
pub const CONTAINER_SYLLABLES_1: [&str; 5] = ["SM", "LG", "MED", "JUMBO", "WRAP"];
pub const CONTAINER_SYLLABLES_2: [&str; 8] =
    ["CASE", "BOX", "BAG", "JAR", "PKG", "PACK", "CAN", "DRUM"];

/// Manufacturer family count; brands are one digit below a manufacturer.
pub const MANUFACTURER_COUNT: i32 = 5;
pub const BRANDS_PER_MANUFACTURER: i32 = 5;

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_keep_nation_region_keys_in_range() {
        assert!(
            NATIONS
                .iter()
                .all(|(_, region)| (0..REGION_COUNT as i64).contains(region))
        );
    }

    #[test]
    fn test_should_leave_room_for_date_lags() {
        let latest_receipt = ORDER_DATE_MAX
            .checked_add_days(SHIP_LAG_DAYS.1 + RECEIPT_LAG_DAYS.1)
            .unwrap();
        assert!(latest_receipt <= Date::new(1998, 12, 31));
    }

    #[test]
    fn test_should_span_current_date_with_order_dates() {
        assert!(ORDER_DATE_MIN < CURRENT_DATE);
        assert!(CURRENT_DATE < ORDER_DATE_MAX);
    }
}
