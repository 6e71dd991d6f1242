use rust_decimal::Decimal;

/// Money columns carry two fractional digits.
const MONEY_SCALE: u32 = 2;

/// Extended price per line:
/// `quantity × retail price × (1 − discount) × (1 + tax)`, rounded to the
/// money scale.
pub fn extended_price(
    quantities: &[Decimal],
    retail_prices: &[Decimal],
    discounts: &[Decimal],
    taxes: &[Decimal],
) -> Vec<Decimal> {
    debug_assert_eq!(quantities.len(), retail_prices.len());
    debug_assert_eq!(quantities.len(), discounts.len());
    debug_assert_eq!(quantities.len(), taxes.len());
    quantities
        .iter()
        .zip(retail_prices)
        .zip(discounts)
        .zip(taxes)
        .map(|(((quantity, price), discount), tax)| {
            (quantity * price * (Decimal::ONE - discount) * (Decimal::ONE + tax))
                .round_dp(MONEY_SCALE)
        })
        .collect()
}

/// Total price per order: the segment sum of the exploded line extended
/// prices, one segment per parent order.
pub fn total_price(extended_prices: &[Decimal], line_counts: &[i32]) -> Vec<Decimal> {
    let mut totals = Vec::with_capacity(line_counts.len());
    let mut offset = 0usize;
    for &count in line_counts {
        let lines = count.max(0) as usize;
        let total: Decimal = extended_prices[offset..offset + lines].iter().sum();
        totals.push(total.round_dp(MONEY_SCALE));
        offset += lines;
    }
    debug_assert_eq!(offset, extended_prices.len());
    totals
}

/// Retail price as a deterministic function of the part key:
/// `(90000 + (key/10 mod 20001) + 100·(key mod 1000)) / 100`.
pub fn retail_price(part_keys: &[i64]) -> Vec<Decimal> {
    part_keys
        .iter()
        .map(|&key| {
            let cents = 90_000 + (key / 10) % 20_001 + 100 * (key % 1_000);
            Decimal::new(cents, MONEY_SCALE)
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(mantissa: i64, scale: u32) -> Decimal {
        Decimal::new(mantissa, scale)
    }

    #[test]
    fn test_should_compute_extended_price() {
        let prices = extended_price(
            &[Decimal::from(10)],
            &[dec(90_000, 2)], // 900.00
            &[dec(5, 2)],      // 0.05
            &[dec(8, 2)],      // 0.08
        );
        // 10 × 900.00 × 0.95 × 1.08 = 9234.00
        assert_eq!(prices, vec![dec(923_400, 2)]);
    }

    #[test]
    fn test_should_round_extended_price_to_money_scale() {
        let prices = extended_price(
            &[Decimal::from(1)],
            &[dec(100_01, 2)], // 100.01
            &[dec(3, 2)],      // 0.03
            &[dec(7, 2)],      // 0.07
        );
        assert_eq!(prices[0].scale(), 2);
        // 100.01 × 0.97 × 1.07 = 103.800379 → 103.80
        assert_eq!(prices, vec![dec(10_380, 2)]);
    }

    #[test]
    fn test_should_sum_total_price_per_order() {
        let extended = [dec(100, 2), dec(250, 2), dec(375, 2)];
        let totals = total_price(&extended, &[2, 1]);
        assert_eq!(totals, vec![dec(350, 2), dec(375, 2)]);
    }

    #[test]
    fn test_should_total_empty_orders_as_zero() {
        let totals = total_price(&[], &[0, 0]);
        assert_eq!(totals, vec![Decimal::ZERO.round_dp(2); 2]);
    }

    #[test]
    fn test_should_derive_retail_price_from_part_key() {
        // key 1: 90000 + 0 + 100 = 90100 → 901.00
        // key 1000: 90000 + 100 + 0 = 90100 → 901.00
        // key 10: 90000 + 1 + 1000 = 91001 → 910.01
        let prices = retail_price(&[1, 1_000, 10]);
        assert_eq!(prices, vec![dec(90_100, 2), dec(90_100, 2), dec(91_001, 2)]);
    }

    #[test]
    fn test_should_keep_retail_price_within_band() {
        let keys: Vec<i64> = (1..=5_000).collect();
        let prices = retail_price(&keys);
        let lo = dec(90_000, 2);
        let hi = dec(209_900, 2);
        assert!(prices.iter().all(|p| *p >= lo && *p <= hi));
    }

    #[test]
    fn test_should_be_referentially_transparent() {
        let keys = [17i64, 42, 99];
        assert_eq!(retail_price(&keys), retail_price(&keys));
    }
}
