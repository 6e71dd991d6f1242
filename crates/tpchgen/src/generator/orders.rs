//! The `orders` and `lineitem` tables, generated as a pair.
//!
//! Orders come first; every order then fans out into a random number of
//! lines through an explicit index-expansion step, so the Nth exploded row
//! carries its own line-level draws but the same parent order key as its
//! sibling lines.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use tpchgen_api::{Column, Table};

use crate::compute::{
    self, date_add, extended_price, line_status, numbered_name, order_status, return_flag,
    total_price,
};
use crate::constants::{
    COMMIT_LAG_DAYS, CURRENT_DATE, ORDER_DATE_MAX, ORDER_DATE_MIN, ORDER_PRIORITIES,
    ORDERS_PER_CLERK, RECEIPT_LAG_DAYS, RETURN_FLAGS, SHIP_INSTRUCTIONS, SHIP_LAG_DAYS,
    SHIP_MODES,
};
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::explode;
use crate::generator::expect_dependency;
use crate::random::{
    primary_key, random_choice, random_date, random_numeric, random_string, repeat_value,
};
use crate::schema::{LineItem, Orders, Part};

const ORDER_COMMENT_LEN: (usize, usize) = (19, 78);
const LINE_COMMENT_LEN: (usize, usize) = (10, 43);
const QUANTITY_RANGE: (i64, i64) = (1, 50);

/// Parameters of the orders/lineitem pair beyond the upstream tables.
#[derive(Debug, Clone)]
pub struct OrdersParams {
    pub order_count: u64,
    pub customer_count: u64,
    pub supplier_count: u64,
    pub line_count_range: RangeInclusive<i32>,
}

pub fn generate(
    ctx: &mut GenContext,
    params: &OrdersParams,
    part: &Table,
) -> Result<(Table, Table), TpchGenError> {
    expect_dependency::<Part>(part)?;

    let rows = params.order_count as usize;
    let order_keys = primary_key(1, rows)?;
    let customer_keys =
        random_numeric::<i64>(ctx, 1, params.customer_count.max(1) as i64, rows)?;
    let order_dates = random_date(ctx, ORDER_DATE_MIN, ORDER_DATE_MAX, rows)?;
    let line_counts = random_numeric::<i32>(
        ctx,
        *params.line_count_range.start(),
        *params.line_count_range.end(),
        rows,
    )?;

    // explode order-level columns to one row per line
    let parent = explode::parent_indices(&line_counts)?;
    let lines = parent.len();
    let line_order_keys = explode::gather(&order_keys, &parent);
    let line_order_dates = explode::gather(&order_dates, &parent);
    let line_numbers = explode::sequence_numbers(&line_counts);

    let part_count = part.row_count().max(1) as i64;
    let part_keys = random_numeric::<i64>(ctx, 1, part_count, lines)?;
    let slots = random_numeric::<i64>(ctx, 0, 3, lines)?;
    let supplier_keys =
        compute::partsupp_supplier(&part_keys, &slots, params.supplier_count.max(1) as i64);

    let quantities: Vec<Decimal> = random_numeric(
        ctx,
        Decimal::from(QUANTITY_RANGE.0),
        Decimal::from(QUANTITY_RANGE.1),
        lines,
    )?;
    let discounts = random_numeric(ctx, Decimal::new(0, 2), Decimal::new(10, 2), lines)?;
    let taxes = random_numeric(ctx, Decimal::new(0, 2), Decimal::new(8, 2), lines)?;

    // gather the retail price of the referenced part for the price formula
    let retail_column = part
        .column("p_retailprice")
        .ok_or_else(|| TpchGenError::Dependency("part table lacks p_retailprice".to_string()))?;
    let part_rows: Vec<usize> = part_keys.iter().map(|&key| (key - 1) as usize).collect();
    let retail_gathered = retail_column.gather(&part_rows)?;
    let retail_prices = retail_gathered.as_decimals().ok_or_else(|| {
        TpchGenError::Dependency("p_retailprice is not a Decimal column".to_string())
    })?;
    let extended_prices = extended_price(&quantities, retail_prices, &discounts, &taxes);

    let ship_dates = date_add(
        &line_order_dates,
        &random_numeric::<i32>(ctx, SHIP_LAG_DAYS.0, SHIP_LAG_DAYS.1, lines)?,
    )?;
    let commit_dates = date_add(
        &line_order_dates,
        &random_numeric::<i32>(ctx, COMMIT_LAG_DAYS.0, COMMIT_LAG_DAYS.1, lines)?,
    )?;
    let receipt_dates = date_add(
        &ship_dates,
        &random_numeric::<i32>(ctx, RECEIPT_LAG_DAYS.0, RECEIPT_LAG_DAYS.1, lines)?,
    )?;

    let line_statuses = line_status(&ship_dates, CURRENT_DATE);
    let returned: Vec<String> = random_choice(ctx, &RETURN_FLAGS, lines)?
        .into_iter()
        .map(str::to_string)
        .collect();
    let return_flags = return_flag(&receipt_dates, &returned, CURRENT_DATE);
    let ship_instructs: Vec<String> = random_choice(ctx, &SHIP_INSTRUCTIONS, lines)?
        .into_iter()
        .map(str::to_string)
        .collect();
    let ship_modes: Vec<String> = random_choice(ctx, &SHIP_MODES, lines)?
        .into_iter()
        .map(str::to_string)
        .collect();
    let line_comments = random_string(ctx, LINE_COMMENT_LEN.0, LINE_COMMENT_LEN.1, lines)?;

    // back-fill the order columns derived from their lines
    let order_statuses = order_status(&line_statuses, &line_counts);
    let total_prices = total_price(&extended_prices, &line_counts);
    let priorities: Vec<String> = random_choice(ctx, &ORDER_PRIORITIES, rows)?
        .into_iter()
        .map(str::to_string)
        .collect();
    let clerk_count = (params.order_count / ORDERS_PER_CLERK).max(1) as i64;
    let clerks = numbered_name("Clerk#", &random_numeric::<i64>(ctx, 1, clerk_count, rows)?);
    let ship_priorities = repeat_value(0i32, rows);
    let order_comments = random_string(ctx, ORDER_COMMENT_LEN.0, ORDER_COMMENT_LEN.1, rows)?;

    let orders = Table::from_schema::<Orders>(vec![
        Column::from(order_keys),
        Column::from(customer_keys),
        Column::from(order_statuses),
        Column::from(total_prices),
        Column::from(order_dates),
        Column::from(priorities),
        Column::from(clerks),
        Column::from(ship_priorities),
        Column::from(order_comments),
    ])?;

    let line_items = Table::from_schema::<LineItem>(vec![
        Column::from(line_order_keys),
        Column::from(part_keys),
        Column::from(supplier_keys),
        Column::from(line_numbers),
        Column::from(quantities),
        Column::from(extended_prices),
        Column::from(discounts),
        Column::from(taxes),
        Column::from(return_flags),
        Column::from(line_statuses),
        Column::from(ship_dates),
        Column::from(commit_dates),
        Column::from(receipt_dates),
        Column::from(ship_instructs),
        Column::from(ship_modes),
        Column::from(line_comments),
    ])?;

    Ok((orders, line_items))
}

#[cfg(test)]
mod tests {

    use std::collections::HashSet;

    use super::*;
    use crate::generator::part;

    fn params(order_count: u64) -> OrdersParams {
        OrdersParams {
            order_count,
            customer_count: 1_500,
            supplier_count: 100,
            line_count_range: 1..=7,
        }
    }

    fn fixture(order_count: u64) -> (Table, Table) {
        let mut ctx = GenContext::seeded(37);
        let part = part::generate(&mut ctx, 2_000).unwrap();
        generate(&mut ctx, &params(order_count), &part).unwrap()
    }

    #[test]
    fn test_should_generate_orders_and_aligned_lines() {
        let (orders, lines) = fixture(1_000);
        assert_eq!(orders.name(), "orders");
        assert_eq!(lines.name(), "lineitem");
        assert_eq!(orders.row_count(), 1_000);
        // between 1 and 7 lines per order
        assert!(lines.row_count() >= orders.row_count());
        assert!(lines.row_count() <= orders.row_count() * 7);
    }

    #[test]
    fn test_should_number_lines_within_each_order() {
        let (_, lines) = fixture(500);
        let order_keys = lines.column("l_orderkey").unwrap().as_int64s().unwrap();
        let numbers = lines.column("l_linenumber").unwrap().as_int32s().unwrap();
        for row in 0..order_keys.len() {
            if row == 0 || order_keys[row] != order_keys[row - 1] {
                assert_eq!(numbers[row], 1);
            } else {
                assert_eq!(numbers[row], numbers[row - 1] + 1);
            }
            assert!((1..=7).contains(&numbers[row]));
        }
    }

    #[test]
    fn test_should_reference_every_order_from_its_lines() {
        let (orders, lines) = fixture(300);
        let order_keys: HashSet<i64> = orders
            .column("o_orderkey")
            .unwrap()
            .as_int64s()
            .unwrap()
            .iter()
            .copied()
            .collect();
        let line_order_keys = lines.column("l_orderkey").unwrap().as_int64s().unwrap();
        assert!(line_order_keys.iter().all(|key| order_keys.contains(key)));
        // minimum line count is 1, so every order appears
        let referenced: HashSet<i64> = line_order_keys.iter().copied().collect();
        assert_eq!(referenced.len(), order_keys.len());
    }

    #[test]
    fn test_should_price_lines_from_the_referenced_part() {
        let mut ctx = GenContext::seeded(37);
        let part = part::generate(&mut ctx, 2_000).unwrap();
        let (_, lines) = generate(&mut ctx, &params(200), &part).unwrap();

        let retail = part.column("p_retailprice").unwrap().as_decimals().unwrap();
        let part_keys = lines.column("l_partkey").unwrap().as_int64s().unwrap();
        let quantities = lines.column("l_quantity").unwrap().as_decimals().unwrap();
        let discounts = lines.column("l_discount").unwrap().as_decimals().unwrap();
        let taxes = lines.column("l_tax").unwrap().as_decimals().unwrap();
        let extended = lines
            .column("l_extendedprice")
            .unwrap()
            .as_decimals()
            .unwrap();

        for row in 0..lines.row_count() {
            let price = retail[(part_keys[row] - 1) as usize];
            let expected = (quantities[row]
                * price
                * (Decimal::ONE - discounts[row])
                * (Decimal::ONE + taxes[row]))
                .round_dp(2);
            assert_eq!(extended[row], expected, "row {row}");
        }
    }

    #[test]
    fn test_should_sum_total_price_from_lines() {
        let (orders, lines) = fixture(200);
        let order_keys = lines.column("l_orderkey").unwrap().as_int64s().unwrap();
        let extended = lines
            .column("l_extendedprice")
            .unwrap()
            .as_decimals()
            .unwrap();
        let totals = orders.column("o_totalprice").unwrap().as_decimals().unwrap();

        let mut sums = vec![Decimal::ZERO; orders.row_count()];
        for (key, price) in order_keys.iter().zip(extended) {
            sums[(key - 1) as usize] += *price;
        }
        for (total, sum) in totals.iter().zip(&sums) {
            assert_eq!(total, sum);
        }
    }

    #[test]
    fn test_should_derive_statuses_from_dates() {
        let (orders, lines) = fixture(400);
        let ship_dates = lines.column("l_shipdate").unwrap().as_dates().unwrap();
        let line_statuses = lines.column("l_linestatus").unwrap().as_texts().unwrap();
        for (ship, status) in ship_dates.iter().zip(line_statuses) {
            let expected = if *ship > CURRENT_DATE { "O" } else { "F" };
            assert_eq!(status, expected);
        }

        let order_statuses = orders.column("o_orderstatus").unwrap().as_texts().unwrap();
        assert!(
            order_statuses
                .iter()
                .all(|status| ["F", "O", "P"].contains(&status.as_str()))
        );
    }

    #[test]
    fn test_should_order_line_dates_consistently() {
        let (_, lines) = fixture(300);
        let ship_dates = lines.column("l_shipdate").unwrap().as_dates().unwrap();
        let receipt_dates = lines.column("l_receiptdate").unwrap().as_dates().unwrap();
        for (ship, receipt) in ship_dates.iter().zip(receipt_dates) {
            assert!(ship < receipt, "receipt {receipt} not after ship {ship}");
        }
    }

    #[test]
    fn test_should_assign_suppliers_present_in_partsupp_formula() {
        let (_, lines) = fixture(300);
        let supplier_keys = lines.column("l_suppkey").unwrap().as_int64s().unwrap();
        assert!(supplier_keys.iter().all(|key| (1..=100).contains(key)));
    }
}
