//! The `customer` table.

use rust_decimal::Decimal;
use tpchgen_api::{Column, Table};

use crate::compute::{numbered_name, phone_number};
use crate::constants::{MARKET_SEGMENTS, NATION_COUNT};
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::random::{primary_key, random_choice, random_numeric, random_string};
use crate::schema::Customer;

const ADDRESS_LEN: (usize, usize) = (10, 40);
const COMMENT_LEN: (usize, usize) = (29, 116);

pub fn generate(ctx: &mut GenContext, count: u64) -> Result<Table, TpchGenError> {
    let rows = count as usize;
    let keys = primary_key(1, rows)?;
    let names = numbered_name("Customer#", &keys);
    let addresses = random_string(ctx, ADDRESS_LEN.0, ADDRESS_LEN.1, rows)?;
    let nation_keys = random_numeric::<i64>(ctx, 0, NATION_COUNT as i64 - 1, rows)?;
    let phones = phone_number(
        &nation_keys,
        &random_numeric::<i32>(ctx, 100, 999, rows)?,
        &random_numeric::<i32>(ctx, 100, 999, rows)?,
        &random_numeric::<i32>(ctx, 1_000, 9_999, rows)?,
    );
    let balances = random_numeric(
        ctx,
        Decimal::new(-99_999, 2),
        Decimal::new(999_999, 2),
        rows,
    )?;
    let segments: Vec<String> = random_choice(ctx, &MARKET_SEGMENTS, rows)?
        .into_iter()
        .map(str::to_string)
        .collect();
    let comments = random_string(ctx, COMMENT_LEN.0, COMMENT_LEN.1, rows)?;

    Ok(Table::from_schema::<Customer>(vec![
        Column::from(keys),
        Column::from(names),
        Column::from(addresses),
        Column::from(nation_keys),
        Column::from(phones),
        Column::from(balances),
        Column::from(segments),
        Column::from(comments),
    ])?)
}
