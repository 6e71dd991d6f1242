//! The `supplier` table.

use rust_decimal::Decimal;
use tpchgen_api::{Column, Table};

use crate::compute::{numbered_name, phone_number};
use crate::constants::NATION_COUNT;
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::random::{primary_key, random_numeric, random_string};
use crate::schema::Supplier;

const ADDRESS_LEN: (usize, usize) = (10, 40);
const COMMENT_LEN: (usize, usize) = (25, 100);

pub fn generate(ctx: &mut GenContext, count: u64) -> Result<Table, TpchGenError> {
    let rows = count as usize;
    let keys = primary_key(1, rows)?;
    let names = numbered_name("Supplier#", &keys);
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
    let comments = random_string(ctx, COMMENT_LEN.0, COMMENT_LEN.1, rows)?;

    Ok(Table::from_schema::<Supplier>(vec![
        Column::from(keys),
        Column::from(names),
        Column::from(addresses),
        Column::from(nation_keys),
        Column::from(phones),
        Column::from(balances),
        Column::from(comments),
    ])?)
}
