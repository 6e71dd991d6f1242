//! The `nation` table: 25 fixed rows referencing `region`.

use tpchgen_api::{Column, Table};

use crate::constants::NATIONS;
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::random::{primary_key, random_string};
use crate::schema::Nation;

const COMMENT_LEN: (usize, usize) = (31, 114);

pub fn generate(ctx: &mut GenContext) -> Result<Table, TpchGenError> {
    let keys = primary_key(0, NATIONS.len())?;
    let names: Vec<String> = NATIONS.iter().map(|(name, _)| name.to_string()).collect();
    let region_keys: Vec<i64> = NATIONS.iter().map(|(_, region)| *region).collect();
    let comments = random_string(ctx, COMMENT_LEN.0, COMMENT_LEN.1, NATIONS.len())?;

    Ok(Table::from_schema::<Nation>(vec![
        Column::from(keys),
        Column::from(names),
        Column::from(region_keys),
        Column::from(comments),
    ])?)
}
