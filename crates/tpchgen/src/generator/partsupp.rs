//! The `partsupp` table: exactly four distinct suppliers per part.

use rust_decimal::Decimal;
use tpchgen_api::{Column, Table};

use crate::compute::partsupp_supplier;
use crate::constants::SUPPLIERS_PER_PART;
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::explode;
use crate::generator::expect_dependency;
use crate::random::{random_numeric, random_string, repeat_sequence};
use crate::schema::{Part, PartSupp};

const COMMENT_LEN: (usize, usize) = (49, 198);
const AVAIL_QTY_RANGE: (i32, i32) = (1, 9_999);

pub fn generate(
    ctx: &mut GenContext,
    part: &Table,
    supplier_count: u64,
) -> Result<Table, TpchGenError> {
    expect_dependency::<Part>(part)?;

    // each part contributes one row per round-robin slot
    let fan_out = vec![SUPPLIERS_PER_PART as i32; part.row_count()];
    let indices = explode::parent_indices(&fan_out)?;
    let rows = indices.len();

    let part_keys = part
        .column("p_partkey")
        .ok_or_else(|| TpchGenError::Dependency("part table lacks p_partkey".to_string()))?
        .gather(&indices)?;
    let slots = repeat_sequence(SUPPLIERS_PER_PART as i64, true, rows)?;
    let part_key_values = part_keys.as_int64s().ok_or_else(|| {
        TpchGenError::Dependency("p_partkey is not an Int64 column".to_string())
    })?;
    let supplier_keys = partsupp_supplier(part_key_values, &slots, supplier_count as i64);
    let avail_qtys = random_numeric::<i32>(ctx, AVAIL_QTY_RANGE.0, AVAIL_QTY_RANGE.1, rows)?;
    let supply_costs = random_numeric(
        ctx,
        Decimal::new(100, 2),
        Decimal::new(100_000, 2),
        rows,
    )?;
    let comments = random_string(ctx, COMMENT_LEN.0, COMMENT_LEN.1, rows)?;

    Ok(Table::from_schema::<PartSupp>(vec![
        part_keys,
        Column::from(supplier_keys),
        Column::from(avail_qtys),
        Column::from(supply_costs),
        Column::from(comments),
    ])?)
}
