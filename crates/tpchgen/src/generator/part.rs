//! The `part` table.

use tpchgen_api::{Column, Table};

use crate::compute::{brand, join_words, manufacturer, retail_price};
use crate::constants::{
    BRANDS_PER_MANUFACTURER, CONTAINER_SYLLABLES_1, CONTAINER_SYLLABLES_2, MANUFACTURER_COUNT,
    PART_NAME_WORDS, TYPE_SYLLABLES_1, TYPE_SYLLABLES_2, TYPE_SYLLABLES_3,
};
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::random::{primary_key, random_choice, random_numeric, random_string};
use crate::schema::Part;

const COMMENT_LEN: (usize, usize) = (5, 22);
const SIZE_RANGE: (i32, i32) = (1, 50);

fn word_column(
    ctx: &mut GenContext,
    candidates: &[&str],
    rows: usize,
) -> Result<Vec<String>, TpchGenError> {
    Ok(random_choice(ctx, candidates, rows)?
        .into_iter()
        .map(str::to_string)
        .collect())
}

pub fn generate(ctx: &mut GenContext, count: u64) -> Result<Table, TpchGenError> {
    let rows = count as usize;
    let keys = primary_key(1, rows)?;
    let names = join_words(&[
        &word_column(ctx, &PART_NAME_WORDS, rows)?,
        &word_column(ctx, &PART_NAME_WORDS, rows)?,
    ]);
    let mfgr_numbers = random_numeric::<i32>(ctx, 1, MANUFACTURER_COUNT, rows)?;
    let mfgrs = manufacturer(&mfgr_numbers);
    let brands = brand(
        &mfgr_numbers,
        &random_numeric::<i32>(ctx, 1, BRANDS_PER_MANUFACTURER, rows)?,
    );
    let types = join_words(&[
        &word_column(ctx, &TYPE_SYLLABLES_1, rows)?,
        &word_column(ctx, &TYPE_SYLLABLES_2, rows)?,
        &word_column(ctx, &TYPE_SYLLABLES_3, rows)?,
    ]);
    let sizes = random_numeric::<i32>(ctx, SIZE_RANGE.0, SIZE_RANGE.1, rows)?;
    let containers = join_words(&[
        &word_column(ctx, &CONTAINER_SYLLABLES_1, rows)?,
        &word_column(ctx, &CONTAINER_SYLLABLES_2, rows)?,
    ]);
    let retail_prices = retail_price(&keys);
    let comments = random_string(ctx, COMMENT_LEN.0, COMMENT_LEN.1, rows)?;

    Ok(Table::from_schema::<Part>(vec![
        Column::from(keys),
        Column::from(names),
        Column::from(mfgrs),
        Column::from(brands),
        Column::from(types),
        Column::from(sizes),
        Column::from(containers),
        Column::from(retail_prices),
        Column::from(comments),
    ])?)
}
