//! The `region` table: five fixed rows.

use tpchgen_api::{Column, Table};

use crate::constants::REGIONS;
use crate::context::GenContext;
use crate::error::TpchGenError;
use crate::random::{primary_key, random_string};
use crate::schema::Region;

const COMMENT_LEN: (usize, usize) = (31, 115);

pub fn generate(ctx: &mut GenContext) -> Result<Table, TpchGenError> {
    let keys = primary_key(0, REGIONS.len())?;
    let names: Vec<String> = REGIONS.iter().map(|name| name.to_string()).collect();
    let comments = random_string(ctx, COMMENT_LEN.0, COMMENT_LEN.1, REGIONS.len())?;

    Ok(Table::from_schema::<Region>(vec![
        Column::from(keys),
        Column::from(names),
        Column::from(comments),
    ])?)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_generate_five_fixed_regions() {
        let mut ctx = GenContext::seeded(7);
        let table = generate(&mut ctx).unwrap();
        assert_eq!(table.name(), "region");
        assert_eq!(table.row_count(), 5);
        assert_eq!(
            table.column("r_regionkey").unwrap().as_int64s().unwrap(),
            &[0, 1, 2, 3, 4]
        );
        assert_eq!(
            table.column("r_name").unwrap().as_texts().unwrap(),
            ["AFRICA", "AMERICA", "ASIA", "EUROPE", "MIDDLE EAST"]
        );
    }

    #[test]
    fn test_should_bound_region_comments() {
        let mut ctx = GenContext::seeded(7);
        let table = generate(&mut ctx).unwrap();
        let comments = table.column("r_comment").unwrap().as_texts().unwrap();
        assert!(comments.iter().all(|c| (31..=115).contains(&c.len())));
    }
}
