//! Post-generation integrity checks.
//!
//! Generated keys are dense by construction, so foreign-key existence
//! reduces to a range scan over the child column. A violation here means a
//! generator produced a malformed table; the run must fail rather than hand
//! the table to a sink.

use std::collections::HashSet;

use tpchgen_api::Table;

use crate::constants::SUPPLIERS_PER_PART;
use crate::error::{GenerationError, TpchGenError};

/// Verifies the table carries exactly the row count its size rule demands.
pub fn check_row_count(table: &Table, expected: u64) -> Result<(), GenerationError> {
    if table.row_count() as u64 != expected {
        return Err(GenerationError::RowCountMismatch {
            table: table.name(),
            expected,
            actual: table.row_count() as u64,
        });
    }
    Ok(())
}

/// Verifies every value of a foreign-key column lies inside the dense key
/// range `[lower, upper]` of the referenced table.
pub fn check_key_range(
    table: &Table,
    column: &'static str,
    referenced: &'static str,
    lower: i64,
    upper: i64,
) -> Result<(), TpchGenError> {
    let keys = table
        .column(column)
        .and_then(|col| col.as_int64s())
        .ok_or_else(|| {
            TpchGenError::Dependency(format!(
                "table {} lacks Int64 column {column}",
                table.name()
            ))
        })?;
    if let Some(&bad) = keys.iter().find(|key| !(lower..=upper).contains(key)) {
        return Err(TpchGenError::Generation(
            GenerationError::ForeignKeyOutOfRange {
                table: table.name(),
                column,
                referenced,
                value: bad,
                lower,
                upper,
            },
        ));
    }
    Ok(())
}

/// Verifies each part's consecutive partsupp rows name distinct suppliers.
pub fn check_supplier_groups(part_supp: &Table) -> Result<(), TpchGenError> {
    let part_keys = part_supp
        .column("ps_partkey")
        .and_then(|col| col.as_int64s())
        .ok_or_else(|| {
            TpchGenError::Dependency("partsupp lacks Int64 column ps_partkey".to_string())
        })?;
    let supplier_keys = part_supp
        .column("ps_suppkey")
        .and_then(|col| col.as_int64s())
        .ok_or_else(|| {
            TpchGenError::Dependency("partsupp lacks Int64 column ps_suppkey".to_string())
        })?;

    for (parts, suppliers) in part_keys
        .chunks(SUPPLIERS_PER_PART)
        .zip(supplier_keys.chunks(SUPPLIERS_PER_PART))
    {
        let distinct: HashSet<i64> = suppliers.iter().copied().collect();
        if distinct.len() != suppliers.len() {
            return Err(TpchGenError::Generation(
                GenerationError::DuplicateSupplierAssignment {
                    part: parts[0],
                    distinct: distinct.len(),
                    expected: suppliers.len(),
                },
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use tpchgen_api::{Column, Table, TableSchema};

    use super::*;
    use crate::schema::PartSupp;

    fn part_supp_fixture(supplier_keys: Vec<i64>) -> Table {
        let rows = supplier_keys.len();
        let part_keys: Vec<i64> = (0..rows).map(|row| (row / 4 + 1) as i64).collect();
        Table::new(
            PartSupp::table_name(),
            PartSupp::fingerprint(),
            vec![
                (PartSupp::columns()[0], Column::from(part_keys)),
                (PartSupp::columns()[1], Column::from(supplier_keys)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_should_accept_correct_row_count() {
        let table = part_supp_fixture(vec![1, 2, 3, 4]);
        assert!(check_row_count(&table, 4).is_ok());
    }

    #[test]
    fn test_should_reject_wrong_row_count() {
        let table = part_supp_fixture(vec![1, 2, 3, 4]);
        let result = check_row_count(&table, 8);
        assert!(matches!(
            result,
            Err(GenerationError::RowCountMismatch {
                expected: 8,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_should_accept_keys_inside_range() {
        let table = part_supp_fixture(vec![1, 2, 3, 4]);
        assert!(check_key_range(&table, "ps_suppkey", "supplier", 1, 4).is_ok());
    }

    #[test]
    fn test_should_reject_keys_outside_range() {
        let table = part_supp_fixture(vec![1, 2, 3, 9]);
        let result = check_key_range(&table, "ps_suppkey", "supplier", 1, 4);
        assert!(matches!(
            result,
            Err(TpchGenError::Generation(
                GenerationError::ForeignKeyOutOfRange { value: 9, .. }
            ))
        ));
    }

    #[test]
    fn test_should_reject_missing_column() {
        let table = part_supp_fixture(vec![1]);
        let result = check_key_range(&table, "ps_availqty", "part", 1, 4);
        assert!(matches!(result, Err(TpchGenError::Dependency(_))));
    }

    #[test]
    fn test_should_accept_distinct_supplier_groups() {
        let table = part_supp_fixture(vec![1, 2, 3, 4, 2, 3, 4, 5]);
        assert!(check_supplier_groups(&table).is_ok());
    }

    #[test]
    fn test_should_reject_duplicate_suppliers_within_a_part() {
        let table = part_supp_fixture(vec![1, 2, 2, 4]);
        let result = check_supplier_groups(&table);
        assert!(matches!(
            result,
            Err(TpchGenError::Generation(
                GenerationError::DuplicateSupplierAssignment {
                    part: 1,
                    distinct: 3,
                    expected: 4,
                }
            ))
        ));
    }
}
