//! Table generators: one per TPC-H table, each composing column primitives
//! and derived-field computers under the table's row-count and
//! referential-integrity rules.

pub mod customer;
pub mod nation;
pub mod orders;
pub mod part;
pub mod partsupp;
pub mod region;
pub mod supplier;

use tpchgen_api::{Table, TableSchema};

use crate::error::TpchGenError;

/// Asserts that an upstream table handed to a generator is the dependency it
/// declares. A mismatch is an orchestration contract violation, not a data
/// error.
pub(crate) fn expect_dependency<S: TableSchema>(table: &Table) -> Result<(), TpchGenError> {
    if table.name() != S::table_name() || table.fingerprint() != S::fingerprint() {
        return Err(TpchGenError::Dependency(format!(
            "generator expected upstream table {}, got {}",
            S::table_name(),
            table.name()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::context::GenContext;
    use crate::schema::{Nation, Region};

    #[test]
    fn test_should_accept_matching_dependency() {
        let mut ctx = GenContext::seeded(1);
        let table = region::generate(&mut ctx).unwrap();
        assert!(expect_dependency::<Region>(&table).is_ok());
    }

    #[test]
    fn test_should_reject_wrong_dependency() {
        let mut ctx = GenContext::seeded(1);
        let table = region::generate(&mut ctx).unwrap();
        let result = expect_dependency::<Nation>(&table);
        assert!(matches!(result, Err(TpchGenError::Dependency(_))));
    }
}
