//! Generator configuration and the row-count function of the scale factor.

use std::ops::RangeInclusive;

use crate::constants::{
    CUSTOMER_BASE, ORDERS_BASE, PART_BASE, SUPPLIER_BASE, SUPPLIERS_PER_PART,
};
use crate::error::ConfigError;

/// Largest row count any single table may reach; keeps every key within the
/// dense `i64` primary-key space with room for the partsupp fan-out.
const MAX_TABLE_ROWS: f64 = (i64::MAX / 8) as f64;

/// Configuration of one generation run.
///
/// ## Example
///
/// ```rust
/// use tpchgen::prelude::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_scale_factor(0.01)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Dataset size multiplier relative to the TPC-H baseline.
    pub scale_factor: f64,
    /// Seed for the random context; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Inclusive bounds of the per-order line count draw.
    pub order_line_range: RangeInclusive<i32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            seed: None,
            order_line_range: 1..=7,
        }
    }
}

impl GeneratorConfig {
    /// Sets the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Sets a fixed seed, making runs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the per-order line count distribution bounds.
    pub fn with_order_line_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.order_line_range = range;
        self
    }

    /// Validates the configuration, failing fast before any generation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale_factor.is_nan()
            || !self.scale_factor.is_finite()
            || self.scale_factor <= 0.0
        {
            return Err(ConfigError::InvalidScaleFactor(self.scale_factor));
        }
        if self.scale_factor * ORDERS_BASE * 8.0 > MAX_TABLE_ROWS {
            return Err(ConfigError::ScaleFactorTooLarge(self.scale_factor));
        }
        if self.order_line_range.is_empty() || *self.order_line_range.start() < 1 {
            return Err(ConfigError::InvalidLineRange);
        }
        let counts = TableCounts::for_scale(self.scale_factor);
        if counts.supplier < SUPPLIERS_PER_PART as u64 {
            return Err(ConfigError::TooFewSuppliers(self.scale_factor));
        }
        Ok(())
    }
}

/// Deterministic per-table row counts for one scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub supplier: u64,
    pub customer: u64,
    pub part: u64,
    pub orders: u64,
}

impl TableCounts {
    /// Computes the scaled row counts, rounding to the nearest row.
    pub fn for_scale(scale_factor: f64) -> Self {
        Self {
            supplier: (scale_factor * SUPPLIER_BASE).round() as u64,
            customer: (scale_factor * CUSTOMER_BASE).round() as u64,
            part: (scale_factor * PART_BASE).round() as u64,
            orders: (scale_factor * ORDERS_BASE).round() as u64,
        }
    }

    /// PartSupp rows: parts times the fixed supplier fan-out.
    pub fn part_supp(&self) -> u64 {
        self.part * SUPPLIERS_PER_PART as u64
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_accept_default_config() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_should_reject_non_positive_scale_factors() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = GeneratorConfig::default().with_scale_factor(bad);
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidScaleFactor(_) | ConfigError::ScaleFactorTooLarge(_))
                ),
                "scale factor {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_should_reject_huge_scale_factors() {
        let config = GeneratorConfig::default().with_scale_factor(1e15);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ScaleFactorTooLarge(1e15))
        );
    }

    #[test]
    fn test_should_reject_bad_line_ranges() {
        #[allow(clippy::reversed_empty_ranges)]
        let empty = GeneratorConfig::default().with_order_line_range(5..=4);
        assert_eq!(empty.validate(), Err(ConfigError::InvalidLineRange));

        let zero_start = GeneratorConfig::default().with_order_line_range(0..=7);
        assert_eq!(zero_start.validate(), Err(ConfigError::InvalidLineRange));
    }

    #[test]
    fn test_should_reject_scale_factors_with_too_few_suppliers() {
        let config = GeneratorConfig::default().with_scale_factor(0.0001);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewSuppliers(0.0001))
        );
    }

    #[test]
    fn test_should_scale_row_counts() {
        let counts = TableCounts::for_scale(1.0);
        assert_eq!(counts.supplier, 10_000);
        assert_eq!(counts.customer, 150_000);
        assert_eq!(counts.part, 200_000);
        assert_eq!(counts.orders, 1_500_000);
        assert_eq!(counts.part_supp(), 800_000);

        let small = TableCounts::for_scale(0.01);
        assert_eq!(small.supplier, 100);
        assert_eq!(small.customer, 1_500);
        assert_eq!(small.part, 2_000);
        assert_eq!(small.orders, 15_000);

        let large = TableCounts::for_scale(10.0);
        assert_eq!(large.orders, 15_000_000);
        assert_eq!(large.part_supp(), 8_000_000);
        assert!(
            GeneratorConfig::default()
                .with_scale_factor(10.0)
                .validate()
                .is_ok()
        );
    }
}
