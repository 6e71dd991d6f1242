//! The one-shot generation pipeline.
//!
//! Tables are generated in a fixed dependency order; each stage runs only
//! once every table it reads from has completed, and the first failure
//! aborts the remainder of the run.

use tpchgen_api::Table;

use crate::config::{GeneratorConfig, TableCounts};
use crate::constants::{NATION_COUNT, REGION_COUNT};
use crate::context::GenContext;
use crate::error::TpchGenResult;
use crate::generator::orders::OrdersParams;
use crate::generator::{customer, nation, orders, part, partsupp, region, supplier};
use crate::integrity;
use crate::sink::TableSink;

/// The eight finished tables of one generation run.
#[derive(Debug)]
pub struct TpchDataset {
    pub part: Table,
    pub part_supp: Table,
    pub supplier: Table,
    pub customer: Table,
    pub orders: Table,
    pub line_item: Table,
    pub nation: Table,
    pub region: Table,
}

impl TpchDataset {
    /// Iterates the tables in generation order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        [
            &self.part,
            &self.part_supp,
            &self.supplier,
            &self.customer,
            &self.orders,
            &self.line_item,
            &self.nation,
            &self.region,
        ]
        .into_iter()
    }

    /// Consumes the dataset into its tables, in generation order.
    pub fn into_tables(self) -> [Table; 8] {
        [
            self.part,
            self.part_supp,
            self.supplier,
            self.customer,
            self.orders,
            self.line_item,
            self.nation,
            self.region,
        ]
    }
}

/// The generation orchestrator: validates the configuration up front, then
/// runs the table generators in dependency order against one shared random
/// context.
#[derive(Debug)]
pub struct TpchGenerator {
    config: GeneratorConfig,
    counts: TableCounts,
    ctx: GenContext,
}

impl TpchGenerator {
    /// Creates a generator, failing fast on an invalid configuration before
    /// any generation starts.
    pub fn new(config: GeneratorConfig) -> TpchGenResult<Self> {
        config.validate()?;
        let counts = TableCounts::for_scale(config.scale_factor);
        let ctx = match config.seed {
            Some(seed) => GenContext::seeded(seed),
            None => GenContext::new(),
        };
        Ok(Self {
            config,
            counts,
            ctx,
        })
    }

    /// The row counts this generator will produce.
    pub fn counts(&self) -> TableCounts {
        self.counts
    }

    /// Runs the whole pipeline and returns the finished dataset.
    pub fn generate(&mut self) -> TpchGenResult<TpchDataset> {
        let counts = self.counts;

        log::info!(
            "generating TPC-H dataset at scale factor {}",
            self.config.scale_factor
        );

        log::info!("generating part ({} rows)", counts.part);
        let part = part::generate(&mut self.ctx, counts.part)?;
        integrity::check_row_count(&part, counts.part)?;

        log::info!("generating partsupp ({} rows)", counts.part_supp());
        let part_supp = partsupp::generate(&mut self.ctx, &part, counts.supplier)?;
        integrity::check_row_count(&part_supp, counts.part_supp())?;
        integrity::check_key_range(&part_supp, "ps_partkey", "part", 1, counts.part as i64)?;
        integrity::check_key_range(
            &part_supp,
            "ps_suppkey",
            "supplier",
            1,
            counts.supplier as i64,
        )?;
        integrity::check_supplier_groups(&part_supp)?;

        log::info!("generating supplier ({} rows)", counts.supplier);
        let supplier = supplier::generate(&mut self.ctx, counts.supplier)?;
        integrity::check_row_count(&supplier, counts.supplier)?;
        integrity::check_key_range(
            &supplier,
            "s_nationkey",
            "nation",
            0,
            NATION_COUNT as i64 - 1,
        )?;

        log::info!("generating customer ({} rows)", counts.customer);
        let customer = customer::generate(&mut self.ctx, counts.customer)?;
        integrity::check_row_count(&customer, counts.customer)?;
        integrity::check_key_range(
            &customer,
            "c_nationkey",
            "nation",
            0,
            NATION_COUNT as i64 - 1,
        )?;

        log::info!("generating orders ({} rows) and lineitem", counts.orders);
        let params = OrdersParams {
            order_count: counts.orders,
            customer_count: counts.customer,
            supplier_count: counts.supplier,
            line_count_range: self.config.order_line_range.clone(),
        };
        let (orders, line_item) = orders::generate(&mut self.ctx, &params, &part)?;
        integrity::check_row_count(&orders, counts.orders)?;
        integrity::check_key_range(&orders, "o_custkey", "customer", 1, counts.customer as i64)?;
        integrity::check_key_range(&line_item, "l_orderkey", "orders", 1, counts.orders as i64)?;
        integrity::check_key_range(&line_item, "l_partkey", "part", 1, counts.part as i64)?;
        integrity::check_key_range(
            &line_item,
            "l_suppkey",
            "supplier",
            1,
            counts.supplier as i64,
        )?;

        log::info!("generating nation ({NATION_COUNT} rows)");
        let nation = nation::generate(&mut self.ctx)?;
        integrity::check_row_count(&nation, NATION_COUNT as u64)?;

        log::info!("generating region ({REGION_COUNT} rows)");
        let region = region::generate(&mut self.ctx)?;
        integrity::check_row_count(&region, REGION_COUNT as u64)?;
        integrity::check_key_range(&nation, "n_regionkey", "region", 0, REGION_COUNT as i64 - 1)?;

        Ok(TpchDataset {
            part,
            part_supp,
            supplier,
            customer,
            orders,
            line_item,
            nation,
            region,
        })
    }

    /// Runs the pipeline and hands every finished table to the sink in
    /// generation order. Nothing reaches the sink if generation fails.
    pub fn generate_into<S: TableSink>(&mut self, sink: &mut S) -> TpchGenResult<()> {
        let dataset = self.generate()?;
        for table in dataset.into_tables() {
            let name = table.name();
            sink.consume(table)?;
            log::debug!("table {name} handed to sink");
        }
        Ok(())
    }
}
