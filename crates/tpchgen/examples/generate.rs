//! Generates a small dataset into a memory sink and prints the row counts.
//!
//! Run with `RUST_LOG=info cargo run --example generate`.

use tpchgen::prelude::*;

fn main() -> TpchGenResult<()> {
    env_logger::init();

    let config = GeneratorConfig::default().with_scale_factor(0.01);
    let mut generator = TpchGenerator::new(config)?;

    let mut sink = MemorySink::new();
    generator.generate_into(&mut sink)?;

    for table in sink.tables() {
        println!("{:<10} {:>10} rows", table.name(), table.row_count());
    }

    Ok(())
}
