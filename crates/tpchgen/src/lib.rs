//! # tpchgen
//!
//! A scale-parameterized generator for the eight-table TPC-H benchmark
//! dataset, built from batched column primitives and pure derived-field
//! computations.
//!
//! The entry point is [`TpchGenerator`](crate::prelude::TpchGenerator),
//! configured through [`GeneratorConfig`](crate::prelude::GeneratorConfig):
//!
//! ```rust
//! use tpchgen::prelude::*;
//!
//! let config = GeneratorConfig::default()
//!     .with_scale_factor(0.01)
//!     .with_seed(42);
//! let dataset = TpchGenerator::new(config).unwrap().generate().unwrap();
//! assert_eq!(dataset.orders.row_count(), 15_000);
//! ```
//!
//! Tables come out as [`tpchgen_api::Table`] values, ready to be handed to a
//! [`TableSink`](crate::prelude::TableSink) for persistence.

pub mod compute;
mod config;
pub mod constants;
mod context;
mod error;
pub mod explode;
pub mod generator;
mod integrity;
mod pipeline;
pub mod prelude;
pub mod random;
pub mod schema;
mod sink;

pub use self::config::{GeneratorConfig, TableCounts};
pub use self::context::GenContext;
pub use self::error::{ConfigError, GenerationError, SinkError, TpchGenError, TpchGenResult};
pub use self::pipeline::{TpchDataset, TpchGenerator};
pub use self::sink::{MemorySink, TableSink};
