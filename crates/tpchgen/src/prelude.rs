//! Re-exports of the most commonly used types of this crate and of
//! `tpchgen-api`.

pub use tpchgen_api::prelude::*;

pub use crate::config::{GeneratorConfig, TableCounts};
pub use crate::context::GenContext;
pub use crate::error::{ConfigError, GenerationError, SinkError, TpchGenError, TpchGenResult};
pub use crate::pipeline::{TpchDataset, TpchGenerator};
pub use crate::sink::{MemorySink, TableSink};
