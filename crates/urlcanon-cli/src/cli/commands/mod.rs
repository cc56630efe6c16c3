//! CLI command handlers, one per file.

mod batch;
mod normalize;
mod query;

pub use batch::{run_batch_command, OutputFormat};
pub use normalize::run_normalize;
pub use query::run_query;
