pub mod config;
pub mod logging;

pub mod chain;
pub mod components;
pub mod error;
pub mod normalize;
pub mod query;
pub mod schemes;

pub use chain::NormalizerChain;
pub use error::NormalizeError;
pub use normalize::{normalize, CanonicalNormalizer, TailReconciliation, UrlNormalizer};
pub use query::canonicalize_query;
