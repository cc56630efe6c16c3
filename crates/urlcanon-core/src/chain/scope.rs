//! Well-known scope tags a host may register normalizers under.
//!
//! Scopes are opaque to the normalizers themselves; they only select which
//! chain runs.

pub const DEFAULT: &str = "default";
pub const PARTITION: &str = "partition";
pub const GENERATE_HOST_COUNT: &str = "generate_host_count";
pub const FETCHER: &str = "fetcher";
pub const CRAWLDB: &str = "crawldb";
pub const LINKDB: &str = "linkdb";
pub const INJECT: &str = "inject";
pub const OUTLINK: &str = "outlink";
pub const INDEXER: &str = "indexer";

pub const ALL: &[&str] = &[
    DEFAULT,
    PARTITION,
    GENERATE_HOST_COUNT,
    FETCHER,
    CRAWLDB,
    LINKDB,
    INJECT,
    OUTLINK,
    INDEXER,
];
