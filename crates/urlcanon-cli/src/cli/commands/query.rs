//! `urlcanon query <raw>` – canonical form of a query string.

use urlcanon_core::canonicalize_query;

pub fn run_query(raw: &str) {
    println!("{}", canonicalize_query(raw));
}
