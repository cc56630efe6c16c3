//! `urlcanon normalize <url>` – canonical form of one URL.

use anyhow::Result;
use urlcanon_core::NormalizerChain;

pub fn run_normalize(chain: &NormalizerChain, url: &str, scope: &str) -> Result<()> {
    let out = chain.normalize(url, scope)?;
    println!("{out}");
    Ok(())
}
