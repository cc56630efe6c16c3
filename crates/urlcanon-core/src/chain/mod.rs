//! Scoped normalizer chains.
//!
//! A host registers normalizers per scope. Normalizing under a scope runs
//! that scope's normalizers in registration order, falling back to the
//! default scope's chain when the scope has none registered. The chain is
//! re-run until the output is stable or `loop_count` passes have run.

pub mod scope;

use crate::config::UrlcanonConfig;
use crate::error::NormalizeError;
use crate::normalize::{CanonicalNormalizer, UrlNormalizer};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of normalizers keyed by scope.
#[derive(Clone)]
pub struct NormalizerChain {
    chains: HashMap<String, Vec<Arc<dyn UrlNormalizer>>>,
    loop_count: usize,
}

impl Default for NormalizerChain {
    fn default() -> Self {
        Self::new(1)
    }
}

impl std::fmt::Debug for NormalizerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sizes: HashMap<&str, usize> = self
            .chains
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        f.debug_struct("NormalizerChain")
            .field("chains", &sizes)
            .field("loop_count", &self.loop_count)
            .finish()
    }
}

impl NormalizerChain {
    /// Empty registry. `loop_count` is clamped to at least one pass.
    pub fn new(loop_count: usize) -> Self {
        Self {
            chains: HashMap::new(),
            loop_count: loop_count.max(1),
        }
    }

    /// Registry with a [`CanonicalNormalizer`] under the default scope.
    pub fn from_config(cfg: &UrlcanonConfig) -> Self {
        let mut chain = Self::new(cfg.loop_count);
        chain.register(scope::DEFAULT, CanonicalNormalizer::from_config(cfg));
        chain
    }

    pub fn register<N>(&mut self, scope: &str, normalizer: N) -> &mut Self
    where
        N: UrlNormalizer + 'static,
    {
        self.chains
            .entry(scope.to_string())
            .or_default()
            .push(Arc::new(normalizer));
        self
    }

    pub fn loop_count(&self) -> usize {
        self.loop_count
    }

    /// Normalizers that run for `scope` (its own, else the default scope's).
    pub fn chain_for(&self, scope: &str) -> &[Arc<dyn UrlNormalizer>] {
        self.chains
            .get(scope)
            .filter(|c| !c.is_empty())
            .or_else(|| self.chains.get(scope::DEFAULT))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Run the chain for `scope` over `url`. The first error aborts.
    pub fn normalize(&self, url: &str, scope: &str) -> Result<String, NormalizeError> {
        let normalizers = self.chain_for(scope);
        let mut current = url.to_string();
        if normalizers.is_empty() {
            return Ok(current);
        }

        for pass in 1..=self.loop_count {
            let before = current.clone();
            for n in normalizers {
                current = n.normalize(&current, scope)?;
            }
            if current == before {
                break;
            }
            if pass == self.loop_count && pass > 1 {
                tracing::debug!(
                    scope = scope,
                    passes = pass,
                    "chain output still changing at loop limit"
                );
            }
        }
        Ok(current)
    }
}

impl UrlNormalizer for NormalizerChain {
    fn normalize(&self, url: &str, scope: &str) -> Result<String, NormalizeError> {
        NormalizerChain::normalize(self, url, scope)
    }
}
