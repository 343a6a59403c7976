//! Ordered enhancer composition.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use catalog_core::result::AppResult;
use catalog_entity::user::User;

use super::TokenEnhancer;

/// Runs enhancers in registration order; later keys win on collision.
#[derive(Clone, Default)]
pub struct EnhancerChain {
    enhancers: Vec<Arc<dyn TokenEnhancer>>,
}

impl std::fmt::Debug for EnhancerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.enhancers.iter().map(|e| e.name()).collect();
        f.debug_struct("EnhancerChain")
            .field("enhancers", &names)
            .finish()
    }
}

impl EnhancerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an enhancer to the end of the chain.
    pub fn with(mut self, enhancer: Arc<dyn TokenEnhancer>) -> Self {
        self.enhancers.push(enhancer);
        self
    }

    /// Runs every enhancer and merges the results.
    ///
    /// The first failure aborts the chain and is returned as-is.
    pub async fn enhance(&self, principal: &User) -> AppResult<Map<String, Value>> {
        let mut merged = Map::new();
        for enhancer in &self.enhancers {
            let claims = enhancer.enhance(principal).await?;
            debug!(
                enhancer = enhancer.name(),
                claims = claims.len(),
                "Token enhancer applied"
            );
            merged.extend(claims);
        }
        Ok(merged)
    }
}
