use std::sync::Arc;

use tokio::sync::RwLock;

/// Handle to the process-wide BTC/USD exchange rate (USD per 1 BTC).
///
/// Starts at `0.0` until the first successful refresh. Clones share the same
/// cell. Only the rate refresher writes to it, and the write lock is held just
/// for the assignment.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRate {
    inner: Arc<RwLock<f64>>,
}

impl ExchangeRate {
    pub fn new(initial: f64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub async fn get(&self) -> f64 {
        *self.inner.read().await
    }

    pub async fn set(&self, rate: f64) {
        *self.inner.write().await = rate;
    }
}
