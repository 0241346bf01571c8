//! Published rate table with whole-table replacement.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::FeedError;
use crate::feed::{RateFeed, load_table};
use crate::table::RateTable;

/// Readiness of the published table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RatesStatus {
    /// Rates are loaded and lookups can succeed.
    Ready,
    /// No rates are loaded; every lookup fails.
    Degraded,
}

/// Owner of the currently published [`RateTable`].
///
/// Readers take an `Arc` snapshot and resolve against it without holding
/// the lock. Writers swap in a completely built table, so a reader sees
/// either the old table or the new one, never a mix.
#[derive(Debug)]
pub struct RateStore {
    current: RwLock<Arc<RateTable>>,
}

impl RateStore {
    pub fn new(table: RateTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// A store with nothing loaded (degraded start).
    pub fn empty(base: impl Into<String>) -> Self {
        Self::new(RateTable::empty(base))
    }

    /// Returns the currently published table.
    pub fn snapshot(&self) -> Arc<RateTable> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publishes `table`, returning the one it replaced.
    pub fn replace(&self, table: RateTable) -> Arc<RateTable> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(table))
    }

    pub fn status(&self) -> RatesStatus {
        if self.snapshot().is_empty() {
            RatesStatus::Degraded
        } else {
            RatesStatus::Ready
        }
    }

    /// Fetches and builds a fresh table, publishing it only on success.
    ///
    /// On any feed error the previously published table stays in place.
    pub async fn refresh<F: RateFeed + ?Sized>(
        &self,
        feed: &F,
    ) -> Result<Arc<RateTable>, FeedError> {
        let table = Arc::new(load_table(feed).await?);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::clone(&table);
        Ok(table)
    }
}
