//! Rate feed port.
//!
//! A feed produces raw (currency, rate) pairs; turning them into a
//! [`RateTable`] is done separately so ingestion failures never publish a
//! partial table.

use chrono::NaiveDate;

use crate::error::FeedError;
use crate::table::{RateTable, RawRate};

/// One fetched copy of a provider's rate table.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    /// Publication date reported by the provider, if any.
    pub published: Option<NaiveDate>,
    /// Entries in document order.
    pub rates: Vec<RawRate>,
}

/// Source of daily exchange rates.
#[async_trait::async_trait]
pub trait RateFeed: Send + Sync {
    /// The currency every fetched rate is expressed against.
    fn base_currency(&self) -> &str;

    /// Fetches the current snapshot.
    async fn fetch(&self) -> Result<FeedSnapshot, FeedError>;
}

/// Fetches a snapshot from `feed` and builds a table from it.
pub async fn load_table<F: RateFeed + ?Sized>(feed: &F) -> Result<RateTable, FeedError> {
    let snapshot = feed.fetch().await?;
    let table = RateTable::from_snapshot(feed.base_currency(), snapshot)?;

    tracing::info!(
        base = table.base(),
        currencies = table.len(),
        published = ?table.published(),
        "Rate table built"
    );

    Ok(table)
}
