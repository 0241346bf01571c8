//! Initial rate table load.

use anyhow::Context;
use exchange_rates::{RateFeed, RateStore, load_table};

/// Fetches the first rate table before the listener is bound.
///
/// A failed fetch is fatal unless `allow_empty` is set, in which case the
/// service starts degraded with an empty table.
pub async fn load_initial_rates(
    feed: &dyn RateFeed,
    allow_empty: bool,
) -> anyhow::Result<RateStore> {
    match load_table(feed).await {
        Ok(table) => Ok(RateStore::new(table)),
        Err(e) if allow_empty => {
            tracing::warn!(error = %e, "Initial rate fetch failed, starting without rates");
            Ok(RateStore::empty(feed.base_currency()))
        }
        Err(e) => Err(e).context("initial rate fetch failed"),
    }
}
