//! Periodic rate table refresh.
//!
//! Off unless an interval is configured. A failed fetch leaves the
//! previously published table in place and is retried at the next tick.

use std::sync::Arc;
use std::time::Duration;

use exchange_rates::{RateFeed, RateStore};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawns a task that rebuilds the table from `feed` every `period`.
///
/// The first refresh happens one `period` after spawning; the initial load
/// is the caller's job.
pub fn spawn_refresh(
    store: Arc<RateStore>,
    feed: Arc<dyn RateFeed>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            refresh_once(&store, feed.as_ref()).await;
        }
    })
}

/// Runs one refresh, logging the outcome.
pub async fn refresh_once(store: &RateStore, feed: &dyn RateFeed) -> bool {
    match store.refresh(feed).await {
        Ok(table) => {
            tracing::info!(
                currencies = table.len(),
                published = ?table.published(),
                "Rate table refreshed"
            );
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rate refresh failed, keeping previous table");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use exchange_rates::{FeedError, FeedSnapshot, RateTable, RawRate};

    /// Alternates between a good snapshot and a transport failure.
    struct FlakyFeed {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl RateFeed for FlakyFeed {
        fn base_currency(&self) -> &str {
            "EUR"
        }

        async fn fetch(&self) -> Result<FeedSnapshot, FeedError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call % 2 == 0 {
                Ok(FeedSnapshot {
                    published: None,
                    rates: vec![RawRate::new("USD", format!("1.{}", call + 1))],
                })
            } else {
                Err(FeedError::Unavailable("connection reset".into()))
            }
        }
    }

    #[tokio::test]
    async fn test_refresh_once_keeps_table_on_failure() {
        let table = RateTable::build("EUR", vec![RawRate::new("USD", "1.0")]).unwrap();
        let store = RateStore::new(table);
        let feed = FlakyFeed {
            calls: AtomicUsize::new(0),
        };

        assert!(refresh_once(&store, &feed).await);
        assert_eq!(store.snapshot().lookup("USD"), Some(1.1));

        assert!(!refresh_once(&store, &feed).await);
        assert_eq!(store.snapshot().lookup("USD"), Some(1.1));

        assert!(refresh_once(&store, &feed).await);
        assert_eq!(store.snapshot().lookup("USD"), Some(1.3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_refresh_replaces_table() {
        let store = Arc::new(RateStore::empty("EUR"));
        let feed: Arc<dyn RateFeed> = Arc::new(FlakyFeed {
            calls: AtomicUsize::new(0),
        });

        let handle = spawn_refresh(Arc::clone(&store), feed, Duration::from_secs(60));
        assert!(store.snapshot().is_empty());

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(store.snapshot().lookup("USD"), Some(1.1));

        handle.abort();
    }
}
