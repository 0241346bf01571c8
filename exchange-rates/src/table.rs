//! In-memory rate table built from a feed snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::FeedError;
use crate::feed::FeedSnapshot;

/// One (currency, rate) pair exactly as the feed published it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRate {
    pub currency: String,
    pub rate: String,
}

impl RawRate {
    pub fn new(currency: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            rate: rate.into(),
        }
    }
}

/// Mapping from currency code to "units per one unit of the base currency".
///
/// Immutable once built. Replacing rates means building a new table and
/// publishing it through [`crate::RateStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    rates: BTreeMap<String, f64>,
    published: Option<NaiveDate>,
}

impl RateTable {
    /// A table with no rates at all, not even the base.
    ///
    /// Used when the service starts without a successful fetch; every
    /// resolution against it fails.
    pub fn empty(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            rates: BTreeMap::new(),
            published: None,
        }
    }

    /// Builds a table from raw feed entries.
    ///
    /// The base currency is always stored at exactly 1.0, overriding any
    /// value the feed reports for it. The first entry whose rate does not
    /// parse, or is not a positive normal number, aborts the build.
    pub fn build(
        base: impl Into<String>,
        raw: impl IntoIterator<Item = RawRate>,
    ) -> Result<Self, FeedError> {
        let base = base.into().trim().to_uppercase();
        let mut rates = BTreeMap::new();

        for entry in raw {
            let currency = entry.currency.trim().to_uppercase();
            let rate: f64 = entry.rate.trim().parse().map_err(|_| FeedError::Parse {
                currency: currency.clone(),
                value: entry.rate.clone(),
            })?;

            if !rate.is_normal() || rate < 0.0 {
                return Err(FeedError::InvalidRate { currency, rate });
            }

            rates.insert(currency, rate);
        }

        rates.insert(base.clone(), 1.0);

        Ok(Self {
            base,
            rates,
            published: None,
        })
    }

    /// Builds a table from a fetched snapshot, carrying its publication date.
    pub fn from_snapshot(
        base: impl Into<String>,
        snapshot: FeedSnapshot,
    ) -> Result<Self, FeedError> {
        let mut table = Self::build(base, snapshot.rates)?;
        table.published = snapshot.published;
        Ok(table)
    }

    /// Returns the rate for `code`, or `None` when the table lacks it.
    pub fn lookup(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Publication date of the feed snapshot, when the feed reported one.
    pub fn published(&self) -> Option<NaiveDate> {
        self.published
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates rates in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}
