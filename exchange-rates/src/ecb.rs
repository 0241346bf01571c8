//! European Central Bank daily reference rate feed.
//!
//! The document nests one `Cube` per publication day inside an outer
//! `Cube`, and one `Cube currency=".." rate=".."` per currency inside each
//! day:
//!
//! ```xml
//! <gesmes:Envelope>
//!   <Cube>
//!     <Cube time="2024-03-15">
//!       <Cube currency="USD" rate="1.0876"/>
//!     </Cube>
//!   </Cube>
//! </gesmes:Envelope>
//! ```

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::FeedError;
use crate::feed::{FeedSnapshot, RateFeed};
use crate::table::RawRate;

/// Daily euro foreign exchange reference rates.
pub const ECB_DAILY_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Cube")]
    cube: Option<OuterCube>,
}

#[derive(Debug, Deserialize)]
struct OuterCube {
    #[serde(rename = "Cube", default)]
    days: Vec<DayCube>,
}

#[derive(Debug, Deserialize)]
struct DayCube {
    #[serde(rename = "@time")]
    time: Option<String>,
    #[serde(rename = "Cube", default)]
    rates: Vec<RateCube>,
}

#[derive(Debug, Deserialize)]
struct RateCube {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "@rate")]
    rate: String,
}

/// Parses an ECB reference rate document.
///
/// Only the first (most recent) day is taken; historical documents list
/// newer days first.
pub fn parse_ecb_document(xml: &str) -> Result<FeedSnapshot, FeedError> {
    let envelope: Envelope =
        quick_xml::de::from_str(xml).map_err(|e| FeedError::Malformed(e.to_string()))?;

    let day = envelope
        .cube
        .and_then(|outer| outer.days.into_iter().next())
        .ok_or(FeedError::Empty)?;

    if day.rates.is_empty() {
        return Err(FeedError::Empty);
    }

    let published = day
        .time
        .as_deref()
        .map(|t| {
            NaiveDate::parse_from_str(t.trim(), "%Y-%m-%d")
                .map_err(|e| FeedError::Malformed(format!("invalid publication date {t:?}: {e}")))
        })
        .transpose()?;

    let rates = day
        .rates
        .into_iter()
        .map(|cube| RawRate::new(cube.currency, cube.rate))
        .collect();

    Ok(FeedSnapshot { published, rates })
}

/// HTTP client for the ECB rate document.
pub struct EcbFeed {
    url: String,
    http: Client,
}

impl EcbFeed {
    /// Creates a feed client for `url` with a whole-request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let http = Client::builder()
            .user_agent(concat!("exchange-rates/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Unavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.into(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl RateFeed for EcbFeed {
    fn base_currency(&self) -> &str {
        crate::ECB_BASE_CURRENCY.code()
    }

    #[instrument(name = "EcbRateFetch", skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<FeedSnapshot, FeedError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::BadStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let snapshot = parse_ecb_document(&body)?;
        debug!(
            entries = snapshot.rates.len(),
            published = ?snapshot.published,
            "Received ECB rate document"
        );

        Ok(snapshot)
    }
}
