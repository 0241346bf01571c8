//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use anyhow::Context;
use currency_types::CurrencyCode;
use exchange_rates::ECB_DAILY_URL;

/// Rate service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RateServiceConfig {
    pub port: u16,
    pub feed_url: String,
    pub feed_timeout: Duration,
    /// `None` disables periodic refresh.
    pub refresh_interval: Option<Duration>,
    /// Start with an empty table when the initial fetch fails.
    pub allow_empty_rates: bool,
    pub request_timeout: Duration,
}

impl RateServiceConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_or(&lookup, "PORT", 9092)?;
        let feed_url = lookup("RATE_FEED_URL").unwrap_or_else(|| ECB_DAILY_URL.to_string());
        let feed_timeout = Duration::from_secs(parse_or(&lookup, "RATE_FEED_TIMEOUT_SECS", 10)?);

        let refresh_interval = match lookup("RATE_REFRESH_SECS") {
            None => None,
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("RATE_REFRESH_SECS must be a number, got {raw:?}"))?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
        };

        let allow_empty_rates = parse_bool(&lookup, "ALLOW_EMPTY_RATES")?;
        let request_timeout = Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 5)?);

        Ok(Self {
            port,
            feed_url,
            feed_timeout,
            refresh_interval,
            allow_empty_rates,
            request_timeout,
        })
    }
}

/// Catalog service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub port: u16,
    pub currency_service_url: String,
    /// Deadline for each `GetRate` call.
    pub rate_call_timeout: Duration,
    pub base_currency: CurrencyCode,
    /// Origins allowed to call the catalog from a browser; empty allows any.
    pub allowed_origins: Vec<String>,
}

impl CatalogConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_or(&lookup, "PORT", 9090)?;
        let currency_service_url = lookup("CURRENCY_SERVICE_URL")
            .unwrap_or_else(|| "http://localhost:9092".to_string());
        let rate_call_timeout =
            Duration::from_millis(parse_or(&lookup, "RATE_CALL_TIMEOUT_MS", 2000)?);

        let base_currency = match lookup("CATALOG_BASE_CURRENCY") {
            Some(raw) => raw.trim().parse()?,
            None => CurrencyCode::EUR,
        };

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) if raw.trim() == "*" => Vec::new(),
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            None => vec!["http://localhost:3000".to_string()],
        };

        Ok(Self {
            port,
            currency_service_url,
            rate_call_timeout,
            base_currency,
            allowed_origins,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<bool> {
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => anyhow::bail!("{key} must be true or false, got {v:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_rate_service_defaults() {
        let config = RateServiceConfig::from_lookup(vars(&[])).unwrap();

        assert_eq!(config.port, 9092);
        assert_eq!(config.feed_url, ECB_DAILY_URL);
        assert_eq!(config.feed_timeout, Duration::from_secs(10));
        assert_eq!(config.refresh_interval, None);
        assert!(!config.allow_empty_rates);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rate_service_overrides() {
        let config = RateServiceConfig::from_lookup(vars(&[
            ("PORT", "8000"),
            ("RATE_FEED_URL", "http://localhost:1234/feed.xml"),
            ("RATE_REFRESH_SECS", "3600"),
            ("ALLOW_EMPTY_RATES", "true"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.feed_url, "http://localhost:1234/feed.xml");
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(3600)));
        assert!(config.allow_empty_rates);
    }

    #[test]
    fn test_zero_refresh_disables_refresh() {
        let config = RateServiceConfig::from_lookup(vars(&[("RATE_REFRESH_SECS", "0")])).unwrap();
        assert_eq!(config.refresh_interval, None);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(RateServiceConfig::from_lookup(vars(&[("PORT", "http")])).is_err());
        assert!(RateServiceConfig::from_lookup(vars(&[("ALLOW_EMPTY_RATES", "maybe")])).is_err());
        assert!(CatalogConfig::from_lookup(vars(&[("CATALOG_BASE_CURRENCY", "XXX")])).is_err());
    }

    #[test]
    fn test_catalog_defaults() {
        let config = CatalogConfig::from_lookup(vars(&[])).unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.currency_service_url, "http://localhost:9092");
        assert_eq!(config.rate_call_timeout, Duration::from_millis(2000));
        assert_eq!(config.base_currency, CurrencyCode::EUR);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_catalog_overrides() {
        let config = CatalogConfig::from_lookup(vars(&[
            ("CATALOG_BASE_CURRENCY", "usd"),
            ("RATE_CALL_TIMEOUT_MS", "250"),
            ("CORS_ALLOWED_ORIGINS", "*"),
        ]))
        .unwrap();

        assert_eq!(config.base_currency, CurrencyCode::USD);
        assert_eq!(config.rate_call_timeout, Duration::from_millis(250));
        assert!(config.allowed_origins.is_empty());
    }
}
