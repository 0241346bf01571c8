//! RateService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use currency_types::{AppError, CurrencyCode, RateRequest};
    use exchange_rates::{RateStore, RateTable, RatesStatus, RawRate};

    use crate::RateService;

    /// Service over a small fixed table.
    pub fn service() -> RateService {
        let table = RateTable::build(
            "EUR",
            vec![
                RawRate::new("USD", "1.10"),
                RawRate::new("BRL", "5.50"),
                RawRate::new("JPY", "160.0"),
            ],
        )
        .unwrap();
        RateService::new(Arc::new(RateStore::new(table)))
    }

    fn request(base: CurrencyCode, destination: CurrencyCode) -> RateRequest {
        RateRequest { base, destination }
    }

    #[test]
    fn test_get_rate_cross() {
        let response = service()
            .get_rate(request(CurrencyCode::USD, CurrencyCode::BRL))
            .unwrap();
        assert!((response.rate - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_get_rate_same_currency_is_one() {
        let response = service()
            .get_rate(request(CurrencyCode::JPY, CurrencyCode::JPY))
            .unwrap();
        assert_eq!(response.rate, 1.0);
    }

    #[test]
    fn test_get_rate_out_of_range_is_internal() {
        let table = RateTable::build(
            "EUR",
            vec![RawRate::new("USD", "1e-300"), RawRate::new("BRL", "1e300")],
        )
        .unwrap();
        let service = RateService::new(Arc::new(RateStore::new(table)));

        let err = service
            .get_rate(request(CurrencyCode::USD, CurrencyCode::BRL))
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(ref msg) if msg.contains("out of range")));
    }

    #[test]
    fn test_get_rate_from_feed_base() {
        let response = service()
            .get_rate(request(CurrencyCode::EUR, CurrencyCode::USD))
            .unwrap();
        assert!((response.rate - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_get_rate_missing_destination() {
        let err = service()
            .get_rate(request(CurrencyCode::USD, CurrencyCode::RUB))
            .unwrap_err();
        assert!(matches!(
            &err,
            AppError::NotFound(msg) if msg == "Rate not found for destination currency RUB"
        ));
    }

    #[test]
    fn test_get_rate_missing_base_reported_first() {
        let err = service()
            .get_rate(request(CurrencyCode::HRK, CurrencyCode::RUB))
            .unwrap_err();
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Rate not found for base currency HRK")
        );
    }

    #[test]
    fn test_get_rate_without_table_is_unavailable() {
        let service = RateService::new(Arc::new(RateStore::empty("EUR")));
        let err = service
            .get_rate(request(CurrencyCode::EUR, CurrencyCode::USD))
            .unwrap_err();
        assert!(matches!(err, AppError::Unavailable(_)));
        assert_eq!(service.health().status, RatesStatus::Degraded);
    }

    #[test]
    fn test_describe_lists_get_rate() {
        let describe = service().describe();
        assert_eq!(describe.services.len(), 1);
        assert_eq!(describe.services[0].name, "currency.Currency");
        assert_eq!(describe.services[0].methods[0].name, "GetRate");
        assert_eq!(describe.currencies.first(), Some(&CurrencyCode::EUR));
        assert_eq!(describe.currencies.len(), CurrencyCode::all().len());
    }

    #[test]
    fn test_listing_and_health() {
        let service = service();
        let listing = service.listing();
        assert_eq!(listing.base, "EUR");
        assert_eq!(listing.rates.get("EUR"), Some(&1.0));
        assert_eq!(listing.rates.len(), 4);

        let health = service.health();
        assert_eq!(health.status, RatesStatus::Ready);
        assert_eq!(health.currencies, 4);
    }

    #[test]
    fn test_swapped_table_is_seen_by_next_call() {
        let service = service();
        service.store().replace(
            RateTable::build("EUR", vec![RawRate::new("USD", "2.0")]).unwrap(),
        );
        let response = service
            .get_rate(request(CurrencyCode::EUR, CurrencyCode::USD))
            .unwrap();
        assert_eq!(response.rate, 2.0);
    }
}
