//! CatalogService and PriceConverter unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use catalog_repo::InMemoryProductRepo;

    use currency_types::{
        AppError, CurrencyCode, ExchangeError, ExchangeRateProvider, ProductId, ProductRequest,
    };

    use crate::{CatalogService, PriceConverter};

    /// Provider backed by the EUR 1.0 / USD 1.10 / BRL 5.50 table, counting calls.
    pub struct FixedRates {
        calls: AtomicUsize,
    }

    impl FixedRates {
        pub fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn per_eur(code: CurrencyCode) -> Option<f64> {
            match code {
                CurrencyCode::EUR => Some(1.0),
                CurrencyCode::USD => Some(1.10),
                CurrencyCode::BRL => Some(5.50),
                _ => None,
            }
        }
    }

    #[async_trait]
    impl ExchangeRateProvider for FixedRates {
        async fn get_rate(
            &self,
            base: CurrencyCode,
            destination: CurrencyCode,
        ) -> Result<f64, ExchangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let base_rate = Self::per_eur(base).ok_or_else(|| ExchangeError::UnknownCurrency {
                message: format!("Rate not found for base currency {}", base),
            })?;
            let dest_rate =
                Self::per_eur(destination).ok_or_else(|| ExchangeError::UnknownCurrency {
                    message: format!("Rate not found for destination currency {}", destination),
                })?;
            Ok(dest_rate / base_rate)
        }
    }

    /// Provider that always fails with the given error.
    pub struct FailingRates(pub ExchangeError);

    #[async_trait]
    impl ExchangeRateProvider for FailingRates {
        async fn get_rate(
            &self,
            _base: CurrencyCode,
            _destination: CurrencyCode,
        ) -> Result<f64, ExchangeError> {
            Err(self.0.clone())
        }
    }

    fn catalog<P: ExchangeRateProvider>(provider: P) -> CatalogService<InMemoryProductRepo, P> {
        CatalogService::new(
            InMemoryProductRepo::seeded().unwrap(),
            PriceConverter::new(provider, CurrencyCode::EUR),
        )
    }

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_get_product_in_brl() {
        let service = catalog(FixedRates::new());

        let latte = service
            .get_product(id(1), Some(CurrencyCode::BRL))
            .await
            .unwrap();

        assert!((latte.price - 13.475).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_conversion_does_not_touch_stored_price() {
        let service = catalog(FixedRates::new());

        service
            .get_product(id(1), Some(CurrencyCode::USD))
            .await
            .unwrap();
        let stored = service.get_product(id(1), None).await.unwrap();

        assert_eq!(stored.price, 2.45);
    }

    #[tokio::test]
    async fn test_passthrough_makes_no_remote_call() {
        let service = catalog(FixedRates::new());

        let products = service.list_products(None).await.unwrap();
        let latte = service.get_product(id(1), None).await.unwrap();

        assert_eq!(products[0].price, 2.45);
        assert_eq!(latte.price, 2.45);
        assert_eq!(service.converter().provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_list_uses_one_rate_call() {
        let service = catalog(FixedRates::new());

        let products = service
            .list_products(Some(CurrencyCode::USD))
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert!((products[0].price - 2.695).abs() < 1e-9);
        assert!((products[1].price - 2.189).abs() < 1e-9);
        assert_eq!(service.converter().provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_currency_surfaces_as_upstream_error() {
        let service = catalog(FixedRates::new());

        let err = service
            .get_product(id(1), Some(CurrencyCode::JPY))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Upstream(msg) if msg == "Rate not found for destination currency JPY"
        ));
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_timeout() {
        let service = catalog(FailingRates(ExchangeError::Timeout(Duration::from_secs(2))));

        let err = service
            .list_products(Some(CurrencyCode::USD))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_unavailable_never_yields_a_price() {
        let service = catalog(FailingRates(ExchangeError::ServiceUnavailable(
            "connection refused".into(),
        )));

        let result = service.get_product(id(2), Some(CurrencyCode::USD)).await;

        assert!(matches!(result, Err(AppError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_overflowing_price_is_upstream_error() {
        let service = catalog(FixedRates::new());
        let huge = service
            .create_product(ProductRequest {
                name: "Huge".into(),
                description: String::new(),
                price: 1e308,
                sku: "abc-def-ghi".into(),
            })
            .await
            .unwrap();

        let err = service
            .get_product(huge.id, Some(CurrencyCode::BRL))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(ref msg) if msg.contains("out of range")));

        let err = service
            .list_products(Some(CurrencyCode::BRL))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));

        let stored = service.get_product(huge.id, None).await.unwrap();
        assert_eq!(stored.price, 1e308);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found_before_conversion() {
        let service = catalog(FixedRates::new());

        let err = service
            .get_product(id(42), Some(CurrencyCode::USD))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(msg) if msg == "Product 42"));
        assert_eq!(service.converter().provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let service = catalog(FixedRates::new());

        let created = service
            .create_product(ProductRequest {
                name: "Mocha".into(),
                description: "Chocolate and coffee".into(),
                price: 3.10,
                sku: "moc-cha-abc".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, id(3));

        let updated = service
            .update_product(
                created.id,
                ProductRequest {
                    name: "Mocha Grande".into(),
                    description: String::new(),
                    price: 3.60,
                    sku: "moc-cha-abc".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price, 3.60);

        service.delete_product(created.id).await.unwrap();
        let err = service.delete_product(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Product 3"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let service = catalog(FixedRates::new());

        let err = service
            .create_product(ProductRequest {
                name: "Mo".into(),
                description: String::new(),
                price: 3.10,
                sku: "moc-cha-abc".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
