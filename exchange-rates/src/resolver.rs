//! Cross-rate resolution over a [`RateTable`].

use crate::CurrencyCode;
use crate::error::{RateError, Side};
use crate::table::RateTable;

/// Resolves conversion rates between two codes of one table snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    table: &'a RateTable,
}

impl<'a> RateResolver<'a> {
    pub fn new(table: &'a RateTable) -> Self {
        Self { table }
    }

    /// Returns how many `destination` units one `base` unit buys.
    ///
    /// The base code is checked before the destination, so when both are
    /// unknown the error names the base.
    pub fn resolve(&self, base: &str, destination: &str) -> Result<f64, RateError> {
        if self.table.is_empty() {
            return Err(RateError::NoRates);
        }

        let base_rate = self
            .table
            .lookup(base)
            .ok_or_else(|| RateError::UnknownCurrency {
                code: base.to_string(),
                side: Side::Base,
            })?;

        let destination_rate =
            self.table
                .lookup(destination)
                .ok_or_else(|| RateError::UnknownCurrency {
                    code: destination.to_string(),
                    side: Side::Destination,
                })?;

        let rate = destination_rate / base_rate;
        if !rate.is_normal() {
            return Err(RateError::OutOfRange {
                base: base.to_string(),
                destination: destination.to_string(),
            });
        }

        Ok(rate)
    }

    /// Typed variant of [`RateResolver::resolve`].
    pub fn resolve_codes(
        &self,
        base: CurrencyCode,
        destination: CurrencyCode,
    ) -> Result<f64, RateError> {
        self.resolve(base.code(), destination.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawRate;

    const EPSILON: f64 = 1e-9;

    fn scenario_table() -> RateTable {
        RateTable::build(
            "EUR",
            vec![RawRate::new("USD", "1.10"), RawRate::new("BRL", "5.50")],
        )
        .unwrap()
    }

    #[test]
    fn test_base_to_destination() {
        let table = scenario_table();
        let rate = RateResolver::new(&table).resolve("EUR", "USD").unwrap();
        assert!((rate - 1.10).abs() < EPSILON);
    }

    #[test]
    fn test_cross_rate() {
        let table = scenario_table();
        let rate = RateResolver::new(&table).resolve("USD", "BRL").unwrap();
        assert!((rate - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_identity_rate() {
        let table = scenario_table();
        let resolver = RateResolver::new(&table);
        for (code, _) in table.iter() {
            assert_eq!(resolver.resolve(code, code).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_reciprocal_consistency() {
        let table = scenario_table();
        let resolver = RateResolver::new(&table);
        let codes: Vec<&str> = table.iter().map(|(c, _)| c).collect();

        for a in &codes {
            for b in &codes {
                let there = resolver.resolve(a, b).unwrap();
                let back = resolver.resolve(b, a).unwrap();
                assert!(
                    (there * back - 1.0).abs() < EPSILON,
                    "{a}->{b} and back should multiply to 1"
                );
            }
        }
    }

    #[test]
    fn test_extreme_cross_rate_is_out_of_range() {
        let table = RateTable::build(
            "EUR",
            vec![RawRate::new("AAA", "1e-300"), RawRate::new("BBB", "1e300")],
        )
        .unwrap();
        let resolver = RateResolver::new(&table);

        assert_eq!(
            resolver.resolve("AAA", "BBB").unwrap_err(),
            RateError::OutOfRange {
                base: "AAA".into(),
                destination: "BBB".into()
            }
        );
        assert!(resolver.resolve("BBB", "AAA").is_err());
        assert!(resolver.resolve("AAA", "EUR").unwrap().is_finite());
    }

    #[test]
    fn test_unknown_base() {
        let table = scenario_table();
        let err = RateResolver::new(&table).resolve("ZZZ", "USD").unwrap_err();
        assert_eq!(
            err,
            RateError::UnknownCurrency {
                code: "ZZZ".into(),
                side: Side::Base
            }
        );
    }

    #[test]
    fn test_unknown_destination() {
        let table = scenario_table();
        let err = RateResolver::new(&table).resolve("USD", "ZZZ").unwrap_err();
        assert_eq!(
            err,
            RateError::UnknownCurrency {
                code: "ZZZ".into(),
                side: Side::Destination
            }
        );
    }

    #[test]
    fn test_both_unknown_names_base_first() {
        let table = scenario_table();
        let err = RateResolver::new(&table).resolve("ZZZ", "YYY").unwrap_err();
        assert_eq!(err.code(), Some("ZZZ"));
        assert_eq!(err.to_string(), "Rate not found for base currency ZZZ");
    }

    #[test]
    fn test_empty_table_reports_no_rates() {
        let table = RateTable::empty("EUR");
        let err = RateResolver::new(&table).resolve("EUR", "EUR").unwrap_err();
        assert_eq!(err, RateError::NoRates);
    }

    #[test]
    fn test_enumerated_code_missing_from_table() {
        let table = scenario_table();
        let err = RateResolver::new(&table)
            .resolve_codes(CurrencyCode::EUR, CurrencyCode::RUB)
            .unwrap_err();
        assert_eq!(err.code(), Some("RUB"));
    }

    #[test]
    fn test_typed_resolution() {
        let table = scenario_table();
        let rate = RateResolver::new(&table)
            .resolve_codes(CurrencyCode::EUR, CurrencyCode::BRL)
            .unwrap();
        assert!((rate - 5.50).abs() < EPSILON);
    }
}
