use serde::{Deserialize, Serialize};

use hearth_core::DomainResult;

use crate::currency::Currency;

/// An amount of minor units in one of the supported currencies.
///
/// Immutable: `convert` and `add` return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Build an amount from a currency code (e.g. `"GBP"`).
    pub fn new(amount: i64, currency: &str) -> DomainResult<Self> {
        Ok(Self::of(amount, currency.parse()?))
    }

    pub fn of(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Convert to the currency named by `target`, going through USD.
    pub fn convert(&self, target: &str) -> DomainResult<Money> {
        Ok(self.convert_to(target.parse()?))
    }

    /// Convert to `target`, going through USD.
    ///
    /// Both legs truncate toward zero, so round trips can lose minor units.
    pub fn convert_to(&self, target: Currency) -> Money {
        let usd = self.currency.to_usd(self.amount.into());
        Money::of(saturate(target.from_usd(usd)), target)
    }

    /// Sum two amounts, denominated in `other`'s currency.
    ///
    /// Each operand is truncated to whole USD units before summing.
    pub fn add(&self, other: &Money) -> Money {
        let usd = self.currency.to_usd(self.amount.into())
            + other.currency.to_usd(other.amount.into());
        Money::of(saturate(other.currency.from_usd(usd)), other.currency)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

fn saturate(value: i128) -> i64 {
    value.clamp(i64::MIN.into(), i64::MAX.into()) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::DomainError;
    use proptest::prelude::*;

    fn usd(amount: i64) -> Money {
        Money::of(amount, Currency::Usd)
    }

    #[test]
    fn construction_accepts_supported_codes() {
        let money = Money::new(10, "GBP").unwrap();
        assert_eq!(money.amount(), 10);
        assert_eq!(money.currency(), Currency::Gbp);
    }

    #[test]
    fn construction_rejects_unsupported_code() {
        let err = Money::new(10, "JPY").unwrap_err();
        match err {
            DomainError::InvalidCurrency { desired } => assert_eq!(desired, "JPY"),
            _ => panic!("Expected InvalidCurrency"),
        }
    }

    #[test]
    fn convert_rejects_unsupported_target() {
        let err = usd(10).convert("XYZ").unwrap_err();
        assert_eq!(err, DomainError::invalid_currency("XYZ"));
    }

    #[test]
    fn usd_to_other_currencies() {
        assert_eq!(usd(12).convert("GBP").unwrap(), Money::of(6, Currency::Gbp));
        assert_eq!(usd(10).convert("EUR").unwrap(), Money::of(15, Currency::Eur));
        assert_eq!(usd(12).convert("CAN").unwrap(), Money::of(15, Currency::Can));
        assert_eq!(usd(12).convert("USD").unwrap(), usd(12));
    }

    #[test]
    fn other_currencies_to_usd() {
        assert_eq!(Money::of(5, Currency::Gbp).convert_to(Currency::Usd), usd(10));
        assert_eq!(Money::of(10, Currency::Eur).convert_to(Currency::Usd), usd(6));
        assert_eq!(Money::of(15, Currency::Can).convert_to(Currency::Usd), usd(12));
    }

    #[test]
    fn cross_conversion_goes_through_usd() {
        // 5 GBP -> 10 USD -> 15 EUR
        assert_eq!(
            Money::of(5, Currency::Gbp).convert_to(Currency::Eur),
            Money::of(15, Currency::Eur)
        );
        // 15 EUR -> 10 USD -> 5 GBP
        assert_eq!(
            Money::of(15, Currency::Eur).convert_to(Currency::Gbp),
            Money::of(5, Currency::Gbp)
        );
    }

    #[test]
    fn round_trips_lose_minor_units_to_truncation() {
        // 1 EUR -> 0 USD -> 0 EUR
        let eur = Money::of(1, Currency::Eur);
        assert_eq!(eur.convert_to(Currency::Usd).convert_to(Currency::Eur).amount(), 0);
        // 3 USD -> 1 GBP -> 2 USD
        assert_eq!(usd(3).convert_to(Currency::Gbp).convert_to(Currency::Usd), usd(2));
        // 11 CAN -> 8 USD -> 10 CAN
        let can = Money::of(11, Currency::Can);
        assert_eq!(can.convert_to(Currency::Usd).convert_to(Currency::Can).amount(), 10);
    }

    #[test]
    fn add_is_denominated_in_the_other_operand() {
        let gbp = Money::of(5, Currency::Gbp);
        let total = gbp.add(&usd(10));
        assert_eq!(total, usd(20));

        let total = usd(10).add(&gbp);
        assert_eq!(total, Money::of(10, Currency::Gbp));
    }

    #[test]
    fn add_truncates_each_operand_before_summing() {
        // 1 EUR and 1 EUR are each worth 0 whole USD.
        let one_eur = Money::of(1, Currency::Eur);
        assert_eq!(one_eur.add(&one_eur), Money::of(0, Currency::Eur));
    }

    #[test]
    fn add_is_not_commutative_in_amount() {
        let a = Money::of(3, Currency::Usd);
        let b = Money::of(1, Currency::Gbp);
        // 3 + 2 = 5 USD -> 2 GBP
        assert_eq!(a.add(&b), Money::of(2, Currency::Gbp));
        // 2 + 3 = 5 USD
        assert_eq!(b.add(&a), usd(5));
    }

    #[test]
    fn conversion_saturates_instead_of_overflowing() {
        let huge = Money::of(i64::MAX, Currency::Gbp);
        assert_eq!(huge.convert_to(Currency::Usd).amount(), i64::MAX);
        let tiny = Money::of(i64::MIN, Currency::Gbp);
        assert_eq!(tiny.convert_to(Currency::Usd).amount(), i64::MIN);
    }

    #[test]
    fn display_shows_amount_and_code() {
        assert_eq!(Money::of(-42, Currency::Can).to_string(), "-42 CAN");
    }

    #[test]
    fn serde_shape_is_amount_and_code() {
        let json = serde_json::to_value(Money::of(250, Currency::Eur)).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 250, "currency": "EUR" }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: adding GBP to USD yields `usd + 2 * gbp` dollars.
        #[test]
        fn gbp_plus_usd_is_double_gbp_plus_usd(
            gbp in -1_000_000i64..1_000_000i64,
            dollars in -1_000_000i64..1_000_000i64
        ) {
            let total = Money::of(gbp, Currency::Gbp).add(&usd(dollars));
            prop_assert_eq!(total.currency(), Currency::Usd);
            prop_assert_eq!(total.amount(), dollars + gbp * 2);
        }

        /// Property: USD and GBP survive a same-currency conversion unchanged.
        #[test]
        fn identity_conversion_for_usd_and_gbp(amount in -1_000_000i64..1_000_000i64) {
            prop_assert_eq!(usd(amount).convert_to(Currency::Usd), usd(amount));
            let gbp = Money::of(amount, Currency::Gbp);
            prop_assert_eq!(gbp.convert_to(Currency::Gbp), gbp);
        }

        /// Property: a round trip never grows the magnitude of the amount.
        #[test]
        fn round_trip_never_gains_value(
            amount in -1_000_000i64..1_000_000i64,
            from in 0usize..4,
            to in 0usize..4
        ) {
            let source = Money::of(amount, Currency::ALL[from]);
            let back = source
                .convert_to(Currency::ALL[to])
                .convert_to(source.currency());
            prop_assert_eq!(back.currency(), source.currency());
            prop_assert!(back.amount().abs() <= source.amount().abs());
        }
    }
}
