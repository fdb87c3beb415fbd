use super::discount::DiscountRate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative amount in minor currency units (cents).
///
/// Serializes as the raw integer number of cents. `Display` renders the
/// major-unit amount with two decimals and no currency symbol, e.g. `249.95`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    /// Share of this amount at `rate`, rounded half-up to whole cents.
    ///
    /// Never exceeds `self`.
    pub fn portion(self, rate: DiscountRate) -> Money {
        let scaled =
            u128::from(self.0) * u128::from(rate.bps()) + u128::from(DiscountRate::SCALE / 2);
        let cents = scaled / u128::from(DiscountRate::SCALE);
        // rate <= 100%, so the result fits back into u64
        Money(u64::try_from(cents).unwrap_or(self.0))
    }
}

/// Prefix used when rendering amounts in `currency` (an ISO 4217 code).
///
/// Codes without a dedicated symbol fall back to the upper-cased code and a space, e.g. `CHF `.
pub fn currency_symbol(currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    match code.as_str() {
        "USD" | "CAD" | "AUD" | "NZD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        _ => format!("{} ", code),
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::ZERO.to_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(2999).to_string(), "29.99");
        assert_eq!(Money::from_cents(123_456_700).to_string(), "1234567.00");
    }

    #[test]
    fn portion_rounds_half_up() {
        let ten_percent = DiscountRate::from_bps(1000);
        // 249.95 * 10% = 24.995 -> 25.00
        assert_eq!(
            Money::from_cents(24_995).portion(ten_percent),
            Money::from_cents(2500)
        );
        // 0.04 * 10% = 0.004 -> 0.00
        assert_eq!(Money::from_cents(4).portion(ten_percent), Money::ZERO);
        // 0.05 * 10% = 0.005 -> 0.01
        assert_eq!(
            Money::from_cents(5).portion(ten_percent),
            Money::from_cents(1)
        );
    }

    #[test]
    fn portion_handles_extremes() {
        let max = Money::from_cents(u64::MAX);
        assert_eq!(max.portion(DiscountRate::NONE), Money::ZERO);
        assert!(max.portion(DiscountRate::from_bps(2500)) < max);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = Money::from_cents(u64::MAX);
        assert!(max.checked_add(Money::from_cents(1)).is_none());
        assert!(max.checked_mul(2).is_none());
        assert!(Money::ZERO.checked_sub(Money::from_cents(1)).is_none());
        assert_eq!(
            Money::from_cents(2999).checked_mul(3),
            Some(Money::from_cents(8997))
        );
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("eur"), "€");
        assert_eq!(currency_symbol(" GBP "), "£");
        assert_eq!(currency_symbol("chf"), "CHF ");
    }

    #[test]
    fn serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(2999)).unwrap();
        assert_eq!(json, "2999");
    }
}
