use core::str::FromStr;
use serde::{Deserialize, Serialize};

use hearth_core::{DomainError, DomainResult};

/// Supported currency codes.
///
/// The set is closed: any other code is rejected with
/// [`DomainError::InvalidCurrency`] when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Gbp,
    Eur,
    Can,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Eur, Currency::Can];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Can => "CAN",
        }
    }

    /// USD value of one unit of this currency, as an exact `(numerator, denominator)`.
    ///
    /// EUR trades at 1.5 per USD and CAN at 1.25 per USD, so their USD values are
    /// 2/3 and 4/5. Keeping the rates rational means integer division reproduces
    /// the truncating behaviour exactly.
    fn usd_rate(self) -> (i128, i128) {
        match self {
            Currency::Usd => (1, 1),
            Currency::Gbp => (2, 1),
            Currency::Eur => (2, 3),
            Currency::Can => (4, 5),
        }
    }

    /// Convert an amount in this currency to whole USD minor units (truncating).
    pub(crate) fn to_usd(self, amount: i128) -> i128 {
        let (num, den) = self.usd_rate();
        amount * num / den
    }

    /// Convert whole USD minor units to this currency (truncating).
    pub(crate) fn from_usd(self, usd: i128) -> i128 {
        let (num, den) = self.usd_rate();
        usd * den / num
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            "EUR" => Ok(Currency::Eur),
            "CAN" => Ok(Currency::Can),
            other => {
                tracing::warn!(currency = other, "rejected unsupported currency code");
                Err(DomainError::invalid_currency(other))
            }
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = DomainError;

    fn try_from(value: &str) -> DomainResult<Self> {
        value.parse()
    }
}
