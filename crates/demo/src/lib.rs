//! Demo wiring: builds a sample household and reports on it.
//!
//! The binary only adds process setup (tracing, env config, printing).

use serde::Serialize;

use hearth_core::DomainResult;
use hearth_employment::Job;
use hearth_household::{Family, FamilySnapshot, Person};
use hearth_money::{Currency, Money};

/// Variable naming the currency household income is reported in.
pub const REPORT_CURRENCY_ENV: &str = "HEARTH_REPORT_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub report_currency: Currency,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            report_currency: Currency::Usd,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. An unsupported currency code is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let report_currency = match lookup(REPORT_CURRENCY_ENV) {
            Some(code) => code.trim().parse()?,
            None => Self::default().report_currency,
        };
        Ok(Self { report_currency })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseholdReport {
    pub family: FamilySnapshot,
    pub descriptions: Vec<String>,
    pub household_income: Money,
}

/// Found the sample household, grow it, and report its income.
pub fn run(config: &DemoConfig) -> DomainResult<HouseholdReport> {
    let ted = Person::new("Ted", "Neward", 45)
        .with_job(Job::salary("Guest Lecturer", 1000))
        .into_ref();
    let charlotte = Person::new("Charlotte", "Neward", 45).into_ref();
    let mut family = Family::new(ted.clone(), charlotte)?;

    let mike = Person::new("Mike", "Neward", 22)
        .with_job(Job::hourly("Burger-Flipper", 13.0))
        .into_ref();
    let matt = Person::new("Matt", "Neward", 15)
        .with_job(Job::hourly("Paper route", 8.0))
        .into_ref();
    for child in [mike, matt] {
        let name = child.borrow().first_name().to_string();
        let added = family.have_child(child);
        tracing::info!(child = %name, added, "child joined household");
    }

    if let Some(job) = ted.borrow_mut().job_mut() {
        job.raise_by_percent(0.1);
    }

    let descriptions = family
        .members()
        .iter()
        .map(|member| member.borrow().describe())
        .collect();
    let income = Money::of(family.household_income(), Currency::Usd);
    let household_income = income.convert_to(config.report_currency);
    tracing::info!(income = %household_income, "household income computed");

    Ok(HouseholdReport {
        family: family.snapshot(),
        descriptions,
        household_income,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::DomainError;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            if key == REPORT_CURRENCY_ENV {
                value.map(str::to_string)
            } else {
                None
            }
        }
    }

    #[test]
    fn config_defaults_to_usd() {
        let config = DemoConfig::from_lookup(lookup(None)).unwrap();
        assert_eq!(config.report_currency, Currency::Usd);
    }

    #[test]
    fn config_reads_report_currency() {
        let config = DemoConfig::from_lookup(lookup(Some(" GBP "))).unwrap();
        assert_eq!(config.report_currency, Currency::Gbp);
    }

    #[test]
    fn config_rejects_unsupported_currency() {
        let err = DemoConfig::from_lookup(lookup(Some("JPY"))).unwrap_err();
        assert_eq!(err, DomainError::invalid_currency("JPY"));
    }

    #[test]
    fn report_in_usd() {
        let report = run(&DemoConfig::default()).unwrap();

        // Ted 1100 after the raise, Mike 13.0 * 2000; Matt's job was discarded at 15.
        assert_eq!(report.household_income, Money::of(27_100, Currency::Usd));
        assert_eq!(report.family.household_income, 27_100);
        assert_eq!(report.family.members.len(), 4);
        assert_eq!(
            report.descriptions[0],
            "[Person: firstName:Ted lastName:Neward age:45 job:Salary(1100) spouse:Charlotte]"
        );
        assert_eq!(
            report.descriptions[3],
            "[Person: firstName:Matt lastName:Neward age:15 job:nil spouse:nil]"
        );
    }

    #[test]
    fn report_in_gbp_halves_the_usd_total() {
        let config = DemoConfig {
            report_currency: Currency::Gbp,
        };
        let report = run(&config).unwrap();
        assert_eq!(report.household_income, Money::of(13_550, Currency::Gbp));
    }
}
