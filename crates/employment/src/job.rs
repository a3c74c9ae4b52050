use serde::{Deserialize, Serialize};

/// Hours assumed when an hourly income is computed without an explicit figure.
pub const DEFAULT_HOURS_PER_YEAR: i64 = 2000;

/// How a job pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compensation {
    /// Rate per hour worked.
    Hourly(f64),
    /// Fixed annual amount.
    Salary(i64),
}

/// A job title plus its compensation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    title: String,
    compensation: Compensation,
}

impl Job {
    pub fn new(title: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            title: title.into(),
            compensation,
        }
    }

    pub fn hourly(title: impl Into<String>, rate: f64) -> Self {
        Self::new(title, Compensation::Hourly(rate))
    }

    pub fn salary(title: impl Into<String>, amount: i64) -> Self {
        Self::new(title, Compensation::Salary(amount))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    pub fn set_compensation(&mut self, compensation: Compensation) {
        self.compensation = compensation;
    }

    /// Annual income for the given number of hours.
    ///
    /// Hourly pay is truncated toward zero; salaried pay ignores `hours`.
    /// Negative hours are accepted and yield negative hourly income.
    pub fn calculate_income(&self, hours: i64) -> i64 {
        match self.compensation {
            Compensation::Hourly(rate) => (rate * hours as f64) as i64,
            Compensation::Salary(amount) => amount,
        }
    }

    /// Annual income assuming [`DEFAULT_HOURS_PER_YEAR`].
    pub fn annual_income(&self) -> i64 {
        self.calculate_income(DEFAULT_HOURS_PER_YEAR)
    }

    /// Add a fixed amount. Salaries take the truncated integer part.
    ///
    /// Negative amounts are accepted and lower the pay.
    pub fn raise_by_amount(&mut self, amount: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate + amount),
            Compensation::Salary(salary) => {
                Compensation::Salary(salary.saturating_add(amount as i64))
            }
        };
    }

    /// Scale pay by `1 + percent` (`0.1` is a ten percent raise).
    pub fn raise_by_percent(&mut self, percent: f64) {
        self.compensation = match self.compensation {
            Compensation::Hourly(rate) => Compensation::Hourly(rate * (1.0 + percent)),
            Compensation::Salary(salary) => {
                Compensation::Salary((salary as f64 * (1.0 + percent)) as i64)
            }
        };
    }
}
