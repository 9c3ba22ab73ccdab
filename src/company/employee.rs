//! Employees and paycheck arithmetic

use serde::Serialize;

use super::team::Team;

/// Pay periods per year
const PAY_PERIODS: f64 = 52.0;

/// A company employee
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Yearly salary in whole currency units
    pub salary: u32,
    /// Assigned team, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl Employee {
    /// Create an employee with no team
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, salary: u32) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            salary,
            team: None,
        }
    }

    /// Builder-style team assignment
    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    /// "First Last"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this employee has exactly these names
    #[must_use]
    pub fn is_named(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    /// Weekly paycheck
    #[must_use]
    pub fn paycheck(&self) -> f64 {
        f64::from(self.salary) / PAY_PERIODS
    }

    /// What the employee says on the way out
    #[must_use]
    pub const fn quit(&self) -> &'static str {
        "I quit!"
    }
}

/// Format an amount as dollars with thousands separators and two decimals
///
/// `1153.846` becomes `$1,153.85`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}
