//! The company roster

use std::collections::BTreeMap;

use serde::Serialize;

use super::employee::{Employee, format_currency};
use super::team::Team;
use crate::error::{Error, Result};

/// One line of a payroll run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paycheck {
    /// Employee full name
    pub name: String,
    /// Amount paid this period
    pub amount: f64,
    /// Amount formatted as currency
    pub formatted: String,
}

/// An ordered list of employees
#[derive(Debug, Clone, Default)]
pub struct Company {
    employees: Vec<Employee>,
}

impl Company {
    /// An empty company
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// A small seeded roster for the interactive menu
    #[must_use]
    pub fn demo() -> Self {
        let mut company = Self::new();
        company.hire(Employee::new("Sarah", "Jones", 40_000).with_team(Team::Engineering));
        company.hire(Employee::new("Bob", "Jones", 60_000).with_team(Team::Sales));
        company.hire(Employee::new("Mark", "Jones", 70_000).with_team(Team::Engineering));
        company.hire(Employee::new("Tom", "Bearman", 50_000));
        company
    }

    /// Add an employee at the end of the roster
    pub fn hire(&mut self, employee: Employee) {
        log::debug!("hired {}", employee.full_name());
        self.employees.push(employee);
    }

    /// Remove the first employee with these names
    pub fn fire(&mut self, first_name: &str, last_name: &str) -> Result<Employee> {
        let index = self.position(first_name, last_name)?;
        let employee = self.employees.remove(index);
        log::debug!("fired {}", employee.full_name());
        Ok(employee)
    }

    /// Put an employee on a team, replacing any previous team
    pub fn assign(&mut self, first_name: &str, last_name: &str, team: Team) -> Result<&Employee> {
        let index = self.position(first_name, last_name)?;
        let employee = &mut self.employees[index];
        employee.team = Some(team);
        log::debug!("assigned {} to {team}", employee.full_name());
        Ok(employee)
    }

    /// Employees in hiring order
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Members of one team, in hiring order
    #[must_use]
    pub fn team(&self, team: Team) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.team == Some(team)).collect()
    }

    /// Every team with its members; teams without members are included
    #[must_use]
    pub fn teams(&self) -> BTreeMap<Team, Vec<&Employee>> {
        let mut teams: BTreeMap<Team, Vec<&Employee>> =
            Team::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for employee in &self.employees {
            if let Some(team) = employee.team {
                teams.entry(team).or_default().push(employee);
            }
        }
        teams
    }

    /// Compute one paycheck per employee
    #[must_use]
    pub fn payroll(&self) -> Vec<Paycheck> {
        self.employees
            .iter()
            .map(|e| {
                let amount = e.paycheck();
                Paycheck {
                    name: e.full_name(),
                    amount,
                    formatted: format_currency(amount),
                }
            })
            .collect()
    }

    fn position(&self, first_name: &str, last_name: &str) -> Result<usize> {
        let (first_name, last_name) = (first_name.trim(), last_name.trim());
        self.employees
            .iter()
            .position(|e| e.is_named(first_name, last_name))
            .ok_or_else(|| Error::NotFound(format!("{first_name} {last_name}")))
    }
}
