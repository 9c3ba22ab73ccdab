//! Toy company roster
//!
//! - [`Employee`] - a person with a yearly salary and optional team
//! - [`Team`] - the fixed set of teams an employee can join
//! - [`Company`] - hiring, firing, team assignment and payroll

mod employee;
mod roster;
mod team;

pub use employee::{Employee, format_currency};
pub use roster::{Company, Paycheck};
pub use team::Team;
