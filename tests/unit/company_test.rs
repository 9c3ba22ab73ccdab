//! Tests for the company roster

use acro::Error;
use acro::company::{Company, Employee, Team, format_currency};

#[test]
fn test_demo_roster() {
    let company = Company::demo();
    let names: Vec<_> = company.employees().iter().map(Employee::full_name).collect();
    assert_eq!(names, ["Sarah Jones", "Bob Jones", "Mark Jones", "Tom Bearman"]);
}

#[test]
fn test_hire_fire_list() {
    let mut company = Company::new();
    company.hire(Employee::new("Sarah", "Jones", 40_000));
    company.hire(Employee::new("Bob", "Jones", 60_000));
    company.hire(Employee::new("Mark", "Jones", 70_000));

    let fired = company.fire("Bob", "Jones").unwrap();
    assert_eq!(fired.full_name(), "Bob Jones");

    let names: Vec<_> = company.employees().iter().map(Employee::full_name).collect();
    assert_eq!(names, ["Sarah Jones", "Mark Jones"]);
}

#[test]
fn test_fire_is_exact_on_names() {
    let mut company = Company::demo();
    assert!(matches!(company.fire("bob", "jones"), Err(Error::NotFound(_))));
    assert!(company.fire(" Bob ", "Jones").is_ok());
}

#[test]
fn test_assign_moves_between_teams() {
    let mut company = Company::demo();
    company.assign("Sarah", "Jones", Team::Sales).unwrap();

    assert_eq!(company.team(Team::Engineering).len(), 1);
    let sales: Vec<_> = company.team(Team::Sales).iter().map(|e| e.full_name()).collect();
    assert_eq!(sales, ["Sarah Jones", "Bob Jones"]);
}

#[test]
fn test_assign_unknown_employee() {
    let mut company = Company::new();
    let err = company.assign("Nobody", "Here", Team::Support).unwrap_err();
    assert_eq!(err.to_string(), "not found: Nobody Here");
}

#[test]
fn test_teams_lists_every_team() {
    let company = Company::new();
    let teams = company.teams();
    assert_eq!(teams.keys().copied().collect::<Vec<_>>(), Team::ALL);
    assert!(teams.values().all(Vec::is_empty));
}

#[test]
fn test_payroll_amounts() {
    let mut company = Company::new();
    company.hire(Employee::new("Tom", "Bearman", 50_000));
    let payroll = company.payroll();

    assert_eq!(payroll.len(), 1);
    assert!((payroll[0].amount - 961.538_461).abs() < 1e-3);
    assert_eq!(payroll[0].formatted, "$961.54");
}

#[test]
fn test_format_currency_groups_thousands() {
    assert_eq!(format_currency(1_000.0), "$1,000.00");
    assert_eq!(format_currency(123.456), "$123.46");
    assert_eq!(format_currency(10_000_000.0), "$10,000,000.00");
}
