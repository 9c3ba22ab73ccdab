//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use acro::acronym::AcronymEntry;
use acro::company::{Company, Employee, Team};
use acro::output::{
    AstronautsResult, EntryListResult, LookupResult, OperationResult, OutputMode, PayrollResult,
    Render, RosterResult, WeatherResult,
};

fn human(result: &impl Render) -> String {
    let mut out = Vec::new();
    result.render_to(OutputMode::Human, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn json(result: &impl Render) -> serde_json::Value {
    let mut out = Vec::new();
    result.render_to(OutputMode::Json, &mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Acronym results
// =============================================================================

#[test]
fn lookup_result_human_prints_lines() {
    let result = LookupResult {
        query: "API".to_string(),
        matches: vec!["API: one".to_string(), "API: two".to_string()],
    };
    assert_eq!(human(&result), "API: one\nAPI: two\n");
}

#[test]
fn lookup_result_json() {
    let result = LookupResult {
        query: "API".to_string(),
        matches: vec!["API: one".to_string()],
    };
    let value = json(&result);
    assert_eq!(value["query"], "API");
    assert_eq!(value["matches"][0], "API: one");
}

#[test]
fn entry_list_empty() {
    let result = EntryListResult { entries: vec![] };
    assert_eq!(human(&result), "No acronyms found.\n");
}

#[test]
fn entry_list_counts() {
    let result = EntryListResult {
        entries: vec![AcronymEntry::new("api", "Application Programming Interface")],
    };
    let text = human(&result);
    assert!(text.starts_with("API: Application Programming Interface\n"));
    assert!(text.ends_with("1 acronym(s) found.\n"));
}

#[test]
fn operation_result_serialization() {
    let value = json(&OperationResult::ok("Acronym removed."));
    assert_eq!(value["success"], true);
    assert_eq!(value["message"], "Acronym removed.");

    let value = json(&OperationResult::failed("Acronym not found."));
    assert_eq!(value["success"], false);
}

// =============================================================================
// Company results
// =============================================================================

#[test]
fn roster_human_shows_teams() {
    let company = Company::demo();
    let result = RosterResult {
        team: None,
        employees: company.employees().to_vec(),
    };
    let text = human(&result);
    assert!(text.starts_with("Current Employees:\n\n"));
    assert!(text.contains("Sarah Jones (engineering)\n"));
    assert!(text.contains("Tom Bearman\n"));
    assert!(text.ends_with("-------------------------\n"));
}

#[test]
fn roster_json_omits_missing_team() {
    let result = RosterResult {
        team: Some(Team::Sales),
        employees: vec![Employee::new("Tom", "Bearman", 50_000)],
    };
    let value = json(&result);
    assert_eq!(value["team"], "sales");
    assert_eq!(value["employees"][0]["salary"], 50_000);
    assert!(value["employees"][0].get("team").is_none());
}

#[test]
fn payroll_human() {
    let mut company = Company::new();
    company.hire(Employee::new("Sarah", "Jones", 40_000));
    let result = PayrollResult {
        paychecks: company.payroll(),
    };
    assert_eq!(
        human(&result),
        "Paying Employees:\nPaycheck for: Sarah Jones\nAmount: $769.23\n-------------------------------\n"
    );
}

// =============================================================================
// Network results
// =============================================================================

#[test]
fn astronauts_human() {
    let result = AstronautsResult {
        people: vec!["Jasmin Moghbeli".to_string(), "Andreas Mogensen".to_string()],
    };
    assert_eq!(
        human(&result),
        "The people currently in space are:\nName: Jasmin Moghbeli\nName: Andreas Mogensen\n"
    );
}

#[test]
fn weather_human_and_json() {
    let result = WeatherResult {
        city: "St. Louis".to_string(),
        celsius: 20.0,
        fahrenheit: 68.0,
    };
    assert_eq!(human(&result), "Today the temperature in St. Louis is 68.0 degrees fahrenheit\n");
    assert_eq!(json(&result)["celsius"], 20.0);
}
