//! Tests for the acronym store

use acro::Error;
use acro::acronym::{AcronymEntry, MatchMode};

use crate::common::{API_GUI, Glossary};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_add_to_empty_glossary() {
    let g = Glossary::with("");
    g.store.add("API", "Application Programming Interface").unwrap();
    assert_eq!(g.content(), "API: Application Programming Interface\n");
}

#[test]
fn test_add_creates_missing_file() {
    let g = Glossary::missing();
    let entry = g.store.add("cpu", "Central Processing Unit").unwrap();

    assert_eq!(entry, AcronymEntry::new("CPU", "Central Processing Unit"));
    assert_eq!(g.content(), "CPU: Central Processing Unit\n");
}

#[test]
fn test_lookup_is_case_insensitive() {
    let g = Glossary::with(API_GUI);
    let lines = g.store.lookup("gui").unwrap();
    assert_eq!(lines, vec!["GUI: Graphical User Interface"]);
}

#[test]
fn test_remove_leaves_other_entries() {
    let g = Glossary::with(API_GUI);
    assert_eq!(g.store.remove("API").unwrap(), 1);
    assert_eq!(g.content(), "GUI: Graphical User Interface\n");
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_add_then_lookup_surfaces_definition() {
    let g = Glossary::with(API_GUI);
    for (acronym, definition) in [
        ("tcp", "Transmission Control Protocol"),
        ("DNS", "Domain Name System"),
        ("Json", "JavaScript Object Notation"),
    ] {
        g.store.add(acronym, definition).unwrap();
        let lines = g.store.lookup(acronym).unwrap();
        assert!(lines.iter().any(|l| l.contains(definition)), "{acronym}: {lines:?}");
    }
}

#[test]
fn test_remove_absent_leaves_file_byte_identical() {
    let g = Glossary::with("API: a\r\nGUI: b\nno trailing newline");
    let before = std::fs::read(g.path()).unwrap();

    let err = g.store.remove("XML").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(std::fs::read(g.path()).unwrap(), before);
}

#[test]
fn test_remove_then_lookup_not_found() {
    let g = Glossary::with(API_GUI);
    g.store.add("SQL", "Structured Query Language").unwrap();

    g.store.remove("sql").unwrap();
    assert!(matches!(g.store.lookup("SQL"), Err(Error::NotFound(_))));
}

// =============================================================================
// EDGE CASES
// =============================================================================

#[test]
fn test_lookup_without_file() {
    let g = Glossary::missing();
    assert!(matches!(g.store.lookup("API"), Err(Error::FileNotFound(_))));
}

#[test]
fn test_lookup_returns_duplicates_in_order() {
    let g = Glossary::with("API: first\nGUI: x\nAPI: second\n");
    let lines = g.store.lookup("api").unwrap();
    assert_eq!(lines, vec!["API: first", "API: second"]);
}

#[test]
fn test_exact_mode_ignores_definitions() {
    let g = Glossary::with("REST: uses an API\nAPI: Application Programming Interface\n");
    assert_eq!(g.store.lookup_with("api", MatchMode::Substring).unwrap().len(), 2);
    assert_eq!(g.store.lookup_with("api", MatchMode::Acronym).unwrap().len(), 1);
    assert!(matches!(
        g.store.lookup_with("AP", MatchMode::Acronym),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn test_remove_is_a_prefix_match() {
    let g = Glossary::with("API: a\nAPIs: plural\nGUI: b\n");
    assert_eq!(g.store.remove("API").unwrap(), 2);
    assert_eq!(g.content(), "GUI: b\n");
}

#[test]
fn test_remove_empty_acronym_is_rejected() {
    let g = Glossary::with(API_GUI);
    assert!(matches!(g.store.remove("  "), Err(Error::InvalidInput(_))));
    assert_eq!(g.content(), API_GUI);
}

#[test]
fn test_entries_in_file_order() {
    let g = Glossary::with(API_GUI);
    let entries = g.store.entries().unwrap();
    let acronyms: Vec<_> = entries.iter().map(|e| e.acronym.as_str()).collect();
    assert_eq!(acronyms, ["API", "GUI"]);
}

#[test]
fn test_add_keeps_one_entry_per_line() {
    let g = Glossary::with("GUI: Graphical User Interface");
    g.store.add("api", "Application Programming Interface").unwrap();
    assert_eq!(
        g.content(),
        "GUI: Graphical User Interface\nAPI: Application Programming Interface\n"
    );

    assert!(g.store.add("A\nB", "def").is_err());
    assert!(g.store.add("X: Y", "def").is_err());
    assert_eq!(g.store.entries().unwrap().len(), 2);
}
