//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Every result can render to
//! stdout or to any writer, which is how the interactive menus are tested.

use std::io::{self, Write};

use serde::Serialize;

use crate::acronym::AcronymEntry;
use crate::company::{Employee, Paycheck, Team};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Something that can be shown to the user in either output mode
pub trait Render: Serialize {
    /// Write the human-readable form
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write in the given mode
    fn render_to(&self, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(self).unwrap_or_default())
            },
        }
    }

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) -> io::Result<()> {
        self.render_to(mode, &mut io::stdout().lock())
    }
}

/// Result of an acronym lookup
#[derive(Debug, Serialize)]
pub struct LookupResult {
    /// Normalized query
    pub query: String,
    /// Matching lines in file order
    pub matches: Vec<String>,
}

impl Render for LookupResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in &self.matches {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Every entry in the glossary
#[derive(Debug, Serialize)]
pub struct EntryListResult {
    /// Entries in file order
    pub entries: Vec<AcronymEntry>,
}

impl Render for EntryListResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.entries.is_empty() {
            return writeln!(out, "No acronyms found.");
        }
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        writeln!(out, "\n{} acronym(s) found.", self.entries.len())
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful operation
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A reported, non-fatal failure
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl Render for OperationResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.message)
    }
}

/// The company roster, optionally filtered to one team
#[derive(Debug, Serialize)]
pub struct RosterResult {
    /// Team filter, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    /// Employees in hiring order
    pub employees: Vec<Employee>,
}

impl Render for RosterResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        match self.team {
            Some(team) => writeln!(out, "Team {team}:\n")?,
            None => writeln!(out, "Current Employees:\n")?,
        }
        if self.employees.is_empty() {
            writeln!(out, "(nobody)")?;
        }
        for e in &self.employees {
            match (self.team, e.team) {
                (None, Some(team)) => writeln!(out, "{} ({team})", e.full_name())?,
                _ => writeln!(out, "{}", e.full_name())?,
            }
        }
        writeln!(out, "-------------------------")
    }
}

/// A payroll run
#[derive(Debug, Serialize)]
pub struct PayrollResult {
    /// One paycheck per employee
    pub paychecks: Vec<Paycheck>,
}

impl Render for PayrollResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paying Employees:")?;
        for p in &self.paychecks {
            writeln!(out, "Paycheck for: {}", p.name)?;
            writeln!(out, "Amount: {}", p.formatted)?;
            writeln!(out, "-------------------------------")?;
        }
        Ok(())
    }
}

/// People currently in space
#[derive(Debug, Serialize)]
pub struct AstronautsResult {
    /// Names as reported by the API
    pub people: Vec<String>,
}

impl Render for AstronautsResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "The people currently in space are:")?;
        for name in &self.people {
            writeln!(out, "Name: {name}")?;
        }
        Ok(())
    }
}

/// Current apparent temperature for a city
#[derive(Debug, Serialize)]
pub struct WeatherResult {
    /// City the reading is for
    pub city: String,
    /// Apparent temperature in Celsius
    pub celsius: f64,
    /// Apparent temperature in Fahrenheit
    pub fahrenheit: f64,
}

impl Render for WeatherResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Today the temperature in {} is {:.1} degrees fahrenheit",
            self.city, self.fahrenheit
        )
    }
}
