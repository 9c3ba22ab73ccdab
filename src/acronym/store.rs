//! File-backed acronym store
//!
//! Every operation opens the file, does its work and closes it again. No
//! index is kept between calls.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::entry::{AcronymEntry, SEPARATOR, normalize};
use crate::error::{Error, Result};

/// How lookup compares a query against stored lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Query appears anywhere in the line (definition included)
    #[default]
    Substring,
    /// Query equals the acronym field
    Acronym,
}

impl MatchMode {
    fn matches(self, line: &str, query: &str) -> bool {
        match self {
            Self::Substring => line.contains(query),
            Self::Acronym => AcronymEntry::parse(line).is_some_and(|e| e.acronym == query),
        }
    }
}

/// Acronym glossary stored as `ACRONYM: definition` lines
#[derive(Debug, Clone)]
pub struct AcronymStore {
    path: PathBuf,
}

impl AcronymStore {
    /// Create a store over the given file (which need not exist yet)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Find every line containing `query` (case-insensitive on the query)
    pub fn lookup(&self, query: &str) -> Result<Vec<String>> {
        self.lookup_with(query, MatchMode::Substring)
    }

    /// Find matching lines using an explicit match mode
    ///
    /// Fails with [`Error::NotFound`] only when the whole scan matched nothing.
    pub fn lookup_with(&self, query: &str, mode: MatchMode) -> Result<Vec<String>> {
        let query = normalize(query);
        let file = self.open()?;

        let mut matches = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if mode.matches(&line, &query) {
                matches.push(line);
            }
        }

        log::debug!("lookup {query:?} in {}: {} match(es)", self.path.display(), matches.len());

        if matches.is_empty() {
            return Err(Error::NotFound(query));
        }
        Ok(matches)
    }

    /// Append an entry, creating the file if needed
    pub fn add(&self, acronym: &str, definition: &str) -> Result<AcronymEntry> {
        let entry = AcronymEntry::new(acronym, definition);
        if entry.acronym.is_empty() {
            return Err(Error::InvalidInput("acronym must not be empty".to_string()));
        }
        if entry.acronym.contains(['\n', '\r']) || entry.acronym.contains(SEPARATOR) {
            return Err(Error::InvalidInput(format!(
                "acronym must be a single line without {SEPARATOR:?}"
            )));
        }
        if entry.definition.contains(['\n', '\r']) {
            return Err(Error::InvalidInput("definition must be a single line".to_string()));
        }

        let mut file = OpenOptions::new().create(true).read(true).append(true).open(&self.path)?;
        let mut line = entry.to_line();
        if !ends_with_newline(&mut file)? {
            line.insert(0, '\n');
        }
        file.write_all(line.as_bytes())?;

        log::debug!("added {:?} to {}", entry.acronym, self.path.display());
        Ok(entry)
    }

    /// Drop every line starting with the acronym
    ///
    /// Returns how many lines were removed. When nothing matches the file is
    /// not rewritten.
    pub fn remove(&self, acronym: &str) -> Result<usize> {
        let acronym = normalize(acronym);
        if acronym.is_empty() {
            return Err(Error::InvalidInput("acronym must not be empty".to_string()));
        }

        let content = self.read()?;
        let kept: String = content
            .split_inclusive('\n')
            .filter(|line| !line.starts_with(&acronym))
            .collect();
        let removed = content.split_inclusive('\n').count() - kept.split_inclusive('\n').count();

        if removed == 0 {
            return Err(Error::NotFound(acronym));
        }

        fs::write(&self.path, kept)?;
        log::debug!("removed {removed} line(s) for {acronym:?} from {}", self.path.display());
        Ok(removed)
    }

    /// All well-formed entries in file order
    pub fn entries(&self) -> Result<Vec<AcronymEntry>> {
        let file = self.open()?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            match AcronymEntry::parse(&line) {
                Some(entry) => entries.push(entry),
                None if line.trim().is_empty() => {},
                None => log::warn!("skipping malformed line in {}: {line:?}", self.path.display()),
            }
        }
        Ok(entries)
    }

    fn open(&self) -> Result<fs::File> {
        fs::File::open(&self.path).map_err(|e| self.map_missing(e))
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| self.map_missing(e))
    }

    fn map_missing(&self, err: std::io::Error) -> Error {
        if err.kind() == ErrorKind::NotFound {
            Error::FileNotFound(self.path.clone())
        } else {
            Error::Io(err)
        }
    }
}

/// Whether the file is empty or its last byte is a newline
fn ends_with_newline(file: &mut fs::File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
