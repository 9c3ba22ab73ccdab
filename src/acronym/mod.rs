//! Acronym glossary backed by a flat text file
//!
//! - [`AcronymEntry`] - one `ACRONYM: definition` line
//! - [`AcronymStore`] - lookup, add and remove over the file
//! - [`MatchMode`] - how lookup compares a query against lines

mod entry;
mod store;

pub use entry::{AcronymEntry, SEPARATOR, normalize};
pub use store::{AcronymStore, MatchMode};
