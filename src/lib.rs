//! acro - a flat-file acronym glossary with a few companion tools
//!
//! The library holds everything the `acro` binary drives: the acronym store,
//! the company roster, console prompting, output rendering and configuration.
//! The optional `net` feature adds readers for two public JSON APIs.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acronym;
pub mod company;
pub mod config;
pub mod error;
#[cfg(feature = "net")]
pub mod net;
pub mod output;
pub mod paths;
pub mod prompt;

pub use error::{Error, Result};
