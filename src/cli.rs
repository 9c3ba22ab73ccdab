//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use acro::acronym::{AcronymStore, MatchMode};
use acro::config::GlobalConfig;
use acro::output::OutputMode;
use acro::paths;

use crate::commands::{self, Context};

/// acro - keep a glossary of acronyms in a plain text file
#[derive(Parser, Debug)]
#[command(
    name = "acro",
    version,
    about = "Keep a glossary of acronyms in a plain text file",
    long_about = "Look up, add and remove acronyms stored one per line as \
                  'ACRONYM: definition'.\n\n\
                  Run without a subcommand for the interactive menu."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Glossary file (default: store.path from config, then ./acronyms.txt)
    #[arg(short, long, global = true, env = "ACRO_FILE")]
    pub file: Option<PathBuf>,

    /// Subcommand; the interactive menu when absent
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu: 1 = look up, 2 = add, 3 = remove
    Menu,

    /// Look up an acronym
    Lookup {
        /// Acronym (or any text) to search for; case-insensitive
        query: String,

        /// Match the acronym field exactly instead of any part of the line
        #[arg(short, long)]
        exact: bool,
    },

    /// Add an acronym
    Add {
        /// The acronym
        acronym: String,

        /// Its definition
        #[arg(required = true, num_args = 1..)]
        definition: Vec<String>,
    },

    /// Remove every line starting with an acronym
    Remove {
        /// The acronym
        acronym: String,
    },

    /// List every acronym in the glossary
    List,

    /// Company roster (interactive without an action)
    Company {
        /// What to do with the roster
        #[command(subcommand)]
        action: Option<CompanyAction>,
    },

    /// List the people currently in space
    #[cfg(feature = "net")]
    Astros,

    /// Show the current apparent temperature
    #[cfg(feature = "net")]
    Weather {
        /// City (default: net.city from config)
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Show or change the global config
    Config {
        /// What to do with the config
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

/// Company roster actions
#[derive(Subcommand, Debug)]
pub enum CompanyAction {
    /// List employees
    List {
        /// Only this team: engineering, sales, support (or 1-3)
        #[arg(short, long)]
        team: Option<String>,
    },

    /// Pay every employee
    Payroll,
}

/// Config actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file location and its effective contents
    Show,

    /// Set a key and save (store.path, lookup.exact, net.city, net.state,
    /// net.country, net.weather_key)
    Set {
        /// Dotted key, e.g. lookup.exact
        key: String,

        /// New value; empty clears store.path and net.weather_key
        value: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    let store = AcronymStore::new(paths::acronyms_file(cli.file.as_deref(), &config));
    log::debug!("using glossary {}", store.path().display());

    let match_mode = if config.lookup.exact {
        MatchMode::Acronym
    } else {
        MatchMode::Substring
    };
    let ctx = Context {
        store,
        config,
        match_mode,
        output_mode,
    };

    match cli.command {
        None | Some(Command::Menu) => commands::menu(&ctx),
        Some(Command::Lookup { query, exact }) => {
            let match_mode = if exact { MatchMode::Acronym } else { ctx.match_mode };
            commands::lookup(&ctx, &query, match_mode)
        },
        Some(Command::Add {
            acronym,
            definition,
        }) => commands::add(&ctx, &acronym, &definition.join(" ")),
        Some(Command::Remove { acronym }) => commands::remove(&ctx, &acronym),
        Some(Command::List) => commands::list(&ctx),
        Some(Command::Company { action }) => commands::company_cmd(&ctx, action),
        Some(Command::Config { action }) => commands::config_cmd(&ctx, action),
        #[cfg(feature = "net")]
        Some(Command::Astros) => commands::astros(&ctx),
        #[cfg(feature = "net")]
        Some(Command::Weather { city }) => commands::weather(&ctx, city.as_deref()),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": acro::VERSION
                    })
                );
            } else {
                println!("acro v{}", acro::VERSION);
            }
            Ok(())
        },
    }
}
