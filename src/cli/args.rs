//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::domain::query::{Level, Query, DEFAULT_LIMIT};

/// Lookup OWASP MASVS controls by keyword, domain, and profile context
#[derive(Parser, Debug)]
#[command(name = "masvs-lookup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Keyword(s) to match against control ID, statement, description, and domain
    pub query: Vec<String>,

    /// Filter domain(s), e.g. MASVS-NETWORK or NETWORK. Repeatable
    #[arg(long = "domain", value_name = "DOMAIN")]
    pub domains: Vec<String>,

    /// Filter MAS profile context. R maps to MASVS-RESILIENCE controls
    #[arg(long, value_enum, ignore_case = true)]
    pub level: Option<LevelArg>,

    /// Maximum number of results to print
    #[arg(long, default_value_t = DEFAULT_LIMIT as i64, allow_negative_numbers = true)]
    pub limit: i64,

    /// Path to MASVS JSON dataset (overrides MASVS_JSON and the bundled copy)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Print resolved data path before results
    #[arg(long)]
    pub show_path: bool,

    /// Diagnostic verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print a shell completion script and exit
    #[arg(long = "generate", value_enum, value_name = "SHELL")]
    pub generator: Option<clap_complete::Shell>,
}

/// `--level` values as accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    #[value(name = "L1")]
    L1,
    #[value(name = "L2")]
    L2,
    #[value(name = "R")]
    R,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::L1 => Level::L1,
            LevelArg::L2 => Level::L2,
            LevelArg::R => Level::R,
        }
    }
}

impl Cli {
    /// Build the normalized lookup query from the parsed arguments.
    pub fn to_query(&self) -> Query {
        Query::new()
            .with_terms(&self.query)
            .with_domains(&self.domains)
            .with_level(self.level.map(Level::from))
            .with_limit(self.limit)
    }
}
