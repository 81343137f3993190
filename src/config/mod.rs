pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::catalog::CandidateList;
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "intake-check")]
#[command(about = "Validate patient intake submissions and preview autocomplete suggestions")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "intake.toml", global = true)]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Print suggestions and form issues as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a submitted intake form (.json or .toml)
    Validate {
        #[arg(long)]
        form: String,

        /// Date to validate against (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Filter a candidate list the way the autocomplete field does
    Suggest {
        #[arg(long)]
        list: CandidateList,

        /// What the user has typed so far
        query: Vec<String>,
    },
}
