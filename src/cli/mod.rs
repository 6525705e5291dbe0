//! CLI command handlers module
//!
//! This module parses the command line and dispatches to the command handlers.

pub mod create;
pub mod electron;
pub mod material;
pub mod tailwind;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};

use crate::error::Result;

#[derive(Debug, Parser)]
#[command(
    name = "ngspark",
    version,
    about = "Scaffold Angular projects with optional extras",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Angular project
    Create {
        /// Ignored
        #[arg(hide = true, num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
        rest: Vec<String>,
    },

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Cli {
    /// Parse `args` (program name first).
    ///
    /// `--help` and `--version` exit through clap. Any other rejected input prints
    /// the usage notice and yields `None`.
    pub fn parse_args(args: &[String]) -> Option<Self> {
        match Self::try_parse_from(args) {
            Ok(cli) => Some(cli),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(_) => {
                println!("{}", usage(args.get(1).map(String::as_str).unwrap_or_default()));
                None
            }
        }
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Create { .. }) => create::handle().await,
            Some(Commands::Unknown(args)) => {
                println!("{}", usage(args.first().map(String::as_str).unwrap_or_default()));
                Ok(())
            }
            None => {
                println!("{}", usage(""));
                Ok(())
            }
        }
    }
}

/// Notice printed for anything other than `create`.
pub fn usage(command: &str) -> String {
    format!("Unknown command: {command}\nUsage: ngspark create")
}
