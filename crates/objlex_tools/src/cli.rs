//! CLI interface for objlex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "objlex")]
#[command(about = "Lex text with token rules from a TOML file")]
#[command(version)]
pub struct Cli {
    /// Log lexer activity at debug level (`OBJLEX_LOG` overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lex the input and print the tokens
    Lex {
        /// TOML file with `[[token]]` rules
        #[arg(short, long)]
        rules: PathBuf,

        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Skip unmatched input instead of failing
        #[arg(long)]
        skip_unmatched: bool,
    },

    /// Print the resolved candidates without converting them
    Candidates {
        /// TOML file with `[[token]]` rules
        #[arg(short, long)]
        rules: PathBuf,

        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {s}. Supported: text, json")),
        }
    }
}
