//! Objlex Tools - command-line utilities for objlex token rules
//!
//! Token rules are read from TOML (see [`rules`]) and turned into a lexer
//! whose token values are JSON values.

pub mod cli;
pub mod error;
pub mod render;
pub mod rules;

pub use error::ToolError;

use cli::Commands;
use rules::RuleFile;
use std::io::Read;
use std::path::Path;

/// Run one subcommand and return what it prints.
///
/// # Errors
///
/// Returns an error if a file cannot be read, the rules are invalid, or
/// lexing fails.
pub fn execute(command: &Commands) -> Result<String, ToolError> {
    match command {
        Commands::Lex {
            rules,
            input,
            format,
            skip_unmatched,
        } => {
            let rules = RuleFile::load(rules)?;
            let text = read_input(input.as_deref())?;
            let mut lexer = rules.build_lexer(*skip_unmatched);
            let summary = lexer.lex(text)?;
            for range in &summary.skipped {
                tracing::info!(%range, "skipped unmatched input");
            }
            render::render_tokens(&lexer, *format)
        }
        Commands::Candidates { rules, input } => {
            let rules = RuleFile::load(rules)?;
            let text = read_input(input.as_deref())?;
            Ok(rules.build_lexer(false).candidates_string(&text)?)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, ToolError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ToolError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(ToolError::Stdin)?;
            Ok(text)
        }
    }
}
