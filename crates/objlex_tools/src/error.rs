use objlex::LexError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the `objlex` binary.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read standard input")]
    Stdin(#[source] std::io::Error),

    #[error("invalid rules file")]
    Rules(#[from] toml::de::Error),

    #[error("rules file defines no tokens")]
    NoTokens,

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("failed to render JSON")]
    Json(#[from] serde_json::Error),
}
