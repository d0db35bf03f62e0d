//! Token rules loaded from TOML
//!
//! ```toml
//! [config]
//! case_insensitive = false
//!
//! [[token]]
//! name = "whitespace"
//! pattern = "[ \t\n]+"
//! kind = "skip"
//!
//! [[token]]
//! name = "int"
//! pattern = "-?[0-9]+"
//! kind = "integer"
//! ```
//!
//! Rules are registered in file order, so earlier rules win equal-length
//! ties.

use crate::error::ToolError;
use objlex::lexer::{LexerBuilder, LexerConfig, Match, SkipUnmatched};
use objlex::{ConvertError, Lexer};
use serde::Deserialize;
use serde_json::{Number, Value};
use std::path::Path;

/// How a rule turns its match into a JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The matched text as a string
    #[default]
    Text,
    /// A signed 64-bit integer
    Integer,
    /// A finite float
    Float,
    /// Matched but left out of the output
    Skip,
}

impl ValueKind {
    /// Convert a match. `None` marks a token that is not printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse as the requested number.
    pub fn convert(self, m: &Match<'_>) -> Result<Option<Value>, ConvertError> {
        let text = m.as_str();
        let value = match self {
            Self::Text => Value::String(text.to_owned()),
            Self::Integer => Value::from(text.parse::<i64>()?),
            Self::Float => {
                let float = text.parse::<f64>()?;
                Value::Number(
                    Number::from_f64(float).ok_or_else(|| format!("{text} is not finite"))?,
                )
            }
            Self::Skip => return Ok(None),
        };
        Ok(Some(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRule {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub kind: ValueKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub config: LexerConfig,
    #[serde(rename = "token", default)]
    pub tokens: Vec<TokenRule>,
}

impl RuleFile {
    /// Parse a rules file.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Rules`] for invalid TOML and [`ToolError::NoTokens`]
    /// if no `[[token]]` entry is given.
    pub fn from_toml(text: &str) -> Result<Self, ToolError> {
        let rules: Self = toml::from_str(text)?;
        if rules.tokens.is_empty() {
            return Err(ToolError::NoTokens);
        }
        tracing::debug!(tokens = rules.tokens.len(), "loaded token rules");
        Ok(rules)
    }

    /// Read and parse a rules file.
    ///
    /// # Errors
    ///
    /// Same as [`RuleFile::from_toml`], plus [`ToolError::Read`].
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let text = std::fs::read_to_string(path).map_err(|source| ToolError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Build a lexer with one token type per rule, in file order.
    #[must_use]
    pub fn build_lexer(&self, skip_unmatched: bool) -> Lexer<Option<Value>> {
        let mut builder = LexerBuilder::new().config(self.config.clone());
        for rule in &self.tokens {
            let kind = rule.kind;
            builder = builder.token(&rule.name, &rule.pattern, move |m| kind.convert(m));
        }
        if skip_unmatched {
            builder = builder.policy(SkipUnmatched);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERS: &str = r#"
        [[token]]
        name = "whitespace"
        pattern = "[ \t\n]+"
        kind = "skip"

        [[token]]
        name = "uint"
        pattern = "[0-9]+"
        kind = "integer"

        [[token]]
        name = "int"
        pattern = "-?[0-9]+"
        kind = "integer"
    "#;

    #[test]
    fn test_parse_rules() {
        let rules = RuleFile::from_toml(NUMBERS).unwrap();
        assert_eq!(rules.config, LexerConfig::default());
        assert_eq!(rules.tokens.len(), 3);
        assert_eq!(rules.tokens[0].kind, ValueKind::Skip);
        assert_eq!(rules.tokens[1].name, "uint");
    }

    #[test]
    fn test_kind_defaults_to_text() {
        let rules = RuleFile::from_toml(
            r#"
            [config]
            case_insensitive = true

            [[token]]
            name = "word"
            pattern = "[a-z]+"
            "#,
        )
        .unwrap();
        assert!(rules.config.case_insensitive);
        assert_eq!(rules.tokens[0].kind, ValueKind::Text);

        let mut lexer = rules.build_lexer(false);
        lexer.lex("Hello").unwrap();
        assert_eq!(lexer.tokens()[0].value, Some(Value::from("Hello")));
    }

    #[test]
    fn test_rejects_empty_and_unknown_kind() {
        assert!(matches!(RuleFile::from_toml(""), Err(ToolError::NoTokens)));
        let bad_kind = "[[token]]\nname = \"x\"\npattern = \"x\"\nkind = \"bool\"\n";
        assert!(matches!(RuleFile::from_toml(bad_kind), Err(ToolError::Rules(_))));
    }

    #[test]
    fn test_build_lexer_converts_values() {
        let mut lexer = RuleFile::from_toml(NUMBERS).unwrap().build_lexer(false);
        lexer.lex("12 -24").unwrap();

        let values: Vec<Option<Value>> = lexer.tokens().iter().map(|t| t.value.clone()).collect();
        assert_eq!(values, vec![Some(Value::from(12)), None, Some(Value::from(-24))]);
    }

    #[test]
    fn test_float_kind() {
        let mut lexer = RuleFile::from_toml(
            "[[token]]\nname = \"float\"\npattern = '[0-9]+\\.[0-9]+'\nkind = \"float\"\n",
        )
        .unwrap()
        .build_lexer(false);
        lexer.lex("2.5").unwrap();
        assert_eq!(lexer.tokens()[0].value, Some(Value::from(2.5)));
    }

    #[test]
    fn test_skip_unmatched_flag() {
        let rules = RuleFile::from_toml(NUMBERS).unwrap();
        assert!(rules.build_lexer(false).lex("1 x").is_err());
        assert!(rules.build_lexer(true).lex("1 x").is_ok());
    }
}
