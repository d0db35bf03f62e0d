//! Output formats for the `objlex` binary

use crate::cli::OutputFormat;
use crate::error::ToolError;
use objlex::Lexer;
use serde::Serialize;
use serde_json::Value;

/// One printed token in JSON output.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub start: u32,
    pub end: u32,
    pub value: &'a Value,
}

/// Tokens whose rule is not `kind = "skip"`, as records.
#[must_use]
pub fn records(lexer: &Lexer<Option<Value>>) -> Vec<TokenRecord<'_>> {
    lexer
        .tokens()
        .iter()
        .filter_map(|token| {
            let value = token.value.as_ref()?;
            Some(TokenRecord {
                name: lexer.token_type_name(token),
                text: lexer.lexeme(token).unwrap_or_default(),
                start: token.range.start().raw(),
                end: token.range.end().raw(),
                value,
            })
        })
        .collect()
}

/// Render the printable tokens of `lexer`.
///
/// # Errors
///
/// Returns [`ToolError::Json`] if JSON serialization fails.
pub fn render_tokens(
    lexer: &Lexer<Option<Value>>,
    format: OutputFormat,
) -> Result<String, ToolError> {
    let records = records(lexer);
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| format!("{} token: {:?}\n", record.name, record.text))
            .collect()),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&records)?;
            out.push('\n');
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleFile;

    fn lexed(text: &str) -> Lexer<Option<Value>> {
        let rules = RuleFile::from_toml(
            r#"
            [[token]]
            name = "space"
            pattern = " +"
            kind = "skip"

            [[token]]
            name = "number"
            pattern = "[0-9]+"
            kind = "integer"

            [[token]]
            name = "word"
            pattern = "[a-z]+"
            "#,
        )
        .unwrap();
        let mut lexer = rules.build_lexer(false);
        lexer.lex(text).unwrap();
        lexer
    }

    #[test]
    fn test_text_output_hides_skipped() {
        let lexer = lexed("let 42");
        assert_eq!(
            render_tokens(&lexer, OutputFormat::Text).unwrap(),
            "word token: \"let\"\nnumber token: \"42\"\n"
        );
    }

    #[test]
    fn test_text_output_of_only_skipped_is_empty() {
        let lexer = lexed("   ");
        assert_eq!(render_tokens(&lexer, OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_json_output() {
        let lexer = lexed("x 7");
        let json = render_tokens(&lexer, OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!([
                { "name": "word", "text": "x", "start": 0, "end": 1, "value": "x" },
                { "name": "number", "text": "7", "start": 2, "end": 3, "value": 7 },
            ])
        );
    }
}
