use crate::error::LexError;
use crate::lexer::{Lexer, Segment};

/// Label used for gaps in [`Lexer::candidates_string`].
const GAP_LABEL: &str = "unmatched input";

impl<T> Lexer<T> {
    /// Render the resolved candidates of `text`, one per line, as
    /// `name token: "text"`. Gaps render as `unmatched input: "text"`.
    ///
    /// Nothing is converted and nothing is stored.
    ///
    /// # Errors
    ///
    /// Same as [`Lexer::find_candidates`].
    pub fn candidates_string(&self, text: &str) -> Result<String, LexError> {
        let lines = self.resolve(text)?.into_iter().map(|segment| {
            let lexeme = &text[segment.range()];
            match segment {
                Segment::Candidate(candidate) => {
                    let name = self
                        .token_type(candidate.token_type)
                        .map_or(super::engine::UNMATCHED_NAME, |t| t.name());
                    format!("{name} token: {lexeme:?}\n")
                }
                Segment::Gap(_) => format!("{GAP_LABEL}: {lexeme:?}\n"),
            }
        });
        Ok(lines.collect())
    }

    /// Render every unconsumed token, one per line, as `name token: "text"`.
    #[must_use]
    pub fn tokens_string(&self) -> String {
        self.tokens
            .iter()
            .map(|token| {
                let lexeme = self.lexeme(token).unwrap_or_default();
                format!("{} token: {lexeme:?}\n", self.token_type_name(token))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, SkipUnmatched, TokenType};
    use std::sync::Arc;

    fn number_lexer() -> Lexer<()> {
        let mut lexer = Lexer::new();
        lexer.register_token_type(Arc::new(TokenType::infallible("uint", "[0-9]+", |_| ())));
        lexer.register_token_type(Arc::new(TokenType::infallible("int", "-?[0-9]+", |_| ())));
        lexer
    }

    #[test]
    fn test_candidates_string() {
        let lexer = number_lexer();
        let rendered = lexer.candidates_string("12 -24").unwrap();
        assert_eq!(
            rendered,
            "uint token: \"12\"\nunmatched input: \" \"\nint token: \"-24\"\n"
        );
        assert!(lexer.tokens().is_empty());
    }

    #[test]
    fn test_candidates_string_keeps_every_line() {
        let lexer = number_lexer();
        assert_eq!(lexer.candidates_string("").unwrap(), "");
        assert_eq!(
            lexer.candidates_string(" 1 2 ").unwrap(),
            "unmatched input: \" \"\nuint token: \"1\"\nunmatched input: \" \"\n\
             uint token: \"2\"\nunmatched input: \" \"\n"
        );
    }

    #[test]
    fn test_tokens_string() {
        let mut lexer = number_lexer().with_policy(SkipUnmatched);
        lexer.lex("12 -24").unwrap();
        assert_eq!(lexer.tokens_string(), "uint token: \"12\"\nint token: \"-24\"\n");
    }

    #[test]
    fn test_control_characters_stay_on_one_line() {
        let mut lexer: Lexer<()> = Lexer::new();
        lexer.register_token_type(Arc::new(TokenType::infallible("ws", r"\s+", |_| ())));
        lexer.lex("\n\t").unwrap();
        assert_eq!(lexer.tokens_string(), "ws token: \"\\n\\t\"\n");
    }
}
