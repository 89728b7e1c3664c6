//! Lexer (tokenizer) for the sketch DSL.

use crate::error::{Result, SketchError};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (component keyword, pin name, parameter name, state word)
    Identifier,
    /// A decimal integer, possibly signed
    Number,
    /// A directive (starts with '.')
    Directive,
    /// Equals sign '='
    Equals,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing sketch DSL input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;
        let token = |kind, text: String| Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        };

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => return Ok(token(TokenKind::Eof, String::new())),
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '.' => {
                self.advance();
                let name = self.read_word();
                if name.is_empty() {
                    return Err(SketchError::lexer(
                        start_line,
                        start_column,
                        "expected directive name after '.'",
                    ));
                }
                Ok(token(TokenKind::Directive, format!(".{}", name)))
            }
            '=' => {
                self.advance();
                Ok(token(TokenKind::Equals, "=".to_string()))
            }
            '-' | '+' => {
                self.advance();
                let digits = self.read_word();
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return Err(SketchError::lexer(
                        start_line,
                        start_column,
                        format!("expected digits after '{}'", ch),
                    ));
                }
                Ok(token(TokenKind::Number, format!("{}{}", ch, digits)))
            }
            _ if ch.is_alphanumeric() || ch == '_' => {
                let text = self.read_word();
                if text.chars().all(|c| c.is_ascii_digit()) {
                    Ok(token(TokenKind::Number, text))
                } else if text.starts_with(|c: char| c.is_ascii_digit()) {
                    Err(SketchError::lexer(
                        start_line,
                        start_column,
                        format!("malformed number '{}'", text),
                    ))
                } else {
                    Ok(token(TokenKind::Identifier, text))
                }
            }
            _ => Err(SketchError::lexer(
                start_line,
                start_column,
                format!("unexpected character '{}'", ch),
            )),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.advance();
            } else if ch == '#' || ch == ';' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

/// Parse an integer token's text.
pub fn parse_int(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut kinds = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            kinds.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                break;
            }
        }
        kinds
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("200"), Some(200));
        assert_eq!(parse_int("-15"), Some(-15));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("D3"), None);
    }

    #[test]
    fn test_lexer_basic() {
        let input = "servo D5 angle=30";
        let mut lexer = Lexer::new(input);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "servo");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, "D5");
        assert_eq!(tok.column, 7);

        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_directive_and_comments() {
        let input = "# header\n.pins D0 D1 ; trailing\nwait -5\n";
        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Newline,
                TokenKind::Directive,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexer_errors() {
        let mut lexer = Lexer::new("wait 5ms");
        lexer.next_token().unwrap();
        assert!(matches!(
            lexer.next_token(),
            Err(SketchError::LexerError { line: 1, column: 6, .. })
        ));

        let mut lexer = Lexer::new("light @");
        lexer.next_token().unwrap();
        assert!(lexer.next_token().is_err());
    }
}
