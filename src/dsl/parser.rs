//! Parser for the sketch DSL.

use std::collections::HashSet;

use super::ast::*;
use super::lexer::{parse_int, Lexer, Token, TokenKind};
use crate::components::{ComponentKind, PowerState};
use crate::error::{Result, SketchError};

/// Parser for sketch DSL.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire sketch description.
    pub fn parse(&mut self) -> Result<SketchAst> {
        let mut ast = SketchAst::new();

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {}
                TokenKind::Directive => self.parse_directive(&mut ast)?,
                TokenKind::Identifier => {
                    let entry = self.parse_entry()?;
                    ast.entries.push(entry);
                }
                _ => {
                    return Err(SketchError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            // Consume newline
            if self.current.kind == TokenKind::Newline {
                self.advance()?;
            }
        }

        if let Some(space) = &ast.pins {
            let space: HashSet<&str> = space.iter().map(String::as_str).collect();
            for entry in &ast.entries {
                if let Some(pin) = entry.pins.iter().find(|p| !space.contains(p.as_str())) {
                    return Err(SketchError::UnknownPin {
                        pin: pin.clone(),
                        line: entry.line,
                    });
                }
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn at_line_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Newline | TokenKind::Eof)
    }

    fn parse_directive(&mut self, ast: &mut SketchAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".pins" => {
                if ast.pins.is_some() {
                    return Err(SketchError::parse(line, "pin space declared twice"));
                }
                let mut pins = Vec::new();
                while !self.at_line_end() {
                    if self.current.kind != TokenKind::Identifier {
                        return Err(SketchError::parse(
                            line,
                            format!("expected pin name, got {:?}", self.current.text),
                        ));
                    }
                    if !pins.contains(&self.current.text) {
                        pins.push(self.current.text.clone());
                    }
                    self.advance()?;
                }
                if pins.is_empty() {
                    return Err(SketchError::parse(line, ".pins needs at least one pin"));
                }
                ast.pins = Some(pins);
            }
            _ => {
                return Err(SketchError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_entry(&mut self) -> Result<EntryDef> {
        let keyword = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        let kind = ComponentKind::from_keyword(&keyword).ok_or_else(|| {
            SketchError::UnknownComponentKind {
                keyword: keyword.clone(),
                line,
            }
        })?;
        let mut entry = EntryDef::new(kind, line);

        while !self.at_line_end() {
            match self.current.kind {
                TokenKind::Identifier => {
                    let text = self.current.text.clone();
                    self.advance()?;

                    // Check for param=value syntax
                    if self.current.kind == TokenKind::Equals {
                        self.advance()?;
                        let value = self.parse_param_value(line)?;
                        let key = text.to_lowercase();
                        if entry.params.contains_key(&key) {
                            return Err(SketchError::parse(
                                line,
                                format!("parameter '{}' given twice", key),
                            ));
                        }
                        entry.params.insert(key, value);
                        continue;
                    }

                    // A bare on/off word is the power controller's state
                    if kind == ComponentKind::PowerSwitch
                        && entry.state.is_none()
                        && text.parse::<PowerState>().is_ok()
                    {
                        entry.state = Some(text);
                    } else {
                        entry.pins.push(text);
                    }
                }
                TokenKind::Number => {
                    let text = self.current.text.clone();
                    self.advance()?;
                    if entry.value.is_some() {
                        return Err(SketchError::parse(
                            line,
                            format!("unexpected second value '{}'", text),
                        ));
                    }
                    let value = parse_int(&text).ok_or_else(|| {
                        SketchError::parse(line, format!("invalid number: {}", text))
                    })?;
                    entry.value = Some(value);
                }
                _ => {
                    return Err(SketchError::parse(
                        line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }
        }

        Ok(entry)
    }

    fn parse_param_value(&mut self, line: usize) -> Result<ParamValue> {
        let text = self.current.text.clone();
        let value = match self.current.kind {
            TokenKind::Number => ParamValue::Int(parse_int(&text).ok_or_else(|| {
                SketchError::parse(line, format!("invalid number: {}", text))
            })?),
            TokenKind::Identifier => ParamValue::Word(text),
            _ => return Err(SketchError::parse(line, "expected parameter value")),
        };
        self.advance()?;
        Ok(value)
    }
}
