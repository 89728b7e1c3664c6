//! DSL (Domain Specific Language) parser for circuit sketches.
//!
//! This module provides a small line-oriented language for writing down a
//! circuit as an ordered list of components, so sketches can live in files
//! and be compiled from the command line.
//!
//! # Grammar Overview
//!
//! ```text
//! sketch      = { line }
//! line        = comment | directive | entry | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = ".pins" pin { pin }
//! entry       = kind { pin | number | state | param }
//! param       = identifier '=' (number | identifier)
//!
//! kind        = "led" | "light" | "button" | "servo" | "rotary" | "stepper"
//!             | "stepped" | "delay" | "wait" | "toggle" | "blink" | "blinker"
//!             | "control" | "power"
//! pin         = identifier
//! state       = "on" | "off" | "high" | "low"   (power controllers only)
//! number      = ['-' | '+'] digit+
//! identifier  = (letter | '_') { letter | digit | '_' }
//! ```
//!
//! Pin names must start with a letter; bare numbers are always values.
//!
//! # Parameters
//!
//! | Kind | Pins | Value | Named parameters |
//! |------|------|-------|------------------|
//! | led | 0..1 | light level (nonzero = on) | `value` |
//! | button | 0..1 | - | - |
//! | servo | 0..1 | angle in degrees | `angle`, `value` |
//! | stepper | any (4 to compile) | steps per pass | `steps`, `value` |
//! | delay | 0 | milliseconds | `ms`, `value` |
//! | toggle | 0..1 | - | `interval` |
//! | control | 0..1 | - | `state` |
//!
//! # Example
//!
//! ```text
//! # Sweep an arm while a light blinks
//! .pins D0 D1 D2 D3 D4 D5 D6 D7 D8
//!
//! servo   D5 30
//! wait    500
//! servo   D5 150
//! blink   D6 interval=250
//! power   D2 off
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a sketch DSL string into an AST.
pub fn parse(input: &str) -> Result<SketchAst> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a sketch DSL file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<SketchAst> {
    let content =
        std::fs::read_to_string(path).map_err(|e| crate::error::SketchError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
    parse(&content)
}
