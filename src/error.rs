//! Error types for the Circuit Sketch compiler.
//!
//! This module provides a unified error type [`SketchError`] that covers
//! all error conditions that can occur during sketch parsing and circuit
//! editing. Compilation itself is total and never produces an error.

use thiserror::Error;

use crate::components::ComponentKind;

/// Result type alias using [`SketchError`].
pub type Result<T> = std::result::Result<T, SketchError>;

/// Unified error type for all Circuit Sketch operations.
#[derive(Error, Debug)]
pub enum SketchError {
    // ============ DSL Parsing Errors ============
    /// Error during lexical analysis
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// Error during parsing
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Unknown component keyword
    #[error("Unknown component kind '{keyword}' at line {line}")]
    UnknownComponentKind { keyword: String, line: usize },

    /// Invalid parameter for a component entry
    #[error("Invalid parameter '{param}' for {kind} at line {line}: {message}")]
    InvalidParameter {
        kind: ComponentKind,
        param: String,
        line: usize,
        message: String,
    },

    /// Pin not part of the declared pin space
    #[error("Pin '{pin}' at line {line} is not in the declared pin space")]
    UnknownPin { pin: String, line: usize },

    // ============ Edit Errors ============
    /// Position outside the circuit
    #[error("Position {position} is out of bounds for a circuit of {len} components")]
    IndexOutOfBounds { position: usize, len: usize },

    /// Attribute update against a component that does not carry the attribute
    #[error("{kind} at position {position} has no '{attribute}' attribute")]
    AttributeNotApplicable {
        position: usize,
        kind: ComponentKind,
        attribute: &'static str,
    },

    /// Blank entry in a pin list
    #[error("Pin list for position {position} has a blank entry at index {index}")]
    BlankPin { position: usize, index: usize },

    // ============ I/O Errors ============
    /// Error reading a sketch file
    #[error("Failed to read sketch file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing generated source
    #[error("Failed to write output '{path}': {source}")]
    OutputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ============ WASM Errors ============
    /// WASM-specific error
    #[cfg(feature = "wasm")]
    #[error("WASM error: {message}")]
    WasmError { message: String },
}

impl SketchError {
    /// Create a lexer error
    pub fn lexer(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::LexerError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(
        kind: ComponentKind,
        param: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            kind,
            param: param.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an out-of-bounds edit error
    pub fn out_of_bounds(position: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { position, len }
    }

    /// Create an attribute mismatch error
    pub fn not_applicable(position: usize, kind: ComponentKind, attribute: &'static str) -> Self {
        Self::AttributeNotApplicable {
            position,
            kind,
            attribute,
        }
    }
}
