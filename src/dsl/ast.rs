//! Abstract Syntax Tree types for the sketch DSL.

use std::collections::BTreeMap;
use std::fmt;

use crate::components::ComponentKind;

/// Complete AST representation of a parsed sketch file.
#[derive(Debug, Clone, Default)]
pub struct SketchAst {
    /// Pin space declared with `.pins`, if any
    pub pins: Option<Vec<String>>,
    /// Component entries in file order
    pub entries: Vec<EntryDef>,
}

impl SketchAst {
    /// Create a new empty sketch AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// One component line of a sketch file.
#[derive(Debug, Clone)]
pub struct EntryDef {
    /// Component kind
    pub kind: ComponentKind,
    /// Bound pin names, in the order written
    pub pins: Vec<String>,
    /// Positional value (angle, steps, milliseconds, light level)
    pub value: Option<i64>,
    /// Positional power state word (`on`/`off`)
    pub state: Option<String>,
    /// Named `key=value` parameters, keys lowercased
    pub params: BTreeMap<String, ParamValue>,
    /// Source line number for error reporting
    pub line: usize,
}

impl EntryDef {
    /// Create an entry with no pins or parameters.
    pub fn new(kind: ComponentKind, line: usize) -> Self {
        Self {
            kind,
            pins: Vec::new(),
            value: None,
            state: None,
            params: BTreeMap::new(),
            line,
        }
    }
}

/// Right-hand side of a `key=value` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Word(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Word(w) => f.write_str(w),
        }
    }
}
