//! Core types for circuit representation.

use std::fmt;

/// Identifier of a digital I/O line on the target board.
///
/// Pin names are opaque tokens: they are compared and emitted verbatim,
/// never interpreted numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(pub String);

impl PinId {
    /// Number of pins exposed by the reference board.
    pub const REFERENCE_PIN_COUNT: usize = 9;

    /// Create a pin identifier from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The pin name as written in generated source.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty or only whitespace, which means unbound.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The reference board's pin space, `D0` through `D8`.
    pub fn reference_set() -> Vec<PinId> {
        (0..Self::REFERENCE_PIN_COUNT)
            .map(|n| PinId(format!("D{}", n)))
            .collect()
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PinId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
