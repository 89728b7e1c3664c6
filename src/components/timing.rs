//! Timing components.

/// A blocking pause inside the control loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wait {
    /// Pause length in milliseconds, nominally 100..=5000
    pub duration_ms: i64,
}

impl Wait {
    /// Create a zero-length wait.
    pub fn new() -> Self {
        Self::default()
    }
}
