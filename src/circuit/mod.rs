//! Circuit sketch representation.
//!
//! This module provides the ordered component list the compiler consumes.
//! The [`Circuit`] struct is an immutable snapshot; every edit operation
//! returns a new snapshot.

mod list;
mod pins;
mod types;

pub use list::Circuit;
pub use pins::{available_pins, used_pins};
pub use types::*;
