//! Per-compilation resource naming tables.
//!
//! These tables deduplicate hardware declarations: every distinct physical
//! binding gets exactly one generated identifier, and every output/input
//! pin gets exactly one mode statement. A fresh [`ResourceTable`] is built
//! for each compilation and dropped at its end.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::circuit::PinId;

/// Prefix of generated rotary actuator identifiers.
pub const ACTUATOR_PREFIX: &str = "actuator";

/// Prefix of generated stepped actuator identifiers.
pub const STEPPER_PREFIX: &str = "stepMotor";

/// Maps a binding key to a synthesized identifier `<prefix><n>`, with `n`
/// counting from 1 in order of first use.
#[derive(Debug)]
pub struct NameTable<K> {
    prefix: &'static str,
    names: HashMap<K, String>,
}

impl<K: Eq + Hash> NameTable<K> {
    /// Create an empty table for identifiers starting with `prefix`.
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            names: HashMap::new(),
        }
    }

    /// Look up the identifier for `key`, synthesizing one on first use.
    ///
    /// Returns the identifier and whether it was created by this call.
    pub fn resolve(&mut self, key: K) -> (String, bool) {
        if let Some(name) = self.names.get(&key) {
            return (name.clone(), false);
        }
        let name = format!("{}{}", self.prefix, self.names.len() + 1);
        self.names.insert(key, name.clone());
        (name, true)
    }

    /// Number of identifiers handed out so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no identifier has been handed out.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// All bookkeeping for a single compilation.
#[derive(Debug)]
pub struct ResourceTable {
    /// Rotary actuators, keyed by pin
    pub actuators: NameTable<PinId>,
    /// Stepped actuators, keyed by the ordered coil pins
    pub steppers: NameTable<[PinId; 4]>,
    initialized_pins: HashSet<PinId>,
}

impl ResourceTable {
    /// Create empty tables.
    pub fn new() -> Self {
        Self {
            actuators: NameTable::new(ACTUATOR_PREFIX),
            steppers: NameTable::new(STEPPER_PREFIX),
            initialized_pins: HashSet::new(),
        }
    }

    /// Record that `pin` needs a mode statement.
    ///
    /// Returns `true` only the first time a pin is seen.
    pub fn first_mode_use(&mut self, pin: &PinId) -> bool {
        self.initialized_pins.insert(pin.clone())
    }
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}
