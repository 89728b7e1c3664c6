//! Circuit-to-sketch compiler.
//!
//! Turns a [`Circuit`] into microcontroller source text made of three
//! regions in a fixed order:
//!
//! ```text
//! #include <Servo.h>
//! #include <Stepper.h>
//!
//! <declarations>
//! void setup() {
//!   <one-time initialization>
//! }
//!
//! void loop() {
//!   <repeating control statements>
//! }
//! ```
//!
//! ## Algorithm
//!
//! The circuit is walked once, in order. Each component appends to the
//! regions it needs:
//!
//! 1. Pin modes are emitted on first use of a pin only
//! 2. Rotary actuators get one declaration per distinct pin, named
//!    `actuator1`, `actuator2`, ...
//! 3. Stepped actuators get one declaration per distinct ordered 4-pin
//!    binding, named `stepMotor1`, `stepMotor2`, ...
//! 4. Loop statements are emitted for every component, in circuit order
//!
//! Compilation is a pure function of the circuit and the configuration.
//! All naming tables are local to one call, so compiling the same circuit
//! twice yields byte-identical text.

mod emitter;
mod names;

pub use emitter::{Emitter, Sections};
pub use names::{NameTable, ResourceTable, ACTUATOR_PREFIX, STEPPER_PREFIX};

use log::debug;

use crate::circuit::Circuit;

/// Libraries included at the top of every sketch, used or not.
pub const HEADER_INCLUDES: [&str; 2] = ["#include <Servo.h>", "#include <Stepper.h>"];

/// Steps-per-revolution constant passed to every stepper declaration.
pub const STEPS_PER_REVOLUTION: i64 = 200;

/// Speed (RPM) every stepper is configured with in setup.
pub const STEPPER_SPEED_RPM: i64 = 60;

/// Configuration for the compiler.
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Append human-readable `//` notes to statements.
    pub annotate: bool,
    /// Indentation unit for statements inside `setup` and `loop`.
    pub indent: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            annotate: true,
            indent: "  ".to_string(),
        }
    }
}

impl CodegenConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable trailing notes.
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Compile a circuit with the default configuration.
pub fn compile(circuit: &Circuit) -> String {
    compile_with(circuit, &CodegenConfig::default())
}

/// Compile a circuit with an explicit configuration.
pub fn compile_with(circuit: &Circuit, config: &CodegenConfig) -> String {
    let mut emitter = Emitter::new(config);
    for (position, component) in circuit.iter().enumerate() {
        emitter.emit(position, component);
    }
    let sections = emitter.finish();

    debug!(
        "compiled {} components: {} declarations, {} setup lines, {} loop lines",
        circuit.len(),
        sections.declarations.len(),
        sections.setup.len(),
        sections.loop_body.len()
    );

    assemble(&sections, config)
}

/// Join the regions into the final text.
fn assemble(sections: &Sections, config: &CodegenConfig) -> String {
    let mut out = String::new();

    for include in HEADER_INCLUDES {
        out.push_str(include);
        out.push('\n');
    }
    out.push('\n');

    for declaration in &sections.declarations {
        out.push_str(declaration);
        out.push('\n');
    }
    if !sections.declarations.is_empty() {
        out.push('\n');
    }

    out.push_str("void setup() {\n");
    if config.annotate {
        out.push_str(&config.indent);
        out.push_str("// Setup code for initializing components\n");
    }
    for line in &sections.setup {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n\n");

    out.push_str("void loop() {\n");
    if config.annotate {
        out.push_str(&config.indent);
        out.push_str("// The main loop runs over and over again\n");
    }
    for line in &sections.loop_body {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n");

    out
}
