//! # Circuit Sketch
//!
//! A compiler from hobby hardware circuits to microcontroller sketch source.
//!
//! This library provides:
//! - An ordered circuit model of lights, buttons, motors, waits, blinkers and
//!   power controllers, edited through persistent snapshot operations
//! - A deterministic compiler that emits declarations, a `setup` block and a
//!   `loop` block, deduplicating pin modes and actuator declarations
//! - A small DSL for writing circuits down as text
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`components`] - Component kinds and their per-variant attributes
//! - [`circuit`] - The ordered circuit, edit operations and pin claims
//! - [`codegen`] - The circuit-to-sketch compiler
//! - [`dsl`] - Parser for the sketch description language
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! sketch blink.sketch > blink.ino
//! ```
//!
//! ### Library
//!
//! ```
//! use circuit_sketch::{codegen, Circuit, ComponentKind};
//!
//! let circuit = Circuit::new()
//!     .add(ComponentKind::RotaryActuator)
//!     .set_pin(0, "D5")?
//!     .set_value(0, 30)?;
//!
//! let source = codegen::compile(&circuit);
//! assert!(source.contains("actuator1.write(30);"));
//! # Ok::<(), circuit_sketch::SketchError>(())
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmSketch } from 'circuit_sketch';
//!
//! const sketch = new WasmSketch();
//! sketch.add('servo');
//! sketch.set_pin(0, 'D5');
//! codeView.textContent = sketch.code();
//! ```

pub mod circuit;
pub mod codegen;
pub mod components;
pub mod dsl;
pub mod error;

// Re-export main types for convenience
pub use circuit::{Circuit, PinId};
pub use codegen::{compile, CodegenConfig};
pub use components::{Component, ComponentKind, PowerState};
pub use error::{Result, SketchError};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmSketch;
