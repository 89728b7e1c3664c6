//! WASM bindings for Circuit Sketch.
//!
//! This module provides JavaScript-friendly bindings for a browser editor.
//! The editor owns the interaction; it calls one edit method per user
//! action and re-renders the text returned by `code()`.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSketch } from 'circuit_sketch';
//!
//! await init();
//!
//! const sketch = new WasmSketch();
//! sketch.add('led');
//! sketch.set_pin(0, 'D3');
//! sketch.set_value(0, 1);
//!
//! codeView.textContent = sketch.code();
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{available_pins, used_pins, Circuit, PinId};
use crate::codegen::compile;
use crate::components::{ComponentKind, PowerState};
use crate::dsl;
use crate::error::{Result, SketchError};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: SketchError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_kind(keyword: &str) -> Result<ComponentKind> {
    ComponentKind::from_keyword(keyword).ok_or_else(|| SketchError::WasmError {
        message: format!("unknown component kind '{}'", keyword),
    })
}

/// WASM-compatible circuit editor state.
///
/// Each edit replaces the held snapshot with the one the edit returns, so a
/// failed edit leaves the circuit unchanged.
#[wasm_bindgen]
pub struct WasmSketch {
    circuit: Circuit,
}

#[wasm_bindgen]
impl WasmSketch {
    /// Create an empty sketch.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSketch {
        WasmSketch {
            circuit: Circuit::new(),
        }
    }

    /// Create a sketch from DSL text.
    #[wasm_bindgen]
    pub fn from_dsl(source: &str) -> std::result::Result<WasmSketch, JsValue> {
        let ast = dsl::parse(source).map_err(to_js)?;
        let circuit = Circuit::from_sketch(ast).map_err(to_js)?;
        Ok(WasmSketch { circuit })
    }

    /// Append a component by keyword (`led`, `button`, `servo`, ...).
    #[wasm_bindgen]
    pub fn add(&mut self, kind: &str) -> std::result::Result<(), JsValue> {
        let kind = parse_kind(kind).map_err(to_js)?;
        self.circuit = self.circuit.add(kind);
        Ok(())
    }

    /// Remove the component at `position`.
    #[wasm_bindgen]
    pub fn remove(&mut self, position: usize) -> std::result::Result<(), JsValue> {
        self.apply(|c| c.remove(position))
    }

    /// Move the component at `from` to `to`.
    #[wasm_bindgen]
    pub fn reorder(&mut self, from: usize, to: usize) -> std::result::Result<(), JsValue> {
        self.apply(|c| c.reorder(from, to))
    }

    /// Bind a single pin; a blank string unbinds it.
    #[wasm_bindgen]
    pub fn set_pin(&mut self, position: usize, pin: &str) -> std::result::Result<(), JsValue> {
        self.apply(|c| c.set_pin(position, pin))
    }

    /// Replace a stepper's coil pins.
    #[wasm_bindgen]
    pub fn set_pins(
        &mut self,
        position: usize,
        pins: Vec<String>,
    ) -> std::result::Result<(), JsValue> {
        let pins: Vec<PinId> = pins.into_iter().map(PinId::from).collect();
        self.apply(|c| c.set_pin_set(position, pins))
    }

    /// Set the light level, angle, step count or wait time.
    #[wasm_bindgen]
    pub fn set_value(&mut self, position: usize, value: i32) -> std::result::Result<(), JsValue> {
        self.apply(|c| c.set_value(position, i64::from(value)))
    }

    /// Set a blinker's half-period in milliseconds.
    #[wasm_bindgen]
    pub fn set_blink_interval(
        &mut self,
        position: usize,
        interval_ms: i32,
    ) -> std::result::Result<(), JsValue> {
        self.apply(|c| c.set_blink_interval(position, i64::from(interval_ms)))
    }

    /// Set a power controller's state from `on`/`off`/`HIGH`/`LOW`.
    #[wasm_bindgen]
    pub fn set_power_state(
        &mut self,
        position: usize,
        state: &str,
    ) -> std::result::Result<(), JsValue> {
        let state: PowerState = state
            .parse()
            .map_err(|msg: String| JsValue::from_str(&msg))?;
        self.apply(|c| c.set_power_state(position, state))
    }

    /// Number of components.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.circuit.len()
    }

    /// Generated sketch source for the current circuit.
    #[wasm_bindgen]
    pub fn code(&self) -> String {
        compile(&self.circuit)
    }

    /// Pins other components may not select.
    #[wasm_bindgen]
    pub fn used_pins(&self) -> Vec<String> {
        used_pins(&self.circuit).iter().map(PinId::to_string).collect()
    }

    /// Reference-board pins a component of `kind` may select.
    #[wasm_bindgen]
    pub fn available_pins(&self, kind: &str) -> std::result::Result<Vec<String>, JsValue> {
        let kind = parse_kind(kind).map_err(to_js)?;
        Ok(available_pins(&self.circuit, kind, &PinId::reference_set())
            .iter()
            .map(PinId::to_string)
            .collect())
    }
}

impl WasmSketch {
    /// Replace the held snapshot with the result of `edit`.
    fn apply<F>(&mut self, edit: F) -> std::result::Result<(), JsValue>
    where
        F: FnOnce(&Circuit) -> Result<Circuit>,
    {
        self.circuit = edit(&self.circuit).map_err(to_js)?;
        Ok(())
    }
}

impl Default for WasmSketch {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Keywords of all component kinds, in palette order.
#[wasm_bindgen]
pub fn component_kinds() -> Vec<String> {
    ComponentKind::all()
        .iter()
        .map(|kind| kind.keyword().to_string())
        .collect()
}
