//! Component models for circuit sketches.
//!
//! This module provides models for all supported components:
//! - Outputs: Light, Blinker, Power Controller
//! - Inputs: Button
//! - Actuators: Rotary (servo) and Stepped (stepper) motors
//! - Timing: Wait
//!
//! Each variant carries only the attributes it actually uses, so the
//! compiler can dispatch on [`Component`] with exhaustive matching.

mod actuators;
mod inputs;
mod outputs;
mod timing;

pub use actuators::{RotaryActuator, SteppedActuator};
pub use inputs::Button;
pub use outputs::{Blinker, Light, PowerState, PowerSwitch};
pub use timing::Wait;

use std::fmt;

use crate::circuit::PinId;
use crate::dsl::{EntryDef, ParamValue};
use crate::error::{Result, SketchError};

/// The closed set of component kinds a sketch can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Light,
    Button,
    RotaryActuator,
    SteppedActuator,
    Wait,
    Blinker,
    PowerSwitch,
}

impl ComponentKind {
    /// All kinds, in palette order.
    pub const ALL: [ComponentKind; 7] = [
        Self::Light,
        Self::Button,
        Self::RotaryActuator,
        Self::SteppedActuator,
        Self::Wait,
        Self::Blinker,
        Self::PowerSwitch,
    ];

    /// All kinds, in palette order.
    pub fn all() -> &'static [ComponentKind] {
        &Self::ALL
    }

    /// Human-facing display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "Magic Light",
            Self::Button => "Clicky Switch",
            Self::RotaryActuator => "Robotic Arm",
            Self::SteppedActuator => "Step-by-Step Motor",
            Self::Wait => "Wait Time",
            Self::Blinker => "Blinky Switch",
            Self::PowerSwitch => "Power Controller",
        }
    }

    /// Human-facing description shown as a tooltip.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Light => {
                "A tiny light that glows when electricity flows through it. It shows when something is working!"
            }
            Self::Button => {
                "A button you can press to make things happen in your circuit. It's like magic!"
            }
            Self::RotaryActuator => {
                "A motor that can turn to exact positions. It's like a robot arm that can point in different directions!"
            }
            Self::SteppedActuator => {
                "A motor that moves in tiny, precise steps. It's great for making things move very accurately!"
            }
            Self::Wait => {
                "This tells your circuit to take a short break before doing the next thing. Like counting to 10 before you go!"
            }
            Self::Blinker => {
                "This makes things turn on and off repeatedly. It's how you make lights blink!"
            }
            Self::PowerSwitch => {
                "This lets you turn things on or off in your circuit. It's like a light switch for your components!"
            }
        }
    }

    /// Stable lowercase identifier used by sketch files and the WASM boundary.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Light => "led",
            Self::Button => "button",
            Self::RotaryActuator => "servo",
            Self::SteppedActuator => "stepper",
            Self::Wait => "delay",
            Self::Blinker => "toggle",
            Self::PowerSwitch => "control",
        }
    }

    /// Parse a kind from its keyword or one of its aliases.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "led" | "light" => Some(Self::Light),
            "button" => Some(Self::Button),
            "servo" | "rotary" => Some(Self::RotaryActuator),
            "stepper" | "stepped" => Some(Self::SteppedActuator),
            "delay" | "wait" => Some(Self::Wait),
            "toggle" | "blink" | "blinker" => Some(Self::Blinker),
            "control" | "power" => Some(Self::PowerSwitch),
            _ => None,
        }
    }

    /// Whether this kind is bound to a single pin.
    pub fn uses_single_pin(&self) -> bool {
        !matches!(self, Self::Wait | Self::SteppedActuator)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One placed component instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Light(Light),
    Button(Button),
    RotaryActuator(RotaryActuator),
    SteppedActuator(SteppedActuator),
    Wait(Wait),
    Blinker(Blinker),
    PowerSwitch(PowerSwitch),
}

impl Component {
    /// Create a component of the given kind with its default attributes.
    pub fn new(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Light => Component::Light(Light::new()),
            ComponentKind::Button => Component::Button(Button::new()),
            ComponentKind::RotaryActuator => Component::RotaryActuator(RotaryActuator::new()),
            ComponentKind::SteppedActuator => Component::SteppedActuator(SteppedActuator::new()),
            ComponentKind::Wait => Component::Wait(Wait::new()),
            ComponentKind::Blinker => Component::Blinker(Blinker::new()),
            ComponentKind::PowerSwitch => Component::PowerSwitch(PowerSwitch::new()),
        }
    }

    /// Create a component from a sketch file entry.
    pub fn from_def(def: &EntryDef) -> Result<Self> {
        let kind = def.kind;
        let mut component = Component::new(kind);

        // Pin binding
        match kind {
            ComponentKind::SteppedActuator => {
                if let Component::SteppedActuator(stepper) = &mut component {
                    stepper.pins = def.pins.iter().map(|p| PinId::new(p.as_str())).collect();
                }
            }
            ComponentKind::Wait => {
                if let Some(pin) = def.pins.first() {
                    return Err(SketchError::invalid_parameter(
                        kind,
                        pin.as_str(),
                        def.line,
                        "a wait takes no pin",
                    ));
                }
            }
            _ => {
                if def.pins.len() > 1 {
                    return Err(SketchError::invalid_parameter(
                        kind,
                        def.pins[1].as_str(),
                        def.line,
                        "only one pin may be bound",
                    ));
                }
                if let (Some(slot), Some(pin)) = (component.pin_slot_mut(), def.pins.first()) {
                    *slot = Some(PinId::new(pin.as_str()));
                }
            }
        }

        // Positional value
        if let Some(value) = def.value {
            match component.value_slot_mut() {
                Some(slot) => *slot = value,
                None => {
                    return Err(SketchError::invalid_parameter(
                        kind,
                        value.to_string(),
                        def.line,
                        "this component takes no value",
                    ))
                }
            }
        }

        // Positional power state
        if let Some(word) = &def.state {
            if let Component::PowerSwitch(switch) = &mut component {
                switch.state = word.parse().map_err(|msg: String| {
                    SketchError::invalid_parameter(kind, "state", def.line, msg)
                })?;
            }
        }

        // Named parameters
        for (key, value) in &def.params {
            let expected = match (kind, key.as_str()) {
                (ComponentKind::Light, "value")
                | (ComponentKind::RotaryActuator, "angle" | "value")
                | (ComponentKind::SteppedActuator, "steps" | "value")
                | (ComponentKind::Wait, "ms" | "value")
                | (ComponentKind::Blinker, "interval") => "integer",
                (ComponentKind::PowerSwitch, "state") => "on/off",
                _ => {
                    return Err(SketchError::invalid_parameter(
                        kind,
                        key.as_str(),
                        def.line,
                        "unknown parameter",
                    ))
                }
            };

            match (&mut component, value) {
                (Component::Blinker(blinker), ParamValue::Int(v)) => blinker.interval_ms = *v,
                (Component::PowerSwitch(switch), ParamValue::Word(w)) => {
                    switch.state = w.parse().map_err(|msg: String| {
                        SketchError::invalid_parameter(kind, key.as_str(), def.line, msg)
                    })?;
                }
                (component, ParamValue::Int(v)) if expected == "integer" => {
                    if let Some(slot) = component.value_slot_mut() {
                        *slot = *v;
                    }
                }
                _ => {
                    return Err(SketchError::invalid_parameter(
                        kind,
                        key.as_str(),
                        def.line,
                        format!("expected {}, got '{}'", expected, value),
                    ))
                }
            }
        }

        Ok(component)
    }

    /// Get the component kind.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Light(_) => ComponentKind::Light,
            Component::Button(_) => ComponentKind::Button,
            Component::RotaryActuator(_) => ComponentKind::RotaryActuator,
            Component::SteppedActuator(_) => ComponentKind::SteppedActuator,
            Component::Wait(_) => ComponentKind::Wait,
            Component::Blinker(_) => ComponentKind::Blinker,
            Component::PowerSwitch(_) => ComponentKind::PowerSwitch,
        }
    }

    /// Get the single bound pin, if this kind has one and it is set.
    pub fn pin(&self) -> Option<&PinId> {
        match self {
            Component::Light(c) => c.pin.as_ref(),
            Component::Button(c) => c.pin.as_ref(),
            Component::RotaryActuator(c) => c.pin.as_ref(),
            Component::Blinker(c) => c.pin.as_ref(),
            Component::PowerSwitch(c) => c.pin.as_ref(),
            Component::SteppedActuator(_) | Component::Wait(_) => None,
        }
    }

    /// Mutable access to the single-pin slot, `None` for kinds without one.
    pub(crate) fn pin_slot_mut(&mut self) -> Option<&mut Option<PinId>> {
        match self {
            Component::Light(c) => Some(&mut c.pin),
            Component::Button(c) => Some(&mut c.pin),
            Component::RotaryActuator(c) => Some(&mut c.pin),
            Component::Blinker(c) => Some(&mut c.pin),
            Component::PowerSwitch(c) => Some(&mut c.pin),
            Component::SteppedActuator(_) | Component::Wait(_) => None,
        }
    }

    /// Mutable access to the kind-specific integer value, if the kind has one.
    pub(crate) fn value_slot_mut(&mut self) -> Option<&mut i64> {
        match self {
            Component::Light(c) => Some(&mut c.value),
            Component::RotaryActuator(c) => Some(&mut c.angle),
            Component::SteppedActuator(c) => Some(&mut c.steps),
            Component::Wait(c) => Some(&mut c.duration_ms),
            Component::Button(_) | Component::Blinker(_) | Component::PowerSwitch(_) => None,
        }
    }

    /// Every pin this instance references, in binding order.
    pub fn pins(&self) -> Vec<&PinId> {
        match self {
            Component::SteppedActuator(c) => c.pins.iter().collect(),
            _ => self.pin().into_iter().collect(),
        }
    }

    /// Whether the pins of this instance are unavailable to other components.
    pub fn claims_pins_exclusively(&self) -> bool {
        !matches!(self, Component::PowerSwitch(_))
    }
}

impl From<ComponentKind> for Component {
    fn from(kind: ComponentKind) -> Self {
        Component::new(kind)
    }
}
