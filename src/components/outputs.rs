//! Digital output components: Light, Blinker and Power Controller.

use std::fmt;
use std::str::FromStr;

use crate::circuit::PinId;

/// A light driven by a digital output pin.
///
/// The light is written HIGH when `value` is nonzero and LOW otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Light {
    pub pin: Option<PinId>,
    pub value: i64,
}

impl Light {
    /// Create an unbound light that is switched off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the loop drives the pin HIGH.
    pub fn is_lit(&self) -> bool {
        self.value != 0
    }
}

/// A blinker toggles its pin once per control-loop pass:
/// HIGH, wait `interval_ms`, LOW, wait `interval_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blinker {
    pub pin: Option<PinId>,
    pub interval_ms: i64,
}

impl Blinker {
    /// Default half-period in milliseconds.
    pub const DEFAULT_INTERVAL_MS: i64 = 1000;

    /// Create an unbound blinker with the default interval.
    pub fn new() -> Self {
        Self {
            pin: None,
            interval_ms: Self::DEFAULT_INTERVAL_MS,
        }
    }
}

impl Default for Blinker {
    fn default() -> Self {
        Self::new()
    }
}

/// Level a power controller drives its pin to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    #[default]
    On,
    Off,
}

impl PowerState {
    /// The digital level written for this state.
    pub fn level(&self) -> &'static str {
        match self {
            PowerState::On => "HIGH",
            PowerState::Off => "LOW",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => write!(f, "ON"),
            PowerState::Off => write!(f, "OFF"),
        }
    }
}

impl FromStr for PowerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "on" | "high" => Ok(PowerState::On),
            "off" | "low" => Ok(PowerState::Off),
            _ => Err(format!("expected on/off, got '{}'", s)),
        }
    }
}

/// A power controller sets its pin to a fixed level every loop pass.
///
/// Unlike every other kind, a power controller does not claim its pin
/// exclusively: it may share a pin already used by another component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PowerSwitch {
    pub pin: Option<PinId>,
    pub state: PowerState,
}

impl PowerSwitch {
    /// Create an unbound power controller in the ON state.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_state_parse() {
        assert_eq!("on".parse::<PowerState>(), Ok(PowerState::On));
        assert_eq!("LOW".parse::<PowerState>(), Ok(PowerState::Off));
        assert!("dim".parse::<PowerState>().is_err());
    }

    #[test]
    fn test_power_state_level() {
        assert_eq!(PowerState::On.level(), "HIGH");
        assert_eq!(PowerState::Off.level(), "LOW");
    }

    #[test]
    fn test_light_truthiness() {
        let mut light = Light::new();
        assert!(!light.is_lit());
        light.value = -3;
        assert!(light.is_lit());
    }
}
