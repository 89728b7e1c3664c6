//! Motor components: rotary (servo) and stepped (stepper) actuators.

use crate::circuit::PinId;

/// A servo-like actuator that turns to an absolute angle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotaryActuator {
    pub pin: Option<PinId>,
    /// Target angle in degrees, nominally 0..=180
    pub angle: i64,
}

impl RotaryActuator {
    /// Angle a freshly placed actuator points to.
    pub const DEFAULT_ANGLE: i64 = 90;

    /// Create an unbound actuator centered at 90 degrees.
    pub fn new() -> Self {
        Self {
            pin: None,
            angle: Self::DEFAULT_ANGLE,
        }
    }
}

impl Default for RotaryActuator {
    fn default() -> Self {
        Self::new()
    }
}

/// A stepper-like actuator driven through four coil pins.
///
/// The actuator only takes part in compilation once exactly
/// [`SteppedActuator::COIL_PINS`] pins are bound. Fewer (or more) pins
/// is an incomplete binding, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteppedActuator {
    /// Coil pins in wiring order
    pub pins: Vec<PinId>,
    /// Steps to advance per loop pass, nominally 0..=400
    pub steps: i64,
}

impl SteppedActuator {
    /// Number of coil pins a complete binding has.
    pub const COIL_PINS: usize = 4;

    /// Steps commanded by a freshly placed actuator.
    pub const DEFAULT_STEPS: i64 = 200;

    /// Create an actuator with no pins bound.
    pub fn new() -> Self {
        Self {
            pins: Vec::new(),
            steps: Self::DEFAULT_STEPS,
        }
    }

    /// The four coil pins, if the binding is complete.
    pub fn coil_pins(&self) -> Option<&[PinId; 4]> {
        self.pins.as_slice().try_into().ok()
    }
}

impl Default for SteppedActuator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coil_pins_gate() {
        let mut stepper = SteppedActuator::new();
        assert!(stepper.coil_pins().is_none());

        stepper.pins = vec!["D0".into(), "D1".into()];
        assert!(stepper.coil_pins().is_none());

        stepper.pins.extend(["D2".into(), "D3".into()]);
        let coils = stepper.coil_pins().unwrap();
        assert_eq!(coils[3], PinId::new("D3"));

        stepper.pins.push("D4".into());
        assert!(stepper.coil_pins().is_none());
    }
}
