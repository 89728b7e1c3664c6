//! Pin claim bookkeeping for the editor surface.

use std::collections::BTreeSet;

use super::list::Circuit;
use super::types::PinId;
use crate::components::ComponentKind;

/// Pins claimed by the circuit.
///
/// The union of every single pin and every stepped-actuator coil pin, except
/// that power controller pins are never counted: a power controller may share
/// a pin already driven or read by another component.
pub fn used_pins(circuit: &Circuit) -> BTreeSet<PinId> {
    circuit
        .iter()
        .filter(|component| component.claims_pins_exclusively())
        .flat_map(|component| component.pins())
        .cloned()
        .collect()
}

/// Pins of `pin_space` a new or rebound component of `kind` may select.
///
/// Power controllers may pick any pin in the space; everything else is
/// limited to pins not already claimed.
pub fn available_pins(circuit: &Circuit, kind: ComponentKind, pin_space: &[PinId]) -> Vec<PinId> {
    if kind == ComponentKind::PowerSwitch {
        return pin_space.to_vec();
    }
    let used = used_pins(circuit);
    pin_space
        .iter()
        .filter(|pin| !used.contains(*pin))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_pins_union() {
        let circuit = Circuit::new()
            .add(ComponentKind::Light)
            .add(ComponentKind::SteppedActuator)
            .add(ComponentKind::Wait)
            .set_pin(0, "D8")
            .unwrap()
            .set_pin_set(1, vec!["D0".into(), "D1".into(), "D2".into()])
            .unwrap();

        let used: Vec<String> = used_pins(&circuit).iter().map(|p| p.to_string()).collect();
        assert_eq!(used, vec!["D0", "D1", "D2", "D8"]);
    }

    #[test]
    fn test_power_switch_shares_pin() {
        let circuit = Circuit::new()
            .add(ComponentKind::PowerSwitch)
            .add(ComponentKind::Light)
            .set_pin(0, "D2")
            .unwrap()
            .set_pin(1, "D2")
            .unwrap();

        let used = used_pins(&circuit);
        assert_eq!(used.len(), 1);
        assert!(used.contains(&PinId::new("D2")));

        let lone_switch = Circuit::new()
            .add(ComponentKind::PowerSwitch)
            .set_pin(0, "D2")
            .unwrap();
        assert!(used_pins(&lone_switch).is_empty());
    }

    #[test]
    fn test_available_pins() {
        let space = PinId::reference_set();
        let circuit = Circuit::new()
            .add(ComponentKind::Button)
            .set_pin(0, "D4")
            .unwrap();

        let free = available_pins(&circuit, ComponentKind::Light, &space);
        assert_eq!(free.len(), 8);
        assert!(!free.contains(&PinId::new("D4")));

        let any = available_pins(&circuit, ComponentKind::PowerSwitch, &space);
        assert_eq!(any, space);
    }
}
