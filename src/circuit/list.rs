//! The ordered component list and its edit operations.

use log::debug;

use super::types::PinId;
use crate::components::{Component, ComponentKind, PowerState};
use crate::dsl::SketchAst;
use crate::error::{Result, SketchError};

/// An immutable snapshot of a circuit sketch.
///
/// Order is significant: it is the emission order of the loop block.
/// Every edit returns a fresh snapshot and leaves `self` untouched, so a
/// snapshot handed to a caller is never mutated behind its back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Circuit {
    components: Vec<Component>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit from a parsed sketch file.
    pub fn from_sketch(ast: SketchAst) -> Result<Self> {
        let components = ast
            .entries
            .iter()
            .map(Component::from_def)
            .collect::<Result<Vec<_>>>()?;
        debug!("built circuit with {} components", components.len());
        Ok(Self { components })
    }

    /// The components in circuit order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get the component at `position`.
    pub fn get(&self, position: usize) -> Option<&Component> {
        self.components.get(position)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the circuit has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over the components in circuit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Append a component of `kind` with its default attributes.
    pub fn add(&self, kind: ComponentKind) -> Circuit {
        debug!("add {} at position {}", kind, self.len());
        let mut components = self.components.clone();
        components.push(Component::new(kind));
        Circuit { components }
    }

    /// Delete the component at `position`, shifting later ones down.
    pub fn remove(&self, position: usize) -> Result<Circuit> {
        self.check_position(position)?;
        let mut components = self.components.clone();
        let removed = components.remove(position);
        debug!("remove {} from position {}", removed.kind(), position);
        Ok(Circuit { components })
    }

    /// Move the component at `from` so that it ends up at `to`.
    pub fn reorder(&self, from: usize, to: usize) -> Result<Circuit> {
        self.check_position(from)?;
        self.check_position(to)?;
        let mut components = self.components.clone();
        let moved = components.remove(from);
        debug!("move {} from position {} to {}", moved.kind(), from, to);
        components.insert(to, moved);
        Ok(Circuit { components })
    }

    /// Bind the single pin of the component at `position`.
    ///
    /// A blank name unbinds the pin, same as [`Circuit::clear_pin`].
    pub fn set_pin(&self, position: usize, pin: impl Into<PinId>) -> Result<Circuit> {
        let pin = Some(pin.into()).filter(|pin| !pin.is_blank());
        self.edit(position, "pin", |component| {
            component.pin_slot_mut().map(|slot| *slot = pin)
        })
    }

    /// Unbind the single pin of the component at `position`.
    pub fn clear_pin(&self, position: usize) -> Result<Circuit> {
        self.edit(position, "pin", |component| {
            component.pin_slot_mut().map(|slot| *slot = None)
        })
    }

    /// Replace the coil pin list of the stepped actuator at `position`.
    pub fn set_pin_set(&self, position: usize, pins: Vec<PinId>) -> Result<Circuit> {
        self.check_position(position)?;
        if let Some(index) = pins.iter().position(PinId::is_blank) {
            return Err(SketchError::BlankPin { position, index });
        }
        self.edit(position, "pins", |component| match component {
            Component::SteppedActuator(stepper) => {
                stepper.pins = pins;
                Some(())
            }
            _ => None,
        })
    }

    /// Set the kind-specific value (light level, angle, steps, or wait time).
    pub fn set_value(&self, position: usize, value: i64) -> Result<Circuit> {
        self.edit(position, "value", |component| {
            component.value_slot_mut().map(|slot| *slot = value)
        })
    }

    /// Set the half-period of the blinker at `position`.
    pub fn set_blink_interval(&self, position: usize, interval_ms: i64) -> Result<Circuit> {
        self.edit(position, "interval", |component| match component {
            Component::Blinker(blinker) => {
                blinker.interval_ms = interval_ms;
                Some(())
            }
            _ => None,
        })
    }

    /// Set the level of the power controller at `position`.
    pub fn set_power_state(&self, position: usize, state: PowerState) -> Result<Circuit> {
        self.edit(position, "state", |component| match component {
            Component::PowerSwitch(switch) => {
                switch.state = state;
                Some(())
            }
            _ => None,
        })
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position < self.components.len() {
            Ok(())
        } else {
            Err(SketchError::out_of_bounds(position, self.components.len()))
        }
    }

    /// Copy the list and apply `apply` to one entry. `apply` returns `None`
    /// when the entry's kind does not carry `attribute`.
    fn edit<F>(&self, position: usize, attribute: &'static str, apply: F) -> Result<Circuit>
    where
        F: FnOnce(&mut Component) -> Option<()>,
    {
        self.check_position(position)?;
        let mut components = self.components.clone();
        let component = &mut components[position];
        let kind = component.kind();
        apply(component).ok_or_else(|| SketchError::not_applicable(position, kind, attribute))?;
        debug!("set {} of {} at position {}", attribute, kind, position);
        Ok(Circuit { components })
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl FromIterator<Component> for Circuit {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Circuit {
            components: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(circuit: &Circuit) -> Vec<ComponentKind> {
        circuit.iter().map(Component::kind).collect()
    }

    #[test]
    fn test_add_appends_defaults() {
        let circuit = Circuit::new()
            .add(ComponentKind::Light)
            .add(ComponentKind::RotaryActuator);
        assert_eq!(circuit.len(), 2);
        assert_eq!(
            kinds(&circuit),
            vec![ComponentKind::Light, ComponentKind::RotaryActuator]
        );
    }

    #[test]
    fn test_edits_do_not_alias_snapshots() {
        let before = Circuit::new().add(ComponentKind::Light);
        let after = before.set_pin(0, "D3").unwrap();
        assert_eq!(before.get(0).unwrap().pin(), None);
        assert_eq!(after.get(0).unwrap().pin(), Some(&PinId::new("D3")));
    }

    #[test]
    fn test_remove() {
        let circuit = Circuit::new()
            .add(ComponentKind::Light)
            .add(ComponentKind::Button)
            .add(ComponentKind::Wait);
        let removed = circuit.remove(1).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(kinds(&removed), vec![ComponentKind::Light, ComponentKind::Wait]);
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let circuit = Circuit::new().add(ComponentKind::Light);
        let err = circuit.remove(1).unwrap_err();
        assert!(matches!(
            err,
            SketchError::IndexOutOfBounds { position: 1, len: 1 }
        ));
        assert!(Circuit::new().remove(0).is_err());
    }

    #[test]
    fn test_reorder() {
        let circuit = Circuit::new()
            .add(ComponentKind::Light)
            .add(ComponentKind::Button)
            .add(ComponentKind::Wait);

        let moved = circuit.reorder(0, 2).unwrap();
        assert_eq!(
            kinds(&moved),
            vec![ComponentKind::Button, ComponentKind::Wait, ComponentKind::Light]
        );

        let moved = circuit.reorder(2, 0).unwrap();
        assert_eq!(
            kinds(&moved),
            vec![ComponentKind::Wait, ComponentKind::Light, ComponentKind::Button]
        );

        let same = circuit.reorder(1, 1).unwrap();
        assert_eq!(same, circuit);

        assert!(circuit.reorder(0, 3).is_err());
        assert!(circuit.reorder(3, 0).is_err());
    }

    #[test]
    fn test_attribute_updates() {
        let circuit = Circuit::new()
            .add(ComponentKind::SteppedActuator)
            .add(ComponentKind::Blinker)
            .add(ComponentKind::PowerSwitch)
            .set_pin_set(0, vec!["D0".into(), "D1".into()])
            .unwrap()
            .set_value(0, 50)
            .unwrap()
            .set_blink_interval(1, 250)
            .unwrap()
            .set_power_state(2, PowerState::Off)
            .unwrap();

        match circuit.get(0) {
            Some(Component::SteppedActuator(s)) => {
                assert_eq!(s.pins.len(), 2);
                assert_eq!(s.steps, 50);
            }
            other => panic!("unexpected component {:?}", other),
        }
        match circuit.get(1) {
            Some(Component::Blinker(b)) => assert_eq!(b.interval_ms, 250),
            other => panic!("unexpected component {:?}", other),
        }
        match circuit.get(2) {
            Some(Component::PowerSwitch(p)) => assert_eq!(p.state, PowerState::Off),
            other => panic!("unexpected component {:?}", other),
        }
    }

    #[test]
    fn test_values_are_not_clamped() {
        let circuit = Circuit::new()
            .add(ComponentKind::RotaryActuator)
            .set_value(0, 720)
            .unwrap();
        match circuit.get(0) {
            Some(Component::RotaryActuator(r)) => assert_eq!(r.angle, 720),
            other => panic!("unexpected component {:?}", other),
        }
    }

    #[test]
    fn test_attribute_not_applicable() {
        let circuit = Circuit::new()
            .add(ComponentKind::Wait)
            .add(ComponentKind::Button);
        assert!(matches!(
            circuit.set_pin(0, "D1"),
            Err(SketchError::AttributeNotApplicable { position: 0, attribute: "pin", .. })
        ));
        assert!(circuit.set_value(1, 1).is_err());
        assert!(circuit.set_blink_interval(1, 100).is_err());
        assert!(circuit.set_power_state(0, PowerState::Off).is_err());
    }

    #[test]
    fn test_from_sketch() {
        let input = "light D3 1\nservo D5 angle=30\nwait 500\n";
        let circuit = Circuit::from_sketch(crate::dsl::parse(input).unwrap()).unwrap();
        assert_eq!(
            kinds(&circuit),
            vec![
                ComponentKind::Light,
                ComponentKind::RotaryActuator,
                ComponentKind::Wait
            ]
        );
        assert_eq!(circuit.get(1).unwrap().pin(), Some(&PinId::new("D5")));

        let bad = crate::dsl::parse("button D4\nbutton D5 value=2\n").unwrap();
        assert!(matches!(
            Circuit::from_sketch(bad),
            Err(SketchError::InvalidParameter { line: 2, .. })
        ));
    }

    #[test]
    fn test_clear_pin() {
        let circuit = Circuit::new()
            .add(ComponentKind::Button)
            .set_pin(0, "D4")
            .unwrap()
            .clear_pin(0)
            .unwrap();
        assert_eq!(circuit.get(0).unwrap().pin(), None);
    }

    #[test]
    fn test_blank_pin_name_unbinds() {
        let bound = Circuit::new()
            .add(ComponentKind::Light)
            .set_pin(0, "D3")
            .unwrap();
        for name in ["", "   "] {
            let circuit = bound.set_pin(0, name).unwrap();
            assert_eq!(circuit.get(0).unwrap().pin(), None);
        }
        assert!(matches!(
            Circuit::new().add(ComponentKind::Wait).set_pin(0, ""),
            Err(SketchError::AttributeNotApplicable { .. })
        ));
    }

    #[test]
    fn test_pin_set_rejects_blank_entries() {
        let circuit = Circuit::new().add(ComponentKind::SteppedActuator);
        let pins = vec!["D0".into(), "".into(), "D2".into(), "D3".into()];
        assert!(matches!(
            circuit.set_pin_set(0, pins),
            Err(SketchError::BlankPin { position: 0, index: 1 })
        ));
        assert!(matches!(
            circuit.set_pin_set(1, vec![" ".into()]),
            Err(SketchError::IndexOutOfBounds { position: 1, len: 1 })
        ));
    }
}
