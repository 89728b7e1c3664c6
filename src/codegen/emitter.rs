//! Per-variant emission rules.

use log::trace;

use super::names::ResourceTable;
use super::{CodegenConfig, STEPPER_SPEED_RPM, STEPS_PER_REVOLUTION};
use crate::circuit::PinId;
use crate::components::{
    Blinker, Component, Light, PowerSwitch, RotaryActuator, SteppedActuator, Wait,
};

/// Text buffers for the three output regions.
#[derive(Debug, Default)]
pub struct Sections {
    pub declarations: Vec<String>,
    pub setup: Vec<String>,
    pub loop_body: Vec<String>,
}

/// Walks components in order and appends their statements to [`Sections`].
pub struct Emitter<'a> {
    config: &'a CodegenConfig,
    resources: ResourceTable,
    sections: Sections,
}

impl<'a> Emitter<'a> {
    /// Create an emitter with empty sections and fresh resource tables.
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self {
            config,
            resources: ResourceTable::new(),
            sections: Sections::default(),
        }
    }

    /// Emit one component. Components missing their single pin are skipped.
    pub fn emit(&mut self, position: usize, component: &Component) {
        match (component, component.pin()) {
            (Component::SteppedActuator(stepper), _) => self.stepped(position, stepper),
            (Component::Wait(wait), _) => self.wait(wait),
            (_, None) => {
                trace!("skipping unbound {} at position {}", component.kind(), position);
            }
            (Component::Light(light), Some(pin)) => self.light(pin, light),
            (Component::Button(_), Some(pin)) => self.button(pin),
            (Component::RotaryActuator(actuator), Some(pin)) => self.rotary(pin, actuator),
            (Component::Blinker(blinker), Some(pin)) => self.blinker(pin, blinker),
            (Component::PowerSwitch(switch), Some(pin)) => self.power(pin, switch),
        }
    }

    /// Hand back the filled sections.
    pub fn finish(self) -> Sections {
        self.sections
    }

    fn light(&mut self, pin: &PinId, light: &Light) {
        self.pin_mode(pin, "OUTPUT", "Magic Light");
        let (level, word) = if light.is_lit() {
            ("HIGH", "on")
        } else {
            ("LOW", "off")
        };
        self.loop_line(
            format!("digitalWrite({}, {});", pin, level),
            format!("Turn Magic Light {}", word),
        );
    }

    fn button(&mut self, pin: &PinId) {
        self.pin_mode(pin, "INPUT_PULLUP", "Clicky Switch");
        let indent = &self.config.indent;
        self.sections
            .loop_body
            .push(format!("{}if (digitalRead({}) == LOW) {{", indent, pin));
        if self.config.annotate {
            self.sections
                .loop_body
                .push(format!("{}{}// Clicky Switch pressed", indent, indent));
            self.sections
                .loop_body
                .push(format!("{}{}// Add your magic code here", indent, indent));
        }
        self.sections.loop_body.push(format!("{}}}", indent));
    }

    fn rotary(&mut self, pin: &PinId, actuator: &RotaryActuator) {
        let (name, is_new) = self.resources.actuators.resolve(pin.clone());
        if is_new {
            self.sections.declarations.push(format!("Servo {};", name));
            self.setup_line(
                format!("{}.attach({});", name, pin),
                "Attach Robotic Arm to pin".to_string(),
            );
        }
        self.loop_line(
            format!("{}.write({});", name, actuator.angle),
            format!("Move Robotic Arm to {} degrees", actuator.angle),
        );
    }

    fn stepped(&mut self, position: usize, stepper: &SteppedActuator) {
        let Some(coils) = stepper.coil_pins() else {
            trace!(
                "skipping stepper at position {} with {} of {} pins",
                position,
                stepper.pins.len(),
                SteppedActuator::COIL_PINS
            );
            return;
        };
        let (name, is_new) = self.resources.steppers.resolve(coils.clone());
        if is_new {
            let pins = coils
                .iter()
                .map(PinId::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            self.sections.declarations.push(format!(
                "Stepper {}({}, {});",
                name, STEPS_PER_REVOLUTION, pins
            ));
            self.setup_line(
                format!("{}.setSpeed({});", name, STEPPER_SPEED_RPM),
                "Set Step-by-Step Motor speed".to_string(),
            );
        }
        self.loop_line(
            format!("{}.step({});", name, stepper.steps),
            format!("Move Step-by-Step Motor by {} steps", stepper.steps),
        );
    }

    fn wait(&mut self, wait: &Wait) {
        self.loop_line(
            format!("delay({});", wait.duration_ms),
            format!("Wait for {} milliseconds", wait.duration_ms),
        );
    }

    fn blinker(&mut self, pin: &PinId, blinker: &Blinker) {
        self.pin_mode(pin, "OUTPUT", "Blinky Switch");
        let interval = blinker.interval_ms;
        self.loop_line(
            format!("digitalWrite({}, HIGH);", pin),
            "Turn Blinky Switch on".to_string(),
        );
        self.loop_line(format!("delay({});", interval), format!("Wait for {} ms", interval));
        self.loop_line(
            format!("digitalWrite({}, LOW);", pin),
            "Turn Blinky Switch off".to_string(),
        );
        self.loop_line(format!("delay({});", interval), format!("Wait for {} ms", interval));
    }

    fn power(&mut self, pin: &PinId, switch: &PowerSwitch) {
        self.pin_mode(pin, "OUTPUT", "Power Controller");
        let level = switch.state.level();
        self.loop_line(
            format!("digitalWrite({}, {});", pin, level),
            format!("Set Power Controller to {}", level),
        );
    }

    /// Emit a mode statement for `pin` unless one was already emitted.
    fn pin_mode(&mut self, pin: &PinId, mode: &str, label: &str) {
        if self.resources.first_mode_use(pin) {
            self.setup_line(
                format!("pinMode({}, {});", pin, mode),
                format!("Setup {} pin", label),
            );
        }
    }

    fn setup_line(&mut self, statement: String, note: String) {
        let line = self.format_line(statement, note);
        self.sections.setup.push(line);
    }

    fn loop_line(&mut self, statement: String, note: String) {
        let line = self.format_line(statement, note);
        self.sections.loop_body.push(line);
    }

    fn format_line(&self, statement: String, note: String) -> String {
        if self.config.annotate {
            format!("{}{} // {}", self.config.indent, statement, note)
        } else {
            format!("{}{}", self.config.indent, statement)
        }
    }
}
