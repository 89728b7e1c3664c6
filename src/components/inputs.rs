//! Input components.

use crate::circuit::PinId;

/// A push button read through an input pin with the internal pull-up enabled.
///
/// The pin reads LOW while the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Button {
    pub pin: Option<PinId>,
}

impl Button {
    /// Create an unbound button.
    pub fn new() -> Self {
        Self::default()
    }
}
