use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification sent to the host on every committed mutation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ChangeEvent {
    pub value: f64,
    pub unit: Unit,
}

impl ChangeEvent {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", crate::units::format_value(self.value), self.unit)
    }
}

/// What a stepper button needs to render: disabled flag plus the hint shown on hover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ControlState {
    pub fn enabled() -> Self {
        Self {
            disabled: false,
            hint: None,
        }
    }

    pub fn disabled_with_hint(hint: String) -> Self {
        Self {
            disabled: true,
            hint: Some(hint),
        }
    }
}

/// Snapshot of everything a host renders for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControllerView {
    pub value: f64,
    pub unit: Unit,
    pub text: String,
    pub editing: bool,
    pub increment: ControlState,
    pub decrement: ControlState,
}
