use crate::config::{ConfigError, ControllerConfig};
use crate::controller::events::{ChangeEvent, ControlState, ControllerView};
use crate::edit::{CommitResult, ValueEditBuffer};
use crate::units::{format_value, Bounds, Unit, PERCENT_MAX};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    NonFiniteValue(f64),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::NonFiniteValue(v) => write!(f, "Value must be finite, got {}", v),
        }
    }
}

impl std::error::Error for ControllerError {}

type Observer = Box<dyn FnMut(&ChangeEvent)>;

/// Owns the authoritative `(value, unit)` pair of one field.
///
/// Every mutating call returns the event it emitted (at most one) and also
/// hands it to the observer, if one is registered.
pub struct UnitValueController {
    value: f64,
    unit: Unit,
    min: f64,
    step: f64,
    buffer: ValueEditBuffer,
    observer: Option<Observer>,
}

impl fmt::Debug for UnitValueController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitValueController")
            .field("value", &self.value)
            .field("unit", &self.unit)
            .field("min", &self.min)
            .field("step", &self.step)
            .field("buffer", &self.buffer)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl UnitValueController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            value: config.initial_value,
            unit: config.initial_unit,
            min: config.min,
            step: config.step,
            buffer: ValueEditBuffer::new(config.initial_value),
            observer: None,
        })
    }

    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&ChangeEvent) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_editing()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::for_unit(self.unit, self.min)
    }

    pub fn focus(&mut self) {
        self.buffer.focus();
    }

    pub fn input(&mut self, text: &str) {
        self.buffer.input(text);
    }

    /// Finish editing. Emits even on revert, so the host's copy of the
    /// value matches ours. Blurring a field that was never focused is a no-op.
    pub fn blur(&mut self) -> Option<ChangeEvent> {
        let unit = self.unit;
        self.blur_with_result()
            .map(|result| ChangeEvent::new(result.value, unit))
    }

    /// Like [`blur`](Self::blur) but exposes how the edit was resolved
    pub fn blur_with_result(&mut self) -> Option<CommitResult> {
        if !self.buffer.is_editing() {
            debug!("blur ignored outside of editing");
            return None;
        }
        let result = self.buffer.blur(self.bounds());
        self.commit(result.value);
        Some(result)
    }

    pub fn increment(&mut self) -> Option<ChangeEvent> {
        if self.is_increment_disabled() {
            return None;
        }
        self.step_by(self.step)
    }

    pub fn decrement(&mut self) -> Option<ChangeEvent> {
        if self.is_decrement_disabled() {
            return None;
        }
        self.step_by(-self.step)
    }

    pub fn is_decrement_disabled(&self) -> bool {
        self.value <= self.min
    }

    pub fn is_increment_disabled(&self) -> bool {
        self.unit == Unit::Percent && self.value >= PERCENT_MAX
    }

    pub fn increment_control(&self) -> ControlState {
        if self.is_increment_disabled() {
            ControlState::disabled_with_hint(format!(
                "Value must be smaller than {}",
                format_value(PERCENT_MAX)
            ))
        } else {
            ControlState::enabled()
        }
    }

    pub fn decrement_control(&self) -> ControlState {
        if self.is_decrement_disabled() {
            ControlState::disabled_with_hint(format!(
                "Value must be greater than {}",
                format_value(self.min)
            ))
        } else {
            ControlState::enabled()
        }
    }

    /// Switch units, pulling the value down to 100 when entering percent.
    /// Reselecting the current unit does nothing.
    pub fn set_unit(&mut self, unit: Unit) -> Option<ChangeEvent> {
        if unit == self.unit {
            return None;
        }

        debug!(from = %self.unit, to = %unit, "unit switched");
        self.unit = unit;
        // Shared lower bound, so only the ceiling can bite here
        let value = self.bounds().clamp(self.value);
        Some(self.commit_external(value))
    }

    /// Host-driven value change, clamped into the current bounds
    pub fn set_value(&mut self, value: f64) -> Result<Option<ChangeEvent>, ControllerError> {
        if !value.is_finite() {
            return Err(ControllerError::NonFiniteValue(value));
        }
        let value = self.bounds().clamp(value);
        Ok(Some(self.commit_external(value)))
    }

    pub fn view(&self) -> ControllerView {
        ControllerView {
            value: self.value,
            unit: self.unit,
            text: self.buffer.text().to_string(),
            editing: self.buffer.is_editing(),
            increment: self.increment_control(),
            decrement: self.decrement_control(),
        }
    }

    fn step_by(&mut self, delta: f64) -> Option<ChangeEvent> {
        let mut candidate = self.value + delta;
        if self.unit == Unit::Percent {
            candidate = candidate.min(PERCENT_MAX);
        }
        candidate = candidate.max(self.min);
        if !candidate.is_finite() {
            debug!(value = self.value, delta, "step would overflow, ignored");
            return None;
        }

        // A click always lands, even mid-edit, and becomes the revert target
        self.buffer.on_step(candidate);
        Some(self.commit(candidate))
    }

    fn commit_external(&mut self, value: f64) -> ChangeEvent {
        self.buffer.on_external_value_change(value);
        self.commit(value)
    }

    fn commit(&mut self, value: f64) -> ChangeEvent {
        self.value = value;
        let event = ChangeEvent::new(value, self.unit);
        debug!(value, unit = %self.unit, "value committed");
        if let Some(observer) = self.observer.as_mut() {
            observer(&event);
        }
        event
    }
}

impl Default for UnitValueController {
    fn default() -> Self {
        Self {
            value: 0.0,
            unit: Unit::default(),
            min: crate::units::DEFAULT_MIN,
            step: crate::units::DEFAULT_STEP,
            buffer: ValueEditBuffer::default(),
            observer: None,
        }
    }
}
